#![cfg_attr(not(test), no_std)]
#![doc = include_str!("../README.md")]

#[macro_use]
extern crate log;

mod detect;
pub mod features;
pub mod query;

#[cfg(test)]
mod tests;

pub use detect::{
    AesSupport, detect, detect_with, require_hardware_aes, supports_hardware_aes,
    supports_hardware_aes_with,
};
pub use query::{CpuIdResult, IdentificationQuery};

cfg_if::cfg_if! {
    if #[cfg(any(target_arch = "x86", target_arch = "x86_64"))] {
        pub use query::{AsmQuery, IntrinsicQuery, NativeQuery, RawCpuidQuery};
    }
}
