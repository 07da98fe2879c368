//! CPUID leaves and feature bits consulted by the detector.
//!
//! See Intel SDM Vol. 2A, CPUID, Table 3-10 "Feature Information Returned in
//! the ECX Register".

use bitflags::bitflags;

/// Leaf 0: highest supported basic leaf in `eax`, vendor string in the rest.
pub const LEAF_MAX_BASIC: u32 = 0x0;

/// Leaf 1: processor signature and standard feature bits.
pub const LEAF_FEATURE_INFO: u32 = 0x1;

/// Mask for the AES-NI bit (bit 25) of leaf 1 `ecx`.
pub const AES_NI_MASK: u32 = 0x0200_0000;

bitflags! {
    /// Feature bits of leaf 1 `ecx` that this crate cares about.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FeatureInfoEcx: u32 {
        /// AESNI instruction extensions.
        const AESNI = AES_NI_MASK;
    }
}
