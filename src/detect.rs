use axerrno::{AxResult, ax_err};

use crate::features::{FeatureInfoEcx, LEAF_FEATURE_INFO, LEAF_MAX_BASIC};
use crate::query::IdentificationQuery;

/// Outcome of probing for AES-NI, including why it is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AesSupport {
    /// The processor reports AES-NI.
    Supported,
    /// Leaf 1 was queried but the AES-NI bit is clear.
    NotReported,
    /// Leaf 0 reported a highest basic leaf below 1, so feature bits are not queryable.
    FeatureLeafUnavailable { max_leaf: u32 },
    /// The crate was built without the `intel-aes` feature.
    DisabledAtBuild,
    /// The target architecture has no CPUID instruction.
    UnsupportedArch,
}

impl AesSupport {
    /// Returns `true` only for [`AesSupport::Supported`].
    pub const fn is_supported(self) -> bool {
        matches!(self, Self::Supported)
    }
}

/// Runs the two-step CPUID probe against the given query backend.
///
/// Leaf 1 is only queried when leaf 0 says it exists.
pub fn detect_with<Q: IdentificationQuery + ?Sized>(query: &Q) -> AesSupport {
    let max_leaf = query.query(LEAF_MAX_BASIC).eax;
    debug!("CPUID highest basic leaf: {:#x}", max_leaf);
    if max_leaf < LEAF_FEATURE_INFO {
        return AesSupport::FeatureLeafUnavailable { max_leaf };
    }

    let ecx = query.query(LEAF_FEATURE_INFO).ecx;
    if FeatureInfoEcx::from_bits_truncate(ecx).contains(FeatureInfoEcx::AESNI) {
        AesSupport::Supported
    } else {
        AesSupport::NotReported
    }
}

/// Boolean form of [`detect_with`].
pub fn supports_hardware_aes_with<Q: IdentificationQuery + ?Sized>(query: &Q) -> bool {
    detect_with(query).is_supported()
}

cfg_if::cfg_if! {
    if #[cfg(all(feature = "intel-aes", any(target_arch = "x86", target_arch = "x86_64")))] {
        /// Probes the running processor for AES-NI.
        pub fn detect() -> AesSupport {
            let support = detect_with(&crate::query::NativeQuery::default());
            debug!("AES-NI detection: {:?}", support);
            support
        }
    } else if #[cfg(feature = "intel-aes")] {
        /// Probes the running processor for AES-NI.
        ///
        /// Always [`AesSupport::UnsupportedArch`] on this target.
        pub fn detect() -> AesSupport {
            AesSupport::UnsupportedArch
        }
    } else {
        /// Probes the running processor for AES-NI.
        ///
        /// Always [`AesSupport::DisabledAtBuild`]: the processor is never queried.
        pub fn detect() -> AesSupport {
            AesSupport::DisabledAtBuild
        }
    }
}

/// Return if the current processor supports AES-NI and this build can use it.
pub fn supports_hardware_aes() -> bool {
    detect().is_supported()
}

/// Fails with `Unsupported` unless hardware AES is available.
pub fn require_hardware_aes() -> AxResult {
    match detect() {
        AesSupport::Supported => Ok(()),
        AesSupport::DisabledAtBuild => {
            ax_err!(Unsupported, "hardware AES was disabled at build time")
        }
        AesSupport::UnsupportedArch => {
            ax_err!(Unsupported, "target architecture has no CPUID")
        }
        AesSupport::FeatureLeafUnavailable { .. } => {
            ax_err!(Unsupported, "CPU does not expose CPUID feature leaf")
        }
        AesSupport::NotReported => ax_err!(Unsupported, "CPU does not support feature AES-NI"),
    }
}
