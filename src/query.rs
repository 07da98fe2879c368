//! Backends that issue the CPUID identification query.
//!
//! Each backend returns the raw `eax`/`ebx`/`ecx`/`edx` quadruple for a basic
//! leaf (sub-leaf 0). [`NativeQuery`] names the one chosen for this build.

pub use raw_cpuid::CpuIdResult;

/// Issues a processor identification query for the given leaf.
pub trait IdentificationQuery {
    fn query(&self, leaf: u32) -> CpuIdResult;
}

impl<F> IdentificationQuery for F
where
    F: Fn(u32) -> CpuIdResult,
{
    fn query(&self, leaf: u32) -> CpuIdResult {
        self(leaf)
    }
}

/// Queries CPUID through the `core::arch` compiler intrinsic.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct IntrinsicQuery;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
impl IdentificationQuery for IntrinsicQuery {
    #[allow(unused_unsafe)]
    fn query(&self, leaf: u32) -> CpuIdResult {
        #[cfg(target_arch = "x86")]
        use core::arch::x86 as arch;
        #[cfg(target_arch = "x86_64")]
        use core::arch::x86_64 as arch;

        let res = unsafe { arch::__cpuid(leaf) };
        CpuIdResult {
            eax: res.eax,
            ebx: res.ebx,
            ecx: res.ecx,
            edx: res.edx,
        }
    }
}

/// Queries CPUID through the `raw-cpuid` library.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct RawCpuidQuery;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
impl IdentificationQuery for RawCpuidQuery {
    fn query(&self, leaf: u32) -> CpuIdResult {
        raw_cpuid::cpuid!(leaf)
    }
}

/// Queries CPUID by emitting the instruction directly.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct AsmQuery;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
impl IdentificationQuery for AsmQuery {
    fn query(&self, leaf: u32) -> CpuIdResult {
        let eax: u32;
        let ebx: u32;
        let ecx: u32;
        let edx: u32;

        // rbx/ebx is reserved by LLVM, so it is swapped through a scratch register.
        unsafe {
            #[cfg(target_arch = "x86_64")]
            core::arch::asm!(
                "mov {0:r}, rbx",
                "cpuid",
                "xchg {0:r}, rbx",
                out(reg) ebx,
                inout("eax") leaf => eax,
                inout("ecx") 0u32 => ecx,
                out("edx") edx,
                options(nostack, preserves_flags),
            );
            #[cfg(target_arch = "x86")]
            core::arch::asm!(
                "mov {0}, ebx",
                "cpuid",
                "xchg {0}, ebx",
                out(reg) ebx,
                inout("eax") leaf => eax,
                inout("ecx") 0u32 => ecx,
                out("edx") edx,
                options(nostack, preserves_flags),
            );
        }

        CpuIdResult { eax, ebx, ecx, edx }
    }
}

cfg_if::cfg_if! {
    if #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))] {
        // No identification query exists; see `crate::detect`.
    } else if #[cfg(feature = "query-intrinsic")] {
        /// The query backend selected for this build.
        pub type NativeQuery = IntrinsicQuery;
    } else if #[cfg(feature = "query-asm")] {
        /// The query backend selected for this build.
        pub type NativeQuery = AsmQuery;
    } else if #[cfg(windows)] {
        /// The query backend selected for this build.
        pub type NativeQuery = IntrinsicQuery;
    } else if #[cfg(target_os = "linux")] {
        /// The query backend selected for this build.
        pub type NativeQuery = RawCpuidQuery;
    } else {
        /// The query backend selected for this build.
        pub type NativeQuery = AsmQuery;
    }
}
