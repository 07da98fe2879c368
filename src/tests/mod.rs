//! Unit tests for x86_aesni crate.
//!
//! `detection` drives the probe with scripted CPUID answers; `native` runs it
//! against the host processor.
