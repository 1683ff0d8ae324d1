//! Kani proof harnesses
//!
//! This test module contains the Kani verification proofs for the heap core
//! and the queues built on it. The proofs are organized in the tests/kani/
//! subdirectory.

#[cfg(kani)]
#[path = "kani/mod.rs"]
mod kani_module;
