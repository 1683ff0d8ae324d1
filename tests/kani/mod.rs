//! Kani proof harnesses
//!
//! The files are organized by category:
//!
//! - `core_proofs.rs`: sift and heapify primitives on small symbolic arrays
//! - `queue_proofs.rs`: queue-level operation sequences

#[cfg(kani)]
#[path = "core_proofs.rs"]
mod core_proofs;
#[cfg(kani)]
#[path = "queue_proofs.rs"]
mod queue_proofs;
