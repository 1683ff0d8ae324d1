//! Error type shared by every fallible heap operation

use thiserror::Error;

/// Error type for heap operations
///
/// Every fallible operation in this crate returns one of these instead of a
/// sentinel value. A call that fails leaves the heap exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `extract` or `try_peek` was called on an empty heap
    #[error("heap is empty")]
    EmptyHeap,

    /// The backing storage could not grow
    #[error("failed to reserve storage for {additional} more element(s)")]
    AllocationFailure { additional: usize },

    /// A size-limited heap is already holding its maximum number of elements
    #[error("heap is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// A size limit of zero was requested
    #[error("heap capacity must be at least 1")]
    InvalidCapacity,

    /// A sliding window was empty or wider than its input
    #[error("invalid window size {window} for input of length {len}")]
    InvalidWindow { window: usize, len: usize },

    /// A sequence counter has handed out every number it can
    #[error("sequence counter exhausted: more than u64::MAX insertions")]
    SequenceExhausted,

    /// The stored sequence is not a heap under the active ordering policy.
    ///
    /// This only happens when the policy is not a total order.
    #[error("heap invariant violated: child {child} precedes parent {parent}")]
    InvariantViolation { parent: usize, child: usize },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, HeapError>;
