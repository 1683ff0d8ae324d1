//! Binary Heap Priority Queues for Rust
//!
//! This crate provides an array-backed binary heap whose ordering is injected
//! as a policy, plus the classic algorithms built on top of it.
//!
//! # Features
//!
//! - **Heap core**: sift-up, sift-down and O(n) bottom-up heapify over any
//!   contiguous buffer, see [`heap_core`]
//! - **Ordering policies**: min, max, key projection, closure, reversed and
//!   insertion-stable orders, see [`ordering`]
//! - **Priority queues**: [`PriorityQueue`] over `Vec` or inline `SmallVec`
//!   storage, a FIFO-on-ties [`StablePriorityQueue`] and a size-limited
//!   [`BoundedPriorityQueue`]
//! - **Algorithms**: in-place [`heap_sort`], streaming [`top_k`] selection,
//!   lazy [`kway_merge`], dual-heap running [`median`] and
//!   [`sliding_window`] extremes
//!
//! # Example
//!
//! ```rust
//! use rust_priority_heaps::{Heap, HeapError, PriorityQueue};
//!
//! let mut heap = PriorityQueue::min();
//! heap.insert(5);
//! heap.insert(3);
//! heap.insert(8);
//! heap.insert(1);
//! assert_eq!(heap.peek(), Some(&1));
//!
//! let order: Vec<i32> = std::iter::from_fn(|| heap.extract().ok()).collect();
//! assert_eq!(order, vec![1, 3, 5, 8]);
//! assert_eq!(Heap::extract(&mut heap), Err(HeapError::EmptyHeap));
//! ```
//!
//! # Feature flags
//!
//! - `invariant-checks`: re-validate the whole heap after every mutating
//!   queue operation and panic on a violation. O(n) per operation; meant for
//!   debugging custom policies.

pub mod bounded;
pub mod error;
pub mod heap_core;
pub mod heap_sort;
pub mod kway_merge;
pub mod median;
pub mod ordering;
pub mod queue;
pub mod sliding_window;
pub mod stable;
pub mod stdlib_compat;
pub mod storage;
pub mod top_k;
pub mod traits;

pub use bounded::BoundedPriorityQueue;
pub use error::{HeapError, Result};
pub use ordering::{FnOrder, KeyOrder, MaxOrder, MinOrder, OrderingPolicy, ReverseOrder};
pub use queue::PriorityQueue;
pub use stable::StablePriorityQueue;
// Re-export the main trait for convenience
pub use traits::Heap;
