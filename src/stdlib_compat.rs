//! Standard library compatibility layer
//!
//! Collection traits for [`PriorityQueue`] plus [`StdHeap`], a thin adapter
//! that gives any [`Heap`] the `push` / `pop` / `peek` surface of
//! `std::collections::BinaryHeap`.
//!
//! # Differences from BinaryHeap
//!
//! - **Ordering is injected**: `BinaryHeap` is always a max-heap; here the
//!   policy decides. `PriorityQueue<T, MaxOrder>` behaves like `BinaryHeap<T>`.
//! - **Owned iteration is storage order**: like `BinaryHeap::into_iter`, no
//!   particular order is promised. Use `into_sorted_vec` or `drain_sorted`.
//!
//! # Example
//!
//! ```rust
//! use rust_priority_heaps::stdlib_compat::StdHeap;
//! use rust_priority_heaps::queue::PriorityQueue;
//!
//! let mut heap: StdHeap<i32, PriorityQueue<i32>> = StdHeap::new();
//! heap.push(5).unwrap();
//! heap.push(3).unwrap();
//! heap.push(7).unwrap();
//! assert_eq!(heap.peek(), Some(&3)); // min-heap, unlike BinaryHeap's max-heap
//! assert_eq!(heap.pop(), Some(3));
//! ```

use std::collections::BinaryHeap;
use std::marker::PhantomData;

use crate::error::Result;
use crate::ordering::{MaxOrder, OrderingPolicy};
use crate::queue::PriorityQueue;
use crate::storage::HeapStorage;
use crate::traits::Heap;

impl<T, P: OrderingPolicy<T> + Default> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<T, P: OrderingPolicy<T> + Default> FromIterator<T> for PriorityQueue<T, P> {
    /// Collects in O(n) with bottom-up heapify
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from(iter, P::default())
    }
}

impl<T, P: OrderingPolicy<T> + Default> From<Vec<T>> for PriorityQueue<T, P> {
    fn from(values: Vec<T>) -> Self {
        Self::from_storage(values, P::default())
    }
}

impl<T, P: OrderingPolicy<T> + Default, const N: usize> From<[T; N]> for PriorityQueue<T, P> {
    fn from(values: [T; N]) -> Self {
        Self::build_from(values, P::default())
    }
}

/// Reuses the heap's backing vector
///
/// The vector goes through the usual O(n) build, but it is already a valid
/// max-heap, so no element moves.
impl<T: Ord> From<BinaryHeap<T>> for PriorityQueue<T, MaxOrder> {
    fn from(heap: BinaryHeap<T>) -> Self {
        Self::from_storage(heap.into_vec(), MaxOrder)
    }
}

impl<T: Ord> From<PriorityQueue<T, MaxOrder>> for BinaryHeap<T> {
    fn from(queue: PriorityQueue<T, MaxOrder>) -> Self {
        BinaryHeap::from(queue.into_vec())
    }
}

impl<T, P: OrderingPolicy<T>, S: HeapStorage<T>> Extend<T> for PriorityQueue<T, P, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, P: OrderingPolicy<T>, S: HeapStorage<T>> IntoIterator for PriorityQueue<T, P, S> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Consumes the queue, yielding elements in storage order
    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T, P: OrderingPolicy<T>, S: HeapStorage<T>> IntoIterator for &'a PriorityQueue<T, P, S> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A drop-in replacement for the `BinaryHeap` push/pop surface
///
/// # Type Parameters
/// - `T`: The item type
/// - `H`: The underlying heap (e.g. `PriorityQueue<T>` or `StablePriorityQueue<T>`)
pub struct StdHeap<T, H: Heap<T>> {
    heap: H,
    _phantom: PhantomData<T>,
}

impl<T, H: Heap<T> + Default> StdHeap<T, H> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self::from_heap(H::default())
    }
}

impl<T, H: Heap<T>> StdHeap<T, H> {
    /// Wraps an existing heap
    pub fn from_heap(heap: H) -> Self {
        Self {
            heap,
            _phantom: PhantomData,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item onto the heap
    ///
    /// # Errors
    /// Propagates whatever the underlying heap reports, e.g.
    /// [`HeapError::CapacityExceeded`](crate::HeapError::CapacityExceeded) from a
    /// bounded queue.
    pub fn push(&mut self, item: T) -> Result<()> {
        self.heap.try_insert(item)
    }

    /// Returns a reference to the best item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Removes and returns the best item
    pub fn pop(&mut self) -> Option<T> {
        self.heap.extract().ok()
    }

    pub fn into_inner(self) -> H {
        self.heap
    }
}

impl<T, H: Heap<T> + Default> Default for StdHeap<T, H> {
    fn default() -> Self {
        Self::new()
    }
}
