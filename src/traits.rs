//! Common trait for the priority queues in this crate
//!
//! [`Heap`] is the surface shared by [`PriorityQueue`](crate::queue::PriorityQueue),
//! [`StablePriorityQueue`](crate::stable::StablePriorityQueue) and
//! [`BoundedPriorityQueue`](crate::bounded::BoundedPriorityQueue), so tests and
//! callers can be written once against any of them.
//!
//! Unlike `std::collections::BinaryHeap`, which is always a max-heap over
//! `Ord`, the direction of these queues comes from the ordering policy each
//! one was built with. "Best" below means "first under that policy".

use crate::error::{HeapError, Result};

/// Base trait for heap/priority queue data structures
///
/// # Example
///
/// ```rust
/// use rust_priority_heaps::Heap;
/// use rust_priority_heaps::queue::PriorityQueue;
///
/// fn drain<H: Heap<i32>>(mut heap: H) -> Vec<i32> {
///     let mut out = Vec::new();
///     while let Ok(value) = heap.extract() {
///         out.push(value);
///     }
///     out
/// }
///
/// let mut heap = PriorityQueue::max();
/// heap.insert(3);
/// heap.insert(9);
/// heap.insert(1);
/// assert_eq!(drain(heap), vec![9, 3, 1]);
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element, reporting instead of aborting when it cannot
    ///
    /// # Errors
    /// Implementation specific: allocation failure for unbounded queues,
    /// [`HeapError::CapacityExceeded`] for bounded ones. The heap is left
    /// unchanged on error.
    fn try_insert(&mut self, value: T) -> Result<()>;

    /// Returns the best element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the best element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] when there is nothing to extract.
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract(&mut self) -> Result<T>;

    /// Like [`peek`](Self::peek), but an empty heap is an error
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] when there is nothing to look at.
    fn try_peek(&self) -> Result<&T> {
        self.peek().ok_or(HeapError::EmptyHeap)
    }

    /// Extracts every element, best first
    fn into_sorted_vec(mut self) -> Vec<T>
    where
        Self: Sized,
    {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(value) = self.extract() {
            sorted.push(value);
        }
        sorted
    }
}
