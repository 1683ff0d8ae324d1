//! Priority queue façade
//!
//! [`PriorityQueue`] owns one [`HeapCore`] and one [`OrderingPolicy`] and exposes
//! the usual insert / peek / extract API. The policy is fixed at construction
//! and never handed out mutably, so the heap invariant cannot be broken by
//! swapping it underneath the stored elements.
//!
//! # Time Complexity
//!
//! | Operation          | Complexity |
//! |--------------------|------------|
//! | `insert`           | O(log n)   |
//! | `extract`          | O(log n)   |
//! | `peek`             | O(1)       |
//! | `len` / `is_empty` | O(1)       |
//! | `build_from`       | O(n)       |
//! | `append`           | O(n + m)   |
//!
//! # Example
//!
//! ```rust
//! use rust_priority_heaps::queue::PriorityQueue;
//! use rust_priority_heaps::HeapError;
//!
//! let mut heap = PriorityQueue::min();
//! heap.insert(5);
//! heap.insert(3);
//! heap.insert(8);
//! heap.insert(1);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.into_sorted_vec(), vec![1, 3, 5, 8]);
//!
//! let mut empty: PriorityQueue<i32> = PriorityQueue::min();
//! assert_eq!(empty.extract(), Err(HeapError::EmptyHeap));
//! ```

use std::iter::FusedIterator;

use smallvec::SmallVec;

use crate::error::Result;
use crate::heap_core::HeapCore;
use crate::ordering::{MaxOrder, MinOrder, OrderingPolicy};
use crate::storage::HeapStorage;
use crate::traits::Heap;

/// A binary heap priority queue over an injected ordering policy
///
/// `P` decides which element is extracted first; `S` is the contiguous
/// container the elements live in (see [`HeapStorage`]).
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P = MinOrder, S = Vec<T>> {
    core: HeapCore<T, S>,
    policy: P,
}

/// A priority queue that keeps up to `A::size()` elements inline
pub type InlinePriorityQueue<A, P = MinOrder> =
    PriorityQueue<<A as smallvec::Array>::Item, P, SmallVec<A>>;

impl<T: Ord> PriorityQueue<T, MinOrder> {
    /// Creates an empty min-heap
    pub fn min() -> Self {
        Self::new(MinOrder)
    }
}

impl<T: Ord> PriorityQueue<T, MaxOrder> {
    /// Creates an empty max-heap
    pub fn max() -> Self {
        Self::new(MaxOrder)
    }
}

impl<T, P: OrderingPolicy<T>> PriorityQueue<T, P> {
    /// Creates an empty queue ordered by `policy`
    pub fn new(policy: P) -> Self {
        Self::with_storage(policy)
    }

    /// Creates an empty queue with room for `capacity` elements
    pub fn with_capacity(capacity: usize, policy: P) -> Self {
        Self {
            core: HeapCore::with_capacity(capacity),
            policy,
        }
    }

    /// Builds a queue from an arbitrary sequence in O(n)
    ///
    /// ```rust
    /// use rust_priority_heaps::ordering::MaxOrder;
    /// use rust_priority_heaps::queue::PriorityQueue;
    ///
    /// let heap = PriorityQueue::build_from(vec![4, 10, 3, 5, 1], MaxOrder);
    /// assert_eq!(heap.peek(), Some(&10));
    /// ```
    pub fn build_from<I>(values: I, policy: P) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let core = HeapCore::build(values, &policy);
        let queue = Self { core, policy };
        queue.check_invariant();
        queue
    }
}

impl<T, P: OrderingPolicy<T>, S: HeapStorage<T>> PriorityQueue<T, P, S> {
    /// Creates an empty queue over a default-constructed storage backend
    pub fn with_storage(policy: P) -> Self {
        Self {
            core: HeapCore::new(),
            policy,
        }
    }

    /// Takes ownership of `storage` and heapifies it in O(n)
    pub fn from_storage(storage: S, policy: P) -> Self {
        let core = HeapCore::from_storage(storage, &policy);
        let queue = Self { core, policy };
        queue.check_invariant();
        queue
    }

    /// The policy this queue was built with
    pub fn policy(&self) -> &P {
        &self.policy
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.core.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    /// Inserts a value
    ///
    /// Aborts like any `Vec` growth if memory is exhausted; use
    /// [`try_insert`](Self::try_insert) to get an error instead.
    pub fn insert(&mut self, value: T) {
        self.core.insert(value, &self.policy);
        self.check_invariant();
    }

    /// Inserts a value after reserving room for it
    ///
    /// # Errors
    /// Returns [`HeapError::AllocationFailure`](crate::HeapError::AllocationFailure)
    /// and leaves the queue untouched if the storage cannot grow.
    pub fn try_insert(&mut self, value: T) -> Result<()> {
        self.core.try_insert(value, &self.policy)?;
        self.check_invariant();
        Ok(())
    }

    /// Removes and returns the best element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`](crate::HeapError::EmptyHeap) if the queue is empty.
    pub fn extract(&mut self) -> Result<T> {
        let value = self.core.extract_root(&self.policy)?;
        self.check_invariant();
        Ok(value)
    }

    /// The best element, without removing it
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.core.peek()
    }

    /// Like [`peek`](Self::peek), but an empty queue is an error
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`](crate::HeapError::EmptyHeap) if the queue is empty.
    pub fn try_peek(&self) -> Result<&T> {
        self.peek().ok_or(crate::HeapError::EmptyHeap)
    }

    /// Inserts `value` and extracts the best element in a single pass
    ///
    /// If `value` is at least as good as the current root it is returned
    /// straight away and the queue is not touched.
    pub fn push_pop(&mut self, value: T) -> T {
        let out = self.core.push_pop(value, &self.policy);
        self.check_invariant();
        out
    }

    /// Extracts the best element and inserts `value` in a single pass
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`](crate::HeapError::EmptyHeap) if the queue is
    /// empty; `value` is dropped and the queue stays empty.
    pub fn replace_root(&mut self, value: T) -> Result<T> {
        let old = self.core.replace_root(value, &self.policy)?;
        self.check_invariant();
        Ok(old)
    }

    /// Moves every element of `other` into `self`, leaving `other` empty
    ///
    /// Both queues share a policy type, but only `self`'s policy is used.
    pub fn append(&mut self, other: &mut Self) {
        self.core.append(&mut other.core, &self.policy);
        self.check_invariant();
    }

    /// Reserves room for `additional` more elements
    ///
    /// # Errors
    /// Returns [`HeapError::AllocationFailure`](crate::HeapError::AllocationFailure)
    /// if the storage cannot grow.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        self.core.try_reserve(additional)
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Iterates in storage order, which is not sorted order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.core.as_slice().iter()
    }

    /// The elements in storage order
    pub fn as_slice(&self) -> &[T] {
        self.core.as_slice()
    }

    /// Consumes the queue, returning the elements in storage order
    pub fn into_vec(self) -> Vec<T> {
        self.core.into_vec()
    }

    /// Consumes the queue, returning every element best first
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.drain_sorted().collect()
    }

    /// Extracts elements best first as an iterator
    ///
    /// Elements the iterator does not reach stay in the queue.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, P, S> {
        DrainSorted { queue: self }
    }

    /// Checks the ordering invariant over the whole queue
    ///
    /// Only a policy that is not a total order can make this fail.
    ///
    /// # Errors
    /// Returns [`HeapError::InvariantViolation`](crate::HeapError::InvariantViolation)
    /// naming the first offending parent/child pair.
    pub fn validate(&self) -> Result<()> {
        self.core.validate(&self.policy).map_err(|err| {
            tracing::warn!(%err, len = self.len(), "priority queue failed validation");
            err
        })
    }

    #[inline]
    fn check_invariant(&self) {
        #[cfg(feature = "invariant-checks")]
        if let Err(err) = self.validate() {
            panic!("{err}");
        }
    }
}

impl<T, P: OrderingPolicy<T>, S: HeapStorage<T>> Heap<T> for PriorityQueue<T, P, S> {
    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }

    fn try_insert(&mut self, value: T) -> Result<()> {
        PriorityQueue::try_insert(self, value)
    }

    fn peek(&self) -> Option<&T> {
        PriorityQueue::peek(self)
    }

    fn extract(&mut self) -> Result<T> {
        PriorityQueue::extract(self)
    }
}

/// Iterator returned by [`PriorityQueue::drain_sorted`]
#[derive(Debug)]
pub struct DrainSorted<'a, T, P, S>
where
    P: OrderingPolicy<T>,
    S: HeapStorage<T>,
{
    queue: &'a mut PriorityQueue<T, P, S>,
}

impl<T, P: OrderingPolicy<T>, S: HeapStorage<T>> Iterator for DrainSorted<'_, T, P, S> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.extract().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, P: OrderingPolicy<T>, S: HeapStorage<T>> ExactSizeIterator for DrainSorted<'_, T, P, S> {}

impl<T, P: OrderingPolicy<T>, S: HeapStorage<T>> FusedIterator for DrainSorted<'_, T, P, S> {}
