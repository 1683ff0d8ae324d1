//! FIFO-stable priority queue
//!
//! A plain binary heap makes no promise about the relative order of elements
//! its policy considers equal. [`StablePriorityQueue`] stamps every inserted
//! value with a sequence number from its own [`SequenceCounter`] and orders by
//! [`Stable`], so equal-priority elements come out in insertion order.
//!
//! # Example
//!
//! ```rust
//! use rust_priority_heaps::ordering::KeyOrder;
//! use rust_priority_heaps::stable::StablePriorityQueue;
//!
//! let mut jobs = StablePriorityQueue::new(KeyOrder(|job: &(u8, &str)| job.0));
//! jobs.insert((2, "compact"));
//! jobs.insert((1, "flush"));
//! jobs.insert((2, "rotate"));
//! jobs.insert((1, "sync"));
//!
//! let order: Vec<_> = jobs.into_sorted_vec().into_iter().map(|j| j.1).collect();
//! assert_eq!(order, vec!["flush", "sync", "compact", "rotate"]);
//! ```

use crate::error::Result;
use crate::ordering::{MinOrder, OrderingPolicy, SequenceCounter, Sequenced, Stable};
use crate::queue::PriorityQueue;
use crate::traits::Heap;

/// Priority queue that extracts equal-priority elements in insertion order
#[derive(Debug, Clone)]
pub struct StablePriorityQueue<T, P = MinOrder> {
    queue: PriorityQueue<Sequenced<T>, Stable<P>>,
    counter: SequenceCounter,
}

impl<T, P: OrderingPolicy<T>> StablePriorityQueue<T, P> {
    pub fn new(policy: P) -> Self {
        Self::with_counter(policy, SequenceCounter::new())
    }

    /// Uses a caller-supplied sequence source, e.g. to continue numbering
    /// from a previous queue
    pub fn with_counter(policy: P, counter: SequenceCounter) -> Self {
        Self {
            queue: PriorityQueue::new(Stable(policy)),
            counter,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// # Panics
    /// Panics if the sequence counter is exhausted; see
    /// [`try_insert`](Self::try_insert).
    pub fn insert(&mut self, value: T) {
        let stamped = self.counter.stamp(value);
        self.queue.insert(stamped);
    }

    /// # Errors
    /// Returns [`HeapError::AllocationFailure`](crate::HeapError::AllocationFailure)
    /// if the storage cannot grow, or
    /// [`HeapError::SequenceExhausted`](crate::HeapError::SequenceExhausted) if no
    /// sequence number is left. The queue is unchanged on failure.
    pub fn try_insert(&mut self, value: T) -> Result<()> {
        self.queue.try_reserve(1)?;
        let stamped = self.counter.try_stamp(value)?;
        self.queue.insert(stamped);
        Ok(())
    }

    pub fn peek(&self) -> Option<&T> {
        self.queue.peek().map(|stamped| &stamped.value)
    }

    /// # Errors
    /// Returns [`HeapError::EmptyHeap`](crate::HeapError::EmptyHeap) if the queue is empty.
    pub fn extract(&mut self) -> Result<T> {
        self.queue.extract().map(Sequenced::into_inner)
    }

    /// Extracts the best element together with its sequence number
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`](crate::HeapError::EmptyHeap) if the queue is empty.
    pub fn extract_sequenced(&mut self) -> Result<Sequenced<T>> {
        self.queue.extract()
    }

    /// The caller's policy, without the sequence tie-break
    pub fn policy(&self) -> &P {
        &self.queue.policy().0
    }

    /// Sequence number the next insert will receive
    pub fn next_seq(&self) -> u64 {
        self.counter.peek_next()
    }

    /// Removes every element; sequence numbering continues where it was
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn into_sorted_vec(self) -> Vec<T> {
        self.queue
            .into_sorted_vec()
            .into_iter()
            .map(Sequenced::into_inner)
            .collect()
    }
}

impl<T: Ord> StablePriorityQueue<T, MinOrder> {
    pub fn min() -> Self {
        Self::new(MinOrder)
    }
}

impl<T, P: OrderingPolicy<T>> Heap<T> for StablePriorityQueue<T, P> {
    fn len(&self) -> usize {
        StablePriorityQueue::len(self)
    }

    fn try_insert(&mut self, value: T) -> Result<()> {
        StablePriorityQueue::try_insert(self, value)
    }

    fn peek(&self) -> Option<&T> {
        StablePriorityQueue::peek(self)
    }

    fn extract(&mut self) -> Result<T> {
        StablePriorityQueue::extract(self)
    }
}
