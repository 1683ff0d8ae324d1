//! Size-limited priority queue
//!
//! [`BoundedPriorityQueue`] refuses inserts once it holds its maximum number
//! of elements, so untrusted producers cannot grow it without bound. A
//! refused insert is reported as [`HeapError::CapacityExceeded`] and leaves the
//! queue untouched.
//!
//! This is not a top-k selector: a full queue does not evict anything. See
//! [`TopK`](crate::top_k::TopK) for that.

use tracing::debug;

use crate::error::{HeapError, Result};
use crate::ordering::{MinOrder, OrderingPolicy};
use crate::queue::PriorityQueue;
use crate::traits::Heap;

/// Priority queue with a hard upper bound on its length
#[derive(Debug, Clone)]
pub struct BoundedPriorityQueue<T, P = MinOrder> {
    queue: PriorityQueue<T, P>,
    capacity: usize,
}

impl<T, P: OrderingPolicy<T>> BoundedPriorityQueue<T, P> {
    /// Creates an empty queue that will hold at most `capacity` elements
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize, policy: P) -> Result<Self> {
        if capacity == 0 {
            return Err(HeapError::InvalidCapacity);
        }
        Ok(Self {
            queue: PriorityQueue::new(policy),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.queue.len() >= self.capacity
    }

    /// Slots left before inserts start failing
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.queue.len())
    }

    /// Inserts `value` if there is room
    ///
    /// # Errors
    /// Returns [`HeapError::CapacityExceeded`] when full, or
    /// [`HeapError::AllocationFailure`] if the storage cannot grow.
    pub fn insert(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            debug!(capacity = self.capacity, "bounded queue rejected insert");
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.queue.try_insert(value)
    }

    pub fn peek(&self) -> Option<&T> {
        self.queue.peek()
    }

    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the queue is empty.
    pub fn extract(&mut self) -> Result<T> {
        self.queue.extract()
    }

    pub fn policy(&self) -> &P {
        self.queue.policy()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn into_sorted_vec(self) -> Vec<T> {
        self.queue.into_sorted_vec()
    }
}

impl<T, P: OrderingPolicy<T>> Heap<T> for BoundedPriorityQueue<T, P> {
    fn len(&self) -> usize {
        BoundedPriorityQueue::len(self)
    }

    fn try_insert(&mut self, value: T) -> Result<()> {
        self.insert(value)
    }

    fn peek(&self) -> Option<&T> {
        BoundedPriorityQueue::peek(self)
    }

    fn extract(&mut self) -> Result<T> {
        BoundedPriorityQueue::extract(self)
    }
}
