//! Pluggable contiguous storage for heap elements
//!
//! A binary heap needs nothing more from its container than a growable,
//! exclusively owned, contiguous buffer with amortized O(1) append and O(1)
//! removal from the end. [`HeapStorage`] captures exactly that, so the heap
//! core is independent of any particular container type:
//!
//! - `Vec<T>`: default, heap-allocated storage
//! - [`SmallVec<A>`]: inline storage for small heaps, spilling to the
//!   allocator only once it outgrows its inline array
//!
//! # Example
//!
//! ```rust
//! use rust_priority_heaps::ordering::MinOrder;
//! use rust_priority_heaps::queue::{InlinePriorityQueue, PriorityQueue};
//!
//! // Up to eight elements live inline, without touching the allocator
//! let mut heap: InlinePriorityQueue<[u32; 8], MinOrder> = PriorityQueue::with_storage(MinOrder);
//! heap.insert(3);
//! heap.insert(1);
//! assert_eq!(heap.extract(), Ok(1));
//! ```

use smallvec::{Array, SmallVec};

use crate::error::{HeapError, Result};

/// Trait for heap storage backends
///
/// Implementations only ever grow at the end and shrink from the end; all
/// reordering happens through the mutable slice view.
pub trait HeapStorage<T>: Default {
    /// Creates empty storage with room for at least `capacity` elements
    fn with_capacity(capacity: usize) -> Self;

    /// Takes ownership of an existing sequence, in its current order
    fn from_vec(values: Vec<T>) -> Self;

    /// Number of stored elements
    fn len(&self) -> usize;

    /// Returns true if nothing is stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends at the end
    fn push(&mut self, value: T);

    /// Removes from the end
    fn pop(&mut self) -> Option<T>;

    /// Reserves room for `additional` more elements without aborting on failure
    ///
    /// # Errors
    /// Returns [`HeapError::AllocationFailure`] if the allocator refuses.
    fn try_reserve(&mut self, additional: usize) -> Result<()>;

    /// Removes every element
    fn clear(&mut self);

    fn as_slice(&self) -> &[T];

    fn as_mut_slice(&mut self) -> &mut [T];

    /// Moves the elements out, in storage order
    fn into_vec(self) -> Vec<T>;
}

impl<T> HeapStorage<T> for Vec<T> {
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    fn from_vec(values: Vec<T>) -> Self {
        values
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn push(&mut self, value: T) {
        Vec::push(self, value)
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    fn try_reserve(&mut self, additional: usize) -> Result<()> {
        Vec::try_reserve(self, additional).map_err(|_| HeapError::AllocationFailure { additional })
    }

    fn clear(&mut self) {
        Vec::clear(self)
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    fn into_vec(self) -> Vec<T> {
        self
    }
}

impl<A: Array> HeapStorage<A::Item> for SmallVec<A> {
    fn with_capacity(capacity: usize) -> Self {
        SmallVec::with_capacity(capacity)
    }

    fn from_vec(values: Vec<A::Item>) -> Self {
        SmallVec::from_vec(values)
    }

    #[inline]
    fn len(&self) -> usize {
        SmallVec::len(self)
    }

    #[inline]
    fn push(&mut self, value: A::Item) {
        SmallVec::push(self, value)
    }

    #[inline]
    fn pop(&mut self) -> Option<A::Item> {
        SmallVec::pop(self)
    }

    fn try_reserve(&mut self, additional: usize) -> Result<()> {
        SmallVec::try_reserve(self, additional)
            .map_err(|_| HeapError::AllocationFailure { additional })
    }

    fn clear(&mut self) {
        SmallVec::clear(self)
    }

    #[inline]
    fn as_slice(&self) -> &[A::Item] {
        SmallVec::as_slice(self)
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [A::Item] {
        SmallVec::as_mut_slice(self)
    }

    fn into_vec(self) -> Vec<A::Item> {
        SmallVec::into_vec(self)
    }
}
