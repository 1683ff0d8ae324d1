//! Ordering policies
//!
//! Every heap in this crate is parameterized by an [`OrderingPolicy`], a
//! three-way comparison that decides which of two elements leaves the heap
//! first. The same array-backed core becomes a min-heap, a max-heap or a
//! custom-priority queue depending on the policy it is given.
//!
//! `compare(a, b) == Ordering::Less` means `a` is *better* than `b` and must be
//! extracted first. Draining a heap therefore yields its elements in ascending
//! order by `compare`.
//!
//! | Policy            | Extracted first                      |
//! |-------------------|--------------------------------------|
//! | [`MinOrder`]      | smallest by `Ord`                    |
//! | [`MaxOrder`]      | largest by `Ord`                     |
//! | [`KeyOrder`]      | smallest projected key               |
//! | [`FnOrder`]       | whatever the closure says            |
//! | [`ReverseOrder`]  | the opposite of the wrapped policy   |
//! | [`Stable`]        | wrapped policy, then insertion order |
//!
//! # Contract
//!
//! A policy must be a total order. A policy that is not (for example an
//! intransitive closure) yields unspecified extraction order, but never memory
//! unsafety. Such a policy can be detected after the fact with
//! [`PriorityQueue::validate`](crate::queue::PriorityQueue::validate).
//!
//! # Example
//!
//! ```rust
//! use rust_priority_heaps::ordering::{KeyOrder, OrderingPolicy};
//!
//! struct Task {
//!     name: &'static str,
//!     deadline: u32,
//! }
//!
//! let by_deadline = KeyOrder(|t: &Task| t.deadline);
//! let a = Task { name: "backup", deadline: 10 };
//! let b = Task { name: "deploy", deadline: 5 };
//! assert!(by_deadline.precedes(&b, &a));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::{HeapError, Result};

/// A total-order comparison between two elements
pub trait OrderingPolicy<T: ?Sized> {
    /// Returns `Less` when `a` must be extracted before `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns true when `a` is strictly better than `b`
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

impl<T: ?Sized, P: OrderingPolicy<T> + ?Sized> OrderingPolicy<T> for &P {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

/// Natural order: smallest element first (min-heap)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinOrder;

impl<T: Ord + ?Sized> OrderingPolicy<T> for MinOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverse natural order: largest element first (max-heap)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: Ord + ?Sized> OrderingPolicy<T> for MaxOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Order defined by an arbitrary comparison closure
///
/// Useful for element types that are not `Ord`, such as floats:
///
/// ```rust
/// use rust_priority_heaps::ordering::FnOrder;
/// use rust_priority_heaps::queue::PriorityQueue;
///
/// let mut heap = PriorityQueue::new(FnOrder(|a: &f64, b: &f64| a.total_cmp(b)));
/// heap.insert(2.5);
/// heap.insert(-1.0);
/// assert_eq!(heap.peek(), Some(&-1.0));
/// ```
#[derive(Clone, Copy, Default)]
pub struct FnOrder<F>(pub F);

impl<F> fmt::Debug for FnOrder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnOrder(..)")
    }
}

impl<T, F> OrderingPolicy<T> for FnOrder<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

/// Order by a projected key, smallest key first
///
/// Wrap in [`ReverseOrder`] to extract the largest key first.
#[derive(Clone, Copy, Default)]
pub struct KeyOrder<F>(pub F);

impl<F> fmt::Debug for KeyOrder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyOrder(..)")
    }
}

impl<T, K: Ord, F> OrderingPolicy<T> for KeyOrder<F>
where
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

/// The inverse of another policy
///
/// Top-k selection and the running median use this to hold the opposite
/// polarity of the caller's policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder<P>(pub P);

impl<T: ?Sized, P: OrderingPolicy<T>> OrderingPolicy<T> for ReverseOrder<P> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// A value stamped with its insertion sequence number
///
/// The sequence number is attached by whoever inserts the value, normally
/// from a [`SequenceCounter`]. The heap itself never invents one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sequenced<T> {
    pub seq: u64,
    pub value: T,
}

impl<T> Sequenced<T> {
    pub fn new(seq: u64, value: T) -> Self {
        Self { seq, value }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Monotonically increasing source of insertion sequence numbers
#[derive(Debug, Clone, Default)]
pub struct SequenceCounter {
    next: u64,
}

impl SequenceCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts counting at `first` instead of zero
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Returns the next sequence number
    ///
    /// # Errors
    /// Returns [`HeapError::SequenceExhausted`] once `u64::MAX` is reached.
    /// The counter does not wrap, since wrapping would break FIFO order.
    pub fn try_next_seq(&mut self) -> Result<u64> {
        let seq = self.next;
        self.next = seq.checked_add(1).ok_or(HeapError::SequenceExhausted)?;
        Ok(seq)
    }

    /// Infallible form of [`try_next_seq`](Self::try_next_seq)
    ///
    /// # Panics
    ///
    /// Panics once `u64::MAX` is reached.
    pub fn next_seq(&mut self) -> u64 {
        match self.try_next_seq() {
            Ok(seq) => seq,
            Err(err) => panic!("{err}"),
        }
    }

    /// Wraps `value` with the next sequence number
    ///
    /// # Errors
    /// Returns [`HeapError::SequenceExhausted`] once `u64::MAX` is reached;
    /// `value` is dropped.
    pub fn try_stamp<T>(&mut self, value: T) -> Result<Sequenced<T>> {
        Ok(Sequenced::new(self.try_next_seq()?, value))
    }

    /// Infallible form of [`try_stamp`](Self::try_stamp)
    ///
    /// # Panics
    ///
    /// Panics once `u64::MAX` is reached.
    pub fn stamp<T>(&mut self, value: T) -> Sequenced<T> {
        Sequenced::new(self.next_seq(), value)
    }

    /// Sequence number the next call to [`next_seq`](Self::next_seq) returns
    pub fn peek_next(&self) -> u64 {
        self.next
    }
}

/// FIFO-stable wrapper: compare with the inner policy, then by sequence number
///
/// Elements the inner policy considers equal leave the heap in the order they
/// were stamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stable<P>(pub P);

impl<T, P: OrderingPolicy<T>> OrderingPolicy<Sequenced<T>> for Stable<P> {
    #[inline]
    fn compare(&self, a: &Sequenced<T>, b: &Sequenced<T>) -> Ordering {
        self.0
            .compare(&a.value, &b.value)
            .then_with(|| a.seq.cmp(&b.seq))
    }
}
