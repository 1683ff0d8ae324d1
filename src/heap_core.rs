//! Array-backed binary heap core
//!
//! The heap is a complete binary tree laid out level by level in a contiguous
//! buffer, so no links are stored:
//!
//! ```text
//! parent(i) = (i - 1) / 2
//! left(i)   = 2i + 1
//! right(i)  = 2i + 2
//! ```
//!
//! The ordering invariant is that for every `i > 0`, `data[parent(i)]` is not
//! worse than `data[i]` under the active [`OrderingPolicy`]. Nothing is
//! guaranteed between siblings.
//!
//! The restoration primitives ([`sift_up`], [`sift_down`], [`build`]) work on
//! plain slices so that in-place algorithms such as heap sort can run them on a
//! shrinking prefix of a caller's buffer. [`HeapCore`] bundles them with an
//! owned [`HeapStorage`]. All loops are iterative.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity        |
//! |----------------|-------------------|
//! | `insert`       | O(log n), O(1) best |
//! | `extract_root` | O(log n)          |
//! | `peek`         | O(1)              |
//! | `build`        | O(n)              |

use std::marker::PhantomData;
use std::mem;

use crate::error::{HeapError, Result};
use crate::ordering::OrderingPolicy;
use crate::storage::HeapStorage;

/// Index of the parent of `index`; `index` must be non-zero
#[inline]
pub const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
pub const fn left(index: usize) -> usize {
    2 * index + 1
}

#[inline]
pub const fn right(index: usize) -> usize {
    2 * index + 2
}

/// Move the element at `index` toward the root until its parent is at least
/// as good. Returns the element's final index.
pub fn sift_up<T, P>(data: &mut [T], mut index: usize, policy: &P) -> usize
where
    P: OrderingPolicy<T> + ?Sized,
{
    while index > 0 {
        let up = parent(index);
        if policy.precedes(&data[index], &data[up]) {
            data.swap(index, up);
            index = up;
        } else {
            break;
        }
    }
    index
}

/// Move the element at `index` toward the leaves until neither child is
/// better. Returns the element's final index.
///
/// When both children compare equal the left child is chosen.
pub fn sift_down<T, P>(data: &mut [T], mut index: usize, policy: &P) -> usize
where
    P: OrderingPolicy<T> + ?Sized,
{
    let len = data.len();
    loop {
        let l = left(index);
        if l >= len {
            break;
        }
        let r = right(index);
        let better = if r < len && policy.precedes(&data[r], &data[l]) {
            r
        } else {
            l
        };

        if policy.precedes(&data[better], &data[index]) {
            data.swap(index, better);
            index = better;
        } else {
            break;
        }
    }
    index
}

/// Rearrange `data` into a valid heap in O(n)
///
/// Sifts down every internal node from the last one (`n/2 - 1`) back to the
/// root. Most nodes sit near the leaves and move only a level or two, so the
/// total work is bounded by a convergent sum and stays linear.
pub fn build<T, P>(data: &mut [T], policy: &P)
where
    P: OrderingPolicy<T> + ?Sized,
{
    for index in (0..data.len() / 2).rev() {
        sift_down(data, index, policy);
    }
}

/// Find the first `(parent, child)` pair where the child is better than its
/// parent, scanning children in index order
pub fn first_violation<T, P>(data: &[T], policy: &P) -> Option<(usize, usize)>
where
    P: OrderingPolicy<T> + ?Sized,
{
    (1..data.len())
        .find(|&child| policy.precedes(&data[child], &data[parent(child)]))
        .map(|child| (parent(child), child))
}

/// Returns true if `data` satisfies the heap invariant under `policy`
pub fn is_heap<T, P>(data: &[T], policy: &P) -> bool
where
    P: OrderingPolicy<T> + ?Sized,
{
    first_violation(data, policy).is_none()
}

/// Heap storage plus the operations that keep it a heap
///
/// `HeapCore` does not own a policy: every mutating call takes one, and the
/// caller is responsible for always passing the same one. The
/// [`PriorityQueue`](crate::queue::PriorityQueue) façade takes care of that.
#[derive(Debug, Clone)]
pub struct HeapCore<T, S = Vec<T>> {
    data: S,
    _marker: PhantomData<T>,
}

impl<T, S: HeapStorage<T>> HeapCore<T, S> {
    pub fn new() -> Self {
        Self {
            data: S::default(),
            _marker: PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: S::with_capacity(capacity),
            _marker: PhantomData,
        }
    }

    /// Take ownership of `storage` and heapify it in place
    pub fn from_storage<P>(mut storage: S, policy: &P) -> Self
    where
        P: OrderingPolicy<T> + ?Sized,
    {
        build(storage.as_mut_slice(), policy);
        Self {
            data: storage,
            _marker: PhantomData,
        }
    }

    /// Build a heap from an arbitrary sequence in O(n)
    pub fn build<I, P>(values: I, policy: &P) -> Self
    where
        I: IntoIterator<Item = T>,
        P: OrderingPolicy<T> + ?Sized,
    {
        Self::from_storage(S::from_vec(values.into_iter().collect()), policy)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The root, or `None` when empty
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.as_slice().first()
    }

    /// Append `value` and sift it up
    pub fn insert<P>(&mut self, value: T, policy: &P)
    where
        P: OrderingPolicy<T> + ?Sized,
    {
        self.data.push(value);
        let last = self.data.len() - 1;
        sift_up(self.data.as_mut_slice(), last, policy);
    }

    /// Like [`insert`](Self::insert), but reserves first and reports
    /// allocation failure instead of aborting
    pub fn try_insert<P>(&mut self, value: T, policy: &P) -> Result<()>
    where
        P: OrderingPolicy<T> + ?Sized,
    {
        self.data.try_reserve(1)?;
        self.insert(value, policy);
        Ok(())
    }

    /// Remove and return the root
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if there is nothing to remove.
    pub fn extract_root<P>(&mut self, policy: &P) -> Result<T>
    where
        P: OrderingPolicy<T> + ?Sized,
    {
        let last = match self.data.len() {
            0 => return Err(HeapError::EmptyHeap),
            1 => return self.data.pop().ok_or(HeapError::EmptyHeap),
            len => len - 1,
        };

        self.data.as_mut_slice().swap(0, last);
        let root = self.data.pop().ok_or(HeapError::EmptyHeap)?;
        sift_down(self.data.as_mut_slice(), 0, policy);
        Ok(root)
    }

    /// Replace the root with `value` and return the old root
    ///
    /// Cheaper than an extract followed by an insert: a single sift-down.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] when empty; `value` is dropped.
    pub fn replace_root<P>(&mut self, value: T, policy: &P) -> Result<T>
    where
        P: OrderingPolicy<T> + ?Sized,
    {
        let slice = self.data.as_mut_slice();
        let root = slice.first_mut().ok_or(HeapError::EmptyHeap)?;
        let old = mem::replace(root, value);
        sift_down(slice, 0, policy);
        Ok(old)
    }

    /// Insert `value` then extract the root, in one sift-down at most
    ///
    /// Returns `value` itself when it is at least as good as the root.
    pub fn push_pop<P>(&mut self, value: T, policy: &P) -> T
    where
        P: OrderingPolicy<T> + ?Sized,
    {
        let slice = self.data.as_mut_slice();
        let root_is_better = slice
            .first()
            .is_some_and(|root| policy.precedes(root, &value));
        if !root_is_better {
            return value;
        }

        let old = mem::replace(&mut slice[0], value);
        sift_down(slice, 0, policy);
        old
    }

    /// Move every element of `other` into this heap and re-heapify in O(n + m)
    pub fn append<P>(&mut self, other: &mut Self, policy: &P)
    where
        P: OrderingPolicy<T> + ?Sized,
    {
        while let Some(value) = other.data.pop() {
            self.data.push(value);
        }
        build(self.data.as_mut_slice(), policy);
    }

    /// Check the ordering invariant over the whole buffer
    ///
    /// # Errors
    /// Returns [`HeapError::InvariantViolation`] naming the first offending pair.
    pub fn validate<P>(&self, policy: &P) -> Result<()>
    where
        P: OrderingPolicy<T> + ?Sized,
    {
        match first_violation(self.data.as_slice(), policy) {
            Some((parent, child)) => Err(HeapError::InvariantViolation { parent, child }),
            None => Ok(()),
        }
    }

    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        self.data.try_reserve(additional)
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The elements in storage (heap) order
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }
}

impl<T, S: HeapStorage<T>> Default for HeapCore<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::{KeyOrder, MaxOrder, MinOrder};

    #[test]
    fn test_index_arithmetic() {
        assert_eq!(left(0), 1);
        assert_eq!(right(0), 2);
        assert_eq!(parent(1), 0);
        assert_eq!(parent(2), 0);
        assert_eq!(parent(5), 2);
        assert_eq!(parent(6), 2);
    }

    #[test]
    fn test_sift_up_stops_at_equal_parent() {
        let mut data = vec![1, 3, 3];
        assert_eq!(sift_up(&mut data, 2, &MinOrder), 2);
        assert_eq!(data, vec![1, 3, 3]);

        let mut data = vec![2, 5, 4, 1];
        assert_eq!(sift_up(&mut data, 3, &MinOrder), 0);
        assert_eq!(data, vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_sift_down_prefers_left_on_tie() {
        // Children tie on key 1; the left child (tag 'a') must be promoted.
        let mut data = vec![(9, 'r'), (1, 'a'), (1, 'b')];
        let by_key = KeyOrder(|e: &(i32, char)| e.0);
        assert_eq!(sift_down(&mut data, 0, &by_key), 1);
        assert_eq!(data, vec![(1, 'a'), (9, 'r'), (1, 'b')]);
    }

    #[test]
    fn test_sift_down_stops_when_not_worse() {
        let mut data = vec![2, 2, 3];
        assert_eq!(sift_down(&mut data, 0, &MinOrder), 0);
        assert_eq!(data, vec![2, 2, 3]);
    }

    #[test]
    fn test_build_min_and_max() {
        let mut data = vec![4, 10, 3, 5, 1];
        build(&mut data, &MinOrder);
        assert!(is_heap(&data, &MinOrder));
        assert_eq!(data[0], 1);

        let mut data = vec![4, 10, 3, 5, 1];
        build(&mut data, &MaxOrder);
        assert!(is_heap(&data, &MaxOrder));
        assert_eq!(data[0], 10);
    }

    #[test]
    fn test_build_trivial_inputs() {
        let mut empty: Vec<i32> = vec![];
        build(&mut empty, &MinOrder);
        assert!(empty.is_empty());

        let mut single = vec![7];
        build(&mut single, &MinOrder);
        assert_eq!(single, vec![7]);
    }

    #[test]
    fn test_first_violation() {
        assert_eq!(first_violation(&[1, 2, 3, 4], &MinOrder), None);
        assert_eq!(first_violation(&[1, 2, 0, 4], &MinOrder), Some((0, 2)));
        assert_eq!(first_violation(&[1, 2, 3, 1], &MinOrder), Some((1, 3)));
    }

    #[test]
    fn test_core_insert_extract() {
        let mut core: HeapCore<i32> = HeapCore::new();
        for v in [5, 3, 8, 1] {
            core.insert(v, &MinOrder);
        }
        assert_eq!(core.peek(), Some(&1));
        assert_eq!(core.extract_root(&MinOrder), Ok(1));
        assert_eq!(core.extract_root(&MinOrder), Ok(3));
        assert_eq!(core.extract_root(&MinOrder), Ok(5));
        assert_eq!(core.extract_root(&MinOrder), Ok(8));
        assert_eq!(core.extract_root(&MinOrder), Err(HeapError::EmptyHeap));
        assert!(core.is_empty());
    }

    #[test]
    fn test_replace_root_and_push_pop() {
        let mut core: HeapCore<i32> = HeapCore::build(vec![3, 1, 2], &MinOrder);
        assert_eq!(core.replace_root(10, &MinOrder), Ok(1));
        assert_eq!(core.peek(), Some(&2));

        // Better than the root: handed straight back.
        assert_eq!(core.push_pop(0, &MinOrder), 0);
        // Worse than the root: root comes out, value goes in.
        assert_eq!(core.push_pop(5, &MinOrder), 2);
        assert_eq!(core.as_slice().len(), 3);
        assert!(core.validate(&MinOrder).is_ok());

        let mut empty: HeapCore<i32> = HeapCore::new();
        assert_eq!(empty.replace_root(1, &MinOrder), Err(HeapError::EmptyHeap));
        assert_eq!(empty.push_pop(1, &MinOrder), 1);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_append() {
        let mut a: HeapCore<i32> = HeapCore::build(vec![5, 9], &MinOrder);
        let mut b: HeapCore<i32> = HeapCore::build(vec![1, 7], &MinOrder);
        a.append(&mut b, &MinOrder);
        assert!(b.is_empty());
        assert_eq!(a.len(), 4);
        assert_eq!(a.peek(), Some(&1));
        assert!(a.validate(&MinOrder).is_ok());
    }

    #[test]
    fn test_validate_detects_foreign_policy() {
        let core: HeapCore<i32> = HeapCore::build(vec![1, 2, 3], &MinOrder);
        assert_eq!(
            core.validate(&MaxOrder),
            Err(HeapError::InvariantViolation {
                parent: 0,
                child: 1
            })
        );
    }
}
