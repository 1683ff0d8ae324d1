//! Bounded top-k selection
//!
//! To keep the `k` best elements of a stream under some policy, [`TopK`] holds
//! a heap of at most `k` elements ordered by the *inverse* policy. Its root is
//! the weakest element retained so far, so each newcomer is compared against
//! that one element: if the newcomer is strictly better it replaces the root,
//! otherwise it is discarded.
//!
//! O(n log k) time and O(k) space over a stream of n elements.
//!
//! # Example
//!
//! ```rust
//! use rust_priority_heaps::top_k::top_k_largest;
//!
//! let best = top_k_largest(vec![4, 1, 7, 3, 9, 5, 2], 3);
//! assert_eq!(best, vec![9, 7, 5]);
//! ```

use tracing::debug;

use crate::ordering::{MaxOrder, MinOrder, OrderingPolicy, ReverseOrder};
use crate::queue::PriorityQueue;

/// Streaming selector for the `k` best elements under a policy
#[derive(Debug, Clone)]
pub struct TopK<T, P> {
    heap: PriorityQueue<T, ReverseOrder<P>>,
    k: usize,
}

impl<T, P: OrderingPolicy<T>> TopK<T, P> {
    /// Creates a selector keeping the `k` best elements under `policy`
    ///
    /// With `k == 0` every offered element is rejected.
    pub fn new(k: usize, policy: P) -> Self {
        Self {
            heap: PriorityQueue::new(ReverseOrder(policy)),
            k,
        }
    }

    /// Offers one element to the selector
    ///
    /// Returns the element that did not make the cut: the newcomer itself when
    /// it is not strictly better than the weakest retained element, the evicted
    /// element when it is, and `None` while fewer than `k` are retained.
    pub fn offer(&mut self, value: T) -> Option<T> {
        if self.k == 0 {
            return Some(value);
        }
        if self.heap.len() < self.k {
            self.heap.insert(value);
            return None;
        }

        let policy = &self.heap.policy().0;
        let improves = match self.heap.peek() {
            Some(weakest) => policy.precedes(&value, weakest),
            None => true,
        };
        if !improves {
            return Some(value);
        }
        self.heap.replace_root(value).ok()
    }

    /// The weakest element currently retained
    pub fn weakest(&self) -> Option<&T> {
        self.heap.peek()
    }

    pub fn k(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns true once `k` elements are retained
    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.k
    }

    /// The retained elements, best first
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut retained = self.heap.into_sorted_vec();
        retained.reverse();
        retained
    }

    /// The retained elements in no particular order
    pub fn into_vec(self) -> Vec<T> {
        self.heap.into_vec()
    }
}

impl<T, P: OrderingPolicy<T>> Extend<T> for TopK<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.offer(value);
        }
    }
}

/// The `k` best elements of `values` under `policy`, best first
pub fn top_k_by<T, I, P>(values: I, k: usize, policy: P) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    P: OrderingPolicy<T>,
{
    let mut selector = TopK::new(k, policy);
    selector.extend(values);
    debug!(k, retained = selector.len(), "top-k selection finished");
    selector.into_sorted_vec()
}

/// The `k` largest elements, largest first
pub fn top_k_largest<T: Ord, I: IntoIterator<Item = T>>(values: I, k: usize) -> Vec<T> {
    top_k_by(values, k, MaxOrder)
}

/// The `k` smallest elements, smallest first
pub fn top_k_smallest<T: Ord, I: IntoIterator<Item = T>>(values: I, k: usize) -> Vec<T> {
    top_k_by(values, k, MinOrder)
}

/// The k-th largest element (1-based), or `None` if `k` is zero or exceeds
/// the number of elements
///
/// ```rust
/// use rust_priority_heaps::top_k::kth_largest;
///
/// assert_eq!(kth_largest(vec![3, 2, 1, 5, 6, 4], 2), Some(5));
/// assert_eq!(kth_largest(vec![3, 2], 3), None);
/// ```
pub fn kth_largest<T: Ord, I: IntoIterator<Item = T>>(values: I, k: usize) -> Option<T> {
    kth_by(values, k, MaxOrder)
}

/// The k-th smallest element (1-based), or `None` if `k` is zero or exceeds
/// the number of elements
pub fn kth_smallest<T: Ord, I: IntoIterator<Item = T>>(values: I, k: usize) -> Option<T> {
    kth_by(values, k, MinOrder)
}

fn kth_by<T, I, P>(values: I, k: usize, policy: P) -> Option<T>
where
    I: IntoIterator<Item = T>,
    P: OrderingPolicy<T>,
{
    if k == 0 {
        return None;
    }
    let mut selector = TopK::new(k, policy);
    selector.extend(values);
    if !selector.is_full() {
        return None;
    }
    selector.heap.extract().ok()
}
