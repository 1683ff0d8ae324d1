//! In-place heap sort
//!
//! The slice is heapified in O(n) under the *inverse* of the requested order,
//! so the root is always the element that belongs last. Each round swaps the
//! root into the growing sorted suffix and sifts down the shrinking prefix.
//!
//! O(n log n) time, O(1) extra space, not stable.
//!
//! ```rust
//! use rust_priority_heaps::heap_sort::{heap_sort, heap_sort_by};
//! use rust_priority_heaps::ordering::MaxOrder;
//!
//! let mut values = [4, 10, 3, 5, 1];
//! heap_sort(&mut values);
//! assert_eq!(values, [1, 3, 4, 5, 10]);
//!
//! heap_sort_by(&mut values, &MaxOrder);
//! assert_eq!(values, [10, 5, 4, 3, 1]);
//! ```

use crate::heap_core::{build, sift_down};
use crate::ordering::{KeyOrder, MinOrder, OrderingPolicy, ReverseOrder};
use crate::queue::PriorityQueue;

/// Sorts `data` ascending
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    heap_sort_by(data, &MinOrder);
}

/// Sorts `data` so that `policy`'s best element comes first
pub fn heap_sort_by<T, P>(data: &mut [T], policy: &P)
where
    P: OrderingPolicy<T> + ?Sized,
{
    let last_first = ReverseOrder(policy);
    build(data, &last_first);

    let mut end = data.len();
    while end > 1 {
        end -= 1;
        data.swap(0, end);
        sift_down(&mut data[..end], 0, &last_first);
    }
}

/// Sorts `data` ascending by a projected key
pub fn heap_sort_by_key<T, K, F>(data: &mut [T], key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    heap_sort_by(data, &KeyOrder(key));
}

/// Collects `values` into a vector ordered by `policy`, by building a queue
/// and draining it through repeated extraction
pub fn sorted_by<T, I, P>(values: I, policy: P) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    P: OrderingPolicy<T>,
{
    PriorityQueue::build_from(values, policy).into_sorted_vec()
}
