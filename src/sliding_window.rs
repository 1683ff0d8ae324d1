//! Best element of every fixed-size window
//!
//! The heap holds indices into the input, ordered by the values they point at.
//! Indices that have slid out of the window are not removed when the window
//! moves; they are discarded only when they surface at the root. Each index is
//! inserted and extracted at most once, so a pass is O(n log n).

use tracing::debug;

use crate::error::{HeapError, Result};
use crate::ordering::{FnOrder, MaxOrder, MinOrder, OrderingPolicy};
use crate::queue::PriorityQueue;

/// The best value under `policy` of each window of `window` consecutive
/// elements, in window order
///
/// # Errors
/// Returns [`HeapError::InvalidWindow`] if `window` is zero or longer than
/// `values`.
pub fn sliding_window_by<T, P>(values: &[T], window: usize, policy: P) -> Result<Vec<T>>
where
    T: Clone,
    P: OrderingPolicy<T>,
{
    if window == 0 || window > values.len() {
        return Err(HeapError::InvalidWindow {
            window,
            len: values.len(),
        });
    }

    let by_value = FnOrder(|a: &usize, b: &usize| policy.compare(&values[*a], &values[*b]));
    let mut indices = PriorityQueue::with_capacity(window, by_value);
    let mut best = Vec::with_capacity(values.len() - window + 1);
    let mut discarded = 0usize;

    for index in 0..values.len() {
        indices.insert(index);
        if index + 1 < window {
            continue;
        }
        let start = index + 1 - window;
        while let Some(&top) = indices.peek() {
            if top >= start {
                best.push(values[top].clone());
                break;
            }
            if indices.extract().is_ok() {
                discarded += 1;
            }
        }
    }

    debug!(
        len = values.len(),
        window,
        discarded,
        "sliding window pass finished"
    );
    Ok(best)
}

/// Maximum of every window
///
/// ```rust
/// use rust_priority_heaps::sliding_window::sliding_window_max;
///
/// let maxima = sliding_window_max(&[1, 3, -1, -3, 5, 3, 6, 7], 3).unwrap();
/// assert_eq!(maxima, vec![3, 3, 5, 5, 6, 7]);
/// ```
pub fn sliding_window_max<T: Ord + Clone>(values: &[T], window: usize) -> Result<Vec<T>> {
    sliding_window_by(values, window, MaxOrder)
}

/// Minimum of every window
pub fn sliding_window_min<T: Ord + Clone>(values: &[T], window: usize) -> Result<Vec<T>> {
    sliding_window_by(values, window, MinOrder)
}
