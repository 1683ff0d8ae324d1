//! Running median over a stream with two heaps
//!
//! `lower` holds the smaller half of the values seen so far with its largest
//! element at the root; `upper` holds the larger half with its smallest element
//! at the root. Two invariants hold after every insert:
//!
//! - `|lower.len() - upper.len()| <= 1`
//! - every element of `lower` is not greater than any element of `upper`
//!
//! The median is then read off the roots in O(1). When the halves are the same
//! size there are two middle elements. Averaging them needs arithmetic a
//! generic `T` does not have, so [`RunningMedian::bounds`] reports both as a
//! [`MedianBounds::Pair`] and leaves combining them to the caller.
//! [`RunningMedian::median`] does the averaging for [`Numeric`] types.
//!
//! # Example
//!
//! ```rust
//! use rust_priority_heaps::median::RunningMedian;
//!
//! let mut running = RunningMedian::new();
//! let mut medians = Vec::new();
//! for value in [5, 15, 1, 3] {
//!     running.insert(value);
//!     medians.push(running.median().unwrap());
//! }
//! assert_eq!(medians, vec![5.0, 10.0, 5.0, 4.0]);
//! ```

use std::cmp::Ordering;

use crate::ordering::{MinOrder, OrderingPolicy, ReverseOrder};
use crate::queue::PriorityQueue;

/// The middle of the values seen so far
#[derive(Debug, PartialEq, Eq)]
pub enum MedianBounds<'a, T> {
    /// Odd count: the single middle element
    Single(&'a T),
    /// Even count: the largest of the lower half and the smallest of the upper half
    Pair(&'a T, &'a T),
}

impl<T> Clone for MedianBounds<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MedianBounds<'_, T> {}

/// Element types whose two middle values can be averaged
///
/// The conversion is `as f64`, which is lossy for 64- and 128-bit integers
/// above 2^53.
pub trait Numeric {
    fn to_f64(&self) -> f64;
}

macro_rules! impl_numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                #[inline]
                fn to_f64(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Dual-heap running median
///
/// `P` orders the values ascending; the default is the natural order. Floats
/// can be used with a total-order policy such as
/// `FnOrder(|a: &f64, b: &f64| a.total_cmp(b))`.
#[derive(Debug, Clone)]
pub struct RunningMedian<T, P = MinOrder> {
    lower: PriorityQueue<T, ReverseOrder<P>>,
    upper: PriorityQueue<T, P>,
}

impl<T: Ord> RunningMedian<T> {
    pub fn new() -> Self {
        Self::with_policy(MinOrder)
    }
}

impl<T: Ord> Default for RunningMedian<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: OrderingPolicy<T> + Clone> RunningMedian<T, P> {
    pub fn with_policy(policy: P) -> Self {
        Self {
            lower: PriorityQueue::new(ReverseOrder(policy.clone())),
            upper: PriorityQueue::new(policy),
        }
    }

    /// Adds one value to the stream
    ///
    /// O(log n).
    pub fn insert(&mut self, value: T) {
        let goes_low = match self.lower.peek() {
            None => true,
            Some(lower_max) => self.upper.policy().compare(&value, lower_max) != Ordering::Greater,
        };
        if goes_low {
            self.lower.insert(value);
        } else {
            self.upper.insert(value);
        }
        self.rebalance();
    }

    fn rebalance(&mut self) {
        while self.lower.len() > self.upper.len() + 1 {
            match self.lower.extract() {
                Ok(value) => self.upper.insert(value),
                Err(_) => break,
            }
        }
        while self.upper.len() > self.lower.len() + 1 {
            match self.upper.extract() {
                Ok(value) => self.lower.insert(value),
                Err(_) => break,
            }
        }
    }

    /// The middle element(s), or `None` before the first insert
    pub fn bounds(&self) -> Option<MedianBounds<'_, T>> {
        match self.lower.len().cmp(&self.upper.len()) {
            Ordering::Greater => self.lower.peek().map(MedianBounds::Single),
            Ordering::Less => self.upper.peek().map(MedianBounds::Single),
            Ordering::Equal => match (self.lower.peek(), self.upper.peek()) {
                (Some(low), Some(high)) => Some(MedianBounds::Pair(low, high)),
                _ => None,
            },
        }
    }

    /// Largest value of the lower half
    pub fn lower_max(&self) -> Option<&T> {
        self.lower.peek()
    }

    /// Smallest value of the upper half
    pub fn upper_min(&self) -> Option<&T> {
        self.upper.peek()
    }

    /// Number of values inserted so far
    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lower.is_empty() && self.upper.is_empty()
    }

    pub fn clear(&mut self) {
        self.lower.clear();
        self.upper.clear();
    }
}

impl<T: Numeric, P: OrderingPolicy<T> + Clone> RunningMedian<T, P> {
    /// The median as a float, averaging the two middle values on even counts
    ///
    /// Each half is scaled before adding, so two finite values never average
    /// to infinity. Integers wider than 53 bits are rounded by the conversion
    /// to `f64`; use [`bounds`](Self::bounds) when the exact middle elements
    /// are needed.
    pub fn median(&self) -> Option<f64> {
        self.bounds().map(|bounds| match bounds {
            MedianBounds::Single(value) => value.to_f64(),
            MedianBounds::Pair(low, high) => low.to_f64() / 2.0 + high.to_f64() / 2.0,
        })
    }
}

impl<T, P: OrderingPolicy<T> + Clone> Extend<T> for RunningMedian<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::FnOrder;

    #[test]
    fn test_stream_medians() {
        let mut running = RunningMedian::new();
        let mut observed = Vec::new();
        for value in [5, 15, 1, 3] {
            running.insert(value);
            observed.push(running.median());
        }
        assert_eq!(
            observed,
            vec![Some(5.0), Some(10.0), Some(5.0), Some(4.0)]
        );
    }

    #[test]
    fn test_empty() {
        let running: RunningMedian<i32> = RunningMedian::new();
        assert!(running.is_empty());
        assert_eq!(running.bounds(), None);
        assert_eq!(running.median(), None);
    }

    #[test]
    fn test_bounds_for_non_numeric() {
        let mut running = RunningMedian::new();
        running.extend(["pear", "apple", "fig", "kiwi"]);
        assert_eq!(running.bounds(), Some(MedianBounds::Pair(&"fig", &"kiwi")));

        running.insert("banana");
        assert_eq!(running.bounds(), Some(MedianBounds::Single(&"fig")));
    }

    #[test]
    fn test_halves_stay_balanced_and_ordered() {
        let mut running = RunningMedian::new();
        for value in [10, 9, 8, 7, 6, 5, 4, 3, 2, 1] {
            running.insert(value);
            let diff = running.lower.len().abs_diff(running.upper.len());
            assert!(diff <= 1);
            if let (Some(low), Some(high)) = (running.lower_max(), running.upper_min()) {
                assert!(low <= high);
            }
        }
        assert_eq!(running.len(), 10);
        assert_eq!(running.median(), Some(5.5));
    }

    #[test]
    fn test_floats_with_total_cmp() {
        let mut running = RunningMedian::with_policy(FnOrder(|a: &f64, b: &f64| a.total_cmp(b)));
        running.extend([2.5, -1.0, 4.0]);
        assert_eq!(running.median(), Some(2.5));
    }

    #[test]
    fn test_float_average_does_not_overflow() {
        let by_total = FnOrder(|a: &f64, b: &f64| a.total_cmp(b));

        let mut running = RunningMedian::with_policy(by_total);
        running.extend([f64::MAX, f64::MAX]);
        assert_eq!(running.median(), Some(f64::MAX));

        let mut running = RunningMedian::with_policy(FnOrder(|a: &f64, b: &f64| a.total_cmp(b)));
        running.extend([1e308, 1.5e308]);
        let median = running.median().unwrap();
        assert!(median.is_finite());
        assert!((median - 1.25e308).abs() <= 1.25e308 * f64::EPSILON);

        let mut running = RunningMedian::with_policy(FnOrder(|a: &f64, b: &f64| a.total_cmp(b)));
        running.extend([-f64::MAX, -f64::MAX]);
        assert_eq!(running.median(), Some(-f64::MAX));
    }

    #[test]
    fn test_bounds_stay_exact_for_wide_integers() {
        let big = (1i64 << 53) + 1;
        let mut running = RunningMedian::new();
        running.extend([big, big + 2]);
        assert_eq!(running.bounds(), Some(MedianBounds::Pair(&big, &(big + 2))));
    }

    #[test]
    fn test_duplicates() {
        let mut running = RunningMedian::new();
        running.extend([7, 7, 7, 7]);
        assert_eq!(running.median(), Some(7.0));
        running.clear();
        assert!(running.is_empty());
    }
}
