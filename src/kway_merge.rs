//! K-way merge of pre-sorted sources
//!
//! [`KWayMerge`] seeds a heap with the head of every non-empty source, tagged
//! with the source index and its position within that source. Each step
//! extracts the global best head, emits it, and refills the heap from the same
//! source. An exhausted source simply stops contributing.
//!
//! O(N log K) for N elements spread over K sources; the heap never holds more
//! than K entries. Sources must already be sorted under the merge policy;
//! unsorted input yields unspecified (but memory-safe) output.
//!
//! Equal heads from different sources come out lowest source index first.
//!
//! # Example
//!
//! ```rust
//! use rust_priority_heaps::kway_merge::merge_sorted;
//!
//! let merged = merge_sorted(vec![vec![1, 4, 7], vec![2, 5, 8], vec![3, 6, 9]]);
//! assert_eq!(merged, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
//! ```

use std::cmp::Ordering;
use std::iter::FusedIterator;

use tracing::debug;

use crate::ordering::{MinOrder, OrderingPolicy};
use crate::queue::PriorityQueue;

/// A merged element together with where it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergedItem<T> {
    pub value: T,
    /// Index of the source in the order the sources were supplied
    pub source: usize,
    /// Position of the value within its source
    pub position: usize,
}

/// Orders heap entries by value, then by source index
#[derive(Debug, Clone)]
struct HeadOrder<P>(P);

impl<T, P: OrderingPolicy<T>> OrderingPolicy<MergedItem<T>> for HeadOrder<P> {
    #[inline]
    fn compare(&self, a: &MergedItem<T>, b: &MergedItem<T>) -> Ordering {
        self.0
            .compare(&a.value, &b.value)
            .then_with(|| a.source.cmp(&b.source))
    }
}

/// Lazy iterator merging several sorted sources into one sorted stream
pub struct KWayMerge<I: Iterator, P> {
    sources: Vec<I>,
    heads: PriorityQueue<MergedItem<I::Item>, HeadOrder<P>>,
}

impl<I, P> KWayMerge<I, P>
where
    I: Iterator,
    P: OrderingPolicy<I::Item>,
{
    /// Creates a merge over `sources`, each sorted under `policy`
    pub fn new<S>(sources: S, policy: P) -> Self
    where
        S: IntoIterator,
        S::Item: IntoIterator<IntoIter = I>,
    {
        let mut sources: Vec<I> = sources.into_iter().map(IntoIterator::into_iter).collect();
        let seeds: Vec<_> = sources
            .iter_mut()
            .enumerate()
            .filter_map(|(source, iter)| {
                iter.next().map(|value| MergedItem {
                    value,
                    source,
                    position: 0,
                })
            })
            .collect();

        debug!(
            sources = sources.len(),
            seeded = seeds.len(),
            "k-way merge seeded"
        );
        Self {
            heads: PriorityQueue::build_from(seeds, HeadOrder(policy)),
            sources,
        }
    }

    /// Number of sources that still have elements to emit
    pub fn active_sources(&self) -> usize {
        self.heads.len()
    }

    /// The next merged element with its origin
    pub fn next_with_origin(&mut self) -> Option<MergedItem<I::Item>> {
        let (source, position) = {
            let head = self.heads.peek()?;
            (head.source, head.position)
        };

        match self.sources[source].next() {
            Some(value) => self
                .heads
                .replace_root(MergedItem {
                    value,
                    source,
                    position: position + 1,
                })
                .ok(),
            None => self.heads.extract().ok(),
        }
    }
}

impl<I, P> Iterator for KWayMerge<I, P>
where
    I: Iterator,
    P: OrderingPolicy<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.next_with_origin().map(|item| item.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let mut low = self.heads.len();
        let mut high = Some(low);
        for source in &self.sources {
            let (lo, hi) = source.size_hint();
            low = low.saturating_add(lo);
            high = match (high, hi) {
                (Some(total), Some(hi)) => total.checked_add(hi),
                _ => None,
            };
        }
        (low, high)
    }
}

// Once the last head is extracted nothing can be refilled.
impl<I, P> FusedIterator for KWayMerge<I, P>
where
    I: Iterator,
    P: OrderingPolicy<I::Item>,
{
}

/// Merges ascending sources into one ascending vector
pub fn merge_sorted<S, T>(sources: S) -> Vec<T>
where
    S: IntoIterator,
    S::Item: IntoIterator<Item = T>,
    T: Ord,
{
    merge_sorted_by(sources, MinOrder)
}

/// Merges sources sorted under `policy` into one vector sorted the same way
pub fn merge_sorted_by<S, T, P>(sources: S, policy: P) -> Vec<T>
where
    S: IntoIterator,
    S::Item: IntoIterator<Item = T>,
    P: OrderingPolicy<T>,
{
    KWayMerge::new(sources, policy).collect()
}
