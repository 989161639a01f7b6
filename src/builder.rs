//! Unified filler construction.
//!
//! Provides one entry point for building either consumption strategy from
//! caller-owned item lists, hiding how backlogs are laid out in queues.
//!
//! ## Example
//!
//! ```rust
//! use slotweave::builder::{FillStrategy, FillerBuilder};
//! use slotweave::traits::Filler;
//!
//! let filler = FillerBuilder::new(FillStrategy::Sequential).build(vec![vec![1, 2], vec![3]]);
//! assert_eq!(filler.find_next(), Some(1));
//! assert_eq!(filler.find_next(), Some(3));
//! assert_eq!(filler.find_next(), Some(2));
//! assert_eq!(filler.find_next(), None);
//! ```

use crate::ds::ItemQueue;
use crate::fill::{AlternatingFiller, SequentialFiller};
#[cfg(feature = "metrics")]
use crate::metrics::{FillerMetricsSnapshot, GapMetricsRecorder, MetricsSnapshotProvider};
use crate::traits::Filler;

/// Available backlog consumption strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FillStrategy {
    /// Round-robin over every non-empty backlog.
    #[default]
    Sequential,
    /// Drain a primary backlog before touching the secondary.
    Alternating,
}

/// Filler wrapper that provides a consistent API regardless of strategy.
#[derive(Debug)]
pub struct GapFiller<T> {
    inner: GapFillerInner<T>,
}

#[derive(Debug)]
enum GapFillerInner<T> {
    Sequential(SequentialFiller<T>),
    Alternating(AlternatingFiller<T>),
}

impl<T> GapFiller<T> {
    /// Strategy this filler was built with.
    pub fn strategy(&self) -> FillStrategy {
        match &self.inner {
            GapFillerInner::Sequential(_) => FillStrategy::Sequential,
            GapFillerInner::Alternating(_) => FillStrategy::Alternating,
        }
    }

    /// Number of backing queues.
    pub fn queue_count(&self) -> usize {
        match &self.inner {
            GapFillerInner::Sequential(seq) => seq.queue_count(),
            GapFillerInner::Alternating(_) => 2,
        }
    }
}

impl<T> From<SequentialFiller<T>> for GapFiller<T> {
    fn from(filler: SequentialFiller<T>) -> Self {
        Self {
            inner: GapFillerInner::Sequential(filler),
        }
    }
}

impl<T> From<AlternatingFiller<T>> for GapFiller<T> {
    fn from(filler: AlternatingFiller<T>) -> Self {
        Self {
            inner: GapFillerInner::Alternating(filler),
        }
    }
}

impl<T> Filler<T> for GapFiller<T> {
    fn find_next(&self) -> Option<T> {
        match &self.inner {
            GapFillerInner::Sequential(seq) => seq.find_next(),
            GapFillerInner::Alternating(alt) => alt.find_next(),
        }
    }

    fn remaining(&self) -> usize {
        match &self.inner {
            GapFillerInner::Sequential(seq) => seq.remaining(),
            GapFillerInner::Alternating(alt) => alt.remaining(),
        }
    }

    fn is_exhausted(&self) -> bool {
        match &self.inner {
            GapFillerInner::Sequential(seq) => seq.is_exhausted(),
            GapFillerInner::Alternating(alt) => alt.is_exhausted(),
        }
    }

    #[cfg(feature = "metrics")]
    fn gap_metrics(&self) -> Option<&dyn GapMetricsRecorder> {
        match &self.inner {
            GapFillerInner::Sequential(seq) => seq.gap_metrics(),
            GapFillerInner::Alternating(alt) => alt.gap_metrics(),
        }
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsSnapshotProvider<FillerMetricsSnapshot> for GapFiller<T> {
    fn snapshot(&self) -> FillerMetricsSnapshot {
        match &self.inner {
            GapFillerInner::Sequential(seq) => seq.snapshot(),
            GapFillerInner::Alternating(alt) => alt.snapshot(),
        }
    }
}

/// Builder for creating filler instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct FillerBuilder {
    strategy: FillStrategy,
    slack: usize,
}

impl FillerBuilder {
    /// Create a new filler builder for the given strategy.
    pub fn new(strategy: FillStrategy) -> Self {
        Self { strategy, slack: 0 }
    }

    /// Reserve `slack` extra slots in every queue, so callers can
    /// [`enqueue`](ItemQueue::enqueue) late arrivals after construction.
    pub fn with_slack(mut self, slack: usize) -> Self {
        self.slack = slack;
        self
    }

    pub fn strategy(&self) -> FillStrategy {
        self.strategy
    }

    /// Build a filler over several backlogs.
    ///
    /// - `Sequential`: one queue per non-empty list, in list order.
    /// - `Alternating`: the first list is the primary backlog, every later
    ///   list is appended to the secondary backlog.
    pub fn build<T, I, L>(self, lists: I) -> GapFiller<T>
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = T>,
    {
        match self.strategy {
            FillStrategy::Sequential => {
                let queues = lists
                    .into_iter()
                    .map(|list| self.queue(list))
                    .filter(|queue| !queue.is_empty())
                    .collect();
                SequentialFiller::new(queues).into()
            },
            FillStrategy::Alternating => {
                let mut lists = lists.into_iter();
                let primary: Vec<T> = lists.next().into_iter().flatten().collect();
                let secondary: Vec<T> = lists.flatten().collect();
                AlternatingFiller::new(self.queue(primary), self.queue(secondary)).into()
            },
        }
    }

    /// Build a filler over a single backlog.
    ///
    /// - `Sequential`: one queue holding every item.
    /// - `Alternating`: even-indexed items form the primary backlog,
    ///   odd-indexed items the secondary.
    pub fn build_from_items<T, I>(self, items: I) -> GapFiller<T>
    where
        I: IntoIterator<Item = T>,
    {
        match self.strategy {
            FillStrategy::Sequential => SequentialFiller::new(vec![self.queue(items)]).into(),
            FillStrategy::Alternating => {
                let (primary, secondary): (Vec<_>, Vec<_>) = items
                    .into_iter()
                    .enumerate()
                    .partition(|(i, _)| i % 2 == 0);
                AlternatingFiller::new(
                    self.queue(primary.into_iter().map(|(_, item)| item)),
                    self.queue(secondary.into_iter().map(|(_, item)| item)),
                )
                .into()
            },
        }
    }

    fn queue<T, L>(&self, items: L) -> ItemQueue<T>
    where
        L: IntoIterator<Item = T>,
    {
        if self.slack == 0 {
            return ItemQueue::from_items(items);
        }
        let items: Vec<T> = items.into_iter().collect();
        let queue = ItemQueue::with_capacity(items.len() + self.slack);
        for item in items {
            // capacity covers every item plus the slack
            let _ = queue.enqueue(item);
        }
        queue
    }
}

/// Builds a round-robin filler over borrowed backlogs, cloning each handle.
///
/// Empty lists are skipped.
///
/// ```
/// use slotweave::builder::build_sequential_filler;
/// use slotweave::traits::Filler;
///
/// let lists = vec![vec!["a", "b"], vec![], vec!["c"]];
/// let filler = build_sequential_filler(&lists);
/// assert_eq!(filler.queue_count(), 2);
/// assert_eq!(filler.find_next(), Some("a"));
/// assert_eq!(filler.find_next(), Some("c"));
/// ```
pub fn build_sequential_filler<T, L>(lists: &[L]) -> SequentialFiller<T>
where
    T: Clone,
    L: AsRef<[T]>,
{
    SequentialFiller::from_lists(lists.iter().map(|list| list.as_ref().iter().cloned()))
}

/// Builds a primary/secondary filler from one borrowed backlog split by
/// index parity, cloning each handle.
pub fn build_alternating_filler<T: Clone>(items: &[T]) -> AlternatingFiller<T> {
    AlternatingFiller::split(items.iter().cloned())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn drain<T>(filler: &impl Filler<T>) -> Vec<T> {
        std::iter::from_fn(|| filler.find_next()).collect()
    }

    #[test]
    fn build_both_strategies() {
        let lists = || vec![vec![1, 2], vec![3], vec![4, 5]];

        let seq = FillerBuilder::new(FillStrategy::Sequential).build(lists());
        assert_eq!(seq.strategy(), FillStrategy::Sequential);
        assert_eq!(seq.queue_count(), 3);
        assert_eq!(drain(&seq), vec![1, 3, 4, 2, 5]);

        let alt = FillerBuilder::new(FillStrategy::Alternating).build(lists());
        assert_eq!(alt.strategy(), FillStrategy::Alternating);
        assert_eq!(alt.queue_count(), 2);
        assert_eq!(drain(&alt), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn build_from_items_both_strategies() {
        let seq = FillerBuilder::default().build_from_items(vec!['a', 'b', 'c']);
        assert_eq!(drain(&seq), vec!['a', 'b', 'c']);

        let alt = FillerBuilder::new(FillStrategy::Alternating).build_from_items(vec!['a', 'b', 'c']);
        assert_eq!(drain(&alt), vec!['a', 'c', 'b']);
    }

    #[test]
    fn alternating_build_with_no_lists_is_empty() {
        let alt = FillerBuilder::new(FillStrategy::Alternating).build(Vec::<Vec<u8>>::new());
        assert!(alt.is_exhausted());
        assert_eq!(alt.find_next(), None);
    }

    #[test]
    fn slack_leaves_room_for_late_items() {
        let plain = build_sequential_filler(&[vec![1]]);
        assert!(plain.queues()[0].is_full());

        let filler = FillerBuilder::new(FillStrategy::Sequential)
            .with_slack(2)
            .build(vec![vec![1]]);
        let GapFillerInner::Sequential(seq) = &filler.inner else {
            panic!("expected sequential filler");
        };
        let queue = &seq.queues()[0];
        assert_eq!(queue.capacity(), 3);
        assert!(queue.enqueue(2).is_ok());
        assert!(queue.enqueue(3).is_ok());
        assert_eq!(queue.enqueue(4), Err(4));
        assert_eq!(drain(&filler), vec![1, 2, 3]);
    }

    #[test]
    fn slice_builders_clone_handles_only() {
        let items: Vec<Arc<String>> = (0..4).map(|i| Arc::new(format!("item-{i}"))).collect();

        let alt = build_alternating_filler(&items);
        let drained = drain(&alt);
        assert_eq!(drained.len(), 4);
        assert!(Arc::ptr_eq(&drained[0], &items[0]));
        assert!(Arc::ptr_eq(&drained[1], &items[2]));
        assert!(Arc::ptr_eq(&drained[2], &items[1]));
        assert!(Arc::ptr_eq(&drained[3], &items[3]));

        let lists = vec![items[..2].to_vec(), items[2..].to_vec()];
        let seq = build_sequential_filler(&lists);
        let drained = drain(&seq);
        assert!(Arc::ptr_eq(&drained[0], &items[0]));
        assert!(Arc::ptr_eq(&drained[1], &items[2]));
        // the caller's lists are untouched
        assert_eq!(lists[0].len(), 2);
    }

    #[test]
    fn converts_from_concrete_fillers() {
        let filler: GapFiller<u8> = SequentialFiller::from_lists(vec![vec![1]]).into();
        assert_eq!(filler.strategy(), FillStrategy::Sequential);
        let filler: GapFiller<u8> = AlternatingFiller::from_lists(vec![1], vec![2]).into();
        assert_eq!(filler.strategy(), FillStrategy::Alternating);
        assert_eq!(filler.remaining(), 2);
    }
}
