//! Two-tier consumer: primary first, secondary once primary is dry.
//!
//! Built either from two explicit lists or from one list split by index
//! parity (even indices to primary, odd to secondary):
//!
//! ```text
//!   split([a, b, c, d, e])
//!
//!   primary   = [a, c, e]   capacity ceil(5 / 2) = 3
//!   secondary = [b, d]      capacity floor(5 / 2) = 2
//!
//!   find_next: a, c, e, b, d, None
//! ```

use crate::ds::ItemQueue;
#[cfg(feature = "metrics")]
use crate::metrics::{
    FillerMetrics, FillerMetricsRecorder, FillerMetricsSnapshot, GapMetricsRecorder,
    MetricsSnapshotProvider,
};
use crate::traits::Filler;

/// Primary/secondary [`Filler`].
#[derive(Debug)]
pub struct AlternatingFiller<T> {
    primary: ItemQueue<T>,
    secondary: ItemQueue<T>,
    #[cfg(feature = "metrics")]
    metrics: FillerMetrics,
}

impl<T> AlternatingFiller<T> {
    /// Wraps two pre-built queues.
    pub fn new(primary: ItemQueue<T>, secondary: ItemQueue<T>) -> Self {
        Self {
            primary,
            secondary,
            #[cfg(feature = "metrics")]
            metrics: FillerMetrics::new(),
        }
    }

    /// Builds the primary and secondary queues from two lists.
    ///
    /// ```
    /// use slotweave::fill::AlternatingFiller;
    /// use slotweave::traits::Filler;
    ///
    /// let filler = AlternatingFiller::from_lists(vec![1], vec![2]);
    /// assert_eq!(filler.find_next(), Some(1));
    /// assert_eq!(filler.find_next(), Some(2));
    /// assert_eq!(filler.find_next(), None);
    /// ```
    pub fn from_lists<P, S>(primary: P, secondary: S) -> Self
    where
        P: IntoIterator<Item = T>,
        S: IntoIterator<Item = T>,
    {
        Self::new(
            ItemQueue::from_items(primary),
            ItemQueue::from_items(secondary),
        )
    }

    /// Splits one list by index parity: even indices become primary, odd
    /// indices secondary.
    pub fn split<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        let total = items.len();
        let primary = ItemQueue::with_capacity(total.div_ceil(2));
        let secondary = ItemQueue::with_capacity(total / 2);

        for (i, item) in items.into_iter().enumerate() {
            let target = if i % 2 == 0 { &primary } else { &secondary };
            // capacities are exact, so neither queue can be full here
            let _ = target.enqueue(item);
        }
        Self::new(primary, secondary)
    }

    pub fn primary(&self) -> &ItemQueue<T> {
        &self.primary
    }

    pub fn secondary(&self) -> &ItemQueue<T> {
        &self.secondary
    }
}

impl<T> Filler<T> for AlternatingFiller<T> {
    fn find_next(&self) -> Option<T> {
        #[cfg(feature = "metrics")]
        self.metrics.record_find_next_call();

        for queue in [&self.primary, &self.secondary] {
            #[cfg(feature = "metrics")]
            self.metrics.record_queue_probe();

            if let Some(item) = queue.take() {
                #[cfg(feature = "metrics")]
                self.metrics.record_item_yielded();
                return Some(item);
            }
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_exhausted();
        None
    }

    fn remaining(&self) -> usize {
        self.primary.len() + self.secondary.len()
    }

    fn is_exhausted(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }

    #[cfg(feature = "metrics")]
    fn gap_metrics(&self) -> Option<&dyn GapMetricsRecorder> {
        Some(&self.metrics)
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsSnapshotProvider<FillerMetricsSnapshot> for AlternatingFiller<T> {
    fn snapshot(&self) -> FillerMetricsSnapshot {
        self.metrics.snapshot_with(self.remaining(), 2)
    }
}
