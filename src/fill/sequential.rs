//! Round-robin consumer over N backlogs.
//!
//! ## Rotation
//!
//! ```text
//!   queues:  Q0 [1, 2]     Q1 [3, 4]
//!
//!   call  cursor  probes           yields  cursor after
//!   ────  ──────  ───────────────  ──────  ────────────
//!    1      0     Q0               1         1
//!    2      1     Q1               3         0
//!    3      0     Q0               2         1
//!    4      1     Q1               4         0
//!    5      0     Q0 ∅, Q1 ∅       None      0
//! ```
//!
//! After a successful take the cursor points at the queue *following* the one
//! that yielded, so repeated calls visit backlogs in turn instead of draining
//! queue 0 first. An empty queue is skipped transparently. A call returns
//! `None` only after probing every queue once.
//!
//! ## Concurrency
//!
//! Each probe locks a single queue for a single `take`; no lock is held
//! across the retry loop. The cursor is an atomic hint: concurrent callers
//! may race on it, which can reorder items across queues but never delivers
//! one twice.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::ds::ItemQueue;
#[cfg(feature = "metrics")]
use crate::metrics::{
    FillerMetrics, FillerMetricsRecorder, FillerMetricsSnapshot, GapMetricsRecorder,
    MetricsSnapshotProvider,
};
use crate::traits::Filler;

/// Round-robin [`Filler`] over any number of [`ItemQueue`]s.
#[derive(Debug)]
pub struct SequentialFiller<T> {
    queues: Box<[ItemQueue<T>]>,
    cursor: AtomicUsize,
    #[cfg(feature = "metrics")]
    metrics: FillerMetrics,
}

impl<T> SequentialFiller<T> {
    /// Wraps pre-built queues, keeping their order.
    pub fn new(queues: Vec<ItemQueue<T>>) -> Self {
        Self {
            queues: queues.into_boxed_slice(),
            cursor: AtomicUsize::new(0),
            #[cfg(feature = "metrics")]
            metrics: FillerMetrics::new(),
        }
    }

    /// Builds one queue per non-empty list, in list order.
    ///
    /// ```
    /// use slotweave::fill::SequentialFiller;
    ///
    /// let filler = SequentialFiller::from_lists(vec![vec!["a"], vec![], vec!["b", "c"]]);
    /// assert_eq!(filler.queue_count(), 2);
    /// ```
    pub fn from_lists<I, L>(lists: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = T>,
    {
        let queues = lists
            .into_iter()
            .map(ItemQueue::from_items)
            .filter(|queue| !queue.is_empty())
            .collect();
        Self::new(queues)
    }

    /// Number of backlogs.
    pub fn queue_count(&self) -> usize {
        self.queues.len()
    }

    /// Index of the queue the next call will probe first.
    pub fn cursor(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }

    /// Read-only access to the backlogs.
    pub fn queues(&self) -> &[ItemQueue<T>] {
        &self.queues
    }
}

impl<T> Filler<T> for SequentialFiller<T> {
    fn find_next(&self) -> Option<T> {
        #[cfg(feature = "metrics")]
        self.metrics.record_find_next_call();

        let n = self.queues.len();
        if n == 0 {
            #[cfg(feature = "metrics")]
            self.metrics.record_exhausted();
            return None;
        }

        let start = self.cursor.load(Ordering::Relaxed);
        let mut idx = start;
        loop {
            #[cfg(feature = "metrics")]
            self.metrics.record_queue_probe();

            if let Some(item) = self.queues[idx].take() {
                self.cursor.store((idx + 1) % n, Ordering::Relaxed);
                #[cfg(feature = "metrics")]
                self.metrics.record_item_yielded();
                return Some(item);
            }
            idx = (idx + 1) % n;
            if idx == start {
                #[cfg(feature = "metrics")]
                self.metrics.record_exhausted();
                return None;
            }
        }
    }

    fn remaining(&self) -> usize {
        self.queues.iter().map(ItemQueue::len).sum()
    }

    fn is_exhausted(&self) -> bool {
        self.queues.iter().all(ItemQueue::is_empty)
    }

    #[cfg(feature = "metrics")]
    fn gap_metrics(&self) -> Option<&dyn GapMetricsRecorder> {
        Some(&self.metrics)
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsSnapshotProvider<FillerMetricsSnapshot> for SequentialFiller<T> {
    fn snapshot(&self) -> FillerMetricsSnapshot {
        self.metrics.snapshot_with(self.remaining(), self.queues.len())
    }
}
