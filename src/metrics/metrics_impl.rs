use std::sync::atomic::{AtomicU64, Ordering};

use crate::metrics::snapshot::FillerMetricsSnapshot;
use crate::metrics::traits::{FillerMetricsRecorder, GapMetricsRecorder, MetricsReset};

/// Atomic counters shared by every filler strategy.
#[derive(Debug, Default)]
pub struct FillerMetrics {
    pub find_next_calls: AtomicU64,
    pub items_yielded: AtomicU64,
    pub exhausted_calls: AtomicU64,
    pub queue_probes: AtomicU64,
    pub slots_filled: AtomicU64,
    pub slots_skipped: AtomicU64,
    pub slots_starved: AtomicU64,
}

#[inline]
fn bump(counter: &AtomicU64) {
    counter.fetch_add(1, Ordering::Relaxed);
}

impl FillerMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the counters, filling in the gauges supplied by the owner.
    pub fn snapshot_with(&self, remaining_items: usize, queue_count: usize) -> FillerMetricsSnapshot {
        FillerMetricsSnapshot {
            find_next_calls: self.find_next_calls.load(Ordering::Relaxed),
            items_yielded: self.items_yielded.load(Ordering::Relaxed),
            exhausted_calls: self.exhausted_calls.load(Ordering::Relaxed),
            queue_probes: self.queue_probes.load(Ordering::Relaxed),
            slots_filled: self.slots_filled.load(Ordering::Relaxed),
            slots_skipped: self.slots_skipped.load(Ordering::Relaxed),
            slots_starved: self.slots_starved.load(Ordering::Relaxed),
            remaining_items,
            queue_count,
        }
    }
}

impl FillerMetricsRecorder for FillerMetrics {
    fn record_find_next_call(&self) {
        bump(&self.find_next_calls);
    }

    fn record_item_yielded(&self) {
        bump(&self.items_yielded);
    }

    fn record_exhausted(&self) {
        bump(&self.exhausted_calls);
    }

    fn record_queue_probe(&self) {
        bump(&self.queue_probes);
    }
}

impl GapMetricsRecorder for FillerMetrics {
    fn record_slot_filled(&self) {
        bump(&self.slots_filled);
    }

    fn record_slot_skipped(&self) {
        bump(&self.slots_skipped);
    }

    fn record_slot_starved(&self) {
        bump(&self.slots_starved);
    }
}

impl MetricsReset for FillerMetrics {
    fn reset_metrics(&self) {
        for counter in [
            &self.find_next_calls,
            &self.items_yielded,
            &self.exhausted_calls,
            &self.queue_probes,
            &self.slots_filled,
            &self.slots_skipped,
            &self.slots_starved,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate_and_reset() {
        let metrics = FillerMetrics::new();
        metrics.record_find_next_call();
        metrics.record_find_next_call();
        metrics.record_queue_probe();
        metrics.record_queue_probe();
        metrics.record_queue_probe();
        metrics.record_item_yielded();
        metrics.record_exhausted();
        metrics.record_slot_filled();
        metrics.record_slot_skipped();
        metrics.record_slot_starved();

        let snap = metrics.snapshot_with(5, 2);
        assert_eq!(snap.find_next_calls, 2);
        assert_eq!(snap.items_yielded, 1);
        assert_eq!(snap.exhausted_calls, 1);
        assert_eq!(snap.queue_probes, 3);
        assert_eq!(snap.slots_filled, 1);
        assert_eq!(snap.slots_skipped, 1);
        assert_eq!(snap.slots_starved, 1);
        assert_eq!(snap.remaining_items, 5);
        assert_eq!(snap.queue_count, 2);
        assert!((snap.probes_per_call() - 1.5).abs() < f64::EPSILON);

        metrics.reset_metrics();
        assert_eq!(metrics.snapshot_with(0, 0), FillerMetricsSnapshot::default());
    }
}
