//! # Metrics Trait Hierarchy
//!
//! Separates *recording*, *snapshotting*, and *export* so filler logic only
//! ever writes counters.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────┐
//!   │    FillerMetricsRecorder    │   written by SequentialFiller /
//!   │  find_next_call / yielded   │   AlternatingFiller on every call
//!   │  exhausted / queue_probe    │
//!   └──────────────┬──────────────┘
//!                  │
//!   Consumption (decoupled from recording):
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```
//!
//! Recorders take `&self`: fillers are shared across threads, so counters
//! live in atomics rather than behind a lock.

/// Counters for backlog consumption.
pub trait FillerMetricsRecorder {
    fn record_find_next_call(&self);
    fn record_item_yielded(&self);
    fn record_exhausted(&self);
    fn record_queue_probe(&self);
}

/// Counters for gap filling passes.
pub trait GapMetricsRecorder {
    fn record_slot_filled(&self);
    fn record_slot_skipped(&self);
    fn record_slot_starved(&self);
}

/// Produce a point-in-time copy of the counters.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&self);
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
