//! # Filler Traits
//!
//! The seam between backlog consumption strategies and the gap orchestrator.
//!
//! ## Architecture
//!
//! ```text
//!                   ┌─────────────────────────────────────────┐
//!                   │              Filler<T>                  │
//!                   │                                         │
//!                   │  find_next(&self) → Option<T>           │
//!                   │  remaining(&self) → usize               │
//!                   │  is_exhausted(&self) → bool             │
//!                   └──────────────────┬──────────────────────┘
//!                                      │
//!          ┌───────────────────────────┼───────────────────────────┐
//!          │                           │                           │
//!          ▼                           ▼                           ▼
//!  ┌────────────────────┐   ┌─────────────────────┐   ┌─────────────────────┐
//!  │ SequentialFiller   │   │ AlternatingFiller   │   │ GapFiller (builder) │
//!  │  N queues, cursor  │   │ primary → secondary │   │  either, by value   │
//!  └────────────────────┘   └─────────────────────┘   └─────────────────────┘
//!
//!   ConcurrentFiller<T> = Filler<T> + Send + Sync   (blanket impl)
//! ```
//!
//! ## Contract
//!
//! - `find_next` takes `&self`: a filler may be shared by many threads and
//!   every backlog item is yielded to exactly one caller.
//! - `None` means exhausted. Exhaustion is permanent because backlogs are
//!   drained, never replenished.
//! - `remaining` and `is_exhausted` are snapshots; under concurrent use they
//!   may be stale by the time the caller acts on them.

/// A strategy that yields the next backlog item for an empty slot.
///
/// # Example
///
/// ```
/// use slotweave::fill::SequentialFiller;
/// use slotweave::traits::Filler;
///
/// let filler = SequentialFiller::from_lists(vec![vec![1, 2], vec![3, 4]]);
/// assert_eq!(filler.remaining(), 4);
///
/// let drained: Vec<_> = std::iter::from_fn(|| filler.find_next()).collect();
/// assert_eq!(drained, vec![1, 3, 2, 4]);
/// assert!(filler.is_exhausted());
/// ```
pub trait Filler<T> {
    /// Removes and returns the next item, or `None` once every backlog is
    /// empty.
    fn find_next(&self) -> Option<T>;

    /// Number of items still queued across all backlogs.
    fn remaining(&self) -> usize;

    /// Returns `true` if no backlog holds an item.
    fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Recorder for gap-filling counters, if this filler keeps metrics.
    #[cfg(feature = "metrics")]
    fn gap_metrics(&self) -> Option<&dyn crate::metrics::GapMetricsRecorder> {
        None
    }
}

impl<T, F> Filler<T> for &F
where
    F: Filler<T> + ?Sized,
{
    fn find_next(&self) -> Option<T> {
        (**self).find_next()
    }

    fn remaining(&self) -> usize {
        (**self).remaining()
    }

    fn is_exhausted(&self) -> bool {
        (**self).is_exhausted()
    }

    #[cfg(feature = "metrics")]
    fn gap_metrics(&self) -> Option<&dyn crate::metrics::GapMetricsRecorder> {
        (**self).gap_metrics()
    }
}

impl<T, F> Filler<T> for std::sync::Arc<F>
where
    F: Filler<T> + ?Sized,
{
    fn find_next(&self) -> Option<T> {
        (**self).find_next()
    }

    fn remaining(&self) -> usize {
        (**self).remaining()
    }

    fn is_exhausted(&self) -> bool {
        (**self).is_exhausted()
    }

    #[cfg(feature = "metrics")]
    fn gap_metrics(&self) -> Option<&dyn crate::metrics::GapMetricsRecorder> {
        (**self).gap_metrics()
    }
}

/// Marker for fillers that can be shared across threads.
pub trait ConcurrentFiller<T>: Filler<T> + Send + Sync {}

impl<T, F> ConcurrentFiller<T> for F where F: Filler<T> + Send + Sync {}
