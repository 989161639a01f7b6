//! Backfills empty slots from a [`Filler`].
//!
//! ```text
//!   slots:    [ A, _, B, _, _ ]        targets: [1, 2, 3, 4]
//!   filler:   x, y
//!
//!   idx 1  empty     → x         filled
//!   idx 2  occupied  → skip      (filler untouched)
//!   idx 3  empty     → y         filled
//!   idx 4  empty     → None      starved
//!
//!   slots:    [ A, x, B, y, _ ]
//! ```
//!
//! Occupied slots are never overwritten and never consume an item, so calling
//! [`fill_gaps`] again over the same slots only touches what is still empty.
//! The filler, however, keeps draining: a second call continues from where
//! the first left off.

use tracing::{debug, trace};

use crate::traits::Filler;

/// Outcome counts of a [`fill_gaps`] pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FillReport {
    /// Empty slots that received an item.
    pub filled: usize,
    /// Targets that were already occupied.
    pub skipped_occupied: usize,
    /// Empty targets left empty because the filler was exhausted.
    pub starved: usize,
    /// Targets outside the slot sequence.
    pub out_of_range: usize,
}

impl FillReport {
    /// Returns `true` if every in-range empty target was filled.
    pub fn is_complete(&self) -> bool {
        self.starved == 0
    }
}

/// Fills the empty slots named by `targets`, in the given order.
///
/// # Example
///
/// ```
/// use slotweave::fill::{SequentialFiller, fill_gaps};
///
/// let mut slots = vec![Some("a"), None, Some("b"), None];
/// let filler = SequentialFiller::from_lists(vec![vec!["x"], vec!["y"]]);
///
/// let report = fill_gaps(&mut slots, &[1, 2, 3], &filler);
/// assert_eq!(slots, vec![Some("a"), Some("x"), Some("b"), Some("y")]);
/// assert_eq!(report.filled, 2);
/// assert_eq!(report.skipped_occupied, 1);
/// ```
pub fn fill_gaps<T, F>(slots: &mut [Option<T>], targets: &[usize], filler: &F) -> FillReport
where
    F: Filler<T> + ?Sized,
{
    let mut report = FillReport::default();
    let mut exhausted = false;

    for &idx in targets {
        let Some(slot) = slots.get_mut(idx) else {
            trace!(idx, len = slots.len(), "fill target out of range");
            report.out_of_range += 1;
            continue;
        };

        if slot.is_some() {
            report.skipped_occupied += 1;
            #[cfg(feature = "metrics")]
            if let Some(metrics) = filler.gap_metrics() {
                metrics.record_slot_skipped();
            }
            continue;
        }

        // Exhaustion is permanent, so stop asking once it has been observed.
        let next = if exhausted { None } else { filler.find_next() };
        match next {
            Some(item) => {
                trace!(idx, "slot filled");
                *slot = Some(item);
                #[cfg(feature = "metrics")]
                if let Some(metrics) = filler.gap_metrics() {
                    metrics.record_slot_filled();
                }
                report.filled += 1;
            },
            None => {
                exhausted = true;
                #[cfg(feature = "metrics")]
                if let Some(metrics) = filler.gap_metrics() {
                    metrics.record_slot_starved();
                }
                report.starved += 1;
            },
        }
    }

    debug!(
        targets = targets.len(),
        filled = report.filled,
        skipped = report.skipped_occupied,
        starved = report.starved,
        out_of_range = report.out_of_range,
        "gap fill complete"
    );
    report
}

/// Ascending indices of the empty slots.
///
/// This is the natural target order for [`fill_gaps`].
pub fn empty_slots<T>(slots: &[Option<T>]) -> Vec<usize> {
    slots
        .iter()
        .enumerate()
        .filter_map(|(idx, slot)| slot.is_none().then_some(idx))
        .collect()
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::fill::SequentialFiller;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        #[cfg_attr(miri, ignore)]
        fn prop_never_overwrites_and_conserves_items(
            layout in prop::collection::vec(any::<bool>(), 0..64),
            backlog in 0usize..64,
        ) {
            let mut slots: Vec<Option<u32>> = layout
                .iter()
                .enumerate()
                .map(|(i, &occupied)| occupied.then_some(10_000 + i as u32))
                .collect();
            let before = slots.clone();
            let gaps = empty_slots(&slots);
            let filler = SequentialFiller::from_lists(vec![(0..backlog as u32).collect::<Vec<_>>()]);

            let report = fill_gaps(&mut slots, &gaps, &filler);

            for (old, new) in before.iter().zip(&slots) {
                if old.is_some() {
                    prop_assert_eq!(old, new);
                }
            }
            prop_assert_eq!(report.filled, gaps.len().min(backlog));
            prop_assert_eq!(report.starved, gaps.len().saturating_sub(backlog));
            prop_assert_eq!(report.filled + filler.remaining(), backlog);
            // fills happen in ascending gap order with FIFO items
            let filled: Vec<u32> = gaps.iter().filter_map(|&i| slots[i]).collect();
            prop_assert_eq!(filled, (0..report.filled as u32).collect::<Vec<_>>());
        }
    }
}
