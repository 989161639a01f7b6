//! Ratio to bounded slot count.
//!
//! `target_count(total, available, ratio)` is `round(total * ratio)` clamped
//! to both the number of available items and the number of slots. Invalid
//! input yields 0 rather than an error so callers can treat a category with
//! nothing to place uniformly.
//!
//! Call sites disagree on whether a positive ratio that rounds to zero
//! should still claim one slot; [`TargetPolicy`] makes that choice explicit.
//!
//! ```
//! use slotweave::layout::{target_count, TargetPolicy};
//!
//! assert_eq!(target_count(10, 5, 0.4), 4);
//! assert_eq!(target_count(10, 3, 0.5), 3); // bounded by availability
//! assert_eq!(target_count(5, 10, 1.0), 5); // bounded by total
//!
//! assert_eq!(target_count(10, 5, 0.01), 0);
//! assert_eq!(TargetPolicy::RoundAtLeastOne.target_count(10, 5, 0.01), 1);
//! ```

/// Rounding policy for [`target_count`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetPolicy {
    /// `round(total * ratio)`; a tiny positive ratio may yield 0.
    #[default]
    Round,
    /// Like [`Round`](Self::Round), but a strictly positive ratio always
    /// claims at least one slot (still bounded by availability and total).
    RoundAtLeastOne,
}

impl TargetPolicy {
    /// Computes the target count under this policy.
    pub fn target_count(self, total_count: usize, available_items: usize, ratio: f64) -> usize {
        match self {
            TargetPolicy::Round => target_count(total_count, available_items, ratio),
            TargetPolicy::RoundAtLeastOne => {
                target_count_with_floor(total_count, available_items, ratio)
            },
        }
    }
}

#[inline]
fn ratio_is_valid(ratio: f64) -> bool {
    (0.0..=1.0).contains(&ratio)
}

/// Returns the number of slots a category with `available_items` items and
/// the given `ratio` should occupy in a sequence of `total_count` slots.
///
/// Returns 0 when `total_count` or `available_items` is 0, or when `ratio`
/// is outside `[0, 1]` (NaN included). Rounding is half away from zero.
pub fn target_count(total_count: usize, available_items: usize, ratio: f64) -> usize {
    if total_count == 0 || available_items == 0 || !ratio_is_valid(ratio) {
        return 0;
    }
    let raw = (total_count as f64 * ratio).round() as usize;
    raw.min(available_items).min(total_count)
}

/// [`target_count`] with a minimum of one slot for any strictly positive
/// ratio.
pub fn target_count_with_floor(total_count: usize, available_items: usize, ratio: f64) -> usize {
    let count = target_count(total_count, available_items, ratio);
    if count == 0 && ratio > 0.0 && ratio <= 1.0 && total_count > 0 && available_items > 0 {
        return 1;
    }
    count
}
