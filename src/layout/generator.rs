//! Evenly spaced slot indices for one category.
//!
//! ## Case Ladder
//!
//! ```text
//!   generate_positions(total, target)
//!        │
//!        ├─ total == 0 || target == 0 || target > total ──► InvalidInput
//!        ├─ target == total ─────────────────────────────► [0, 1, .., total-1]
//!        ├─ target == 1 ─────────────────────────────────► [0]
//!        └─ otherwise
//!             s = spacing(total, target)
//!             pos[i] = round(i * s) clamped to [0, total-1]
//!             pos[target-1] = total - 1
//!
//!   total = 10, target = 4, s = 3.0
//!
//!   slot:  0  1  2  3  4  5  6  7  8  9
//!          ■  ·  ·  ■  ·  ·  ■  ·  ·  ■
//! ```
//!
//! The candidate-pool variant, [`generate_from_candidates`], maps each ideal
//! position onto the nearest index from an explicit pool instead of the
//! implicit `0..total` range. Under [`CandidateSelection::Nearest`] two ideal
//! positions may resolve to the same candidate; [`CandidateSelection::NearestUnused`]
//! never hands out a candidate twice.

use rustc_hash::FxHashSet;

use crate::error::{PlacementError, try_buffer};
use crate::layout::spacing::spacing;

/// How [`generate_from_candidates`] resolves an ideal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CandidateSelection {
    /// Closest candidate, first one on ties. Output may repeat a candidate.
    #[default]
    Nearest,
    /// Closest candidate not already chosen, first one on ties.
    NearestUnused,
}

fn validate_counts(total_count: usize, target_count: usize) -> Result<(), PlacementError> {
    if total_count == 0 {
        return Err(PlacementError::invalid("total_count must be > 0"));
    }
    if target_count == 0 {
        return Err(PlacementError::invalid("target_count must be > 0"));
    }
    if target_count > total_count {
        return Err(PlacementError::invalid(format!(
            "target_count {target_count} exceeds total_count {total_count}"
        )));
    }
    Ok(())
}

/// Returns `target_count` strictly increasing slot indices spread over
/// `0..total_count`.
///
/// When `target_count < total_count` the first index is 0 and the last is
/// `total_count - 1`.
///
/// ```
/// use slotweave::layout::generate_positions;
///
/// assert_eq!(generate_positions(10, 4), Ok(vec![0, 3, 6, 9]));
/// assert_eq!(generate_positions(5, 1), Ok(vec![0]));
/// assert_eq!(generate_positions(3, 3), Ok(vec![0, 1, 2]));
/// assert!(generate_positions(3, 4).is_err());
/// ```
pub fn generate_positions(
    total_count: usize,
    target_count: usize,
) -> Result<Vec<usize>, PlacementError> {
    validate_counts(total_count, target_count)?;

    let mut positions = try_buffer(target_count)?;
    if target_count == total_count {
        positions.extend(0..total_count);
        return Ok(positions);
    }
    if target_count == 1 {
        positions.push(0);
        return Ok(positions);
    }

    let step = spacing(total_count, target_count);
    let last = total_count - 1;
    positions.extend((0..target_count - 1).map(|i| spaced_index(i, step, last)));
    positions.push(last);
    Ok(positions)
}

#[inline]
fn spaced_index(i: usize, step: f64, last: usize) -> usize {
    let ideal = (i as f64 * step).round();
    if ideal <= 0.0 {
        0
    } else {
        (ideal as usize).min(last)
    }
}

/// Ideal (unrounded) position of the `i`-th of `target_count` placements
/// over `total_count` slots.
#[inline]
fn ideal_position(i: usize, total_count: usize, target_count: usize) -> f64 {
    if target_count <= 1 {
        return 0.0;
    }
    i as f64 * ((total_count - 1) as f64 / (target_count - 1) as f64)
}

/// Maps `target_count` evenly spaced ideal positions onto the closest
/// entries of `candidates`.
///
/// Candidates are scanned left to right and the first minimum distance wins,
/// so the order of `candidates` decides ties. Every candidate must be a
/// valid slot index (`< total_count`).
///
/// ```
/// use slotweave::layout::{generate_from_candidates, CandidateSelection};
///
/// // Slots 0, 3, 6 and 9 are taken; spread 3 placements over the rest.
/// let free = [1, 2, 4, 5, 7, 8];
/// let picked = generate_from_candidates(10, 3, &free, CandidateSelection::NearestUnused);
/// assert_eq!(picked, Ok(vec![1, 4, 8]));
/// ```
pub fn generate_from_candidates(
    total_count: usize,
    target_count: usize,
    candidates: &[usize],
    selection: CandidateSelection,
) -> Result<Vec<usize>, PlacementError> {
    validate_counts(total_count, target_count)?;
    if candidates.is_empty() {
        return Err(PlacementError::invalid("candidate pool is empty"));
    }
    if let Some(&bad) = candidates.iter().find(|&&c| c >= total_count) {
        return Err(PlacementError::invalid(format!(
            "candidate {bad} is outside 0..{total_count}"
        )));
    }

    let mut positions = try_buffer(target_count)?;
    match selection {
        CandidateSelection::Nearest => {
            for i in 0..target_count {
                let ideal = ideal_position(i, total_count, target_count);
                let idx = nearest(ideal, candidates, |_| true)
                    .ok_or_else(|| PlacementError::invalid("candidate pool is empty"))?;
                positions.push(candidates[idx]);
            }
        },
        CandidateSelection::NearestUnused => {
            let mut used: FxHashSet<usize> = FxHashSet::default();
            for i in 0..target_count {
                let ideal = ideal_position(i, total_count, target_count);
                let Some(idx) = nearest(ideal, candidates, |c| !used.contains(&c)) else {
                    return Err(PlacementError::NoSpace {
                        needed: target_count,
                        available: used.len(),
                    });
                };
                used.insert(candidates[idx]);
                positions.push(candidates[idx]);
            }
        },
    }
    Ok(positions)
}

/// Index into `candidates` of the entry closest to `target` among those
/// accepted by `eligible`; the first minimum wins.
fn nearest(target: f64, candidates: &[usize], eligible: impl Fn(usize) -> bool) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, &candidate) in candidates.iter().enumerate() {
        if !eligible(candidate) {
            continue;
        }
        let distance = (target - candidate as f64).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {},
            _ => best = Some((idx, distance)),
        }
    }
    best.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn generate_even_spacing() {
        assert_eq!(generate_positions(10, 4).unwrap(), vec![0, 3, 6, 9]);
        assert_eq!(generate_positions(11, 3).unwrap(), vec![0, 5, 10]);
        assert_eq!(generate_positions(10, 2).unwrap(), vec![0, 9]);
    }

    #[test]
    fn generate_single_target_is_first_slot() {
        assert_eq!(generate_positions(5, 1).unwrap(), vec![0]);
        assert_eq!(generate_positions(1, 1).unwrap(), vec![0]);
    }

    #[test]
    fn generate_full_range_is_consecutive() {
        assert_eq!(generate_positions(3, 3).unwrap(), vec![0, 1, 2]);
        assert_eq!(generate_positions(2, 2).unwrap(), vec![0, 1]);
    }

    #[test]
    fn generate_three_two_uses_both_ends() {
        assert_eq!(generate_positions(3, 2).unwrap(), vec![0, 2]);
    }

    #[test]
    fn generate_rounds_half_away_from_zero() {
        // spacing(10, 3) = 4.5 -> round(4.5) = 5
        assert_eq!(generate_positions(10, 3).unwrap(), vec![0, 5, 9]);
    }

    #[test]
    fn generate_rejects_invalid_counts() {
        for (total, target) in [(0, 1), (5, 0), (3, 5), (0, 0)] {
            let err = generate_positions(total, target).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "({total}, {target})");
        }
    }

    #[test]
    fn candidates_nearest_keeps_first_on_ties() {
        // ideal positions 0.0 and 9.0
        assert_eq!(
            generate_from_candidates(10, 2, &[4, 5], CandidateSelection::Nearest).unwrap(),
            vec![4, 5]
        );
        // ideal 4.5 is equidistant from 4 and 5: the first listed wins
        assert_eq!(
            generate_from_candidates(10, 3, &[5, 4], CandidateSelection::Nearest).unwrap(),
            vec![4, 5, 5]
        );
    }

    #[test]
    fn candidates_nearest_may_repeat() {
        let picked =
            generate_from_candidates(10, 3, &[0, 1], CandidateSelection::Nearest).unwrap();
        assert_eq!(picked, vec![0, 1, 1]);
    }

    #[test]
    fn candidates_nearest_unused_never_repeats() {
        let picked =
            generate_from_candidates(10, 3, &[0, 1, 2], CandidateSelection::NearestUnused)
                .unwrap();
        assert_eq!(picked, vec![0, 2, 1]);
    }

    #[test]
    fn candidates_nearest_unused_reports_no_space() {
        let err = generate_from_candidates(10, 3, &[0, 9], CandidateSelection::NearestUnused)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoSpace);
    }

    #[test]
    fn candidates_reject_bad_pools() {
        let err = generate_from_candidates(10, 2, &[], CandidateSelection::Nearest).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err =
            generate_from_candidates(10, 2, &[3, 10], CandidateSelection::Nearest).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = generate_from_candidates(2, 3, &[0, 1], CandidateSelection::Nearest).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn candidates_single_target_picks_closest_to_start() {
        assert_eq!(
            generate_from_candidates(10, 1, &[7, 3, 5], CandidateSelection::Nearest).unwrap(),
            vec![3]
        );
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn total_and_target() -> impl Strategy<Value = (usize, usize)> {
        (1usize..2_000).prop_flat_map(|total| (Just(total), 1..=total))
    }

    proptest! {
        /// Property: output is `target` strictly increasing in-range indices
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_positions_strictly_increasing((total, target) in total_and_target()) {
            let positions = generate_positions(total, target).unwrap();
            prop_assert_eq!(positions.len(), target);
            prop_assert_eq!(positions[0], 0);
            prop_assert!(positions.iter().all(|&p| p < total));
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            if target < total && target > 1 {
                prop_assert_eq!(*positions.last().unwrap(), total - 1);
            }
        }

        /// Property: NearestUnused yields distinct members of the pool
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_nearest_unused_distinct(
            (total, target) in total_and_target(),
            seed in any::<u64>()
        ) {
            let candidates: Vec<usize> = (0..total)
                .filter(|c| (c.wrapping_mul(2_654_435_761) ^ seed as usize) % 3 != 0)
                .collect();
            prop_assume!(!candidates.is_empty());

            match generate_from_candidates(total, target, &candidates, CandidateSelection::NearestUnused) {
                Ok(picked) => {
                    prop_assert_eq!(picked.len(), target);
                    let unique: FxHashSet<_> = picked.iter().copied().collect();
                    prop_assert_eq!(unique.len(), target);
                    prop_assert!(picked.iter().all(|p| candidates.contains(p)));
                },
                Err(err) => {
                    prop_assert!(target > candidates.len());
                    prop_assert_eq!(err.kind(), crate::error::ErrorKind::NoSpace);
                },
            }
        }
    }
}
