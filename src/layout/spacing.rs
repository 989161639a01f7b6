//! Spacing between consecutive placements.
//!
//! Pure function of `(total_count, target_count)`, evaluated in order:
//!
//! | Condition                               | Spacing                          |
//! |-----------------------------------------|----------------------------------|
//! | `total <= 1` or `target <= 1`           | `0.0`                            |
//! | `target >= total`                       | `1.0` (dense packing)            |
//! | `total == 3 && target == 2`             | `2.0`                            |
//! | otherwise                               | `(total - 1) / (target - 1)`, capped at `total - 1` |
//!
//! [`spacing_batch`] evaluates many pairs at once and is bit-identical to
//! calling [`spacing`] per pair.

/// Returns the spacing between consecutive positions when `target_count`
/// items are spread over `total_count` slots.
///
/// ```
/// use slotweave::layout::spacing;
///
/// assert_eq!(spacing(10, 4), 3.0);
/// assert_eq!(spacing(5, 5), 1.0);
/// assert_eq!(spacing(5, 1), 0.0);
/// ```
pub fn spacing(total_count: usize, target_count: usize) -> f64 {
    if total_count <= 1 || target_count <= 1 {
        return 0.0;
    }
    if target_count >= total_count {
        return 1.0;
    }
    if total_count == 3 && target_count == 2 {
        return 2.0;
    }

    let base = (total_count - 1) as f64 / (target_count - 1) as f64;
    if base >= total_count as f64 {
        return (total_count - 1) as f64;
    }
    base
}

/// Computes [`spacing`] for every `(total_count, target_count)` pair,
/// writing results into `out`.
///
/// # Panics
///
/// Panics if `pairs` and `out` differ in length.
pub fn spacing_batch(pairs: &[(usize, usize)], out: &mut [f64]) {
    assert_eq!(
        pairs.len(),
        out.len(),
        "spacing_batch: input and output lengths differ"
    );

    // Four lanes at a time; the tail falls through to the same scalar path.
    let mut pair_chunks = pairs.chunks_exact(4);
    let mut out_chunks = out.chunks_exact_mut(4);
    for (lane_in, lane_out) in (&mut pair_chunks).zip(&mut out_chunks) {
        lane_out[0] = spacing(lane_in[0].0, lane_in[0].1);
        lane_out[1] = spacing(lane_in[1].0, lane_in[1].1);
        lane_out[2] = spacing(lane_in[2].0, lane_in[2].1);
        lane_out[3] = spacing(lane_in[3].0, lane_in[3].1);
    }
    for (&(total, target), slot) in pair_chunks
        .remainder()
        .iter()
        .zip(out_chunks.into_remainder())
    {
        *slot = spacing(total, target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_degenerate_counts() {
        assert_eq!(spacing(0, 0), 0.0);
        assert_eq!(spacing(1, 1), 0.0);
        assert_eq!(spacing(0, 1), 0.0);
        assert_eq!(spacing(1, 0), 0.0);
        assert_eq!(spacing(10, 1), 0.0);
    }

    #[test]
    fn spacing_dense_packing() {
        assert_eq!(spacing(2, 2), 1.0);
        assert_eq!(spacing(5, 5), 1.0);
        assert_eq!(spacing(5, 9), 1.0);
    }

    #[test]
    fn spacing_three_two_special_case() {
        assert_eq!(spacing(3, 2), 2.0);
    }

    #[test]
    fn spacing_normal_cases() {
        assert_eq!(spacing(4, 2), 3.0);
        assert_eq!(spacing(10, 4), 3.0);
        assert_eq!(spacing(5, 2), 4.0);
        assert_eq!(spacing(11, 3), 5.0);
        assert!((spacing(10, 3) - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn spacing_batch_handles_tail() {
        let pairs = [(10, 4), (3, 2), (5, 5), (1, 1), (100, 7), (8, 3)];
        let mut out = [f64::NAN; 6];
        spacing_batch(&pairs, &mut out);
        for (&(total, target), value) in pairs.iter().zip(out) {
            assert_eq!(value.to_bits(), spacing(total, target).to_bits());
        }
    }

    #[test]
    #[should_panic(expected = "lengths differ")]
    fn spacing_batch_rejects_mismatched_lengths() {
        let mut out = [0.0; 1];
        spacing_batch(&[(1, 1), (2, 2)], &mut out);
    }
}
