//! Post-processing for position buffers.
//!
//! Two independent operations over a caller-owned buffer:
//!
//! - [`adjust_positions`]: pulls out-of-range entries (`>= total_count`) back
//!   into range, walking candidates from `total_count - 1` downward and
//!   skipping any slot another entry already holds.
//! - [`redistribute_positions`]: overwrites every entry with the evenly
//!   spaced layout for `(total_count, len)`.
//!
//! Both return `Ok(true)` if the buffer changed and leave it untouched on
//! error.
//!
//! ```text
//!   adjust_positions([0, 4, 12, 15], total = 10)
//!
//!   reserved = {0, 4}
//!   12 → try 9 (free)  → 9     reserved = {0, 4, 9}
//!   15 → try 9 (taken) → 8     reserved = {0, 4, 8, 9}
//!
//!   result: [0, 4, 9, 8], modified = true
//! ```

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::error::{PlacementError, try_buffer};
use crate::layout::generator::generate_positions;

fn validate(positions: &[usize], total_count: usize) -> Result<(), PlacementError> {
    if positions.is_empty() {
        return Err(PlacementError::invalid("position buffer is empty"));
    }
    if total_count == 0 {
        return Err(PlacementError::invalid("total_count must be > 0"));
    }
    Ok(())
}

/// Replaces every position `>= total_count` with the highest slot index not
/// held by any other entry.
///
/// Entries are processed in index order. A slot counts as held if an
/// in-range entry anywhere in the buffer already sits there, or an earlier
/// replacement claimed it, so a buffer whose in-range entries are distinct
/// comes out duplicate-free.
///
/// Returns [`PlacementError::NoSpace`] when the buffer holds more entries
/// than there are slots to move them to.
///
/// ```
/// use slotweave::layout::adjust_positions;
///
/// let mut positions = vec![0, 4, 12, 15];
/// assert_eq!(adjust_positions(&mut positions, 10), Ok(true));
/// assert_eq!(positions, vec![0, 4, 9, 8]);
///
/// // Already in range: nothing to do
/// assert_eq!(adjust_positions(&mut positions, 10), Ok(false));
/// ```
pub fn adjust_positions(
    positions: &mut [usize],
    total_count: usize,
) -> Result<bool, PlacementError> {
    validate(positions, total_count)?;
    if positions.iter().all(|&p| p < total_count) {
        return Ok(false);
    }

    let mut scratch = try_buffer(positions.len())?;
    scratch.extend_from_slice(positions);

    let mut reserved: FxHashSet<usize> = positions
        .iter()
        .copied()
        .filter(|&p| p < total_count)
        .collect();

    // Reserved only grows, so the next free candidate is never above the
    // last one handed out.
    let mut cursor = total_count;
    for slot in scratch.iter_mut().filter(|p| **p >= total_count) {
        let replacement = loop {
            if cursor == 0 {
                debug!(
                    positions = positions.len(),
                    total_count, "no unused slot left while adjusting positions"
                );
                return Err(PlacementError::NoSpace {
                    needed: positions.len(),
                    available: total_count,
                });
            }
            cursor -= 1;
            if !reserved.contains(&cursor) {
                break cursor;
            }
        };
        reserved.insert(replacement);
        *slot = replacement;
    }

    positions.copy_from_slice(&scratch);
    Ok(true)
}

/// Overwrites `positions` with the evenly spaced layout for
/// `(total_count, positions.len())`, ignoring prior values.
///
/// A buffer of one entry is left as is. A buffer longer than `total_count`
/// cannot be laid out without collisions and fails with
/// [`PlacementError::NoSpace`].
///
/// ```
/// use slotweave::layout::redistribute_positions;
///
/// let mut positions = vec![0, 1, 2, 3];
/// assert_eq!(redistribute_positions(&mut positions, 10), Ok(true));
/// assert_eq!(positions, vec![0, 3, 6, 9]);
/// assert_eq!(redistribute_positions(&mut positions, 10), Ok(false));
/// ```
pub fn redistribute_positions(
    positions: &mut [usize],
    total_count: usize,
) -> Result<bool, PlacementError> {
    validate(positions, total_count)?;
    let count = positions.len();
    if count <= 1 {
        return Ok(false);
    }
    if count > total_count {
        return Err(PlacementError::NoSpace {
            needed: count,
            available: total_count,
        });
    }

    let layout = generate_positions(total_count, count)?;
    if layout.as_slice() == &*positions {
        return Ok(false);
    }
    positions.copy_from_slice(&layout);
    Ok(true)
}
