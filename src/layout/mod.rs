//! Slot placement arithmetic.
//!
//! Leaves first: [`target`] turns a ratio into a slot count, [`spacing`]
//! turns a count into a stride, [`generator`] turns a stride into slot
//! indices, and [`adjuster`] repairs or re-lays an existing index buffer.
//! Everything here is pure and allocation failures surface as
//! [`PlacementError::AllocationFailed`](crate::error::PlacementError::AllocationFailed).

pub mod adjuster;
pub mod generator;
pub mod spacing;
pub mod target;

pub use adjuster::{adjust_positions, redistribute_positions};
pub use generator::{CandidateSelection, generate_from_candidates, generate_positions};
pub use spacing::{spacing, spacing_batch};
pub use target::{TargetPolicy, target_count, target_count_with_floor};
