pub use crate::balance::{BalanceConfig, Balancer, Category};
pub use crate::builder::{
    FillStrategy, FillerBuilder, GapFiller, build_alternating_filler, build_sequential_filler,
};
pub use crate::ds::ItemQueue;
pub use crate::error::{ConfigError, ErrorKind, PlacementError};
pub use crate::fill::{AlternatingFiller, FillReport, SequentialFiller, empty_slots, fill_gaps};
pub use crate::layout::{
    CandidateSelection, TargetPolicy, adjust_positions, generate_from_candidates,
    generate_positions, redistribute_positions, target_count,
};
#[cfg(feature = "metrics")]
pub use crate::metrics::{FillerMetricsSnapshot, MetricsSnapshotProvider};
pub use crate::traits::{ConcurrentFiller, Filler};
