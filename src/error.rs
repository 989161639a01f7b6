//! Error types for the slotweave library.
//!
//! ## Key Components
//!
//! - [`PlacementError`]: Returned by the position generator and adjuster when
//!   input is degenerate, a result buffer cannot be allocated, or no unused
//!   slot is left. [`PlacementError::kind`] exposes the status code.
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (debug-only `check_invariants` methods).
//! - [`ConfigError`]: Returned when balancer or builder configuration is
//!   invalid (e.g. zero batch size, out-of-range ratios).
//!
//! Running out of backlog items is not an error: fillers report exhaustion
//! as `None`.
//!
//! ## Example Usage
//!
//! ```
//! use slotweave::error::{ErrorKind, PlacementError};
//! use slotweave::layout::generate_positions;
//!
//! assert_eq!(generate_positions(10, 4), Ok(vec![0, 3, 6, 9]));
//!
//! // More targets than slots is rejected without panicking
//! let err: PlacementError = generate_positions(3, 5).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidInput);
//! ```

use std::collections::TryReserveError;
use std::fmt;

// ---------------------------------------------------------------------------
// PlacementError
// ---------------------------------------------------------------------------

/// Status code carried by a [`PlacementError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Non-positive counts, target exceeding total, empty candidate pools.
    InvalidInput,
    /// A result buffer could not be allocated.
    MemoryError,
    /// The adjuster or candidate selector ran out of unused slots.
    NoSpace,
}

/// Error returned by placement operations.
///
/// All variants are deterministic functions of the input; callers should not
/// retry with the same arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Input rejected before any work was done.
    InvalidInput(String),
    /// Reserving `requested` elements for a result buffer failed.
    AllocationFailed { requested: usize },
    /// `needed` distinct slots were required but only `available` exist.
    NoSpace { needed: usize, available: usize },
}

impl PlacementError {
    /// Creates an [`PlacementError::InvalidInput`] with the given description.
    #[inline]
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Returns the status code for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::AllocationFailed { .. } => ErrorKind::MemoryError,
            Self::NoSpace { .. } => ErrorKind::NoSpace,
        }
    }

    pub(crate) fn from_reserve(requested: usize, _err: TryReserveError) -> Self {
        Self::AllocationFailed { requested }
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::AllocationFailed { requested } => {
                write!(f, "failed to allocate a buffer of {requested} positions")
            },
            Self::NoSpace { needed, available } => write!(
                f,
                "no unused slot left: {needed} positions need placing but only {available} slots exist"
            ),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Reserves exactly `len` elements in a fresh vector, mapping allocation
/// failure to [`PlacementError::AllocationFailed`].
pub(crate) fn try_buffer<T>(len: usize) -> Result<Vec<T>, PlacementError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|err| PlacementError::from_reserve(len, err))?;
    Ok(buf)
}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal invariants are violated.
///
/// Produced by debug-only `check_invariants` methods
/// (e.g. [`ItemQueue::check_invariants`](crate::ds::ItemQueue::check_invariants)).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`BalanceConfig::try_with_batch_size`](crate::balance::BalanceConfig::try_with_batch_size)
/// and [`Balancer::try_balance`](crate::balance::Balancer::try_balance).
///
/// # Example
///
/// ```
/// use slotweave::balance::BalanceConfig;
///
/// let err = BalanceConfig::try_with_batch_size(0).unwrap_err();
/// assert!(err.to_string().contains("batch_size"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- PlacementError ---------------------------------------------------

    #[test]
    fn placement_kinds_map_to_status_codes() {
        assert_eq!(
            PlacementError::invalid("x").kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            PlacementError::AllocationFailed { requested: 4 }.kind(),
            ErrorKind::MemoryError
        );
        assert_eq!(
            PlacementError::NoSpace {
                needed: 3,
                available: 2
            }
            .kind(),
            ErrorKind::NoSpace
        );
    }

    #[test]
    fn placement_display_includes_details() {
        let err = PlacementError::invalid("target_count exceeds total_count");
        assert_eq!(
            err.to_string(),
            "invalid input: target_count exceeds total_count"
        );

        let err = PlacementError::NoSpace {
            needed: 5,
            available: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains('5'));
        assert!(msg.contains('3'));
    }

    #[test]
    fn placement_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PlacementError>();
    }

    #[test]
    fn try_buffer_reserves_requested_capacity() {
        let buf: Vec<usize> = try_buffer(16).unwrap();
        assert!(buf.is_empty());
        assert!(buf.capacity() >= 16);
    }

    #[test]
    fn try_buffer_reports_impossible_reservation() {
        let err = try_buffer::<u64>(usize::MAX).unwrap_err();
        assert_eq!(
            err,
            PlacementError::AllocationFailed {
                requested: usize::MAX
            }
        );
    }

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("queue length mismatch");
        assert_eq!(err.to_string(), "queue length mismatch");
    }

    #[test]
    fn invariant_message_accessor() {
        let err = InvariantError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn invariant_clone_and_eq() {
        let a = InvariantError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("batch_size must be > 0");
        assert_eq!(err.to_string(), "batch_size must be > 0");
    }

    #[test]
    fn config_debug_includes_message() {
        let err = ConfigError::new("bad ratio");
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("bad ratio"));
    }

    #[test]
    fn config_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConfigError>();
        assert_error::<InvariantError>();
    }
}
