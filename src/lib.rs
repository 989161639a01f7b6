//! slotweave: evenly interleave weighted categories into a fixed slot
//! sequence and backfill the gaps from concurrent backlogs.
//!
//! See `DESIGN.md` for internal architecture and invariants.

pub mod balance;
pub mod builder;
pub mod ds;
pub mod error;
pub mod fill;
pub mod layout;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
