//! Backlog consumption and gap filling.

pub mod alternating;
pub mod gap;
pub mod sequential;

pub use alternating::AlternatingFiller;
pub use gap::{FillReport, empty_slots, fill_gaps};
pub use sequential::SequentialFiller;
