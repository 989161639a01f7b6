//! Example demonstrating fillers and gap filling.
//!
//! Run with: cargo run --example basic_gap_fill

use slotweave::builder::{FillStrategy, FillerBuilder, build_alternating_filler};
use slotweave::fill::{SequentialFiller, empty_slots, fill_gaps};
use slotweave::traits::Filler;

fn show(slots: &[Option<&str>]) -> String {
    slots
        .iter()
        .map(|slot| slot.unwrap_or("_"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    println!("=== Gap Fill Examples ===\n");

    // Example 1: round-robin over several backlogs
    println!("1. Sequential filler");
    let filler = SequentialFiller::from_lists(vec![vec!["v1", "v2"], vec!["i1", "i2"]]);
    let mut slots = vec![Some("A"), None, None, Some("B"), None, None];
    println!("   before: {}", show(&slots));
    let gaps = empty_slots(&slots);
    let report = fill_gaps(&mut slots, &gaps, &filler);
    println!("   after:  {} ({report:?})", show(&slots));
    println!();

    // Example 2: primary first, secondary once primary is dry
    println!("2. Alternating filler (split by index parity)");
    let items = ["p0", "s0", "p1", "s1", "p2"];
    let filler = build_alternating_filler(&items);
    println!(
        "   primary={} secondary={}",
        filler.primary().len(),
        filler.secondary().len()
    );
    let mut slots = vec![None; 5];
    let gaps = empty_slots(&slots);
    fill_gaps(&mut slots, &gaps, &filler);
    println!("   filled: {}", show(&slots));
    println!();

    // Example 3: the filler runs dry
    println!("3. Exhaustion");
    let filler = FillerBuilder::new(FillStrategy::Sequential).build(vec![vec!["only"]]);
    let mut slots = vec![None, None, None];
    let gaps = empty_slots(&slots);
    let report = fill_gaps(&mut slots, &gaps, &filler);
    println!(
        "   filled: {} (starved slots: {}, exhausted: {})",
        show(&slots),
        report.starved,
        filler.is_exhausted()
    );
}
