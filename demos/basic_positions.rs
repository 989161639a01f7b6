//! Example demonstrating the placement arithmetic.
//!
//! Run with: cargo run --example basic_positions

use slotweave::layout::{
    CandidateSelection, TargetPolicy, adjust_positions, generate_from_candidates,
    generate_positions, redistribute_positions, spacing, target_count,
};

fn main() {
    println!("=== Placement Examples ===\n");

    // Example 1: how many slots a category gets
    println!("1. Target counts");
    println!("   10 slots, 5 items, ratio 0.4  -> {}", target_count(10, 5, 0.4));
    println!("   10 slots, 3 items, ratio 0.5  -> {} (bounded by items)", target_count(10, 3, 0.5));
    println!("   10 slots, 5 items, ratio 0.01 -> {}", target_count(10, 5, 0.01));
    println!(
        "   same with RoundAtLeastOne     -> {}",
        TargetPolicy::RoundAtLeastOne.target_count(10, 5, 0.01)
    );
    println!();

    // Example 2: evenly spaced positions
    println!("2. Positions");
    println!("   spacing(10, 4) = {}", spacing(10, 4));
    match generate_positions(10, 4) {
        Ok(positions) => println!("   generate_positions(10, 4) = {positions:?}"),
        Err(err) => println!("   error: {err}"),
    }
    match generate_positions(3, 5) {
        Ok(positions) => println!("   generate_positions(3, 5) = {positions:?}"),
        Err(err) => println!("   generate_positions(3, 5) rejected: {err}"),
    }
    println!();

    // Example 3: spreading a second category over the free slots
    println!("3. Candidate pool");
    let free = [1, 2, 4, 5, 7, 8];
    for selection in [CandidateSelection::Nearest, CandidateSelection::NearestUnused] {
        match generate_from_candidates(10, 3, &free, selection) {
            Ok(picked) => println!("   {selection:?}: {picked:?}"),
            Err(err) => println!("   {selection:?}: {err}"),
        }
    }
    println!();

    // Example 4: repairing a buffer
    println!("4. Adjusting");
    let mut positions = vec![0, 4, 12, 15];
    println!("   before: {positions:?}");
    match adjust_positions(&mut positions, 10) {
        Ok(changed) => println!("   after:  {positions:?} (changed: {changed})"),
        Err(err) => println!("   error: {err}"),
    }
    let mut crowded = vec![3, 3, 3, 3];
    match redistribute_positions(&mut crowded, 10) {
        Ok(changed) => println!("   redistributed: {crowded:?} (changed: {changed})"),
        Err(err) => println!("   error: {err}"),
    }
}
