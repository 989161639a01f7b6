#![no_main]

use libfuzzer_sys::fuzz_target;
use slotweave::layout::{CandidateSelection, generate_from_candidates, generate_positions};

// Fuzz the generator with arbitrary (total, target) pairs and candidate pools.
//
// Valid input must yield strictly increasing, in-range, distinct indices;
// invalid input must be rejected without panicking.
fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    let total = usize::from(u16::from_le_bytes([data[0], data[1]]) % 4096);
    let target = usize::from(u16::from_le_bytes([data[2], data[3]]) % 4096);

    match generate_positions(total, target) {
        Ok(positions) => {
            assert!(total > 0 && target > 0 && target <= total);
            assert_eq!(positions.len(), target);
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
            assert!(positions.iter().all(|&p| p < total));
            if target < total {
                assert_eq!(positions.last().copied(), Some(total - 1));
            }
        }
        Err(_) => assert!(total == 0 || target == 0 || target > total),
    }

    // remaining bytes form a candidate pool
    let candidates: Vec<usize> = data[4..]
        .iter()
        .map(|&b| usize::from(b) % total.max(1))
        .collect();
    let mut unique = candidates.clone();
    unique.sort_unstable();
    unique.dedup();

    if let Ok(picked) = generate_from_candidates(total, target, &unique, CandidateSelection::NearestUnused) {
        let mut sorted = picked.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), picked.len());
        assert!(picked.iter().all(|p| unique.contains(p)));
    }
    if let Ok(picked) = generate_from_candidates(total, target, &candidates, CandidateSelection::Nearest) {
        assert_eq!(picked.len(), target);
        assert!(picked.iter().all(|p| candidates.contains(p)));
    }
});
