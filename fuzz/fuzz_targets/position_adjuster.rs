#![no_main]

use libfuzzer_sys::fuzz_target;
use slotweave::error::ErrorKind;
use slotweave::layout::{adjust_positions, redistribute_positions};

// Fuzz the adjuster and redistributor over arbitrary position buffers.
//
// A successful adjust leaves every entry in range and, when the in-range
// input was distinct, a duplicate-free buffer. Any failure leaves the buffer
// untouched.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let total = usize::from(data[0]);
    let mut positions: Vec<usize> = data[1..].iter().map(|&b| usize::from(b)).collect();
    let original = positions.clone();

    let in_range_distinct = {
        let mut seen: Vec<usize> = original.iter().copied().filter(|&p| p < total).collect();
        let before = seen.len();
        seen.sort_unstable();
        seen.dedup();
        before == seen.len()
    };

    match adjust_positions(&mut positions, total) {
        Ok(_) => {
            assert!(positions.iter().all(|&p| p < total));
            if in_range_distinct {
                let mut sorted = positions.clone();
                sorted.sort_unstable();
                sorted.dedup();
                assert_eq!(sorted.len(), positions.len());
            }
        }
        Err(err) => {
            assert!(matches!(err.kind(), ErrorKind::InvalidInput | ErrorKind::NoSpace));
            assert_eq!(positions, original);
        }
    }

    let mut layout = original.clone();
    match redistribute_positions(&mut layout, total) {
        Ok(_) => {
            let snapshot = layout.clone();
            assert_eq!(redistribute_positions(&mut layout, total), Ok(false));
            assert_eq!(layout, snapshot);
        }
        Err(_) => assert_eq!(layout, original),
    }
});
