#![no_main]

use libfuzzer_sys::fuzz_target;
use slotweave::fill::{SequentialFiller, fill_gaps};
use slotweave::traits::Filler;

// Fuzz fill_gaps with arbitrary slot layouts, target orders and backlogs.
//
// Occupied slots are never overwritten and every item is either placed or
// still queued.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    let len = usize::from(data[0] % 64);
    let queues = usize::from(data[1] % 4) + 1;
    let backlog = usize::from(data[2]);
    let rest = &data[3..];

    let mut slots: Vec<Option<u32>> = (0..len)
        .map(|i| {
            rest.get(i)
                .filter(|&&b| b % 2 == 0)
                .map(|_| 1_000 + i as u32)
        })
        .collect();
    let before = slots.clone();

    // targets may repeat and may be out of range
    let targets: Vec<usize> = rest.iter().skip(len).map(|&b| usize::from(b) % (len + 4)).collect();

    let lists: Vec<Vec<u32>> = (0..queues)
        .map(|q| (0..backlog as u32).filter(|i| *i as usize % queues == q).collect())
        .collect();
    let filler = SequentialFiller::from_lists(lists);

    let report = fill_gaps(&mut slots, &targets, &filler);

    for (old, new) in before.iter().zip(&slots) {
        if old.is_some() {
            assert_eq!(old, new);
        }
    }
    assert_eq!(report.filled + filler.remaining(), backlog);
    assert_eq!(
        report.filled + report.skipped_occupied + report.starved + report.out_of_range,
        targets.len()
    );
});
