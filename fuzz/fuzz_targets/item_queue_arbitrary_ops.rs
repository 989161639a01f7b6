#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;
use slotweave::ds::ItemQueue;

// Fuzz arbitrary enqueue/take sequences on ItemQueue against a bounded
// VecDeque model.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let capacity = usize::from(data[0] % 32);
    let queue: ItemQueue<u8> = ItemQueue::with_capacity(capacity);
    let mut model: VecDeque<u8> = VecDeque::new();

    for &byte in &data[1..] {
        match byte % 3 {
            0 | 1 => {
                let result = queue.enqueue(byte);
                if model.len() < capacity {
                    assert_eq!(result, Ok(()));
                    model.push_back(byte);
                } else {
                    assert_eq!(result, Err(byte));
                }
            }
            _ => assert_eq!(queue.take(), model.pop_front()),
        }

        assert_eq!(queue.len(), model.len());
        assert_eq!(queue.is_empty(), model.is_empty());
        assert_eq!(queue.is_full(), model.len() == capacity);
        queue.check_invariants().unwrap();
    }
});
