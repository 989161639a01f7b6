/// Point-in-time copy of a filler's counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FillerMetricsSnapshot {
    pub find_next_calls: u64,
    pub items_yielded: u64,
    pub exhausted_calls: u64,
    pub queue_probes: u64, // take() attempts across all backlogs

    pub slots_filled: u64,
    pub slots_skipped: u64, // already occupied when reached
    pub slots_starved: u64, // left empty because the backlogs ran dry

    // gauges captured at snapshot time
    pub remaining_items: usize,
    pub queue_count: usize,
}

impl FillerMetricsSnapshot {
    /// Average number of queue probes per `find_next` call.
    pub fn probes_per_call(&self) -> f64 {
        if self.find_next_calls == 0 {
            return 0.0;
        }
        self.queue_probes as f64 / self.find_next_calls as f64
    }
}
