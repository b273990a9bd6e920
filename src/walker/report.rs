// src/walker/report.rs
use crate::tensor::SwapOutcome;
use std::ops::AddAssign;

/// Counters describing one walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwapReport {
    pub functions_visited: usize,
    pub records_visited: usize,
    /// Records whose op and value attribute mark them as constant-bearing
    pub constant_records: usize,
    pub buffers_swapped: usize,
    /// Constant buffers whose bytes were left alone
    pub buffers_skipped: usize,
    pub bytes_swapped: u64,
}

impl SwapReport {
    pub fn new() -> Self {
        SwapReport::default()
    }

    pub(crate) fn record_outcome(&mut self, outcome: SwapOutcome, byte_len: usize) {
        self.constant_records += 1;
        if outcome.is_swapped() {
            self.buffers_swapped += 1;
            self.bytes_swapped += byte_len as u64;
        } else {
            self.buffers_skipped += 1;
        }
    }
}

impl AddAssign for SwapReport {
    fn add_assign(&mut self, other: Self) {
        self.functions_visited += other.functions_visited;
        self.records_visited += other.records_visited;
        self.constant_records += other.constant_records;
        self.buffers_swapped += other.buffers_swapped;
        self.buffers_skipped += other.buffers_skipped;
        self.bytes_swapped += other.bytes_swapped;
    }
}
