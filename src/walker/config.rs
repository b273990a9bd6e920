// src/walker/config.rs
use crate::graph::NodeRecord;

/// Settings shared by all record walkers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Operation kind of records that embed a constant buffer
    pub constant_op: String,
    /// Attribute holding the embedded buffer
    pub value_attr: String,
    /// Threads used by the parallel walker
    pub worker_threads: usize,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        WalkerConfig {
            constant_op: NodeRecord::CONST_OP.to_string(),
            value_attr: NodeRecord::VALUE_ATTR.to_string(),
            worker_threads: std::thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }
}

impl WalkerConfig {
    pub fn new() -> Self {
        WalkerConfig::default()
    }

    pub fn constant_op(mut self, op: impl Into<String>) -> Self {
        self.constant_op = op.into();
        self
    }

    pub fn value_attr(mut self, attr: impl Into<String>) -> Self {
        self.value_attr = attr.into();
        self
    }

    pub fn worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = threads;
        self
    }

    /// Worker count actually used; zero means one
    pub fn effective_threads(&self) -> usize {
        self.worker_threads.max(1)
    }
}
