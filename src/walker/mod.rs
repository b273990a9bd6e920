// src/walker/mod.rs
mod config;
mod report;
mod sync_walker;
mod parallel_walker;

#[cfg(feature = "async")]
mod async_walker;

pub use config::WalkerConfig;
pub use report::SwapReport;
pub use sync_walker::{swap_library, RecordWalker};
pub use parallel_walker::ParallelWalker;

#[cfg(feature = "async")]
pub use async_walker::AsyncRecordWalker;
