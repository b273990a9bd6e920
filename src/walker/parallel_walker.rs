// src/walker/parallel_walker.rs
use crate::error::{Result, SwapError};
use crate::graph::{FunctionDef, FunctionLibrary};
use crate::types::Endianness;
use crate::walker::{RecordWalker, SwapReport, WalkerConfig};
use crossbeam_channel::{unbounded, Receiver};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

/// Walker that swaps the functions of a library on several threads
///
/// Records never share buffers, so the result for valid input is identical
/// to [`RecordWalker::swap_library`].
#[derive(Debug, Clone)]
pub struct ParallelWalker {
    walker: RecordWalker,
}

struct WalkState {
    report: Mutex<SwapReport>,
    // (function index, error) of every failed function
    errors: Mutex<Vec<(usize, SwapError)>>,
    // Lowest failing function index, usize::MAX while none has failed
    first_failure: AtomicUsize,
}

impl ParallelWalker {
    pub fn new(from: Endianness, to: Endianness) -> Self {
        Self::with_config(from, to, WalkerConfig::default())
    }

    pub fn with_config(from: Endianness, to: Endianness, config: WalkerConfig) -> Self {
        ParallelWalker {
            walker: RecordWalker::with_config(from, to, config),
        }
    }

    pub fn config(&self) -> &WalkerConfig {
        self.walker.config()
    }

    /// Swap every constant buffer of `library`
    ///
    /// Once a function fails, functions with a higher index are skipped while
    /// lower ones still run. The error returned is the one from the
    /// lowest-indexed failing function, the same error
    /// [`RecordWalker::swap_library`] reports.
    pub fn swap_library(&self, library: &mut FunctionLibrary) -> Result<SwapReport> {
        let threads = self.config().effective_threads().min(library.len());
        if threads <= 1 {
            return self.walker.swap_library(library);
        }

        log::debug!(
            "Swapping {} functions on {} threads from {} to {} endian",
            library.len(),
            threads,
            self.walker.from_order(),
            self.walker.to_order()
        );

        let (job_tx, job_rx) = unbounded::<(usize, &mut FunctionDef)>();
        for job in library.functions.iter_mut().enumerate() {
            job_tx
                .send(job)
                .map_err(|_| SwapError::TaskFailed("job queue closed".to_string()))?;
        }
        drop(job_tx);

        let state = WalkState {
            report: Mutex::new(SwapReport::new()),
            errors: Mutex::new(Vec::new()),
            first_failure: AtomicUsize::new(usize::MAX),
        };

        let panicked = thread::scope(|scope| {
            let handles: Vec<_> = (0..threads)
                .map(|_| {
                    let job_rx = job_rx.clone();
                    let state = &state;
                    scope.spawn(move || self.worker(job_rx, state))
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().is_err())
                .fold(false, |panicked, failed| panicked || failed)
        });
        if panicked {
            return Err(SwapError::WorkerPanicked);
        }

        let mut errors = state.errors.into_inner();
        errors.sort_by_key(|(index, _)| *index);
        if let Some((_, e)) = errors.into_iter().next() {
            return Err(e);
        }

        let report = state.report.into_inner();
        log::debug!(
            "Swapped {} of {} constant buffers ({} bytes)",
            report.buffers_swapped,
            report.constant_records,
            report.bytes_swapped
        );
        Ok(report)
    }

    fn worker(&self, job_rx: Receiver<(usize, &mut FunctionDef)>, state: &WalkState) {
        for (index, function) in job_rx.iter() {
            if index > state.first_failure.load(Ordering::Acquire) {
                continue;
            }

            let mut report = SwapReport::new();
            match self.walker.swap_function(function, &mut report) {
                Ok(()) => *state.report.lock() += report,
                Err(e) => {
                    state.first_failure.fetch_min(index, Ordering::AcqRel);
                    state.errors.lock().push((index, e));
                }
            }
        }
    }
}
