// src/walker/async_walker.rs
// Only compiled with feature = "async"
use crate::error::{Result, SwapError};
use crate::graph::{FunctionLibrary, GraphDef};
use crate::types::Endianness;
use crate::walker::{RecordWalker, SwapReport, WalkerConfig};
use tokio::task;

/// Async front end for [`RecordWalker`]
///
/// The walk itself is CPU-bound and synchronous; it runs on tokio's blocking
/// pool and the owned structure is handed back when it finishes.
#[derive(Debug, Clone)]
pub struct AsyncRecordWalker {
    walker: RecordWalker,
}

impl AsyncRecordWalker {
    pub fn new(from: Endianness, to: Endianness) -> Self {
        Self::with_config(from, to, WalkerConfig::default())
    }

    pub fn with_config(from: Endianness, to: Endianness, config: WalkerConfig) -> Self {
        AsyncRecordWalker {
            walker: RecordWalker::with_config(from, to, config),
        }
    }

    pub async fn swap_library(&self, mut library: FunctionLibrary) -> Result<(FunctionLibrary, SwapReport)> {
        let walker = self.walker.clone();
        let handle = task::spawn_blocking(move || -> Result<(FunctionLibrary, SwapReport)> {
            let report = walker.swap_library(&mut library)?;
            Ok((library, report))
        });

        handle.await.map_err(|e| SwapError::TaskFailed(e.to_string()))?
    }

    pub async fn swap_graph(&self, mut graph: GraphDef) -> Result<(GraphDef, SwapReport)> {
        let walker = self.walker.clone();
        let handle = task::spawn_blocking(move || -> Result<(GraphDef, SwapReport)> {
            let report = walker.swap_graph(&mut graph)?;
            Ok((graph, report))
        });

        handle.await.map_err(|e| SwapError::TaskFailed(e.to_string()))?
    }
}
