// src/walker/sync_walker.rs
use crate::error::Result;
use crate::graph::{AttrValue, FunctionDef, FunctionLibrary, GraphDef, NodeRecord};
use crate::tensor::swap_tensor_content;
use crate::types::Endianness;
use crate::walker::{SwapReport, WalkerConfig};

/// Sequential walker that byte swaps every constant buffer it finds
///
/// Functions are visited in order, and records in order within each
/// function. Records that are not constant-bearing are never touched.
#[derive(Debug, Clone)]
pub struct RecordWalker {
    config: WalkerConfig,
    from: Endianness,
    to: Endianness,
}

impl RecordWalker {
    pub fn new(from: Endianness, to: Endianness) -> Self {
        Self::with_config(from, to, WalkerConfig::default())
    }

    pub fn with_config(from: Endianness, to: Endianness, config: WalkerConfig) -> Self {
        RecordWalker { config, from, to }
    }

    /// Walker converting from `from` to the byte order of this host
    pub fn to_native(from: Endianness) -> Self {
        Self::new(from, Endianness::native())
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    pub fn from_order(&self) -> Endianness {
        self.from
    }

    pub fn to_order(&self) -> Endianness {
        self.to
    }

    /// Swap every constant buffer in every function of `library`
    ///
    /// On error the walk stops; records already visited keep their new
    /// byte order.
    pub fn swap_library(&self, library: &mut FunctionLibrary) -> Result<SwapReport> {
        log::debug!(
            "Swapping {} functions from {} to {} endian",
            library.len(),
            self.from,
            self.to
        );

        let mut report = SwapReport::new();
        for function in library.functions.iter_mut() {
            self.swap_function(function, &mut report)?;
        }

        log::debug!(
            "Swapped {} of {} constant buffers ({} bytes)",
            report.buffers_swapped,
            report.constant_records,
            report.bytes_swapped
        );
        Ok(report)
    }

    /// Swap the constant buffers of one function, adding to `report`
    pub fn swap_function(&self, function: &mut FunctionDef, report: &mut SwapReport) -> Result<()> {
        report.functions_visited += 1;
        let FunctionDef { name, nodes } = function;
        for node in nodes.iter_mut() {
            self.swap_node(Some(name.as_str()), node, report)?;
        }
        Ok(())
    }

    /// Swap the top-level records of `graph`, then its function library
    pub fn swap_graph(&self, graph: &mut GraphDef) -> Result<SwapReport> {
        let mut report = SwapReport::new();
        for node in graph.nodes.iter_mut() {
            self.swap_node(None, node, &mut report)?;
        }

        report += self.swap_library(&mut graph.library)?;
        Ok(report)
    }

    fn swap_node(&self, function: Option<&str>, node: &mut NodeRecord, report: &mut SwapReport) -> Result<()> {
        report.records_visited += 1;

        let NodeRecord { name, op, attrs, .. } = node;
        if *op != self.config.constant_op {
            return Ok(());
        }
        let tensor = match attrs.get_mut(self.config.value_attr.as_str()) {
            Some(AttrValue::Tensor(tensor)) => tensor,
            other => {
                log::trace!(
                    "Constant record {} holds {} in {}, not a tensor",
                    name,
                    other.map_or("nothing", |value| value.kind()),
                    self.config.value_attr
                );
                return Ok(());
            }
        };

        let outcome = swap_tensor_content(tensor, self.from, self.to)
            .map_err(|e| e.for_record(record_path(function, name)))?;
        log::trace!("Record {}: {:?}", name, outcome);
        report.record_outcome(outcome, tensor.byte_len());
        Ok(())
    }
}

/// Path naming a record in errors: `function/node`, or just `node` at graph level
fn record_path(function: Option<&str>, node: &str) -> String {
    match function {
        Some(function) => format!("{}/{}", function, node),
        None => node.to_string(),
    }
}

/// Swap every constant buffer of `library` from `from` to `to` byte order
/// using the default walker settings.
pub fn swap_library(library: &mut FunctionLibrary, from: Endianness, to: Endianness) -> Result<SwapReport> {
    RecordWalker::new(from, to).swap_library(library)
}
