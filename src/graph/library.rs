// src/graph/library.rs
use crate::graph::NodeRecord;

/// A named function body: an ordered sequence of records
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FunctionDef {
    pub name: String,
    pub nodes: Vec<NodeRecord>,
}

impl FunctionDef {
    pub fn new(name: impl Into<String>) -> Self {
        FunctionDef {
            name: name.into(),
            nodes: Vec::new(),
        }
    }

    pub fn with_node(mut self, node: NodeRecord) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn push(&mut self, node: NodeRecord) {
        self.nodes.push(node);
    }

    pub fn node(&self, name: &str) -> Option<&NodeRecord> {
        self.nodes.iter().find(|node| node.name == name)
    }
}

/// Ordered collection of functions embedded in a graph
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FunctionLibrary {
    pub functions: Vec<FunctionDef>,
}

impl FunctionLibrary {
    pub fn new() -> Self {
        FunctionLibrary::default()
    }

    pub fn with_function(mut self, function: FunctionDef) -> Self {
        self.functions.push(function);
        self
    }

    pub fn push(&mut self, function: FunctionDef) {
        self.functions.push(function);
    }

    pub fn function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.iter().find(|function| function.name == name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Total number of records across all functions
    pub fn node_count(&self) -> usize {
        self.functions.iter().map(|function| function.nodes.len()).sum()
    }
}

/// Top-level records of a graph plus its function library
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphDef {
    pub nodes: Vec<NodeRecord>,
    pub library: FunctionLibrary,
}

impl GraphDef {
    pub fn new() -> Self {
        GraphDef::default()
    }

    pub fn with_node(mut self, node: NodeRecord) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn with_library(mut self, library: FunctionLibrary) -> Self {
        self.library = library;
        self
    }

    pub fn node(&self, name: &str) -> Option<&NodeRecord> {
        self.nodes.iter().find(|node| node.name == name)
    }
}
