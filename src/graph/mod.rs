// src/graph/mod.rs
mod attr;
mod node;
mod library;

pub use attr::AttrValue;
pub use node::NodeRecord;
pub use library::{FunctionDef, FunctionLibrary, GraphDef};
