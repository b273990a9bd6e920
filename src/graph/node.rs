// src/graph/node.rs
use crate::graph::AttrValue;
use crate::tensor::TensorBuffer;
use std::collections::BTreeMap;

/// One operation record of a graph or function body
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    pub name: String,
    /// Operation kind, e.g. "Const"
    pub op: String,
    pub inputs: Vec<String>,
    pub attrs: BTreeMap<String, AttrValue>,
}

impl NodeRecord {
    pub const CONST_OP: &'static str = "Const";
    pub const VALUE_ATTR: &'static str = "value";

    pub fn new(name: impl Into<String>, op: impl Into<String>) -> Self {
        NodeRecord {
            name: name.into(),
            op: op.into(),
            inputs: Vec::new(),
            attrs: BTreeMap::new(),
        }
    }

    /// Build a constant record holding `value` in its value attribute
    pub fn constant(name: impl Into<String>, value: TensorBuffer) -> Self {
        let dtype = value.element_type();
        NodeRecord::new(name, Self::CONST_OP)
            .with_attr("dtype", dtype)
            .with_attr(Self::VALUE_ATTR, value)
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.inputs.push(input.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    /// The embedded tensor stored under `attr`, if any
    pub fn tensor_attr(&self, attr: &str) -> Option<&TensorBuffer> {
        self.attr(attr).and_then(AttrValue::as_tensor)
    }

    pub fn is_op(&self, op: &str) -> bool {
        self.op == op
    }
}
