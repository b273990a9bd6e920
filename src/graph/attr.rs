// src/graph/attr.rs
use crate::tensor::{TensorBuffer, TensorShape};
use crate::types::ElementType;

/// Attribute value attached to a record
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Tensor(TensorBuffer),
    Int(i64),
    Float(f32),
    Bool(bool),
    String(String),
    Type(ElementType),
    Shape(TensorShape),
    List(Vec<AttrValue>),
}

impl AttrValue {
    pub fn as_tensor(&self) -> Option<&TensorBuffer> {
        match self {
            AttrValue::Tensor(tensor) => Some(tensor),
            _ => None,
        }
    }

    pub fn as_tensor_mut(&mut self) -> Option<&mut TensorBuffer> {
        match self {
            AttrValue::Tensor(tensor) => Some(tensor),
            _ => None,
        }
    }

    /// Short name of the variant, for log output
    pub fn kind(&self) -> &'static str {
        match self {
            AttrValue::Tensor(_) => "tensor",
            AttrValue::Int(_) => "int",
            AttrValue::Float(_) => "float",
            AttrValue::Bool(_) => "bool",
            AttrValue::String(_) => "string",
            AttrValue::Type(_) => "type",
            AttrValue::Shape(_) => "shape",
            AttrValue::List(_) => "list",
        }
    }
}

impl From<TensorBuffer> for AttrValue {
    fn from(tensor: TensorBuffer) -> Self {
        AttrValue::Tensor(tensor)
    }
}

impl From<ElementType> for AttrValue {
    fn from(ty: ElementType) -> Self {
        AttrValue::Type(ty)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::String(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_variant() {
        let tensor = AttrValue::from(TensorBuffer::new(ElementType::Float, [1], &[0, 0, 0, 0]));
        assert_eq!(tensor.kind(), "tensor");
        assert_eq!(AttrValue::from(7i64).kind(), "int");
        assert_eq!(AttrValue::from("name").kind(), "string");
        assert_eq!(AttrValue::from(ElementType::Int32).kind(), "type");
        assert_eq!(AttrValue::List(vec![AttrValue::Bool(true)]).kind(), "list");
    }
}
