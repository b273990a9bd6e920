// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwapError {
    #[error("Malformed tensor buffer in {record}: {byte_len} bytes cannot be split into {element_count} elements")]
    MalformedBuffer { record: String, byte_len: usize, element_count: u64 },

    #[error("Element count of shape {shape} overflows in {record}")]
    ShapeOverflow { record: String, shape: String },

    #[error("Invalid element type tag: {0}")]
    InvalidElementType(u32),

    #[error("Invalid endianness: {0}")]
    InvalidEndianness(String),

    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("Length mismatch: expected {expected} bytes, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Walker thread panicked")]
    WorkerPanicked,

    #[error("Background task failed: {0}")]
    TaskFailed(String),
}

impl SwapError {
    /// Record name used when a buffer is swapped outside of any record
    pub const DETACHED_RECORD: &'static str = "<tensor>";

    /// Re-tag a record-scoped error with the path of the record it came from.
    ///
    /// Errors that are not tied to a record are returned unchanged.
    pub fn for_record(self, path: impl Into<String>) -> Self {
        match self {
            SwapError::MalformedBuffer { byte_len, element_count, .. } => SwapError::MalformedBuffer {
                record: path.into(),
                byte_len,
                element_count,
            },
            SwapError::ShapeOverflow { shape, .. } => SwapError::ShapeOverflow {
                record: path.into(),
                shape,
            },
            other => other,
        }
    }

    /// The record path carried by this error, if any
    pub fn record(&self) -> Option<&str> {
        match self {
            SwapError::MalformedBuffer { record, .. } | SwapError::ShapeOverflow { record, .. } => {
                Some(record)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SwapError>;
