// src/tensor/mod.rs
//! Serialized tensor payloads and their byte-order conversion
//!
//! - [`TensorShape`] - dimension sizes of a tensor
//! - [`TensorBuffer`] - element type, shape and raw content
//! - [`swap_tensor_content`] - in-place byte order rewrite of a buffer
//!
//! # Example
//!
//! ```
//! use tensor_byteswap::tensor::{swap_tensor_content, SwapOutcome, TensorBuffer};
//! use tensor_byteswap::types::{ElementType, Endianness};
//!
//! let mut buffer = TensorBuffer::new(
//!     ElementType::Float,
//!     [2],
//!     &[0, 0, 0, 1, 0, 0, 0, 2],
//! );
//!
//! let outcome = swap_tensor_content(&mut buffer, Endianness::Big, Endianness::Little).unwrap();
//! assert!(outcome.is_swapped());
//! assert_eq!(buffer.content(), &[1, 0, 0, 0, 2, 0, 0, 0]);
//! ```

mod buffer;
mod shape;
mod swap;

pub use buffer::TensorBuffer;
pub use shape::TensorShape;
pub use swap::{is_swappable, is_swappable_tag, swap_tensor_content, SwapOutcome};
