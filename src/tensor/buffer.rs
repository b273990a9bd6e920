// src/tensor/buffer.rs
use crate::error::{Result, SwapError};
use crate::tensor::swap::{swap_tensor_content, SwapOutcome};
use crate::tensor::TensorShape;
use crate::types::{ElementType, Endianness};
use crate::utils::encode_values;
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use bytes::{Bytes, BytesMut};
use bytemuck::Pod;

/// Raw content of a serialized tensor
///
/// The buffer owns its bytes exclusively; swapping rewrites them in place.
///
/// # Example
///
/// ```
/// use tensor_byteswap::tensor::TensorBuffer;
/// use tensor_byteswap::types::{ElementType, Endianness};
///
/// let mut buffer = TensorBuffer::from_values(
///     ElementType::Int32,
///     [3],
///     &[1i32, 2, 3],
///     Endianness::Big,
/// ).unwrap();
///
/// buffer.byte_swap(Endianness::Big, Endianness::Little).unwrap();
/// assert_eq!(buffer.read_i32s(Endianness::Little).unwrap(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TensorBuffer {
    element_type: ElementType,
    shape: TensorShape,
    content: BytesMut,
}

impl TensorBuffer {
    /// Create a buffer from already-encoded bytes
    pub fn new(element_type: ElementType, shape: impl Into<TensorShape>, content: &[u8]) -> Self {
        TensorBuffer {
            element_type,
            shape: shape.into(),
            content: BytesMut::from(content),
        }
    }

    /// Create a buffer with no content
    pub fn empty(element_type: ElementType, shape: impl Into<TensorShape>) -> Self {
        TensorBuffer {
            element_type,
            shape: shape.into(),
            content: BytesMut::new(),
        }
    }

    /// Encode `values` in `order` as the content of a new buffer
    pub fn from_values<T: Pod>(
        element_type: ElementType,
        shape: impl Into<TensorShape>,
        values: &[T],
        order: Endianness,
    ) -> Result<Self> {
        let width = std::mem::size_of::<T>();
        if element_type.fixed_size() != Some(width) {
            return Err(SwapError::TypeMismatch {
                expected: element_type.to_string(),
                found: format!("{}-byte values", width),
            });
        }

        let content = encode_values(values, order);
        Ok(TensorBuffer::new(element_type, shape, &content))
    }

    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    pub fn shape(&self) -> &TensorShape {
        &self.shape
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut [u8] {
        &mut self.content
    }

    pub fn byte_len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Hand the content over for serialization
    pub fn into_content(self) -> Bytes {
        self.content.freeze()
    }

    /// Content length implied by the shape and the element width
    pub fn expected_byte_len(&self) -> Option<usize> {
        let width = self.element_type.fixed_size()? as u64;
        let count = self.shape.num_elements()?;
        usize::try_from(count.checked_mul(width)?).ok()
    }

    /// Check that a non-empty buffer holds exactly one element width per element
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }

        match self.expected_byte_len() {
            Some(expected) if expected != self.byte_len() => Err(SwapError::LengthMismatch {
                expected,
                found: self.byte_len(),
            }),
            _ => Ok(()),
        }
    }

    /// Rewrite the content from `from` byte order to `to` byte order
    pub fn byte_swap(&mut self, from: Endianness, to: Endianness) -> Result<SwapOutcome> {
        swap_tensor_content(self, from, to)
    }

    pub fn read_u16s(&self, order: Endianness) -> Result<Vec<u16>> {
        self.read_with(&[ElementType::UInt16], order, BigEndian::read_u16_into, LittleEndian::read_u16_into)
    }

    pub fn read_i32s(&self, order: Endianness) -> Result<Vec<i32>> {
        self.read_with(&[ElementType::Int32, ElementType::QInt32], order, BigEndian::read_i32_into, LittleEndian::read_i32_into)
    }

    pub fn read_i64s(&self, order: Endianness) -> Result<Vec<i64>> {
        self.read_with(&[ElementType::Int64], order, BigEndian::read_i64_into, LittleEndian::read_i64_into)
    }

    pub fn read_f32s(&self, order: Endianness) -> Result<Vec<f32>> {
        self.read_with(&[ElementType::Float], order, BigEndian::read_f32_into, LittleEndian::read_f32_into)
    }

    pub fn read_f64s(&self, order: Endianness) -> Result<Vec<f64>> {
        self.read_with(&[ElementType::Double], order, BigEndian::read_f64_into, LittleEndian::read_f64_into)
    }

    fn read_with<T: Copy + Default>(
        &self,
        accepted: &[ElementType],
        order: Endianness,
        read_be: fn(&[u8], &mut [T]),
        read_le: fn(&[u8], &mut [T]),
    ) -> Result<Vec<T>> {
        if !accepted.contains(&self.element_type) {
            return Err(SwapError::TypeMismatch {
                expected: accepted[0].to_string(),
                found: self.element_type.to_string(),
            });
        }

        let width = std::mem::size_of::<T>();
        if self.byte_len() % width != 0 {
            return Err(SwapError::LengthMismatch {
                expected: (self.byte_len() / width + 1) * width,
                found: self.byte_len(),
            });
        }

        let mut values = vec![T::default(); self.byte_len() / width];
        match order {
            Endianness::Big => read_be(&self.content, &mut values),
            Endianness::Little => read_le(&self.content, &mut values),
        }
        Ok(values)
    }
}
