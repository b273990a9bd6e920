// src/tensor/swap.rs
use crate::error::{Result, SwapError};
use crate::tensor::TensorBuffer;
use crate::types::{ElementType, Endianness};
use crate::utils::reorder_chunks;

/// What a byte swap did to a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    /// Every chunk was reversed
    Swapped { chunk_size: usize, chunks: u64 },
    /// Source and target order match, bytes untouched
    SameOrder,
    /// Chunks are one byte wide, so there is no order to change
    SingleByteChunks { chunks: u64 },
    /// Element type has no byte order
    NotSwappable,
    /// No bytes or no elements
    Empty,
}

impl SwapOutcome {
    pub fn is_swapped(&self) -> bool {
        matches!(self, SwapOutcome::Swapped { .. })
    }
}

/// Whether buffers of type `t` carry a host byte order.
pub fn is_swappable(t: ElementType) -> bool {
    t.is_swappable()
}

/// Classify a raw element type tag; unknown tags are never swappable.
pub fn is_swappable_tag(tag: u32) -> bool {
    ElementType::from_u32(tag).map_or(false, |t| t.is_swappable())
}

/// Rewrite the content of `buffer` from `from` byte order to `to` byte order.
///
/// The chunk size is derived from the content length and the element count of
/// the shape, and must divide exactly. A malformed buffer is rejected before
/// any byte is touched, even when `from == to`.
pub fn swap_tensor_content(
    buffer: &mut TensorBuffer,
    from: Endianness,
    to: Endianness,
) -> Result<SwapOutcome> {
    if !buffer.element_type().is_swappable() {
        return Ok(SwapOutcome::NotSwappable);
    }
    if buffer.is_empty() {
        return Ok(SwapOutcome::Empty);
    }

    let element_count = buffer.shape().num_elements().ok_or_else(|| SwapError::ShapeOverflow {
        record: SwapError::DETACHED_RECORD.to_string(),
        shape: buffer.shape().to_string(),
    })?;
    if element_count == 0 {
        return Ok(SwapOutcome::Empty);
    }

    let chunk_size = chunk_size(buffer.byte_len(), element_count)?;
    if let Some(width) = buffer.element_type().fixed_size() {
        if width != chunk_size {
            log::warn!(
                "{} buffer of shape {} splits into {}-byte chunks, declared width is {}",
                buffer.element_type(),
                buffer.shape(),
                chunk_size,
                width
            );
        }
    }

    if reorder_chunks(buffer.content_mut(), chunk_size, from, to) {
        Ok(SwapOutcome::Swapped { chunk_size, chunks: element_count })
    } else if from == to {
        Ok(SwapOutcome::SameOrder)
    } else {
        Ok(SwapOutcome::SingleByteChunks { chunks: element_count })
    }
}

fn chunk_size(byte_len: usize, element_count: u64) -> Result<usize> {
    let malformed = || SwapError::MalformedBuffer {
        record: SwapError::DETACHED_RECORD.to_string(),
        byte_len,
        element_count,
    };

    let len = byte_len as u64;
    if len % element_count != 0 {
        return Err(malformed());
    }
    usize::try_from(len / element_count).map_err(|_| malformed())
}
