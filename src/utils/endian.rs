// src/utils/endian.rs
use crate::types::Endianness;
use bytemuck::Pod;

/// Reverse the byte order of every `chunk_size`-byte chunk in `bytes`.
///
/// Trailing bytes that do not fill a whole chunk are left alone; callers
/// validate the length first.
pub fn reverse_chunks(bytes: &mut [u8], chunk_size: usize) {
    if chunk_size <= 1 {
        return;
    }

    for chunk in bytes.chunks_exact_mut(chunk_size) {
        chunk.reverse();
    }
}

/// Re-encode every chunk from `from` order to `to` order in place.
///
/// Returns true if any bytes moved.
pub fn reorder_chunks(bytes: &mut [u8], chunk_size: usize, from: Endianness, to: Endianness) -> bool {
    if from == to || chunk_size <= 1 || bytes.is_empty() {
        return false;
    }

    reverse_chunks(bytes, chunk_size);
    true
}

/// Encode a slice of plain values as bytes in the requested order.
pub fn encode_values<T: Pod>(values: &[T], order: Endianness) -> Vec<u8> {
    let mut bytes = bytemuck::cast_slice::<T, u8>(values).to_vec();
    reorder_chunks(&mut bytes, std::mem::size_of::<T>(), Endianness::native(), order);
    bytes
}
