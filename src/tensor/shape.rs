// src/tensor/shape.rs
use smallvec::SmallVec;
use std::fmt;

/// Ordered dimension sizes of a tensor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TensorShape {
    dims: SmallVec<[u64; 4]>,
}

impl TensorShape {
    pub fn new(dims: impl IntoIterator<Item = u64>) -> Self {
        TensorShape {
            dims: dims.into_iter().collect(),
        }
    }

    /// Rank-0 shape holding exactly one element
    pub fn scalar() -> Self {
        TensorShape::default()
    }

    pub fn dims(&self) -> &[u64] {
        &self.dims
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    pub fn is_scalar(&self) -> bool {
        self.dims.is_empty()
    }

    /// Product of all dimensions, or None if it overflows
    ///
    /// A scalar has one element; any zero dimension gives zero elements.
    pub fn num_elements(&self) -> Option<u64> {
        self.dims.iter().try_fold(1u64, |acc, &dim| acc.checked_mul(dim))
    }
}

impl fmt::Display for TensorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, dim) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", dim)?;
        }
        write!(f, "]")
    }
}

impl From<Vec<u64>> for TensorShape {
    fn from(dims: Vec<u64>) -> Self {
        TensorShape::new(dims)
    }
}

impl From<&[u64]> for TensorShape {
    fn from(dims: &[u64]) -> Self {
        TensorShape::new(dims.iter().copied())
    }
}

impl<const N: usize> From<[u64; N]> for TensorShape {
    fn from(dims: [u64; N]) -> Self {
        TensorShape::new(dims)
    }
}
