// src/types.rs
use crate::error::SwapError;
use std::fmt;
use std::str::FromStr;

/// Element type tag of a serialized tensor
///
/// The discriminants are the numeric tags written by the graph serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ElementType {
    Invalid = 0,
    Float = 1,
    Double = 2,
    Int32 = 3,
    UInt8 = 4,
    Int16 = 5,
    Int8 = 6,
    String = 7,
    Complex64 = 8,
    Int64 = 9,
    Bool = 10,
    QInt8 = 11,
    QUInt8 = 12,
    QInt32 = 13,
    BFloat16 = 14,
    QInt16 = 15,
    QUInt16 = 16,
    UInt16 = 17,
    Complex128 = 18,
    Half = 19,
    Resource = 20,
    Variant = 21,
    UInt32 = 22,
    UInt64 = 23,
}

// Short names for the floating point tags
impl ElementType {
    pub const F16: ElementType = ElementType::Half;
    pub const F32: ElementType = ElementType::Float;
    pub const F64: ElementType = ElementType::Double;
}

impl ElementType {
    /// Get the width of one element in bytes, or None for variable-sized and handle types
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            ElementType::Int8
            | ElementType::UInt8
            | ElementType::Bool
            | ElementType::QInt8
            | ElementType::QUInt8 => Some(1),
            ElementType::Int16
            | ElementType::UInt16
            | ElementType::Half
            | ElementType::BFloat16
            | ElementType::QInt16
            | ElementType::QUInt16 => Some(2),
            ElementType::Float | ElementType::Int32 | ElementType::UInt32 | ElementType::QInt32 => {
                Some(4)
            }
            ElementType::Double | ElementType::Int64 | ElementType::UInt64 | ElementType::Complex64 => {
                Some(8)
            }
            ElementType::Complex128 => Some(16),
            ElementType::Invalid
            | ElementType::String
            | ElementType::Resource
            | ElementType::Variant => None,
        }
    }

    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(ElementType::Invalid),
            1 => Some(ElementType::Float),
            2 => Some(ElementType::Double),
            3 => Some(ElementType::Int32),
            4 => Some(ElementType::UInt8),
            5 => Some(ElementType::Int16),
            6 => Some(ElementType::Int8),
            7 => Some(ElementType::String),
            8 => Some(ElementType::Complex64),
            9 => Some(ElementType::Int64),
            10 => Some(ElementType::Bool),
            11 => Some(ElementType::QInt8),
            12 => Some(ElementType::QUInt8),
            13 => Some(ElementType::QInt32),
            14 => Some(ElementType::BFloat16),
            15 => Some(ElementType::QInt16),
            16 => Some(ElementType::QUInt16),
            17 => Some(ElementType::UInt16),
            18 => Some(ElementType::Complex128),
            19 => Some(ElementType::Half),
            20 => Some(ElementType::Resource),
            21 => Some(ElementType::Variant),
            22 => Some(ElementType::UInt32),
            23 => Some(ElementType::UInt64),
            _ => None,
        }
    }

    /// Numeric tag of this type
    pub fn as_u32(&self) -> u32 {
        *self as u32
    }

    /// Check whether buffers of this type are made of multi-byte scalars whose
    /// byte order depends on the producing host
    pub fn is_swappable(&self) -> bool {
        match self {
            ElementType::Half
            | ElementType::Float
            | ElementType::Double
            | ElementType::BFloat16
            | ElementType::Complex64
            | ElementType::Complex128
            | ElementType::UInt16
            | ElementType::UInt32
            | ElementType::UInt64
            | ElementType::Int16
            | ElementType::Int32
            | ElementType::Int64
            | ElementType::QInt16
            | ElementType::QUInt16
            | ElementType::QInt32 => true,
            ElementType::Invalid
            | ElementType::UInt8
            | ElementType::Int8
            | ElementType::String
            | ElementType::Bool
            | ElementType::QInt8
            | ElementType::QUInt8
            | ElementType::Resource
            | ElementType::Variant => false,
        }
    }

    /// Get the name of the element type as a string
    pub fn name(&self) -> &'static str {
        match self {
            ElementType::Invalid => "invalid",
            ElementType::Float => "float32",
            ElementType::Double => "float64",
            ElementType::Int32 => "int32",
            ElementType::UInt8 => "uint8",
            ElementType::Int16 => "int16",
            ElementType::Int8 => "int8",
            ElementType::String => "string",
            ElementType::Complex64 => "complex64",
            ElementType::Int64 => "int64",
            ElementType::Bool => "bool",
            ElementType::QInt8 => "qint8",
            ElementType::QUInt8 => "quint8",
            ElementType::QInt32 => "qint32",
            ElementType::BFloat16 => "bfloat16",
            ElementType::QInt16 => "qint16",
            ElementType::QUInt16 => "quint16",
            ElementType::UInt16 => "uint16",
            ElementType::Complex128 => "complex128",
            ElementType::Half => "float16",
            ElementType::Resource => "resource",
            ElementType::Variant => "variant",
            ElementType::UInt32 => "uint32",
            ElementType::UInt64 => "uint64",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for ElementType {
    type Error = SwapError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        ElementType::from_u32(value).ok_or(SwapError::InvalidElementType(value))
    }
}

/// Byte order of multi-byte scalars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    Big,
    Little,
}

impl Endianness {
    /// Byte order of the host this code was compiled for
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            Endianness::Big
        } else {
            Endianness::Little
        }
    }

    pub fn is_native(&self) -> bool {
        *self == Self::native()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Endianness::Big => "big",
            Endianness::Little => "little",
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Endianness {
    type Err = SwapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "big" | "be" => Ok(Endianness::Big),
            "little" | "le" => Ok(Endianness::Little),
            _ => Err(SwapError::InvalidEndianness(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TAGS: std::ops::RangeInclusive<u32> = 0..=23;

    #[test]
    fn test_tag_roundtrip() {
        for tag in ALL_TAGS {
            let ty = ElementType::from_u32(tag).unwrap();
            assert_eq!(ty.as_u32(), tag);
        }
        assert_eq!(ElementType::from_u32(24), None);
        assert_eq!(ElementType::from_u32(101), None);
    }

    #[test]
    fn test_try_from_unknown_tag() {
        assert!(matches!(
            ElementType::try_from(200u32),
            Err(SwapError::InvalidElementType(200))
        ));
        assert_eq!(ElementType::try_from(19u32).unwrap(), ElementType::F16);
    }

    #[test]
    fn test_swappable_types_are_multi_byte() {
        for tag in ALL_TAGS {
            let ty = ElementType::from_u32(tag).unwrap();
            if ty.is_swappable() {
                assert!(ty.fixed_size().unwrap() >= 2, "{} should be multi-byte", ty);
            }
        }
    }

    #[test]
    fn test_swappable_count() {
        let count = ALL_TAGS
            .filter_map(ElementType::from_u32)
            .filter(|ty| ty.is_swappable())
            .count();
        assert_eq!(count, 15);
    }

    #[test]
    fn test_single_byte_types_not_swappable() {
        for ty in [
            ElementType::Bool,
            ElementType::Int8,
            ElementType::UInt8,
            ElementType::QInt8,
            ElementType::QUInt8,
        ] {
            assert_eq!(ty.fixed_size(), Some(1));
            assert!(!ty.is_swappable());
        }
        assert!(!ElementType::String.is_swappable());
        assert!(!ElementType::Resource.is_swappable());
        assert!(!ElementType::Variant.is_swappable());
    }

    #[test]
    fn test_endianness_parse() {
        assert_eq!("big".parse::<Endianness>().unwrap(), Endianness::Big);
        assert_eq!("Little".parse::<Endianness>().unwrap(), Endianness::Little);
        assert_eq!(" LE ".parse::<Endianness>().unwrap(), Endianness::Little);
        assert!("middle".parse::<Endianness>().is_err());
        assert_eq!(Endianness::Big.to_string(), "big");
    }

    #[test]
    fn test_native_endianness() {
        assert!(Endianness::native().is_native());
        #[cfg(target_endian = "little")]
        assert_eq!(Endianness::native(), Endianness::Little);
    }
}
