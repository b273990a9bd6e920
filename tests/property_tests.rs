// tests/property_tests.rs
use proptest::prelude::*;
use tensor_byteswap::*;

const SWAPPABLE: [ElementType; 15] = [
    ElementType::Half,
    ElementType::Float,
    ElementType::Double,
    ElementType::BFloat16,
    ElementType::Complex64,
    ElementType::Complex128,
    ElementType::UInt16,
    ElementType::UInt32,
    ElementType::UInt64,
    ElementType::Int16,
    ElementType::Int32,
    ElementType::Int64,
    ElementType::QInt16,
    ElementType::QUInt16,
    ElementType::QInt32,
];

const NOT_SWAPPABLE: [ElementType; 9] = [
    ElementType::Invalid,
    ElementType::UInt8,
    ElementType::Int8,
    ElementType::String,
    ElementType::Bool,
    ElementType::QInt8,
    ElementType::QUInt8,
    ElementType::Resource,
    ElementType::Variant,
];

fn endianness() -> impl Strategy<Value = Endianness> {
    prop_oneof![Just(Endianness::Big), Just(Endianness::Little)]
}

/// A well-formed buffer of a swappable type: shape `[rows, cols]` and
/// exactly `rows * cols * width` bytes.
fn swappable_buffer() -> impl Strategy<Value = TensorBuffer> {
    (proptest::sample::select(SWAPPABLE.to_vec()), 1u64..6, 1u64..6).prop_flat_map(|(ty, rows, cols)| {
        let len = (rows * cols) as usize * ty.fixed_size().unwrap();
        proptest::collection::vec(any::<u8>(), len)
            .prop_map(move |bytes| TensorBuffer::new(ty, [rows, cols], &bytes))
    })
}

proptest! {
    #[test]
    fn double_swap_restores_bytes(buffer in swappable_buffer(), a in endianness()) {
        let b = match a {
            Endianness::Big => Endianness::Little,
            Endianness::Little => Endianness::Big,
        };
        let mut swapped = buffer.clone();
        swap_tensor_content(&mut swapped, a, b).unwrap();
        swap_tensor_content(&mut swapped, b, a).unwrap();
        prop_assert_eq!(swapped, buffer);
    }

    #[test]
    fn same_order_is_noop(buffer in swappable_buffer(), order in endianness()) {
        let mut swapped = buffer.clone();
        let outcome = swap_tensor_content(&mut swapped, order, order).unwrap();
        prop_assert_eq!(outcome, SwapOutcome::SameOrder);
        prop_assert_eq!(swapped, buffer);
    }

    #[test]
    fn non_swappable_types_untouched(
        ty in proptest::sample::select(NOT_SWAPPABLE.to_vec()),
        bytes in proptest::collection::vec(any::<u8>(), 0..64),
        from in endianness(),
        to in endianness(),
    ) {
        let mut buffer = TensorBuffer::new(ty, [bytes.len() as u64], &bytes);
        let outcome = swap_tensor_content(&mut buffer, from, to).unwrap();
        prop_assert_eq!(outcome, SwapOutcome::NotSwappable);
        prop_assert_eq!(buffer.content(), &bytes[..]);
    }

    #[test]
    fn swap_keeps_length_and_reverses_each_element(buffer in swappable_buffer()) {
        let width = buffer.element_type().fixed_size().unwrap();
        let mut swapped = buffer.clone();
        swap_tensor_content(&mut swapped, Endianness::Big, Endianness::Little).unwrap();

        prop_assert_eq!(swapped.byte_len(), buffer.byte_len());
        for (before, after) in buffer.content().chunks(width).zip(swapped.content().chunks(width)) {
            let mut reversed = before.to_vec();
            reversed.reverse();
            prop_assert_eq!(after, &reversed[..]);
        }
    }

    #[test]
    fn zero_dimension_is_noop(
        ty in proptest::sample::select(SWAPPABLE.to_vec()),
        bytes in proptest::collection::vec(any::<u8>(), 0..32),
    ) {
        let mut buffer = TensorBuffer::new(ty, [4, 0, 2], &bytes);
        let outcome = swap_tensor_content(&mut buffer, Endianness::Little, Endianness::Big).unwrap();
        prop_assert_eq!(outcome, SwapOutcome::Empty);
        prop_assert_eq!(buffer.content(), &bytes[..]);
    }

    #[test]
    fn indivisible_length_is_rejected(
        ty in proptest::sample::select(SWAPPABLE.to_vec()),
        count in 2u64..16,
        extra in 1usize..16,
    ) {
        let width = ty.fixed_size().unwrap();
        let len = count as usize * width + extra;
        prop_assume!(len % count as usize != 0);

        let bytes: Vec<u8> = (0..len).map(|i| i as u8).collect();
        let mut buffer = TensorBuffer::new(ty, [count], &bytes);
        let err = swap_tensor_content(&mut buffer, Endianness::Big, Endianness::Little).unwrap_err();
        let is_malformed = matches!(err, SwapError::MalformedBuffer { .. });
        prop_assert!(is_malformed);
        prop_assert_eq!(buffer.content(), &bytes[..]);
    }

    #[test]
    fn unknown_tags_never_swappable(tag in 24u32..) {
        prop_assert!(!is_swappable_tag(tag));
    }

    #[test]
    fn i32_values_survive_reencoding(values in proptest::collection::vec(any::<i32>(), 0..32)) {
        let mut buffer = TensorBuffer::from_values(
            ElementType::Int32,
            [values.len() as u64],
            &values,
            Endianness::Big,
        ).unwrap();
        swap_tensor_content(&mut buffer, Endianness::Big, Endianness::Little).unwrap();
        prop_assert_eq!(buffer.read_i32s(Endianness::Little).unwrap(), values);
    }
}
