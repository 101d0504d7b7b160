use bitspan::{
    bits::{bits_to_bytes, bytes_to_bits},
    errors::{ConvertError, SpanError},
    field::{get_mask, read_from, write_to},
    padding::Padding,
};
use proptest::prelude::*;

/// Any `(index, size)` that fits in a 16-bit word.
fn valid_span() -> impl Strategy<Value = (u8, u8)> {
    (0u8..16).prop_flat_map(|index| (Just(index), 0u8..=(16 - index)))
}

fn padding() -> impl Strategy<Value = Padding> {
    prop_oneof![Just(Padding::Start), Just(Padding::End)]
}

proptest! {
    #[test]
    fn mask_has_contiguous_ones_from_index((index, size) in valid_span()) {
        let mask = get_mask(index, size).unwrap();

        prop_assert_eq!(mask.count_ones(), size as u32);
        if size > 0 {
            prop_assert_eq!(mask.trailing_zeros(), index as u32);
            prop_assert_eq!(16 - mask.leading_zeros(), (index + size) as u32);
        } else {
            prop_assert_eq!(mask, 0);
        }
    }

    #[test]
    fn read_after_write_returns_low_bits_of_value(
        data in any::<u16>(),
        (index, size) in valid_span(),
        value in any::<u16>(),
    ) {
        let written = write_to(data, index, size, value).unwrap();
        let expected = (value as u32 & ((1u32 << size) - 1)) as u16;

        prop_assert_eq!(read_from(written, index, size).unwrap(), expected);
    }

    #[test]
    fn write_leaves_outside_bits_alone(
        data in any::<u16>(),
        (index, size) in valid_span(),
        value in any::<u16>(),
    ) {
        let mask = get_mask(index, size).unwrap();
        let written = write_to(data, index, size, value).unwrap();

        prop_assert_eq!(written & !mask, data & !mask);
    }

    #[test]
    fn writing_read_value_is_identity(data in any::<u16>(), (index, size) in valid_span()) {
        let value = read_from(data, index, size).unwrap();
        prop_assert_eq!(write_to(data, index, size, value).unwrap(), data);
    }

    #[test]
    fn read_fits_in_size_bits(data in any::<u16>(), (index, size) in valid_span()) {
        let value = read_from(data, index, size).unwrap() as u32;
        prop_assert!(value < (1u32 << size));
    }

    #[test]
    fn spans_past_the_word_are_rejected(index in 0u8..32, size in 0u8..32) {
        prop_assume!(index >= 16 || index + size > 16);

        let err = SpanError::InvalidRange { index, size };
        prop_assert_eq!(get_mask(index, size), Err(err));
        prop_assert_eq!(read_from(0, index, size), Err(err));
        prop_assert_eq!(write_to(0, index, size, 0), Err(err));
    }

    #[test]
    fn bytes_expand_to_eight_binary_elements(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let bits = bytes_to_bits(&bytes);

        prop_assert_eq!(bits.len(), bytes.len() * 8);
        prop_assert!(bits.iter().all(|&bit| bit <= 1));
    }

    #[test]
    fn bytes_survive_round_trip(
        bytes in proptest::collection::vec(any::<u8>(), 0..64),
        padding in padding(),
    ) {
        let bits = bytes_to_bits(&bytes);
        prop_assert_eq!(bits_to_bytes(&bits, padding).unwrap(), bytes);
    }

    #[test]
    fn packed_length_rounds_up(
        bits in proptest::collection::vec(0u8..=1, 0..200),
        padding in padding(),
    ) {
        let bytes = bits_to_bytes(&bits, padding).unwrap();
        prop_assert_eq!(bytes.len(), bits.len().div_ceil(8));
    }

    #[test]
    fn padding_side_places_zeros(bits in proptest::collection::vec(0u8..=1, 1..200)) {
        let pad = (8 - bits.len() % 8) % 8;

        let start = bytes_to_bits(&bits_to_bytes(&bits, Padding::Start).unwrap());
        prop_assert!(start[..pad].iter().all(|&bit| bit == 0));
        prop_assert_eq!(&start[pad..], &bits[..]);

        let end = bytes_to_bits(&bits_to_bytes(&bits, Padding::End).unwrap());
        prop_assert_eq!(&end[..bits.len()], &bits[..]);
        prop_assert!(end[bits.len()..].iter().all(|&bit| bit == 0));
    }

    #[test]
    fn non_binary_element_is_reported(
        mut bits in proptest::collection::vec(0u8..=1, 1..64),
        position in any::<prop::sample::Index>(),
        value in 2u8..=u8::MAX,
    ) {
        let position = position.index(bits.len());
        bits[position] = value;

        prop_assert_eq!(
            bits_to_bytes(&bits, Padding::End),
            Err(ConvertError::InvalidBitValue { position, value })
        );
    }
}

#[test]
fn whole_bytes_ignore_padding_side() {
    let bits = bytes_to_bits(&[0xA5, 0x3C]);

    assert_eq!(
        bits_to_bytes(&bits, Padding::Start).unwrap(),
        bits_to_bytes(&bits, Padding::End).unwrap()
    );
}
