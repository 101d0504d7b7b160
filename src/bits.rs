//! Conversion between byte slices and one-bit-per-element sequences.
//!
//! Bits of each byte are emitted and consumed MSB first.

use crate::{errors::ConvertError, field::Span, padding::Padding};

pub const BITS_PER_BYTE: usize = 8;

/// Single-bit spans of a byte, highest bit first.
const MSB_FIRST: [Span; BITS_PER_BYTE] = [
    Span::bit(7),
    Span::bit(6),
    Span::bit(5),
    Span::bit(4),
    Span::bit(3),
    Span::bit(2),
    Span::bit(1),
    Span::bit(0),
];

/// Number of zero bits needed to round `bit_len` up to a whole byte. Zero for exact multiples of 8.
pub fn padding_len(bit_len: usize) -> usize {
    (BITS_PER_BYTE - bit_len % BITS_PER_BYTE) % BITS_PER_BYTE
}

/// Expands each byte into 8 elements of 0 or 1, MSB first.
///
/// ```
/// use bitspan::bits::bytes_to_bits;
///
/// assert_eq!(bytes_to_bits(&[0x61]), vec![0, 1, 1, 0, 0, 0, 0, 1]);
/// ```
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * BITS_PER_BYTE);

    for &byte in bytes {
        for span in MSB_FIRST {
            bits.push(span.read(byte as u16) as u8);
        }
    }

    bits
}

/// Packs a sequence of 0/1 elements into bytes, MSB first.
///
/// If `bits.len()` is not a multiple of 8, the sequence is zero-padded on the side chosen by
/// `padding` first. Fails if any element is not 0 or 1.
pub fn bits_to_bytes(bits: &[u8], padding: impl Into<Padding>) -> Result<Vec<u8>, ConvertError> {
    if let Some((position, &value)) = bits.iter().enumerate().find(|&(_, &bit)| bit > 1) {
        log::debug!("rejecting bit sequence: element {position} is {value}");
        return Err(ConvertError::InvalidBitValue { position, value });
    }

    let padding = padding.into();
    let pad = padding_len(bits.len());
    if pad != 0 {
        log::trace!("padding {} bits with {pad} zeros at {padding:?}", bits.len());
    }

    let zeros = std::iter::repeat_n(0u8, pad);
    let padded: Vec<u8> = match padding {
        Padding::Start => zeros.chain(bits.iter().copied()).collect(),
        Padding::End => bits.iter().copied().chain(zeros).collect(),
    };

    let bytes = padded
        .chunks_exact(BITS_PER_BYTE)
        .map(|chunk| {
            chunk
                .iter()
                .zip(MSB_FIRST)
                .fold(0u16, |byte, (&bit, span)| span.write(byte, bit as u16)) as u8
        })
        .collect();

    Ok(bytes)
}
