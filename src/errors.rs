//! Error types for span validation and bit-sequence conversion.

use thiserror::Error;

/// Errors produced when a bit span does not fit inside a 16-bit word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpanError {
    /// `index` is past bit 15, or `index + size` exceeds 16.
    #[error("bit span at index {index} with size {size} does not fit in a 16-bit word")]
    InvalidRange { index: u8, size: u8 },
}

/// Errors produced when packing a bit sequence into bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// An element of the bit sequence is neither 0 nor 1.
    #[error("element {position} of the bit sequence is {value}, expected 0 or 1")]
    InvalidBitValue { position: usize, value: u8 },
}
