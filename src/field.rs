//! Mask construction and bounded read/write of a contiguous bit span in a `u16`.
//!
//! Bits are indexed from the right: bit 0 is the least significant bit of the word.
//! A span covers `size` bits starting at `index` and extending toward the high bits.

use std::fmt;

use crate::errors::SpanError;

/// Width of the word every span lives in.
pub const WORD_BITS: u8 = 16;

/// A validated `(index, size)` pair with `index < 16` and `index + size <= 16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    index: u8,
    size: u8,
}

impl Span {
    /// Validates a span. Fails with [SpanError::InvalidRange] if it leaves the word.
    pub fn new(index: u8, size: u8) -> Result<Self, SpanError> {
        let fits = index < WORD_BITS
            && index
                .checked_add(size)
                .is_some_and(|end| end <= WORD_BITS);

        if !fits {
            log::debug!("rejecting bit span index={index} size={size}");
            return Err(SpanError::InvalidRange { index, size });
        }

        Ok(Span { index, size })
    }

    /// The whole word.
    pub const fn full() -> Self {
        Span {
            index: 0,
            size: WORD_BITS,
        }
    }

    /// Single-bit span. Callers guarantee `index < 16`.
    pub(crate) const fn bit(index: u8) -> Self {
        Span { index, size: 1 }
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// One past the highest bit covered by the span.
    pub fn end(&self) -> u8 {
        self.index + self.size
    }

    /// `size` one-bits starting at `index`, zero elsewhere.
    pub fn mask(&self) -> u16 {
        let ones = (1u32 << self.size) - 1;
        (ones << self.index) as u16
    }

    /// Returns the span's value right-aligned; only the low `size` bits can be set.
    pub fn read(&self, data: u16) -> u16 {
        (data & self.mask()) >> self.index
    }

    /// Returns `data` with the span replaced by the low `size` bits of `value`.
    ///
    /// Bits of `value` above `size` are discarded, so nothing outside the span changes.
    pub fn write(&self, data: u16, value: u16) -> u16 {
        let mask = self.mask();
        let shifted = ((value as u32) << self.index) as u16;
        (data & !mask) | (shifted & mask)
    }
}

impl TryFrom<(u8, u8)> for Span {
    type Error = SpanError;

    fn try_from((index, size): (u8, u8)) -> Result<Self, Self::Error> {
        Span::new(index, size)
    }
}

#[cfg(feature = "serde")]
impl TryFrom<crate::serde::SpanDef> for Span {
    type Error = SpanError;

    fn try_from(value: crate::serde::SpanDef) -> Result<Self, Self::Error> {
        Span::new(value.index, value.size)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{})", self.index, self.end())
    }
}

/// Builds a mask of `size` consecutive one-bits starting at bit `index`.
///
/// ```
/// use bitspan::field::get_mask;
///
/// assert_eq!(get_mask(2, 3).unwrap(), 0b0001_1100);
/// ```
pub fn get_mask(index: u8, size: u8) -> Result<u16, SpanError> {
    Ok(Span::new(index, size)?.mask())
}

/// Reads the `size`-bit value stored at bit `index` of `data`, right-aligned.
pub fn read_from(data: u16, index: u8, size: u8) -> Result<u16, SpanError> {
    Ok(Span::new(index, size)?.read(data))
}

/// Writes the low `size` bits of `value` into `data` at bit `index` and returns the result.
pub fn write_to(data: u16, index: u8, size: u8, value: u16) -> Result<u16, SpanError> {
    Ok(Span::new(index, size)?.write(data, value))
}
