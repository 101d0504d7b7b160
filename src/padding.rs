//! Where zero bits go when a bit sequence is rounded up to a whole byte.

/// Side of a bit sequence that receives padding zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Padding {
    /// Zeros are prepended and fill the high bits of the first byte.
    Start,
    /// Zeros are appended and fill the low bits of the last byte.
    End,
}

impl Default for Padding {
    fn default() -> Self {
        Padding::Start
    }
}

/// `true` means pad at the start.
impl From<bool> for Padding {
    fn from(pad_start: bool) -> Self {
        if pad_start {
            Padding::Start
        } else {
            Padding::End
        }
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::PaddingDef> for Padding {
    fn from(value: crate::serde::PaddingDef) -> Self {
        match value {
            crate::serde::PaddingDef::Start => Padding::Start,
            crate::serde::PaddingDef::End => Padding::End,
        }
    }
}
