//! Serializable descriptions of spans and padding.
//!
//! Useful when span layouts are kept in configuration files. A [SpanDef] is not
//! validated until it is converted into a [Span].

use serde::{Deserialize, Serialize};

use crate::{field::Span, padding::Padding};

/// A bit span as written in a config file.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct SpanDef {
    /// Starting bit, counted from the least significant bit.
    pub index: u8,
    /// Number of bits in the span.
    pub size: u8,
}

impl From<Span> for SpanDef {
    fn from(value: Span) -> Self {
        SpanDef {
            index: value.index(),
            size: value.size(),
        }
    }
}

/// Padding side as written in a config file.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDef {
    #[default]
    /// Zeros before the given bits.
    Start,
    /// Zeros after the given bits.
    End,
}

impl From<Padding> for PaddingDef {
    fn from(value: Padding) -> Self {
        match value {
            Padding::Start => PaddingDef::Start,
            Padding::End => PaddingDef::End,
        }
    }
}
