//! # bitspan
//!
//! Small helpers for bit-level manipulation.
//!
//! [field] reads and writes contiguous bit spans inside a `u16`, indexing bits from the
//! right (bit 0 is the least significant). [bits] converts byte slices to sequences of
//! single bits and back, zero-padding short sequences at the start or the end.
//!
//! ## Example
//!
//! ```
//! use bitspan::bits::{bits_to_bytes, bytes_to_bits};
//! use bitspan::field::{read_from, write_to};
//! use bitspan::padding::Padding;
//!
//! let word = write_to(0, 4, 3, 0b101).unwrap();
//! assert_eq!(word, 0b0101_0000);
//! assert_eq!(read_from(word, 4, 3).unwrap(), 0b101);
//!
//! let bits = bytes_to_bits(&[0x61, 0x62]);
//! assert_eq!(bits_to_bytes(&bits[1..], Padding::Start).unwrap(), vec![0x61, 0x62]);
//! ```

pub mod bits;
pub mod errors;
pub mod field;
pub mod padding;
#[cfg(feature = "serde")]
pub mod serde;
