//! # Binary String Codec
//!
//! Converts byte buffers and fixed-width values into strings of `'0'` and
//! `'1'` characters, and back.
//!
//! This library is organized into two modules:
//! - `utils`: Error handling and single-character bit helpers
//! - `codec`: The conversions themselves (bytes, values, parsed results)
//!
//! Two bit orders are in use. Byte buffers map each byte to eight
//! characters, MSB first, in input order. Values are read as one number
//! whose last character is the least significant bit.

// Re-export commonly used types at the crate root
pub use utils::error::{BitStringError, Result};

pub mod utils {
    pub mod bits;
    pub mod error;
}

pub mod codec;

// Public API exports
pub use codec::bytes::{from_bytes, parse, try_parse};
pub use codec::int_kind::{IntKind, IntValue, ParseTarget, try_parse_kind, try_parse_value};
pub use codec::parsed::Parsed;
pub use codec::value::{FixedWidth, from_value};
pub use utils::bits::parse_bit_char;
