//! Bit-string -> fixed-width value parsing.
//!
//! Unlike [`crate::parse`], which packs each group of eight characters
//! MSB first into its own byte, value parsing treats the whole string as
//! one number: the last character is the least significant bit.

use log::debug;

use crate::codec::parsed::Parsed;
use crate::utils::bits::parse_bit_char;
use crate::utils::error::{BitStringError, Result};

/// Integer kinds a bit-string can be parsed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntKind {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
}

impl IntKind {
    /// Selects the kind for a width and signedness.
    ///
    /// Widths above 64 bits do not fit the parse scratch and fail with
    /// [`BitStringError::WidthTooLarge`]; other widths besides 8, 16, 32
    /// and 64 fail with [`BitStringError::UnsupportedWidth`].
    pub fn new(bits: u32, signed: bool) -> Result<Self> {
        let kind = match (bits, signed) {
            (8, false) => IntKind::U8,
            (8, true) => IntKind::I8,
            (16, false) => IntKind::U16,
            (16, true) => IntKind::I16,
            (32, false) => IntKind::U32,
            (32, true) => IntKind::I32,
            (64, false) => IntKind::U64,
            (64, true) => IntKind::I64,
            (bits, _) if bits > 64 => {
                debug!("Rejecting {}-bit parse target", bits);
                return Err(BitStringError::WidthTooLarge(bits));
            }
            (bits, _) => return Err(BitStringError::UnsupportedWidth(bits)),
        };
        Ok(kind)
    }

    pub fn bits(self) -> u32 {
        match self {
            IntKind::U8 | IntKind::I8 => 8,
            IntKind::U16 | IntKind::I16 => 16,
            IntKind::U32 | IntKind::I32 => 32,
            IntKind::U64 | IntKind::I64 => 64,
        }
    }

    pub fn is_signed(self) -> bool {
        matches!(
            self,
            IntKind::I8 | IntKind::I16 | IntKind::I32 | IntKind::I64
        )
    }
}

/// A parsed integer, tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntValue {
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
}

impl IntValue {
    /// Copies the low `kind.bits()` bits of `bits` into a value of `kind`.
    pub fn from_bits(kind: IntKind, bits: u64) -> Self {
        match kind {
            IntKind::U8 => IntValue::U8(bits as u8),
            IntKind::I8 => IntValue::I8(bits as u8 as i8),
            IntKind::U16 => IntValue::U16(bits as u16),
            IntKind::I16 => IntValue::I16(bits as u16 as i16),
            IntKind::U32 => IntValue::U32(bits as u32),
            IntKind::I32 => IntValue::I32(bits as u32 as i32),
            IntKind::U64 => IntValue::U64(bits),
            IntKind::I64 => IntValue::I64(bits as i64),
        }
    }

    pub fn zero(kind: IntKind) -> Self {
        Self::from_bits(kind, 0)
    }

    pub fn kind(self) -> IntKind {
        match self {
            IntValue::U8(_) => IntKind::U8,
            IntValue::I8(_) => IntKind::I8,
            IntValue::U16(_) => IntKind::U16,
            IntValue::I16(_) => IntKind::I16,
            IntValue::U32(_) => IntKind::U32,
            IntValue::I32(_) => IntKind::I32,
            IntValue::U64(_) => IntKind::U64,
            IntValue::I64(_) => IntKind::I64,
        }
    }

    /// Bit pattern, zero-extended to 64 bits.
    pub fn to_bits(self) -> u64 {
        match self {
            IntValue::U8(v) => u64::from(v),
            IntValue::I8(v) => u64::from(v as u8),
            IntValue::U16(v) => u64::from(v),
            IntValue::I16(v) => u64::from(v as u16),
            IntValue::U32(v) => u64::from(v),
            IntValue::I32(v) => u64::from(v as u32),
            IntValue::U64(v) => v,
            IntValue::I64(v) => v as u64,
        }
    }
}

/// Types a bit-string can be parsed into. Only implemented for types of
/// at most 64 bits.
pub trait ParseTarget: Sized {
    const KIND: IntKind;

    /// Rebuilds the value from the bit pattern of an [`IntValue`] of
    /// kind [`Self::KIND`].
    fn from_int_value(value: IntValue) -> Self;
}

macro_rules! impl_parse_target {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl ParseTarget for $ty {
                const KIND: IntKind = IntKind::$kind;

                fn from_int_value(value: IntValue) -> Self {
                    value.to_bits() as $ty
                }
            }
        )*
    };
}

impl_parse_target!(
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
);

#[cfg(target_pointer_width = "64")]
impl_parse_target!(usize => U64, isize => I64);

#[cfg(target_pointer_width = "32")]
impl_parse_target!(usize => U32, isize => I32);

#[cfg(target_pointer_width = "16")]
impl_parse_target!(usize => U16, isize => I16);

// Any non-zero low byte reads as true
impl ParseTarget for bool {
    const KIND: IntKind = IntKind::U8;

    fn from_int_value(value: IntValue) -> Self {
        value.to_bits() as u8 != 0
    }
}

impl ParseTarget for f32 {
    const KIND: IntKind = IntKind::U32;

    fn from_int_value(value: IntValue) -> Self {
        f32::from_bits(value.to_bits() as u32)
    }
}

impl ParseTarget for f64 {
    const KIND: IntKind = IntKind::U64;

    fn from_int_value(value: IntValue) -> Self {
        f64::from_bits(value.to_bits())
    }
}

/// Parses a bit-string into an integer of the given kind.
///
/// Each character is shifted in from the right of a 64-bit scratch, so
/// the last character becomes bit 0 and strings longer than 64
/// characters lose their leading bits. The scratch is then narrowed to
/// `kind`. On the first invalid character the value is zero.
pub fn try_parse_kind(bin_str: &str, kind: IntKind) -> Parsed<IntValue> {
    let mut scratch: u64 = 0;
    for (offset, c) in bin_str.chars().enumerate() {
        scratch <<= 1;
        match parse_bit_char(c) {
            Some(bit) => scratch |= u64::from(bit),
            None => {
                debug!("Invalid bit character {:?} at offset {}", c, offset);
                return Parsed::failed(IntValue::zero(kind), c);
            }
        }
    }
    Parsed::ok(IntValue::from_bits(kind, scratch))
}

/// Parses a bit-string into a value of type `T`.
///
/// # Example
///
/// ```
/// use binary_string::try_parse_value;
///
/// let parsed = try_parse_value::<u8>("101");
/// assert_eq!(parsed.invalid, None);
/// assert_eq!(parsed.value, 5);
///
/// let parsed = try_parse_value::<u8>("1x1");
/// assert_eq!(parsed.invalid, Some('x'));
/// assert_eq!(parsed.value, 0);
/// ```
pub fn try_parse_value<T: ParseTarget>(bin_str: &str) -> Parsed<T> {
    try_parse_kind(bin_str, T::KIND).map(T::from_int_value)
}
