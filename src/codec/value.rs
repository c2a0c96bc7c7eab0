//! Fixed-width value -> bit-string conversion.
//!
//! Bit `i` of a value lives in storage byte `i / 8` at offset `i % 8`.
//! Storage bytes are always produced in little-endian order, so bit `i`
//! is the numeric bit `i` on every target.

use bitvec::prelude::*;
use byteorder::{ByteOrder, LittleEndian};
use log::{debug, trace};
use std::mem::size_of;

use crate::utils::bits::bit_char;
use crate::utils::error::{BitStringError, Result};

/// A value with a fixed storage width that can be serialized bit by bit.
pub trait FixedWidth: Copy {
    /// Storage width in bits.
    const BITS: u32;

    /// The value's storage bytes, least significant byte first.
    fn storage_bytes(self) -> Vec<u8>;
}

macro_rules! impl_fixed_width {
    ($($ty:ty => $write:ident),* $(,)?) => {
        $(
            impl FixedWidth for $ty {
                const BITS: u32 = (size_of::<$ty>() * 8) as u32;

                fn storage_bytes(self) -> Vec<u8> {
                    let mut buf = vec![0u8; size_of::<$ty>()];
                    LittleEndian::$write(&mut buf, self);
                    buf
                }
            }
        )*
    };
}

impl_fixed_width!(
    u16 => write_u16,
    i16 => write_i16,
    u32 => write_u32,
    i32 => write_i32,
    u64 => write_u64,
    i64 => write_i64,
    u128 => write_u128,
    i128 => write_i128,
    f32 => write_f32,
    f64 => write_f64,
);

impl FixedWidth for u8 {
    const BITS: u32 = 8;

    fn storage_bytes(self) -> Vec<u8> {
        vec![self]
    }
}

impl FixedWidth for i8 {
    const BITS: u32 = 8;

    fn storage_bytes(self) -> Vec<u8> {
        vec![self as u8]
    }
}

// One byte holding 0 or 1
impl FixedWidth for bool {
    const BITS: u32 = 8;

    fn storage_bytes(self) -> Vec<u8> {
        vec![u8::from(self)]
    }
}

impl FixedWidth for usize {
    const BITS: u32 = usize::BITS;

    fn storage_bytes(self) -> Vec<u8> {
        let mut buf = vec![0u8; size_of::<usize>()];
        LittleEndian::write_uint(&mut buf, self as u64, size_of::<usize>());
        buf
    }
}

impl FixedWidth for isize {
    const BITS: u32 = isize::BITS;

    fn storage_bytes(self) -> Vec<u8> {
        let mut buf = vec![0u8; size_of::<isize>()];
        LittleEndian::write_int(&mut buf, self as i64, size_of::<isize>());
        buf
    }
}

/// Encodes the low `length` bits of `x`, most significant first.
///
/// With `length == 0` the length is derived from the highest set bit, so
/// leading zeros are trimmed and zero itself encodes as `"0"`. A non-zero
/// `length` keeps exactly that many low bits and silently drops the rest.
///
/// # Errors
///
/// Returns [`BitStringError::LengthOutOfRange`] if `length` exceeds
/// `T::BITS`.
///
/// # Example
///
/// ```
/// use binary_string::from_value;
///
/// assert_eq!(from_value(5u32, 0).unwrap(), "101");
/// assert_eq!(from_value(0b1011u8, 2).unwrap(), "11");
/// assert!(from_value(1u8, 9).is_err());
/// ```
pub fn from_value<T: FixedWidth>(x: T, length: usize) -> Result<String> {
    let width = T::BITS;
    if length > width as usize {
        debug!("Requested {} bits from a {}-bit value", length, width);
        return Err(BitStringError::LengthOutOfRange {
            requested: length,
            width,
        });
    }

    let storage = x.storage_bytes();
    let bits = storage.view_bits::<Lsb0>();

    let length = if length == 0 {
        let auto = bits.last_one().map_or(1, |idx| idx + 1);
        trace!("Auto length {} for {}-bit value", auto, width);
        auto
    } else {
        length
    };

    let mut out = String::with_capacity(length);
    out.extend(bits[..length].iter().rev().map(|bit| bit_char(*bit)));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_length() {
        assert_eq!(from_value(0u32, 0).unwrap(), "0");
        assert_eq!(from_value(1u64, 0).unwrap(), "1");
        assert_eq!(from_value(0x100u16, 0).unwrap(), "100000000");
    }

    #[test]
    fn test_explicit_length_pads_with_zeros() {
        assert_eq!(from_value(5u8, 8).unwrap(), "00000101");
        assert_eq!(from_value(0u16, 3).unwrap(), "000");
    }

    #[test]
    fn test_explicit_length_truncates() {
        assert_eq!(from_value(0xabcdu16, 4).unwrap(), "1101");
        assert_eq!(
            from_value(0x1_0000_0001u64, 32).unwrap(),
            format!("{:032b}", 1)
        );
    }

    #[test]
    fn test_length_out_of_range() {
        assert_eq!(
            from_value(1u8, 9),
            Err(BitStringError::LengthOutOfRange {
                requested: 9,
                width: 8
            })
        );
        assert!(from_value(1u32, 32).is_ok());
        assert!(from_value(1u32, 33).is_err());
    }

    #[test]
    fn test_signed_uses_twos_complement() {
        assert_eq!(from_value(-1i8, 0).unwrap(), "11111111");
        assert_eq!(
            from_value(i16::MIN, 0).unwrap(),
            format!("{:016b}", i16::MIN)
        );
    }

    #[test]
    fn test_float_bit_pattern() {
        assert_eq!(from_value(1.0f32, 0).unwrap(), format!("{:b}", 1.0f32.to_bits()));
        assert_eq!(from_value(-0.0f64, 0).unwrap(), format!("1{}", "0".repeat(63)));
    }

    #[test]
    fn test_bool_and_wide_types() {
        assert_eq!(from_value(true, 0).unwrap(), "1");
        assert_eq!(from_value(false, 8).unwrap(), "00000000");
        assert_eq!(from_value(u128::MAX, 0).unwrap().len(), 128);
        assert_eq!(from_value(usize::MAX, 0).unwrap().len(), usize::BITS as usize);
        assert_eq!(from_value(-2isize, 2).unwrap(), "10");
    }

    #[test]
    fn test_storage_bytes_little_endian() {
        assert_eq!(0x0102u16.storage_bytes(), vec![0x02, 0x01]);
        assert_eq!((-2i32).storage_bytes(), vec![0xfe, 0xff, 0xff, 0xff]);
    }
}
