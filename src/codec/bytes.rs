//! Byte buffer <-> bit-string conversion.
//!
//! Every byte maps to a group of eight characters, most significant bit
//! first. Bytes keep their input order.

use bitvec::prelude::*;
use log::debug;

use crate::codec::parsed::Parsed;
use crate::utils::bits::{bit_char, parse_bit_char, raw_digit};

/// Encodes a byte buffer as a bit-string of exactly `8 * buffer.len()` characters.
///
/// # Example
///
/// ```
/// use binary_string::from_bytes;
///
/// assert_eq!(from_bytes(b"A"), "01000001");
/// assert_eq!(from_bytes(&[]), "");
/// ```
pub fn from_bytes(buffer: &[u8]) -> String {
    let mut out = String::with_capacity(buffer.len() * 8);
    out.extend(buffer.view_bits::<Msb0>().iter().map(|bit| bit_char(*bit)));
    out
}

/// Decodes a bit-string into `len / 8` bytes without validating it.
///
/// Characters past the last complete group of eight are dropped. A
/// character other than `'0'`/`'1'` is not detected: it contributes
/// `c - '0'` shifted into its bit position and truncated to eight bits,
/// so the resulting byte is undefined but no panic occurs. Use
/// [`try_parse`] when the input is untrusted.
///
/// # Example
///
/// ```
/// use binary_string::parse;
///
/// assert_eq!(parse("01000001"), vec![0x41]);
/// assert_eq!(parse("0100000111"), vec![0x41]);
/// ```
pub fn parse(bin_str: &str) -> Vec<u8> {
    let chars: Vec<char> = bin_str.chars().collect();
    chars
        .chunks_exact(8)
        .map(|group| {
            group
                .iter()
                .enumerate()
                .fold(0u8, |byte, (i, &c)| byte | (raw_digit(c) << (7 - i)) as u8)
        })
        .collect()
}

/// Decodes a bit-string into bytes, stopping at the first invalid character.
///
/// The buffer is always allocated to `len / 8` bytes. On failure only
/// the groups completed before the failing one are filled; the rest
/// stay zero. Trailing characters past the last complete group are not
/// inspected.
pub fn try_parse(bin_str: &str) -> Parsed<Vec<u8>> {
    let chars: Vec<char> = bin_str.chars().collect();
    let mut buffer = vec![0u8; chars.len() / 8];

    for (byte_idx, group) in chars.chunks_exact(8).enumerate() {
        let mut byte = 0u8;
        for (bit_idx, &c) in group.iter().enumerate() {
            match parse_bit_char(c) {
                Some(bit) => byte |= bit << (7 - bit_idx),
                None => {
                    debug!(
                        "Invalid bit character {:?} at offset {}",
                        c,
                        byte_idx * 8 + bit_idx
                    );
                    return Parsed::failed(buffer, c);
                }
            }
        }
        buffer[byte_idx] = byte;
    }

    Parsed::ok(buffer)
}
