//! Single-character helpers shared by every codec path.

/// Classifies a bit character.
///
/// Returns `Some(c - '0')` when that difference is 0 or 1, `None` for
/// any other character.
///
/// # Example
///
/// ```
/// use binary_string::parse_bit_char;
///
/// assert_eq!(parse_bit_char('1'), Some(1));
/// assert_eq!(parse_bit_char('0'), Some(0));
/// assert_eq!(parse_bit_char('2'), None);
/// ```
#[inline]
pub fn parse_bit_char(c: char) -> Option<u8> {
    match raw_digit(c) {
        v @ (0 | 1) => Some(v as u8),
        _ => None,
    }
}

/// Renders a bit as `'0'` or `'1'`.
#[inline]
pub fn bit_char(bit: bool) -> char {
    if bit { '1' } else { '0' }
}

/// Unchecked digit value of a bit character: `c - '0'` in wrapping
/// arithmetic. Only meaningful for `'0'`/`'1'`.
#[inline]
pub(crate) fn raw_digit(c: char) -> u32 {
    (c as u32).wrapping_sub('0' as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bit_char_digits() {
        assert_eq!(parse_bit_char('0'), Some(0));
        assert_eq!(parse_bit_char('1'), Some(1));
    }

    #[test]
    fn test_parse_bit_char_rejects_neighbours() {
        // '/' sits just below '0' and must not wrap into a valid bit
        for c in ['/', '2', '9', 'a', ' ', '\0', '壹'] {
            assert_eq!(parse_bit_char(c), None, "{:?} should be rejected", c);
        }
    }

    #[test]
    fn test_bit_char() {
        assert_eq!(bit_char(true), '1');
        assert_eq!(bit_char(false), '0');
    }

    #[test]
    fn test_raw_digit_out_of_range() {
        assert_eq!(raw_digit('2'), 2);
        assert_eq!(raw_digit('/'), u32::MAX);
    }
}
