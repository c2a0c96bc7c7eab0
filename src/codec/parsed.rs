use crate::utils::error::{BitStringError, Result};

/// Outcome of a validated decode.
///
/// `invalid` is `None` when every inspected character was `'0'` or `'1'`.
/// Otherwise it holds the first offending character and `value` is
/// incomplete: callers must not trust it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    pub value: T,
    pub invalid: Option<char>,
}

impl<T> Parsed<T> {
    pub(crate) fn ok(value: T) -> Self {
        Self {
            value,
            invalid: None,
        }
    }

    pub(crate) fn failed(value: T, invalid: char) -> Self {
        Self {
            value,
            invalid: Some(invalid),
        }
    }

    /// True if the decode saw no invalid character.
    pub fn is_ok(&self) -> bool {
        self.invalid.is_none()
    }

    /// Drops the partial value on failure.
    pub fn into_result(self) -> Result<T> {
        match self.invalid {
            None => Ok(self.value),
            Some(c) => Err(BitStringError::InvalidBitChar(c)),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Parsed<U> {
        Parsed {
            value: f(self.value),
            invalid: self.invalid,
        }
    }
}
