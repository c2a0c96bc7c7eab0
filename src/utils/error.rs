use thiserror::Error;

/// Main error type for the bit-string codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitStringError {
    /// More bits were requested than the value's type holds
    #[error("Requested length {requested} exceeds the {width}-bit width of the type")]
    LengthOutOfRange { requested: usize, width: u32 },
    /// The target width is wider than the 64-bit parse scratch
    #[error("Width of {0} bits exceeds the 64-bit limit for value parsing")]
    WidthTooLarge(u32),
    /// The target width is not one of 8, 16, 32 or 64
    #[error("Unsupported integer width: {0} bits")]
    UnsupportedWidth(u32),
    /// A character other than '0' or '1' was found during a validated decode
    #[error("Invalid bit character: {0:?}")]
    InvalidBitChar(char),
}

/// A specialized `Result` type for bit-string operations.
pub type Result<T> = std::result::Result<T, BitStringError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            BitStringError::LengthOutOfRange {
                requested: 9,
                width: 8
            }
            .to_string(),
            "Requested length 9 exceeds the 8-bit width of the type"
        );

        assert_eq!(
            BitStringError::WidthTooLarge(128).to_string(),
            "Width of 128 bits exceeds the 64-bit limit for value parsing"
        );

        assert_eq!(
            BitStringError::UnsupportedWidth(24).to_string(),
            "Unsupported integer width: 24 bits"
        );

        assert_eq!(
            BitStringError::InvalidBitChar('2').to_string(),
            "Invalid bit character: '2'"
        );
    }
}
