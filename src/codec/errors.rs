/// Errors from the bit-pattern codec.
use thiserror::Error;

/// Errors that can occur while converting between float text and bit patterns.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The text is not parseable as a decimal floating-point number.
    #[error("'{text}' is not a floating-point number")]
    UnparseableFloat {
        /// The rejected text.
        text: String,
    },

    /// The value parsed but is infinite or NaN.
    #[error("'{text}' is not a finite floating-point number")]
    NonFinite {
        /// The rejected text.
        text: String,
    },

    /// The hex token length matches neither encoding width.
    #[error("hex pattern has {len} digits, expected 8 (single) or 16 (double)")]
    BadHexLength {
        /// The rejected token's length.
        len: usize,
    },

    /// The token contains a character that is not a hexadecimal digit.
    #[error("'{token}' is not a hexadecimal bit pattern")]
    InvalidHexDigit {
        /// The rejected token.
        token: String,
    },
}
