/// Errors from the translation layer.
use thiserror::Error;

use crate::codec::CodecError;

/// Errors that can occur while translating arguments or report lines.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// A numeric flag's value could not be encoded as a bit pattern.
    #[error("invalid value in '{arg}': {source}")]
    FlagValue {
        /// The full offending argument token.
        arg: String,
        /// The underlying codec failure.
        source: CodecError,
    },

    /// A fault report line is missing an expected column.
    #[error("fault report line has no column {index}")]
    MissingField {
        /// The 0-based whitespace-token index that was absent.
        index: usize,
    },

    /// An embedded bit pattern in a report line could not be decoded.
    #[error("bad bit pattern '{token}': {source}")]
    BadPattern {
        /// The token that failed to decode.
        token: String,
        /// The underlying codec failure.
        source: CodecError,
    },
}
