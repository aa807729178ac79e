/// IEEE-754 encoding width selection.
use super::errors::CodecError;

/// The IEEE-754 encoding a bit pattern uses.
///
/// Derived once per token and threaded through the codec; every
/// single/double branch dispatches on this enum rather than re-checking
/// string lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// 32-bit binary32 pattern, 8 hex digits.
    Single,
    /// 64-bit binary64 pattern, 16 hex digits.
    Double,
}

impl Precision {
    /// Derive the precision from a hex token's digit count.
    ///
    /// # Errors
    ///
    /// `CodecError::BadHexLength` when `len` is neither 8 nor 16.
    pub fn from_hex_len(len: usize) -> Result<Self, CodecError> {
        match len {
            8 => Ok(Self::Single),
            16 => Ok(Self::Double),
            _ => Err(CodecError::BadHexLength { len }),
        }
    }
}
