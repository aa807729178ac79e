/// Bit-exact reinterpretation between float text and integer bit patterns.
///
/// The tool's interface carries every floating-point quantity as its raw
/// IEEE-754 pattern: unsigned decimal text on the argument side, hex text
/// on the output side. Conversions here are value-level
/// (`to_bits`/`from_bits`); byte order never enters the picture.
use super::errors::CodecError;
use super::precision::Precision;

/// Encode decimal float text as the unsigned-decimal form of its bit pattern.
///
/// `"1.5"` at [`Precision::Single`] becomes `"1069547520"` (0x3FC00000).
///
/// # Errors
///
/// - `CodecError::UnparseableFloat` when `text` is not a decimal float
/// - `CodecError::NonFinite` when the value is infinite or NaN
pub fn encode(text: &str, precision: Precision) -> Result<String, CodecError> {
    match precision {
        Precision::Single => Ok(parse_f32(text)?.to_bits().to_string()),
        Precision::Double => Ok(parse_f64(text)?.to_bits().to_string()),
    }
}

/// Decode a hex bit pattern back to decimal float text.
///
/// Precision is taken from the digit count (8 or 16) and either case is
/// accepted; the tool prints `%08x`. The rendering is the shortest text
/// that re-parses to the same bits, except that finite integral values
/// keep a trailing `.0` so rewritten lines still read as floats.
///
/// # Errors
///
/// - `CodecError::BadHexLength` when the digit count is neither 8 nor 16
/// - `CodecError::InvalidHexDigit` when the token holds a non-hex character
pub fn decode(hex: &str) -> Result<String, CodecError> {
    let precision = Precision::from_hex_len(hex.len())?;
    // from_str_radix tolerates a leading `+`; a pattern is digits only.
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CodecError::InvalidHexDigit {
            token: hex.to_owned(),
        });
    }
    let rendered = match precision {
        Precision::Single => {
            let bits = parse_bits_u32(hex)?;
            f32::from_bits(bits).to_string()
        }
        Precision::Double => {
            let bits = parse_bits_u64(hex)?;
            f64::from_bits(bits).to_string()
        }
    };
    Ok(keep_fraction(rendered))
}

fn parse_f32(text: &str) -> Result<f32, CodecError> {
    let value: f32 = text.parse().map_err(|_| CodecError::UnparseableFloat {
        text: text.to_owned(),
    })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CodecError::NonFinite {
            text: text.to_owned(),
        })
    }
}

fn parse_f64(text: &str) -> Result<f64, CodecError> {
    let value: f64 = text.parse().map_err(|_| CodecError::UnparseableFloat {
        text: text.to_owned(),
    })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CodecError::NonFinite {
            text: text.to_owned(),
        })
    }
}

fn parse_bits_u32(hex: &str) -> Result<u32, CodecError> {
    u32::from_str_radix(hex, 16).map_err(|_| CodecError::InvalidHexDigit {
        token: hex.to_owned(),
    })
}

fn parse_bits_u64(hex: &str) -> Result<u64, CodecError> {
    u64::from_str_radix(hex, 16).map_err(|_| CodecError::InvalidHexDigit {
        token: hex.to_owned(),
    })
}

/// `Display` renders 2.0 as "2"; restore the `.0` on integral finite
/// values. "inf" and "NaN" pass untouched.
fn keep_fraction(text: String) -> String {
    if text.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        format!("{text}.0")
    } else {
        text
    }
}
