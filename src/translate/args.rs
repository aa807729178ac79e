/// Command-line argument translation for the tool boundary.
use crate::codec::{self, Precision};

use super::errors::TranslateError;

/// Flags whose float values are translated. The tool reads both as
/// single-precision patterns.
const NUMERIC_FLAGS: [&str; 2] = ["--fault-probability=", "--fault-rate="];

/// Translate an argument list for the tool.
///
/// Tokens beginning with `--fault-probability=` or `--fault-rate=` have
/// everything after the first `=` replaced by the decimal form of its
/// IEEE-754 single-precision pattern; the flag name and `=` are kept.
/// All other tokens pass through byte-for-byte and order is preserved.
/// Translation is all-or-nothing: the first malformed value aborts with
/// the failing token, before anything is launched.
///
/// # Errors
///
/// `TranslateError::FlagValue` when a recognized flag's value does not
/// encode as a finite float.
pub fn translate_args(args: &[String]) -> Result<Vec<String>, TranslateError> {
    args.iter().map(|arg| translate_arg(arg)).collect()
}

fn translate_arg(arg: &str) -> Result<String, TranslateError> {
    for prefix in NUMERIC_FLAGS {
        if let Some(value) = arg.strip_prefix(prefix) {
            let encoded = codec::encode(value, Precision::Single).map_err(|source| {
                TranslateError::FlagValue {
                    arg: arg.to_owned(),
                    source,
                }
            })?;
            return Ok(format!("{prefix}{encoded}"));
        }
    }
    Ok(arg.to_owned())
}
