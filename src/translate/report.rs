/// Report-line rewriting: embedded hex bit patterns back to float text.
use std::borrow::Cow;

use crate::codec;

use super::errors::TranslateError;

/// Marker of a fault event line.
const FAULT_MARKER: &str = "BF:";

/// Markers of the tool's startup parameter echoes. Matching is
/// case-sensitive; the `Fault Rate:` summary line must pass through.
const ECHO_MARKERS: [&str; 2] = ["fault-probability:", "fault-rate:"];

/// 0-based whitespace-token column of the original pattern in a fault line.
const ORIGINAL_COLUMN: usize = 5;

/// 0-based whitespace-token column of the flipped pattern in a fault line.
const FLIPPED_COLUMN: usize = 9;

/// What a line of tool output is, decided fresh for every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    /// A fault report with hex patterns at fixed columns.
    FaultEvent,
    /// A startup parameter echo with one hex value after the colon.
    ParameterEcho,
    /// Anything else relays unchanged.
    PassThrough,
}

fn classify(line: &str) -> LineKind {
    if line.matches(FAULT_MARKER).count() == 1 {
        return LineKind::FaultEvent;
    }
    if ECHO_MARKERS
        .iter()
        .any(|marker| line.matches(marker).count() == 1)
    {
        return LineKind::ParameterEcho;
    }
    LineKind::PassThrough
}

/// Rewrite one line of tool output, converting embedded bit patterns to
/// decimal floats.
///
/// The trailing terminator (`\n`, `\r\n`, or none on the final line) is
/// preserved exactly. Lines matching no marker come back borrowed. Each
/// pattern replaces its first textual occurrence in the line, and on a
/// fault line both patterns decode before either is substituted, so an
/// error never leaves the line partially rewritten.
///
/// # Errors
///
/// - `TranslateError::MissingField` when a fault line is too short
/// - `TranslateError::BadPattern` when an embedded pattern fails to decode
pub fn rewrite_line(line: &str) -> Result<Cow<'_, str>, TranslateError> {
    match classify(line) {
        LineKind::FaultEvent => rewrite_fault(line).map(Cow::Owned),
        LineKind::ParameterEcho => rewrite_echo(line).map(Cow::Owned),
        LineKind::PassThrough => Ok(Cow::Borrowed(line)),
    }
}

fn rewrite_fault(line: &str) -> Result<String, TranslateError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let original = field(&tokens, ORIGINAL_COLUMN)?;
    let flipped = field(&tokens, FLIPPED_COLUMN)?;
    let original_text = decode_token(original)?;
    let flipped_text = decode_token(flipped)?;
    let rewritten = line.replacen(original, &original_text, 1);
    Ok(rewritten.replacen(flipped, &flipped_text, 1))
}

fn rewrite_echo(line: &str) -> Result<String, TranslateError> {
    // the matched marker guarantees at least one ':'
    let value = line.split(':').nth(1).unwrap_or("").trim();
    let decoded = decode_token(value)?;
    Ok(line.replacen(value, &decoded, 1))
}

fn field<'a>(tokens: &[&'a str], index: usize) -> Result<&'a str, TranslateError> {
    tokens
        .get(index)
        .copied()
        .ok_or(TranslateError::MissingField { index })
}

fn decode_token(token: &str) -> Result<String, TranslateError> {
    codec::decode(token).map_err(|source| TranslateError::BadPattern {
        token: token.to_owned(),
        source,
    })
}
