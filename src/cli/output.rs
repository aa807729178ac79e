/// Diagnostics on stderr, kept away from the relayed stream on stdout.
use std::fmt::Display;
use std::io::Write;

/// Write a fatal error to stderr.
pub fn write_error(message: &dyn Display) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "Error: {message}");
}

/// Write a non-fatal warning to stderr. The relay keeps going.
pub fn write_warning(message: &dyn Display) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "Warning: {message}");
}
