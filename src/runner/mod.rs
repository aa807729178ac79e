/// Child-process runner: spawns the tool and relays its merged output
/// through the report rewriter.
pub mod errors;

use std::io::{BufRead, BufReader, Write};
use std::process::{Command, ExitStatus};

use crate::cli;
use crate::translate;

pub use errors::RunError;

/// The host program the tool rides on. Resolved via PATH.
const TOOL_PROGRAM: &str = "valgrind";

/// Arguments selecting the fault-injection tool.
const TOOL_ARGS: [&str; 1] = ["--tool=bitflips"];

/// Run the tool on the given argument list and relay its output.
///
/// The arguments are translated first, so a malformed flag value aborts
/// before anything is launched. The echoed command line and every relayed
/// line go to stdout; warnings and errors go to stderr.
///
/// # Errors
///
/// - `RunError::Translate` when a numeric flag value does not encode
/// - `RunError::Launch` when the tool process cannot be started
/// - `RunError::Relay` when reading or writing the stream fails
pub fn run(args: &[String]) -> Result<ExitStatus, RunError> {
    let stdout = std::io::stdout();
    run_with(TOOL_PROGRAM, &TOOL_ARGS, args, &mut stdout.lock())
}

fn run_with(
    program: &str,
    tool_args: &[&str],
    args: &[String],
    out: &mut impl Write,
) -> Result<ExitStatus, RunError> {
    let translated = translate::translate_args(args)?;

    // the user-facing echo shows the untranslated arguments; bit patterns
    // stay on the tool side of the boundary
    let command = render_command(program, tool_args, args);
    writeln!(out, "{command}").map_err(relay)?;
    out.flush().map_err(relay)?;

    let (reader, writer) = std::io::pipe().map_err(|source| RunError::Launch {
        program: program.to_owned(),
        source,
    })?;
    let writer_clone = writer.try_clone().map_err(|source| RunError::Launch {
        program: program.to_owned(),
        source,
    })?;

    // the Command temporary drops right after spawn, closing the parent's
    // copies of the write ends; without that the reader never sees EOF
    let mut child = Command::new(program)
        .args(tool_args)
        .args(&translated)
        .stdout(writer_clone)
        .stderr(writer)
        .spawn()
        .map_err(|source| RunError::Launch {
            program: program.to_owned(),
            source,
        })?;

    let mut merged = BufReader::new(reader);
    let mut line = Vec::new();
    loop {
        line.clear();
        let n = merged.read_until(b'\n', &mut line).map_err(relay)?;
        if n == 0 {
            break;
        }
        relay_line(&line, out)?;
    }

    child.wait().map_err(relay)
}

/// Rewrite one raw line and write it out. Non-UTF-8 lines relay verbatim;
/// a line the rewriter rejects is reported as a warning and relayed
/// unchanged.
fn relay_line(raw: &[u8], out: &mut impl Write) -> Result<(), RunError> {
    match std::str::from_utf8(raw) {
        Ok(text) => match translate::rewrite_line(text) {
            Ok(rewritten) => out.write_all(rewritten.as_bytes()),
            Err(err) => {
                cli::write_warning(&err);
                out.write_all(raw)
            }
        },
        Err(_) => out.write_all(raw),
    }
    .map_err(relay)?;
    out.flush().map_err(relay)
}

/// Human-readable command line for the startup echo and diagnostics.
fn render_command(program: &str, tool_args: &[&str], args: &[String]) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(1 + tool_args.len() + args.len());
    parts.push(program);
    parts.extend_from_slice(tool_args);
    parts.extend(args.iter().map(String::as_str));
    parts.join(" ")
}

fn relay(source: std::io::Error) -> RunError {
    RunError::Relay { source }
}

/// Map the child's exit status to the wrapper's own exit code.
///
/// A normal exit propagates the child's code. On Unix a signal death maps
/// to 128 + signal, the shell convention.
#[must_use]
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
