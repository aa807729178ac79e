/// Errors from the child-process runner.
use thiserror::Error;

use crate::translate::TranslateError;

/// Errors that can occur while driving the tool process.
#[derive(Debug, Error)]
pub enum RunError {
    /// The argument list failed to translate; nothing was launched.
    #[error("{0}")]
    Translate(#[from] TranslateError),

    /// The tool process could not be started.
    #[error("failed to launch '{program}': {source}")]
    Launch {
        /// The program that failed to start.
        program: String,
        /// The underlying OS error.
        source: std::io::Error,
    },

    /// Relaying the merged output stream failed mid-run.
    #[error("lost the tool's output stream: {source}")]
    Relay {
        /// The underlying I/O failure.
        source: std::io::Error,
    },
}

/// Exit code mapping for `RunError` variants.
impl RunError {
    /// Return the CLI exit code for this error.
    ///
    /// Translation failures are usage-class (2). Launch failures follow
    /// the shell convention: 127 when the binary is missing, 126 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Translate(_) => 2,
            Self::Launch { source, .. } => {
                if source.kind() == std::io::ErrorKind::NotFound {
                    127
                } else {
                    126
                }
            }
            Self::Relay { .. } => 1,
        }
    }
}
