/// CLI layer: argument parsing and stderr diagnostics.
pub mod args;
pub mod output;

pub use args::Cli;
pub use output::{write_error, write_warning};
