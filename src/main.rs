#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! bitflips — run the Valgrind BITFLIPS fault injector on a program,
//! translating float-valued arguments and report output across the
//! tool's integer-encoded interface.

mod cli;
mod codec;
mod runner;
mod translate;

use clap::Parser;

use cli::{Cli, write_error};

fn main() {
    let cli = Cli::parse();

    match runner::run(&cli.args) {
        Ok(status) => std::process::exit(runner::exit_code(status)),
        Err(err) => {
            write_error(&err);
            std::process::exit(err.exit_code());
        }
    }
}
