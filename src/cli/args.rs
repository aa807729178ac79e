/// CLI argument definitions via clap derive.
use clap::Parser;

/// The tool's own options, shown below the generated help. Defaults are
/// the tool's; the wrapper injects nothing.
const TOOL_OPTIONS_HELP: &str = "\
Tool options (forwarded):
  --fault-probability=<float> [0.0 1.0] (default: 0.05)
  --fault-rate=<float> [0.0 1.0] (default: 0)
  --inject-faults=yes|no (default: yes)
  --seed=<int> (default: 42)
  --verbose=yes|no (default: no)

Runs the Valgrind BITFLIPS tool on PROGRAM. Float-valued options are
passed to the tool as raw IEEE-754 bit patterns, and bit patterns in the
tool's report are turned back into floats.";

/// bitflips — run the Valgrind BITFLIPS fault injector on a program.
#[derive(Debug, Parser)]
#[command(
    name = "bitflips",
    about = "Run the Valgrind BITFLIPS fault injector with float arguments and output",
    override_usage = "bitflips [TOOL_OPTIONS] PROGRAM [PROGRAM_ARGS]...",
    after_help = TOOL_OPTIONS_HELP,
    disable_help_flag = true,
    disable_version_flag = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Tool options followed by the program to run under the tool.
    /// Every token is forwarded; the wrapper intercepts nothing.
    #[arg(
        value_name = "ARG",
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}
