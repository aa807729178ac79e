/// Translation between the human CLI surface and the tool's integer-encoded
/// interface: argument values out, report lines back.
pub mod args;
pub mod errors;
pub mod report;

pub use args::translate_args;
pub use errors::TranslateError;
pub use report::rewrite_line;
