/// Bit-pattern codec: IEEE-754 reinterpretation between float text and
/// integer text.
pub mod errors;
pub mod precision;
pub mod reinterpret;

pub use errors::CodecError;
pub use precision::Precision;
pub use reinterpret::{decode, encode};
