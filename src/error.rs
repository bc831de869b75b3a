//! Error types surfaced by the interpreter pipeline.

/// Errors produced while parsing a token stream.
pub mod parse_error;
/// Errors produced while evaluating a program.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
