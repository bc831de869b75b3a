//! The interpreter pipeline: lexer, parser and evaluator, plus the
//! injected HTTP and output capabilities.

/// Tree-walking evaluator.
pub mod evaluator;
/// HTTP transport trait and the `ureq`-backed production client.
pub mod http;
/// Tokenization.
pub mod lexer;
/// Console output trait and the stdout production sink.
pub mod output;
/// Recursive-descent parser.
pub mod parser;
/// Runtime values.
pub mod value;
