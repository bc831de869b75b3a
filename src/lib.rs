//! # azeng
//!
//! azeng is an interpreter for a small scripting language with Indonesian
//! keywords. It lexes, parses, and evaluates scripts with support for
//! integers, floats, booleans, strings, fixed-size arrays, conditionals,
//! loops, and a builtin surface that includes synchronous HTTP requests.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::Interpreter,
    http::{HttpClient, UreqClient},
    lexer::lex,
    output::{OutputSink, StdoutSink},
    parser::program::parse_program,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of a script as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression, statement, and function types for all language
///   constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines the fatal failure classes of a run. It standardizes
/// error reporting and carries line numbers for debugging and user
/// feedback. Non-fatal misuse never appears here; it is absorbed in-band as
/// the `void` value.
///
/// # Responsibilities
/// - Defines error enums for the parse and evaluation phases.
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of script execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and the injected HTTP and output capabilities to
/// provide a complete runtime for azeng scripts.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides the traits behind which HTTP and console output are injected.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a script with explicit HTTP and output capabilities.
///
/// The source is lexed, parsed into a program, and evaluated; each
/// top-level function body runs once, in declaration order. Tests inject
/// fake collaborators here; [`run_script`] wires up the production ones.
///
/// # Errors
/// Returns the first fatal error: any `ParseError`, or a `RuntimeError`
/// for an unknown variable, an environment capacity overflow, or a
/// non-boolean loop condition.
///
/// # Examples
/// ```
/// use azeng::{
///     interpreter::{http::UreqClient, output::StdoutSink},
///     run_program,
/// };
///
/// let source = r#"
///     bikin fungsi utama() {
///         isi x = 2 + 3;
///     }
/// "#;
/// let http = UreqClient::default();
/// let mut out = StdoutSink;
/// assert!(run_program(source, &http, &mut out).is_ok());
///
/// // An undeclared variable is a fatal error.
/// let source = "bikin fungsi utama() { isi y = x + 1; }";
/// assert!(run_program(source, &http, &mut out).is_err());
/// ```
pub fn run_program(source: &str,
                   http: &dyn HttpClient,
                   out: &mut dyn OutputSink)
                   -> Result<(), Box<dyn std::error::Error>> {
    let tokens = lex(source);
    let mut iter = tokens.iter().peekable();

    let program = parse_program(&mut iter)?;

    let mut interpreter = Interpreter::new(http, out);
    interpreter.run(&program)?;

    Ok(())
}

/// Runs a script with the production collaborators: HTTP over a
/// [`ureq::Agent`] and output to stdout.
///
/// # Errors
/// Same as [`run_program`].
pub fn run_script(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    let http = UreqClient::default();
    let mut out = StdoutSink;

    run_program(source, &http, &mut out)
}
