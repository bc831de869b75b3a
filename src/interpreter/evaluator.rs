//! Tree-walking evaluator.
//!
//! Walks the AST directly with one flat variable environment. Only a small
//! set of conditions is fatal; type mismatches, out-of-range array accesses
//! and failed HTTP requests absorb to the `void` value and the run
//! continues.

/// Binary operator table.
pub mod binary;
/// Builtin dispatch.
pub mod builtin;
/// Interpreter state and eval/execute dispatch.
pub mod core;
/// Print formatting, including the structural indenter.
pub mod format;
