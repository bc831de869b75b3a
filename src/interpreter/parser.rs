//! Recursive-descent parser with single-token lookahead.
//!
//! The parser consumes a `Peekable` iterator of `(Token, Pos)` pairs and
//! builds the AST directly. Any grammar mismatch is fatal: parsing stops at
//! the first error and no partial tree is produced.

/// Expression parsing and shared token helpers.
pub mod core;
/// Top-level functions and the program root.
pub mod program;
/// Statement forms.
pub mod statement;
