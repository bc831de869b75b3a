//! Abstract syntax tree produced by the parser and consumed by the
//! evaluator.
//!
//! The tree is strictly owned: every node owns its children through
//! `Box` or `Vec`, so dropping the [`Program`] root frees the whole tree.

/// A literal value as it appears in source text.
///
/// String payloads hold the raw characters between the quotes; escape
/// sequences are interpreted when the literal is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// An integer literal, such as `42`.
    Int(i64),
    /// A floating-point literal, such as `3.14`.
    Float(f64),
    /// A boolean literal, `benar` or `salah`.
    Bool(bool),
    /// A string literal, raw and unescaped.
    Str(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// A type annotation: function return types, parameter types and array
/// element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// `int`
    Int,
    /// `float`
    Float,
    /// `bool`
    Bool,
    /// `str`
    Str,
}

/// A binary operator appearing in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `<`
    Less,
    /// `>`
    Greater,
}

/// A builtin function. These are the only callable names in the language;
/// any other identifier followed by `(` is a plain variable reference and
/// fails the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// `cetak(nilai)`
    Cetak,
    /// `http_get(url)`
    HttpGet,
    /// `http_post(url, body)`
    HttpPost,
    /// `tambah(a, b)`
    Tambah,
    /// `bagi(a, b)`
    Bagi,
    /// `lebih_besar(a, b)`
    LebihBesar,
    /// `gabung(a, b)`
    Gabung,
}

impl Builtin {
    /// Resolves an identifier against the builtin whitelist.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "cetak" => Some(Self::Cetak),
            "http_get" => Some(Self::HttpGet),
            "http_post" => Some(Self::HttpPost),
            "tambah" => Some(Self::Tambah),
            "bagi" => Some(Self::Bagi),
            "lebih_besar" => Some(Self::LebihBesar),
            "gabung" => Some(Self::Gabung),
            _ => None,
        }
    }
}

/// An expression node.
///
/// Every variant carries the source line it was parsed from, used for
/// error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The literal payload.
        value: LiteralValue,
        /// The line number in the source.
        line: usize,
    },
    /// A variable reference.
    Variable {
        /// The variable name.
        name: String,
        /// The line number in the source.
        line: usize,
    },
    /// A binary operation. Chains are right-grouped: `10 - 2 - 3` is
    /// `10 - (2 - 3)`.
    BinaryOp {
        /// The left operand.
        left: Box<Self>,
        /// The operator.
        op: BinaryOperator,
        /// The right operand.
        right: Box<Self>,
        /// The line number in the source.
        line: usize,
    },
    /// A call to a builtin function.
    BuiltinCall {
        /// Which builtin is called.
        builtin: Builtin,
        /// The argument expressions, in order.
        arguments: Vec<Self>,
        /// The line number in the source.
        line: usize,
    },
    /// An array allocation, `array[size]` or `array[size]: kind`.
    ArrayAlloc {
        /// The declared element kind.
        elem: DataType,
        /// The size expression.
        size: Box<Self>,
        /// The line number in the source.
        line: usize,
    },
    /// An indexed read, `name[index]`.
    ArrayIndex {
        /// The array variable name.
        name: String,
        /// The index expression.
        index: Box<Self>,
        /// The line number in the source.
        line: usize,
    },
}

impl Expr {
    /// Returns the source line this expression was parsed from.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::BuiltinCall { line, .. }
            | Self::ArrayAlloc { line, .. }
            | Self::ArrayIndex { line, .. } => *line,
        }
    }
}

/// A statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `isi name = value;`
    VariableDecl {
        /// The variable name.
        name: String,
        /// The initializer expression.
        value: Expr,
        /// The line number in the source.
        line: usize,
    },
    /// `name = value;`
    Assignment {
        /// The variable name.
        name: String,
        /// The assigned expression.
        value: Expr,
        /// The line number in the source.
        line: usize,
    },
    /// `name[index] = value;`
    ArrayAssign {
        /// The array variable name.
        name: String,
        /// The index expression.
        index: Expr,
        /// The assigned expression.
        value: Expr,
        /// The line number in the source.
        line: usize,
    },
    /// `cetak(value);`
    Print {
        /// The expression to print.
        value: Expr,
        /// The line number in the source.
        line: usize,
    },
    /// `kembali value;`
    ///
    /// Parsed but never dispatched: execution treats it as a no-op and the
    /// expression is not evaluated.
    Return {
        /// The returned expression.
        value: Expr,
        /// The line number in the source.
        line: usize,
    },
    /// `kalo (ident > n) { ... }`
    If {
        /// The condition, always `Variable > Literal`.
        condition: Expr,
        /// The statements in the body.
        body: Vec<Self>,
        /// The line number in the source.
        line: usize,
    },
    /// `ulang (condition) { ... }`
    While {
        /// The loop condition, re-evaluated before each iteration.
        condition: Expr,
        /// The statements in the body.
        body: Vec<Self>,
        /// The line number in the source.
        line: usize,
    },
}

/// A declared function parameter. Recorded in the tree but never bound at
/// run time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// The parameter name.
    pub name: String,
    /// The declared type.
    pub data_type: DataType,
}

/// A top-level function definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// The function name.
    pub name: String,
    /// The declared return type, `None` for plain `fungsi`.
    pub return_type: Option<DataType>,
    /// The declared parameters.
    pub params: Vec<Parameter>,
    /// The statements in the body.
    pub body: Vec<Statement>,
    /// The line number in the source.
    pub line: usize,
}

/// The root of a parsed script: every top-level function, in declaration
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The functions, in the order they were declared.
    pub functions: Vec<Function>,
}
