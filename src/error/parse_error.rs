/// Represents all errors that can occur while parsing a token stream.
///
/// Every parse error is fatal: parsing stops at the first mismatch and no
/// partial tree is produced. A premature end of input also covers sources
/// whose scan stopped early on an unrecognized byte or unterminated string.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Found a token where no grammar production allows it.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input while a production was incomplete.
    UnexpectedEndOfInput {
        /// The source line of the last consumed token.
        line: usize,
    },
    /// A specific token was required but something else was found.
    ExpectedToken {
        /// A description of the expected token.
        expected: &'static str,
        /// A description of the token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedToken { expected,
                                  found,
                                  line, } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
