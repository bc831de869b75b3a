/// Represents the fatal errors that can occur while evaluating a program.
///
/// Only the variants here abort a run. Type mismatches, out-of-range array
/// accesses and failed HTTP requests are absorbed in-band as the `void`
/// value instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// A variable was read before any assignment declared it.
    UnknownVariable {
        /// The variable name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Declaring one more variable would exceed the environment capacity.
    TooManyVariables {
        /// The fixed capacity of the environment.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A loop condition evaluated to something other than a boolean.
    LoopConditionNotBool {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },

            Self::TooManyVariables { limit, line } => {
                write!(f, "Error on line {line}: Too many variables, the limit is {limit}.")
            },

            Self::LoopConditionNotBool { line } => {
                write!(f, "Error on line {line}: Loop condition is not a boolean.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
