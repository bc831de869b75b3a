use std::collections::HashMap;

use crate::{
    ast::{Builtin, DataType, Expr, LiteralValue, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::binary::eval_binary,
        http::HttpClient,
        output::OutputSink,
        value::Value,
    },
};

pub type EvalResult<T> = Result<T, RuntimeError>;

/// Capacity of the variable environment. Declaring a variable beyond this
/// bound is fatal.
pub const MAX_VARIABLES: usize = 100;

/// Interpreter state for one program run.
///
/// Holds the single flat variable environment plus the injected HTTP and
/// output capabilities. There is no scoping: every function body reads and
/// writes the same environment.
pub struct Interpreter<'a> {
    variables: HashMap<String, Value>,
    http: &'a dyn HttpClient,
    pub(in crate::interpreter::evaluator) out: &'a mut dyn OutputSink,
}

impl<'a> Interpreter<'a> {
    /// Creates an interpreter with an empty environment.
    pub fn new(http: &'a dyn HttpClient, out: &'a mut dyn OutputSink) -> Self {
        Self { variables: HashMap::new(),
               http,
               out }
    }

    /// Runs a parsed program.
    ///
    /// Each top-level function body executes exactly once, in declaration
    /// order. Parameters are never bound and `kembali` does not transfer
    /// control; there is no user-level call mechanism.
    ///
    /// # Errors
    /// Returns the first fatal `RuntimeError`; execution stops there.
    pub fn run(&mut self, program: &Program) -> EvalResult<()> {
        for function in &program.functions {
            for statement in &function.body {
                self.execute(statement)?;
            }
        }

        Ok(())
    }

    /// Executes one statement.
    ///
    /// # Errors
    /// Returns a `RuntimeError` for the fatal conditions only: an unknown
    /// variable read, an environment capacity overflow, or a non-boolean
    /// loop condition.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::VariableDecl { name, value, line }
            | Statement::Assignment { name, value, line } => {
                let value = self.eval(value)?;
                self.store(name, value, *line)
            },
            Statement::ArrayAssign { name,
                                     index,
                                     value,
                                     line, } => {
                let index = self.eval(index)?;
                let value = self.eval(value)?;
                self.store_element(name, &index, value, *line)
            },
            Statement::Print { value, line } => {
                self.call_builtin(Builtin::Cetak, std::slice::from_ref(value), *line)?;

                Ok(())
            },
            // Return never transfers control and its expression is not
            // evaluated.
            Statement::Return { .. } => Ok(()),
            Statement::If { condition, body, .. } => {
                if self.eval(condition)? == Value::Bool(true) {
                    for statement in body {
                        self.execute(statement)?;
                    }
                }

                Ok(())
            },
            Statement::While { condition, body, line } => loop {
                match self.eval(condition)? {
                    Value::Bool(true) => {
                        for statement in body {
                            self.execute(statement)?;
                        }
                    },
                    Value::Bool(false) => return Ok(()),
                    _ => return Err(RuntimeError::LoopConditionNotBool { line: *line }),
                }
            },
        }
    }

    /// Evaluates one expression to a value.
    ///
    /// # Errors
    /// Returns a `RuntimeError` when a variable is read before any
    /// assignment declared it; all other misuse absorbs to `Void`.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(match value {
                LiteralValue::Int(x) => Value::Int(*x),
                LiteralValue::Float(x) => Value::Float(*x),
                LiteralValue::Bool(x) => Value::Bool(*x),
                LiteralValue::Str(s) => Value::Str(unescape(s)),
            }),
            Expr::Variable { name, line } => self.load(name, *line),
            Expr::BinaryOp { left, op, right, .. } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;

                Ok(eval_binary(*op, &left, &right))
            },
            Expr::BuiltinCall { builtin,
                                arguments,
                                line, } => self.call_builtin(*builtin, arguments, *line),
            Expr::ArrayAlloc { elem, size, .. } => {
                let size = self.eval(size)?;

                Ok(alloc_array(*elem, &size))
            },
            Expr::ArrayIndex { name, index, line } => {
                let index = self.eval(index)?;

                self.load_element(name, &index, *line)
            },
        }
    }

    /// Reads a variable. An undeclared name is fatal.
    fn load(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.variables
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Stores a variable, declaring it on first use.
    ///
    /// # Errors
    /// Returns `TooManyVariables` when a fresh declaration would exceed
    /// [`MAX_VARIABLES`].
    fn store(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        if !self.variables.contains_key(name) && self.variables.len() >= MAX_VARIABLES {
            return Err(RuntimeError::TooManyVariables { limit: MAX_VARIABLES,
                                                        line });
        }
        self.variables.insert(name.to_string(), value);

        Ok(())
    }

    /// Reads one array element.
    ///
    /// The array variable must be declared. A non-integer index or a
    /// non-array variable yields `Void` silently; an index outside
    /// `[0, size)`, negative included, yields `Void` with a diagnostic on
    /// stderr.
    fn load_element(&self, name: &str, index: &Value, line: usize) -> EvalResult<Value> {
        let stored = self.load(name, line)?;
        let Value::Int(raw) = index else {
            return Ok(Value::Void);
        };
        let i = usize::try_from(*raw).ok();

        let element = match &stored {
            Value::ArrayInt(items) => i.and_then(|i| items.get(i)).copied().map(Value::Int),
            Value::ArrayFloat(items) => i.and_then(|i| items.get(i)).copied().map(Value::Float),
            Value::ArrayBool(items) => i.and_then(|i| items.get(i)).copied().map(Value::Bool),
            Value::ArrayStr(items) => i.and_then(|i| items.get(i)).cloned().map(Value::Str),
            _ => return Ok(Value::Void),
        };

        match element {
            Some(value) => Ok(value),
            None => {
                eprintln!("Peringatan: indeks {raw} di luar batas array '{name}' (baris {line}).");

                Ok(Value::Void)
            },
        }
    }

    /// Writes one array element in place.
    ///
    /// Mismatched index, variable or element kinds mutate nothing,
    /// silently; an index outside `[0, size)`, negative included, mutates
    /// nothing and writes a diagnostic to stderr.
    fn store_element(&mut self,
                     name: &str,
                     index: &Value,
                     value: Value,
                     line: usize)
                     -> EvalResult<()> {
        // The write target must exist even though the write itself is
        // allowed to fail silently.
        if !self.variables.contains_key(name) {
            return Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                       line });
        }

        let Value::Int(raw) = index else {
            return Ok(());
        };
        let i = usize::try_from(*raw).ok();

        let in_range = match (self.variables.get_mut(name), value) {
            (Some(Value::ArrayInt(items)), Value::Int(x)) => {
                write_slot(items, i, x)
            },
            (Some(Value::ArrayFloat(items)), Value::Float(x)) => {
                write_slot(items, i, x)
            },
            (Some(Value::ArrayBool(items)), Value::Bool(x)) => {
                write_slot(items, i, x)
            },
            (Some(Value::ArrayStr(items)), Value::Str(x)) => {
                write_slot(items, i, x)
            },
            // Kind mismatch, including non-array targets.
            _ => return Ok(()),
        };

        if !in_range {
            eprintln!("Peringatan: indeks {raw} di luar batas array '{name}' (baris {line}).");
        }

        Ok(())
    }

    pub(in crate::interpreter::evaluator) fn http(&self) -> &'a dyn HttpClient {
        self.http
    }
}

/// Allocates a zero-filled array of `elem` kind. A size that is not a
/// non-negative integer yields `Void`.
fn alloc_array(elem: DataType, size: &Value) -> Value {
    let Value::Int(n) = size else {
        return Value::Void;
    };
    let Ok(n) = usize::try_from(*n) else {
        return Value::Void;
    };

    match elem {
        DataType::Int => Value::ArrayInt(vec![0; n]),
        DataType::Float => Value::ArrayFloat(vec![0.0; n]),
        DataType::Bool => Value::ArrayBool(vec![false; n]),
        DataType::Str => Value::ArrayStr(vec![String::new(); n]),
    }
}

/// Writes into a slot when the index converted and is in range, returning
/// whether it was.
fn write_slot<T>(items: &mut [T], i: Option<usize>, value: T) -> bool {
    match i.and_then(|i| items.get_mut(i)) {
        Some(slot) => {
            *slot = value;

            true
        },
        None => false,
    }
}

/// Interprets escape sequences in a raw string literal.
///
/// `\n`, `\t` and `\\` map to their characters; every other escape passes
/// through verbatim, backslash included.
fn unescape(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            },
            None => result.push('\\'),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::{alloc_array, unescape};
    use crate::{ast::DataType, interpreter::value::Value};

    #[test]
    fn known_escapes_are_interpreted() {
        assert_eq!(unescape(r"a\nb\tc\\d"), "a\nb\tc\\d");
    }

    #[test]
    fn unknown_escapes_pass_through() {
        assert_eq!(unescape(r"a\qb"), r"a\qb");
    }

    #[test]
    fn trailing_backslash_is_kept() {
        assert_eq!(unescape(r"a\"), r"a\");
    }

    #[test]
    fn arrays_are_zero_filled() {
        assert_eq!(alloc_array(DataType::Int, &Value::Int(3)),
                   Value::ArrayInt(vec![0, 0, 0]));
        assert_eq!(alloc_array(DataType::Str, &Value::Int(2)),
                   Value::ArrayStr(vec![String::new(), String::new()]));
    }

    #[test]
    fn non_integer_size_is_void() {
        assert_eq!(alloc_array(DataType::Int, &Value::Float(3.0)), Value::Void);
        assert_eq!(alloc_array(DataType::Int, &Value::Int(-1)), Value::Void);
    }
}
