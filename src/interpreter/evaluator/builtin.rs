use crate::{
    ast::{Builtin, Expr},
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            format,
        },
        http::{HttpMethod, HttpResponse},
        value::Value,
    },
};

impl Interpreter<'_> {
    /// Dispatches a builtin call.
    ///
    /// Arguments are evaluated left to right before dispatch. Builtins are
    /// strict about argument kinds and arity, with no promotion; any
    /// mismatch absorbs to `Void`. A failed HTTP request also absorbs to
    /// `Void`, leaving the run unaffected.
    ///
    /// # Errors
    /// Propagates fatal errors from argument evaluation only.
    pub fn call_builtin(&mut self,
                        builtin: Builtin,
                        arguments: &[Expr],
                        _line: usize)
                        -> EvalResult<Value> {
        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.eval(argument)?);
        }

        Ok(match (builtin, args.as_slice()) {
            (Builtin::Cetak, [value]) => {
                let rendered = format::render(value);
                self.out.write_line(&rendered);

                Value::Void
            },
            (Builtin::Tambah, [Value::Int(a), Value::Int(b)]) => Value::Int(a.wrapping_add(*b)),
            (Builtin::Bagi, [Value::Float(a), Value::Float(b)]) => Value::Float(a / b),
            (Builtin::LebihBesar, [Value::Int(a), Value::Int(b)]) => Value::Bool(a > b),
            (Builtin::Gabung, [Value::Str(a), Value::Str(b)]) => Value::Str(format!("{a}{b}")),
            (Builtin::HttpGet, [Value::Str(url)]) => {
                body_or_void(self.http().perform(HttpMethod::Get, url, None))
            },
            (Builtin::HttpPost, [Value::Str(url), Value::Str(body)]) => {
                body_or_void(self.http().perform(HttpMethod::Post, url, Some(body)))
            },
            _ => Value::Void,
        })
    }
}

fn body_or_void(response: HttpResponse) -> Value {
    if response.status_ok {
        Value::Str(response.body)
    } else {
        Value::Void
    }
}
