use crate::{ast::BinaryOperator, interpreter::value::Value};

/// Applies a binary operator to two evaluated operands.
///
/// The operator table is strict about operand kinds, with no promotion:
///
/// - Int × Int: `+ - *` (wrapping), `/` (truncating; zero or overflowing
///   divisor yields `Void`), `< >` yield `Bool`.
/// - Float × Float: `+ - * /` yield `Float`; comparisons are undefined.
/// - Str × Str: `+` concatenates.
///
/// Every other pairing or undefined operator silently absorbs to `Void`.
#[must_use]
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> Value {
    match (left, right) {
        (Value::Int(l), Value::Int(r)) => eval_int(op, *l, *r),
        (Value::Float(l), Value::Float(r)) => eval_float(op, *l, *r),
        (Value::Str(l), Value::Str(r)) => match op {
            BinaryOperator::Add => Value::Str(format!("{l}{r}")),
            _ => Value::Void,
        },
        _ => Value::Void,
    }
}

fn eval_int(op: BinaryOperator, l: i64, r: i64) -> Value {
    match op {
        BinaryOperator::Add => Value::Int(l.wrapping_add(r)),
        BinaryOperator::Sub => Value::Int(l.wrapping_sub(r)),
        BinaryOperator::Mul => Value::Int(l.wrapping_mul(r)),
        BinaryOperator::Div => l.checked_div(r).map_or(Value::Void, Value::Int),
        BinaryOperator::Less => Value::Bool(l < r),
        BinaryOperator::Greater => Value::Bool(l > r),
    }
}

fn eval_float(op: BinaryOperator, l: f64, r: f64) -> Value {
    match op {
        BinaryOperator::Add => Value::Float(l + r),
        BinaryOperator::Sub => Value::Float(l - r),
        BinaryOperator::Mul => Value::Float(l * r),
        BinaryOperator::Div => Value::Float(l / r),
        BinaryOperator::Less | BinaryOperator::Greater => Value::Void,
    }
}

#[cfg(test)]
mod tests {
    use super::eval_binary;
    use crate::{ast::BinaryOperator, interpreter::value::Value};

    #[test]
    fn integer_division_truncates() {
        let result = eval_binary(BinaryOperator::Div, &Value::Int(7), &Value::Int(2));
        assert_eq!(result, Value::Int(3));
    }

    #[test]
    fn integer_division_by_zero_is_void() {
        let result = eval_binary(BinaryOperator::Div, &Value::Int(7), &Value::Int(0));
        assert_eq!(result, Value::Void);
    }

    #[test]
    fn mixed_operand_kinds_are_void() {
        let result = eval_binary(BinaryOperator::Add, &Value::Int(1), &Value::Float(1.5));
        assert_eq!(result, Value::Void);
    }

    #[test]
    fn string_addition_concatenates() {
        let result = eval_binary(BinaryOperator::Add,
                                 &Value::Str("a".to_string()),
                                 &Value::Str("b".to_string()));
        assert_eq!(result, Value::Str("ab".to_string()));
    }

    #[test]
    fn float_comparison_is_undefined() {
        let result = eval_binary(BinaryOperator::Less, &Value::Float(1.0), &Value::Float(2.0));
        assert_eq!(result, Value::Void);
    }

    #[test]
    fn integer_comparison_yields_bool() {
        let result = eval_binary(BinaryOperator::Greater, &Value::Int(3), &Value::Int(2));
        assert_eq!(result, Value::Bool(true));
    }
}
