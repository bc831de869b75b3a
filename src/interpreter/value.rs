/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments and array elements. Arrays are homogeneous and fixed-size:
/// the live `Vec` length is the array's size for its whole lifetime.
/// `Void` is the absorbing result of every non-fatal misuse (type
/// mismatch, out-of-range access, failed HTTP request).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value.
    Void,
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit float.
    Float(f64),
    /// A boolean value (`benar` or `salah`).
    Bool(bool),
    /// An owned string.
    Str(String),
    /// A fixed-size array of integers.
    ArrayInt(Vec<i64>),
    /// A fixed-size array of floats.
    ArrayFloat(Vec<f64>),
    /// A fixed-size array of booleans.
    ArrayBool(Vec<bool>),
    /// A fixed-size array of strings.
    ArrayStr(Vec<String>),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Void => write!(f, "void"),

            Self::Int(x) => write!(f, "{x}"),

            Self::Float(x) => write!(f, "{x:.6}"),

            Self::Bool(true) => write!(f, "benar"),
            Self::Bool(false) => write!(f, "salah"),

            Self::Str(s) => write!(f, "{s}"),

            Self::ArrayInt(items) => write_array(f, items, |x| x.to_string()),
            Self::ArrayFloat(items) => write_array(f, items, |x| format!("{x:.6}")),
            Self::ArrayBool(items) => write_array(f, items, |x| Self::Bool(*x).to_string()),
            Self::ArrayStr(items) => write_array(f, items, Clone::clone),
        }
    }
}

fn write_array<T>(f: &mut std::fmt::Formatter<'_>,
                  items: &[T],
                  render: impl Fn(&T) -> String)
                  -> std::fmt::Result {
    let rendered: Vec<String> = items.iter().map(render).collect();

    write!(f, "[{}]", rendered.join(", "))
}
