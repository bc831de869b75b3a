use crate::interpreter::value::Value;

/// Renders a value for `cetak`.
///
/// Most values use their `Display` form. Strings whose first character is
/// `{` or `[` are assumed to carry structured data, such as a JSON body
/// from `http_get`, and pass through the structural indenter instead.
#[must_use]
pub fn render(value: &Value) -> String {
    match value {
        Value::Str(s) if s.starts_with('{') || s.starts_with('[') => indent_structural(s),
        other => other.to_string(),
    }
}

/// Re-indents bracketed text by bracket depth, two spaces per level.
///
/// Line breaks are inserted after `{` and `[`, before `}` and `]`, and
/// after `,`; a single space follows `:`. Quoted contents pass through
/// untouched. The input is never validated; unbalanced brackets simply
/// produce odd indentation.
fn indent_structural(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);
    let mut chars = text.chars().peekable();
    let mut depth: usize = 0;
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            result.push(c);
            if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => {
                result.push(c);
                in_string = true;
            },
            '{' | '[' => {
                depth += 1;
                result.push(c);
                break_line(&mut result, depth, &mut chars);
            },
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                break_line(&mut result, depth, &mut chars);
                result.push(c);
            },
            ',' => {
                result.push(c);
                break_line(&mut result, depth, &mut chars);
            },
            ':' => {
                result.push(c);
                result.push(' ');
                skip_spaces(&mut chars);
            },
            _ => result.push(c),
        }
    }

    result
}

fn break_line(result: &mut String,
              depth: usize,
              chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    result.push('\n');
    for _ in 0..depth {
        result.push_str("  ");
    }
    skip_spaces(chars);
}

fn skip_spaces(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    while chars.peek() == Some(&' ') {
        chars.next();
    }
}
