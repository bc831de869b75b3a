use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Builtin, DataType, Expr, LiteralValue},
    error::ParseError,
    interpreter::lexer::{Pos, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// Binary expressions form a single undifferentiated precedence tier and
/// are right-recursive, so chains group to the right: `10 - 2 - 3` parses
/// as `10 - (2 - 3)`.
///
/// Grammar: `expression := primary (("+" | "-" | "*" | "/" | "<" | ">") expression)?`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Pos)` pairs.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Propagates any error from primary parsing or from the right operand.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let left = parse_primary(tokens)?;

    let op = match tokens.peek() {
        Some((Token::Plus, _)) => BinaryOperator::Add,
        Some((Token::Minus, _)) => BinaryOperator::Sub,
        Some((Token::Star, _)) => BinaryOperator::Mul,
        Some((Token::Slash, _)) => BinaryOperator::Div,
        Some((Token::Less, _)) => BinaryOperator::Less,
        Some((Token::Greater, _)) => BinaryOperator::Greater,
        _ => return Ok(left),
    };
    tokens.next();

    let line = left.line_number();
    let right = parse_expression(tokens)?;

    Ok(Expr::BinaryOp { left: Box::new(left),
                        op,
                        right: Box::new(right),
                        line })
}

/// Parses a primary expression: a literal, a variable reference, an array
/// allocation, an indexed read, or a builtin call.
///
/// Only identifiers on the builtin whitelist are treated as calls; any
/// other identifier followed by `(` is a plain variable reference and the
/// `(` then fails the surrounding grammar.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the primary.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Returns a `ParseError` if no primary form starts here or the input ends.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(x), pos)) => Ok(Expr::Literal { value: LiteralValue::Int(*x),
                                                             line:  pos.line, }),
        Some((Token::Float(x), pos)) => Ok(Expr::Literal { value: LiteralValue::Float(*x),
                                                           line:  pos.line, }),
        Some((Token::Str(s), pos)) => Ok(Expr::Literal { value: LiteralValue::Str(s.clone()),
                                                         line:  pos.line, }),
        Some((Token::Benar, pos)) => Ok(Expr::Literal { value: LiteralValue::Bool(true),
                                                        line:  pos.line, }),
        Some((Token::Salah, pos)) => Ok(Expr::Literal { value: LiteralValue::Bool(false),
                                                        line:  pos.line, }),
        Some((Token::Array, pos)) => parse_array_alloc(tokens, pos.line),
        Some((Token::Identifier(name), pos)) => parse_identifier_expr(tokens, name, pos.line),
        Some((tok, pos)) => {
            Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                              line:  pos.line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses the tail of an `array` allocation, positioned after the `array`
/// keyword.
///
/// Grammar: `alloc := "array" "[" expression "]" (":" type)?`
///
/// Without the `:` suffix the element kind defaults to `int`.
fn parse_array_alloc<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    expect_token(tokens, &Token::LBracket, "'['")?;
    let size = parse_expression(tokens)?;
    expect_token(tokens, &Token::RBracket, "']'")?;

    let elem = match tokens.peek() {
        Some((Token::Colon, _)) => {
            tokens.next();
            parse_data_type(tokens)?
        },
        _ => DataType::Int,
    };

    Ok(Expr::ArrayAlloc { elem,
                          size: Box::new(size),
                          line })
}

/// Parses the tail of an expression that began with an identifier: a
/// builtin call, an indexed read, or a bare variable reference.
fn parse_identifier_expr<'a, I>(tokens: &mut Peekable<I>,
                                name: &str,
                                line: usize)
                                -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    if let Some(builtin) = Builtin::from_name(name) {
        if matches!(tokens.peek(), Some((Token::LParen, _))) {
            tokens.next();
            let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;

            return Ok(Expr::BuiltinCall { builtin,
                                          arguments,
                                          line });
        }
    }

    if matches!(tokens.peek(), Some((Token::LBracket, _))) {
        tokens.next();
        let index = parse_expression(tokens)?;
        expect_token(tokens, &Token::RBracket, "']'")?;

        return Ok(Expr::ArrayIndex { name: name.to_string(),
                                     index: Box::new(index),
                                     line });
    }

    Ok(Expr::Variable { name: name.to_string(),
                        line })
}

/// Consumes one token and checks that it equals `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected token.
/// - `expected`: The token that must appear next.
/// - `description`: Human-readable rendering used in the error message.
///
/// # Returns
/// The position of the consumed token.
///
/// # Errors
/// Returns a `ParseError` if a different token is found or the input ends.
pub fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                           expected: &Token,
                           description: &'static str)
                           -> ParseResult<Pos>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    match tokens.next() {
        Some((tok, pos)) if tok == expected => Ok(*pos),
        Some((tok, pos)) => Err(ParseError::ExpectedToken { expected: description,
                                                            found: format!("{tok:?}"),
                                                            line: pos.line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a plain identifier and returns its name with its position.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the
/// input ends.
pub fn parse_identifier<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(String, Pos)>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    match tokens.next() {
        Some((Token::Identifier(s), pos)) => Ok((s.clone(), *pos)),
        Some((tok, pos)) => {
            Err(ParseError::ExpectedToken { expected: "an identifier",
                                            found: format!("{tok:?}"),
                                            line: pos.line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a type keyword: `int`, `float`, `bool` or `str`.
///
/// # Errors
/// Returns a `ParseError` if the next token is not a type keyword or the
/// input ends.
pub fn parse_data_type<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<DataType>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    match tokens.next() {
        Some((Token::TypeInt, _)) => Ok(DataType::Int),
        Some((Token::TypeFloat, _)) => Ok(DataType::Float),
        Some((Token::TypeBool, _)) => Ok(DataType::Bool),
        Some((Token::TypeStr, _)) => Ok(DataType::Str),
        Some((tok, pos)) => {
            Err(ParseError::ExpectedToken { expected: "a type",
                                            found: format!("{tok:?}"),
                                            line: pos.line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// Shared by builtin argument lists and parameter lists. It repeatedly
/// calls `parse_item` to parse one element, expecting either a comma to
/// continue the list or the closing token to end it. An immediately
/// encountered closing token produces an empty list. The closing token is
/// consumed.
///
/// Grammar (simplified): `list := (item ("," item)*)?`
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, an unexpected token is
/// encountered, or the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let mut items = Vec::new();

    if let Some((tok, _)) = tokens.peek() {
        if *tok == *closing {
            tokens.next();

            return Ok(items);
        }
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            Some((tok, pos)) => {
                return Err(ParseError::ExpectedToken { expected: "',' or a closing delimiter",
                                                       found: format!("{tok:?}"),
                                                       line: pos.line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }

    Ok(items)
}
