use std::iter::Peekable;

use crate::{
    ast::{DataType, Function, Parameter, Program},
    error::ParseError,
    interpreter::{
        lexer::{Pos, Token},
        parser::{
            core::{
                expect_token, parse_comma_separated, parse_data_type, parse_identifier,
                ParseResult,
            },
            statement::parse_block,
        },
    },
};

/// Parses a whole script: zero or more top-level function definitions.
///
/// # Parameters
/// - `tokens`: Token iterator over the full token stream.
///
/// # Returns
/// The program root holding every function in declaration order.
///
/// # Errors
/// Returns a `ParseError` if anything other than a function definition
/// appears at the top level, or if a function fails to parse.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let mut functions = Vec::new();

    while tokens.peek().is_some() {
        functions.push(parse_function(tokens)?);
    }

    Ok(Program { functions })
}

/// Parses one function definition.
///
/// Grammar:
/// ```text
///     function := header identifier "(" params ")" "{" block "}"
///     header   := "bikin" "fungsi"
///               | "fungsi"
///               | "fungsi_int" | "fungsi_float" | "fungsi_bool" | "fungsi_str"
///     params   := (param ("," param)*)?
///     param    := identifier ":" type
/// ```
///
/// The typed `fungsi_*` headers record a return type; `bikin fungsi` and
/// plain `fungsi` record none. Parameters are recorded in the tree but
/// never bound at run time.
///
/// # Errors
/// Returns a `ParseError` on any header, parameter or body mismatch.
pub fn parse_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Function>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let (return_type, line) = match tokens.next() {
        Some((Token::Bikin, pos)) => {
            expect_token(tokens, &Token::Fungsi, "'fungsi'")?;
            (None, pos.line)
        },
        Some((Token::Fungsi, pos)) => (None, pos.line),
        Some((Token::FungsiInt, pos)) => (Some(DataType::Int), pos.line),
        Some((Token::FungsiFloat, pos)) => (Some(DataType::Float), pos.line),
        Some((Token::FungsiBool, pos)) => (Some(DataType::Bool), pos.line),
        Some((Token::FungsiStr, pos)) => (Some(DataType::Str), pos.line),
        Some((tok, pos)) => {
            return Err(ParseError::ExpectedToken { expected: "a function header",
                                                   found: format!("{tok:?}"),
                                                   line: pos.line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    let (name, _) = parse_identifier(tokens)?;
    expect_token(tokens, &Token::LParen, "'('")?;
    let params = parse_comma_separated(tokens, parse_param, &Token::RParen)?;
    expect_token(tokens, &Token::LBrace, "'{'")?;
    let body = parse_block(tokens)?;

    Ok(Function { name,
                  return_type,
                  params,
                  body,
                  line })
}

/// `identifier ":" type`
fn parse_param<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Parameter>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let (name, _) = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Colon, "':'")?;
    let data_type = parse_data_type(tokens)?;

    Ok(Parameter { name, data_type })
}
