use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Pos, Token},
        parser::core::{
            expect_token, parse_expression, parse_identifier, ParseResult,
        },
    },
};

/// Parses one statement.
///
/// Dispatches on the leading token:
///
/// - `isi` begins a variable declaration,
/// - `cetak` begins a print statement,
/// - `kembali` begins a return statement,
/// - `kalo` begins a conditional,
/// - `ulang` begins a loop,
/// - an identifier begins an assignment or an indexed assignment.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a statement.
///
/// # Returns
/// The parsed statement node.
///
/// # Errors
/// Returns a `ParseError` if no statement form starts here or the input
/// ends.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    match tokens.next() {
        Some((Token::Isi, pos)) => parse_variable_decl(tokens, pos.line),
        Some((Token::Cetak, pos)) => parse_print(tokens, pos.line),
        Some((Token::Kembali, pos)) => parse_return(tokens, pos.line),
        Some((Token::Kalo, pos)) => parse_if(tokens, pos.line),
        Some((Token::Ulang, pos)) => parse_while(tokens, pos.line),
        Some((Token::Identifier(name), pos)) => parse_assignment(tokens, name, pos.line),
        Some((tok, pos)) => {
            Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                              line:  pos.line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a block of statements up to a closing `}`.
///
/// The `{` must already have been consumed; the `}` is consumed here.
///
/// # Errors
/// Returns a `ParseError` if a statement fails to parse or the input ends
/// before the closing brace.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let mut body = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();

                return Ok(body);
            },
            Some(_) => body.push(parse_statement(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }
}

/// `isi name = expression ;` with the `isi` already consumed.
fn parse_variable_decl<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let (name, _) = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Equals, "'='")?;
    let value = parse_expression(tokens)?;
    expect_token(tokens, &Token::Semicolon, "';'")?;

    Ok(Statement::VariableDecl { name, value, line })
}

/// `cetak ( expression ) ;` with the `cetak` already consumed.
fn parse_print<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    expect_token(tokens, &Token::LParen, "'('")?;
    let value = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "')'")?;
    expect_token(tokens, &Token::Semicolon, "';'")?;

    Ok(Statement::Print { value, line })
}

/// `kembali expression ;` with the `kembali` already consumed.
fn parse_return<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let value = parse_expression(tokens)?;
    expect_token(tokens, &Token::Semicolon, "';'")?;

    Ok(Statement::Return { value, line })
}

/// `kalo ( name > integer ) { block }` with the `kalo` already consumed.
///
/// The condition is restricted to exactly this shape; any other operand or
/// operator is a parse error.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    expect_token(tokens, &Token::LParen, "'('")?;
    let (name, pos) = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Greater, "'>'")?;

    let threshold = match tokens.next() {
        Some((Token::Integer(x), pos)) => Expr::Literal { value: LiteralValue::Int(*x),
                                                          line:  pos.line, },
        Some((tok, pos)) => {
            return Err(ParseError::ExpectedToken { expected: "an integer literal",
                                                   found: format!("{tok:?}"),
                                                   line: pos.line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    expect_token(tokens, &Token::RParen, "')'")?;
    expect_token(tokens, &Token::LBrace, "'{'")?;
    let body = parse_block(tokens)?;

    let condition = Expr::BinaryOp { left: Box::new(Expr::Variable { name,
                                                                     line: pos.line }),
                                     op: BinaryOperator::Greater,
                                     right: Box::new(threshold),
                                     line };

    Ok(Statement::If { condition,
                       body,
                       line })
}

/// `ulang ( expression ) { block }` with the `ulang` already consumed.
fn parse_while<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    expect_token(tokens, &Token::LParen, "'('")?;
    let condition = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "')'")?;
    expect_token(tokens, &Token::LBrace, "'{'")?;
    let body = parse_block(tokens)?;

    Ok(Statement::While { condition,
                          body,
                          line })
}

/// `name = expression ;` or `name [ index ] = expression ;` with the
/// identifier already consumed.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>,
                           name: &str,
                           line: usize)
                           -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    if matches!(tokens.peek(), Some((Token::LBracket, _))) {
        tokens.next();
        let index = parse_expression(tokens)?;
        expect_token(tokens, &Token::RBracket, "']'")?;
        expect_token(tokens, &Token::Equals, "'='")?;
        let value = parse_expression(tokens)?;
        expect_token(tokens, &Token::Semicolon, "';'")?;

        return Ok(Statement::ArrayAssign { name: name.to_string(),
                                           index,
                                           value,
                                           line });
    }

    expect_token(tokens, &Token::Equals, "'='")?;
    let value = parse_expression(tokens)?;
    expect_token(tokens, &Token::Semicolon, "';'")?;

    Ok(Statement::Assignment { name: name.to_string(),
                               value,
                               line })
}
