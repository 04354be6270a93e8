use crate::{
    ast::{Expr, FunctionDef, Statement},
    error::SyntaxError,
    interpreter::{
        lexer::token::{Token, TokenKind},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::Cursor,
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a block,
/// - an `if` statement,
/// - a `return` statement,
/// - a variable declaration,
/// - a function declaration,
/// - an expression followed by `;`.
///
/// The dispatch looks at the next token's kind. A `while` keyword is
/// recognized but reported as unsupported.
///
/// # Parameters
/// - `cursor`: Token cursor positioned at the start of a statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement(cursor: &mut Cursor<'_>) -> ParseResult<Statement> {
    match cursor.peek() {
        Some(token) => match token.kind {
            TokenKind::LeftBrace => {
                cursor.advance();
                parse_block(cursor, token)
            },
            TokenKind::KwIf => {
                cursor.advance();
                parse_if(cursor, token)
            },
            TokenKind::KwReturn => {
                cursor.advance();
                parse_return(cursor, token)
            },
            TokenKind::KwVar => {
                cursor.advance();
                parse_var(cursor, token)
            },
            TokenKind::KwFn => {
                cursor.advance();
                parse_fn(cursor, token)
            },
            TokenKind::KwWhile => Err(SyntaxError::WhileUnsupported { token }),
            _ => {
                let expr = parse_expression(cursor)?;
                cursor.expect(TokenKind::Semicolon, "';' after expression")?;
                Ok(Statement::Expression { expr })
            },
        },
        None => Err(cursor.expected("a statement")),
    }
}

/// Parses an `if` statement with an optional `else`.
///
/// Syntax:
/// ```text
///     if (<condition>) <statement>
///     else <statement>
/// ```
/// Each branch is a full statement, so `else if` chains fall out of an
/// `if` statement being the else branch.
///
/// # Parameters
/// - `cursor`: Token cursor positioned after the `if` keyword.
/// - `token`: The consumed `if` keyword.
///
/// # Errors
/// `Expected` when the parenthesized condition is malformed, plus any
/// error from parsing the branch statements.
fn parse_if(cursor: &mut Cursor<'_>, token: Token) -> ParseResult<Statement> {
    cursor.expect(TokenKind::LeftParen, "'(' after 'if'")?;
    let condition = parse_expression(cursor)?;
    cursor.expect(TokenKind::RightParen, "')' after condition")?;

    let then_branch = Box::new(parse_statement(cursor)?);
    let else_branch = if cursor.matches(TokenKind::KwElse).is_some() {
        Some(Box::new(parse_statement(cursor)?))
    } else {
        None
    };

    Ok(Statement::If {
        condition,
        then_branch,
        else_branch,
        token,
    })
}

/// Parses a `return` statement.
///
/// A bare `return;` returns `null`; the synthesized literal is anchored
/// at the keyword.
///
/// Grammar: `return := "return" expression? ";"`
fn parse_return(cursor: &mut Cursor<'_>, token: Token) -> ParseResult<Statement> {
    let value = if cursor.check(TokenKind::Semicolon) {
        Expr::Null { token }
    } else {
        parse_expression(cursor)?
    };
    cursor.expect(TokenKind::Semicolon, "';' after return value")?;

    Ok(Statement::Return { value, token })
}

/// Parses a variable declaration.
///
/// A declaration without an initializer binds the name to `null`.
///
/// Grammar: `var := "var" identifier ("=" expression)? ";"`
fn parse_var(cursor: &mut Cursor<'_>, token: Token) -> ParseResult<Statement> {
    let name = cursor.expect(TokenKind::Identifier, "an identifier after 'var'")?;

    let value = if cursor.matches(TokenKind::Equals).is_some() {
        parse_expression(cursor)?
    } else {
        Expr::Null { token }
    };
    cursor.expect(TokenKind::Semicolon, "';' after declaration")?;

    Ok(Statement::Var { name, value, token })
}

/// Parses a function declaration.
///
/// The body is a single statement, conventionally a block. No terminating
/// semicolon follows the body.
///
/// Grammar: `fn := "fn" identifier "(" (identifier ("," identifier)*)? ")" statement`
///
/// # Errors
/// - `Expected` for a missing name or malformed parameter list.
/// - `ParameterName` when a parameter is not a bare identifier.
fn parse_fn(cursor: &mut Cursor<'_>, token: Token) -> ParseResult<Statement> {
    let name = cursor.expect(TokenKind::Identifier, "a function name")?;
    cursor.expect(TokenKind::LeftParen, "'(' after function name")?;

    let mut params = Vec::new();
    if !cursor.check(TokenKind::RightParen) {
        loop {
            match cursor.peek() {
                Some(param) if param.kind == TokenKind::Identifier => {
                    cursor.advance();
                    params.push(param);
                },
                Some(param) => return Err(SyntaxError::ParameterName { found: param }),
                None => return Err(cursor.expected("a parameter name")),
            }
            if cursor.matches(TokenKind::Comma).is_none() {
                break;
            }
        }
    }
    cursor.expect(TokenKind::RightParen, "')' after parameters")?;

    let body = Box::new(parse_statement(cursor)?);

    Ok(Statement::Fn(FunctionDef {
        name,
        params,
        body,
        token,
    }))
}
