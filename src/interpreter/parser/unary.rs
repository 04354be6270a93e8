use crate::{
    ast::{Expr, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::token::TokenKind,
        parser::{
            core::{ParseResult, parse_expression},
            utils::Cursor,
        },
    },
    util::num::{scan_float, scan_integer},
};

/// Parses a unary expression.
///
/// Supports the prefix operators `+`, `-`, `!` (also spelled `not`) and
/// `~`. Unary operators are right-associative, so an input like `!-x`
/// parses as `!(-x)`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_call`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-" | "!" | "~") unary
///            | call
/// ```
///
/// # Parameters
/// - `cursor`: Token cursor positioned at a possible prefix operator.
///
/// # Returns
/// An `Expr::Unary` node, or whatever `parse_call` produces.
pub fn parse_unary(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    if let Some(token) = cursor.peek()
        && let Some(op) = token_to_unary_operator(token.kind)
    {
        cursor.advance();
        let operand = parse_unary(cursor)?;
        return Ok(Expr::Unary {
            op,
            operand: Box::new(operand),
            token,
        });
    }
    parse_call(cursor)
}

/// Maps a token kind to its corresponding unary operator.
///
/// # Example
/// ```
/// use lume::ast::UnaryOperator;
/// use lume::interpreter::lexer::token::TokenKind;
/// use lume::interpreter::parser::unary::token_to_unary_operator;
///
/// assert_eq!(
///     token_to_unary_operator(TokenKind::Bang),
///     Some(UnaryOperator::Not)
/// );
/// assert_eq!(token_to_unary_operator(TokenKind::Star), None);
/// ```
#[must_use]
pub const fn token_to_unary_operator(kind: TokenKind) -> Option<UnaryOperator> {
    match kind {
        TokenKind::Plus => Some(UnaryOperator::Plus),
        TokenKind::Minus => Some(UnaryOperator::Minus),
        TokenKind::Bang => Some(UnaryOperator::Not),
        TokenKind::Tilde => Some(UnaryOperator::BitNot),
        _ => None,
    }
}

/// Parses a call expression.
///
/// After the callee, any number of argument lists may follow, so
/// `f(1)(2)` parses as a call whose callee is itself a call. Arguments
/// are full expressions separated by commas; an empty list is allowed.
///
/// The resulting node is anchored at the callee's token, so call-time
/// diagnostics underline the called name rather than the parenthesis.
///
/// Grammar:
/// ```text
///     call := primary ("(" (expression ("," expression)*)? ")")*
/// ```
///
/// # Errors
/// `Expected` when an argument list is not closed with `)`.
pub fn parse_call(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let mut expr = parse_primary(cursor)?;

    while cursor.matches(TokenKind::LeftParen).is_some() {
        let mut args = Vec::new();
        if !cursor.check(TokenKind::RightParen) {
            loop {
                args.push(parse_expression(cursor)?);
                if cursor.matches(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }
        cursor.expect(TokenKind::RightParen, "')' after arguments")?;

        let token = expr.token();
        expr = Expr::Call {
            callee: Box::new(expr),
            args,
            token,
        };
    }

    Ok(expr)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar: literals,
/// identifiers, and parenthesized expressions. A parenthesized expression
/// returns the inner expression as-is, with no wrapper node.
///
/// Grammar:
/// ```text
///     primary := "(" expression ")"
///              | literal
/// ```
pub fn parse_primary(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    if cursor.matches(TokenKind::LeftParen).is_some() {
        let expr = parse_expression(cursor)?;
        cursor.expect(TokenKind::RightParen, "')' after expression")?;
        return Ok(expr);
    }
    parse_literal(cursor)
}

/// Parses a literal or identifier.
///
/// Supported forms: integer, float and string literals, `true`, `false`,
/// `null`, and identifiers. Numeric literals are decoded here from their
/// lexeme; the lexer has already bounded the lexeme to a valid shape, so
/// decoding failures indicate a literal that does not fit the value
/// range rules.
///
/// # Errors
/// - `InvalidNumber` when a numeric lexeme cannot be decoded in full.
/// - `Expected` describing "an expression" for any other token kind.
pub fn parse_literal(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    match cursor.peek() {
        Some(token) => match token.kind {
            TokenKind::Integer => {
                cursor.advance();
                let text = token.text(cursor.source);
                match scan_integer(text) {
                    Some((value, len)) if len == text.len() => Ok(Expr::Integer { value, token }),
                    _ => Err(SyntaxError::InvalidNumber { found: token }),
                }
            },
            TokenKind::Float => {
                cursor.advance();
                let text = token.text(cursor.source);
                match scan_float(text) {
                    Some((value, len)) if len == text.len() => Ok(Expr::Float { value, token }),
                    _ => Err(SyntaxError::InvalidNumber { found: token }),
                }
            },
            TokenKind::Str => {
                cursor.advance();
                Ok(Expr::Str { token })
            },
            TokenKind::KwTrue => {
                cursor.advance();
                Ok(Expr::Boolean { value: true, token })
            },
            TokenKind::KwFalse => {
                cursor.advance();
                Ok(Expr::Boolean {
                    value: false,
                    token,
                })
            },
            TokenKind::KwNull => {
                cursor.advance();
                Ok(Expr::Null { token })
            },
            TokenKind::Identifier => {
                cursor.advance();
                Ok(Expr::Identifier { token })
            },
            _ => Err(cursor.expected("an expression")),
        },
        None => Err(cursor.expected("an expression")),
    }
}
