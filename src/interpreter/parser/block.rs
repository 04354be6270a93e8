use crate::{
    ast::Statement,
    error::SyntaxError,
    interpreter::{
        lexer::token::{Token, TokenKind},
        parser::{core::ParseResult, statement::parse_statement, utils::Cursor},
    },
};

/// Parses a block statement delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until a
/// closing `}` token is encountered; running out of tokens first reports
/// the block as unclosed, anchored at the opening brace.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `cursor`: Token cursor positioned after the opening brace.
/// - `open`: The opening brace, kept as the block's anchor.
///
/// # Returns
/// A `Statement::Block` containing all parsed statements.
pub fn parse_block(cursor: &mut Cursor<'_>, open: Token) -> ParseResult<Statement> {
    let mut statements = Vec::new();

    loop {
        if cursor.matches(TokenKind::RightBrace).is_some() {
            break;
        }
        if cursor.peek().is_none() {
            return Err(SyntaxError::UnclosedBlock { token: open });
        }
        statements.push(parse_statement(cursor)?);
    }

    Ok(Statement::Block {
        statements,
        token: open,
    })
}
