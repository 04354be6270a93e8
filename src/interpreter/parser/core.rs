use crate::{
    ast::{Expr, Program},
    error::SyntaxError,
    interpreter::{
        lexer::token::{Token, TokenKind},
        parser::{binary::parse_logical_or, statement::parse_statement, utils::Cursor},
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a token stream into a program.
///
/// This is the entry point for parsing. Statements are parsed one after
/// another until the stream is exhausted; parsing is strict and
/// non-recovering, so the first syntax error aborts the whole parse.
///
/// Grammar: `program := statement+`
///
/// # Parameters
/// - `tokens`: The token stream produced by the lexer.
/// - `source`: The source buffer the tokens index into.
///
/// # Returns
/// The parsed program.
///
/// # Errors
/// - `EmptyProgram` when the stream holds no tokens at all.
/// - Any error raised while parsing a statement.
///
/// # Example
/// ```
/// use lume::interpreter::lexer::core::tokenize;
/// use lume::interpreter::parser::core::parse;
///
/// let source = b"var x = 1;\nprint(x);";
/// let (tokens, _) = tokenize(source);
/// let program = parse(&tokens, source).unwrap();
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse(tokens: &[Token], source: &[u8]) -> ParseResult<Program> {
    if tokens.is_empty() {
        return Err(SyntaxError::EmptyProgram);
    }

    let mut cursor = Cursor::new(tokens, source);
    let mut statements = Vec::new();
    while cursor.peek().is_some() {
        statements.push(parse_statement(&mut cursor)?);
    }

    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through
/// the precedence hierarchy.
///
/// Grammar: `expression := assignment`
pub fn parse_expression(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    parse_assignment(cursor)
}

/// Parses an assignment expression.
///
/// Assignment is right-associative, so `a = b = c` parses as `a = (b = c)`.
/// The left-hand side is parsed as an ordinary expression first; when an
/// `=` follows, that expression must turn out to be a bare identifier.
///
/// Grammar: `assignment := logical_or ("=" assignment)?`
///
/// # Errors
/// `AssignmentTarget` when the left-hand side of an `=` is anything other
/// than an identifier.
fn parse_assignment(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let expr = parse_logical_or(cursor)?;

    if cursor.matches(TokenKind::Equals).is_some() {
        return match expr {
            Expr::Identifier { token } => {
                let value = parse_assignment(cursor)?;
                Ok(Expr::Assignment {
                    target: token,
                    value: Box::new(value),
                })
            },
            _ => Err(SyntaxError::AssignmentTarget {
                found: expr.token(),
            }),
        };
    }

    Ok(expr)
}
