use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::token::TokenKind,
        parser::{core::ParseResult, unary::parse_unary, utils::Cursor},
    },
};

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `||` (also spelled `or`). This is
/// the lowest binary precedence level; assignment alone binds looser.
///
/// Grammar: `logical_or := logical_and ("||" logical_and)*`
///
/// # Parameters
/// - `cursor`: Token cursor positioned at the left operand.
///
/// # Returns
/// A binary expression tree with `BinaryOperator::Or` nodes.
pub fn parse_logical_or(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_logical_and(cursor)?;
    loop {
        if let Some(token) = cursor.peek()
            && let Some(op) = token_to_binary_operator(token.kind)
            && matches!(op, BinaryOperator::Or)
        {
            cursor.advance();
            let right = parse_logical_and(cursor)?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                token,
            };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `&&` (also spelled `and`).
/// Precedence is just above logical OR.
///
/// Grammar: `logical_and := bitwise_or ("&&" bitwise_or)*`
pub fn parse_logical_and(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_bitwise_or(cursor)?;
    loop {
        if let Some(token) = cursor.peek()
            && let Some(op) = token_to_binary_operator(token.kind)
            && matches!(op, BinaryOperator::And)
        {
            cursor.advance();
            let right = parse_bitwise_or(cursor)?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                token,
            };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses bitwise OR expressions.
///
/// Grammar: `bitwise_or := bitwise_xor ("|" bitwise_xor)*`
pub fn parse_bitwise_or(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_bitwise_xor(cursor)?;
    loop {
        if let Some(token) = cursor.peek()
            && let Some(op) = token_to_binary_operator(token.kind)
            && matches!(op, BinaryOperator::BitOr)
        {
            cursor.advance();
            let right = parse_bitwise_xor(cursor)?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                token,
            };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses bitwise XOR expressions.
///
/// Grammar: `bitwise_xor := bitwise_and ("^" bitwise_and)*`
pub fn parse_bitwise_xor(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_bitwise_and(cursor)?;
    loop {
        if let Some(token) = cursor.peek()
            && let Some(op) = token_to_binary_operator(token.kind)
            && matches!(op, BinaryOperator::BitXor)
        {
            cursor.advance();
            let right = parse_bitwise_and(cursor)?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                token,
            };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses bitwise AND expressions.
///
/// Grammar: `bitwise_and := equality ("&" equality)*`
pub fn parse_bitwise_and(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_equality(cursor)?;
    loop {
        if let Some(token) = cursor.peek()
            && let Some(op) = token_to_binary_operator(token.kind)
            && matches!(op, BinaryOperator::BitAnd)
        {
            cursor.advance();
            let right = parse_equality(cursor)?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                token,
            };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses equality expressions.
///
/// Handles left-associative chains of `==` and `!=`.
///
/// Grammar: `equality := relational (("==" | "!=") relational)*`
pub fn parse_equality(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_relational(cursor)?;
    loop {
        if let Some(token) = cursor.peek()
            && let Some(op) = token_to_binary_operator(token.kind)
            && matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
        {
            cursor.advance();
            let right = parse_relational(cursor)?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                token,
            };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses relational expressions.
///
/// This level handles the ordering comparisons `<`, `>`, `<=` and `>=`,
/// left-associatively.
///
/// Grammar: `relational := shift (("<" | ">" | "<=" | ">=") shift)*`
pub fn parse_relational(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_shift(cursor)?;
    loop {
        if let Some(token) = cursor.peek()
            && let Some(op) = token_to_binary_operator(token.kind)
            && is_relational_op(op)
        {
            cursor.advance();
            let right = parse_shift(cursor)?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                token,
            };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses shift expressions.
///
/// Grammar: `shift := additive (("<<" | ">>") additive)*`
pub fn parse_shift(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_additive(cursor)?;
    loop {
        if let Some(token) = cursor.peek()
            && let Some(op) = token_to_binary_operator(token.kind)
            && matches!(op, BinaryOperator::ShiftLeft | BinaryOperator::ShiftRight)
        {
            cursor.advance();
            let right = parse_additive(cursor)?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                token,
            };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles the left-associative binary operators `+` and `-`.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `cursor`: Token cursor positioned at the left operand.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_additive(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_multiplicative(cursor)?;
    loop {
        if let Some(token) = cursor.peek()
            && let Some(op) = token_to_binary_operator(token.kind)
            && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            cursor.advance();
            let right = parse_multiplicative(cursor)?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                token,
            };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles the left-associative operators `*`, `/` and `%`. This is the
/// tightest binary level; anything tighter is a unary or call expression.
///
/// Grammar: `multiplicative := unary (("*" | "/" | "%") unary)*`
pub fn parse_multiplicative(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_unary(cursor)?;
    loop {
        if let Some(token) = cursor.peek()
            && let Some(op) = token_to_binary_operator(token.kind)
            && matches!(
                op,
                BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod
            )
        {
            cursor.advance();
            let right = parse_unary(cursor)?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                token,
            };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the kind represents a binary
/// operator (arithmetic, comparison, logical, bitwise, or shift) and
/// `None` for all other kinds.
///
/// # Example
/// ```
/// use lume::ast::BinaryOperator;
/// use lume::interpreter::lexer::token::TokenKind;
/// use lume::interpreter::parser::binary::token_to_binary_operator;
///
/// assert_eq!(
///     token_to_binary_operator(TokenKind::Plus),
///     Some(BinaryOperator::Add)
/// );
/// assert_eq!(token_to_binary_operator(TokenKind::Semicolon), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Percent => Some(BinaryOperator::Mod),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::AmpAmp => Some(BinaryOperator::And),
        TokenKind::PipePipe => Some(BinaryOperator::Or),
        TokenKind::Amp => Some(BinaryOperator::BitAnd),
        TokenKind::Pipe => Some(BinaryOperator::BitOr),
        TokenKind::Caret => Some(BinaryOperator::BitXor),
        TokenKind::ShiftLeft => Some(BinaryOperator::ShiftLeft),
        TokenKind::ShiftRight => Some(BinaryOperator::ShiftRight),
        _ => None,
    }
}

/// Determines whether a binary operator belongs to the ordering class.
///
/// # Example
/// ```
/// use lume::ast::BinaryOperator;
/// use lume::interpreter::parser::binary::is_relational_op;
///
/// assert!(is_relational_op(BinaryOperator::Less));
/// assert!(is_relational_op(BinaryOperator::GreaterEqual));
/// assert!(!is_relational_op(BinaryOperator::Equal));
/// ```
#[must_use]
pub const fn is_relational_op(op: BinaryOperator) -> bool {
    matches!(
        op,
        BinaryOperator::Less
            | BinaryOperator::Greater
            | BinaryOperator::LessEqual
            | BinaryOperator::GreaterEqual
    )
}
