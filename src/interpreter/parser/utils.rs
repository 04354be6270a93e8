use crate::error::SyntaxError;
use crate::interpreter::lexer::token::{Token, TokenKind};
use crate::interpreter::parser::core::ParseResult;

/// A cursor over a token stream.
///
/// Wraps the token slice together with the source it was lexed from, so
/// literal decoding and diagnostics can resolve token text without the
/// source being threaded through every parsing function separately.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    /// The source buffer the tokens index into.
    pub source: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[must_use]
    pub const fn new(tokens: &'a [Token], source: &'a [u8]) -> Self {
        Self {
            tokens,
            source,
            pos: 0,
        }
    }

    /// The next token, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    /// Consumes and returns the next token.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Whether the next token has the given kind.
    #[must_use]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|token| token.kind == kind)
    }

    /// Consumes the next token when it has the given kind.
    pub fn matches(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            return self.advance();
        }
        None
    }

    /// Consumes the next token, which must have the given kind.
    ///
    /// # Errors
    /// [`SyntaxError::Expected`] naming `what` when the next token has a
    /// different kind, [`SyntaxError::UnexpectedEndOfInput`] when the
    /// stream is exhausted instead.
    pub fn expect(&mut self, kind: TokenKind, what: &'static str) -> ParseResult<Token> {
        match self.matches(kind) {
            Some(token) => Ok(token),
            None => Err(self.expected(what)),
        }
    }

    /// Builds the error for a construct expected at the current position
    /// but not found.
    #[must_use]
    pub fn expected(&self, what: &'static str) -> SyntaxError {
        match (self.peek(), self.tokens.last()) {
            (Some(found), _) => SyntaxError::Expected { what, found },
            (None, Some(last)) => SyntaxError::UnexpectedEndOfInput { token: *last },
            (None, None) => SyntaxError::EmptyProgram,
        }
    }
}
