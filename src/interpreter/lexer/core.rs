use crate::error::LexError;
use crate::interpreter::lexer::token::{Span, Token, TokenKind, keyword_kind};
use crate::util::num::{scan_float, scan_integer};

/// Cursor state for one scan over a source buffer.
///
/// The lexer walks the buffer byte by byte, tracking 1-based line and
/// column positions. It never looks ahead more than one byte.
pub struct Lexer<'a> {
    source: &'a [u8],
    pos: usize,
    line: usize,
    column: usize,
}

/// Scans `source` into tokens.
///
/// Scanning is best-effort: an unknown character is recorded and skipped,
/// while an unterminated string is fatal and stops the scan. In both cases
/// every token collected so far is returned, so callers can still dump or
/// otherwise inspect the partial stream.
///
/// After the main scan, identifier tokens whose text exactly matches a
/// keyword are reclassified to the keyword's kind.
///
/// # Example
/// ```
/// use lume::interpreter::lexer::core::tokenize;
/// use lume::interpreter::lexer::token::TokenKind;
///
/// let (tokens, errors) = tokenize(b"var answer = 41 + 1;");
/// assert!(errors.is_empty());
///
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, vec![
///     TokenKind::KwVar,
///     TokenKind::Identifier,
///     TokenKind::Equals,
///     TokenKind::Integer,
///     TokenKind::Plus,
///     TokenKind::Integer,
///     TokenKind::Semicolon,
/// ]);
/// ```
#[must_use]
pub fn tokenize(source: &[u8]) -> (Vec<Token>, Vec<LexError>) {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    while let Some(byte) = lexer.peek() {
        match byte {
            b'\n' => lexer.newline(),
            b' ' | b'\t' | b'\r' => lexer.bump(),
            b'#' => lexer.skip_until(b'\n'),
            b'0'..=b'9' => lexer.scan_number(&mut tokens),
            b'"' | b'\'' => {
                if let Err(error) = lexer.scan_string(byte, &mut tokens) {
                    errors.push(error);
                    break;
                }
            },
            _ if byte.is_ascii_alphabetic() || byte == b'_' => {
                lexer.scan_identifier(&mut tokens);
            },
            _ => {
                if let Some(token) = lexer.scan_operator() {
                    tokens.push(token);
                } else {
                    errors.push(LexError::UnknownCharacter {
                        byte,
                        span: Span::new(lexer.pos, 1),
                        line: lexer.line,
                        column: lexer.column,
                    });
                    lexer.bump();
                }
            },
        }
    }

    for token in &mut tokens {
        if token.kind == TokenKind::Identifier
            && let Some(kind) = keyword_kind(token.span.bytes(source))
        {
            token.kind = kind;
        }
    }

    (tokens, errors)
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub const fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn peek_next(&self) -> Option<u8> {
        self.source.get(self.pos + 1).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
        self.column += 1;
    }

    fn advance_by(&mut self, count: usize) {
        self.pos += count;
        self.column += count;
    }

    fn newline(&mut self) {
        self.pos += 1;
        self.line += 1;
        self.column = 1;
    }

    /// Skips bytes until `target` (exclusive), keeping positions up to date
    /// across newlines.
    fn skip_until(&mut self, target: u8) {
        while let Some(byte) = self.peek() {
            if byte == target {
                return;
            }
            if byte == b'\n' {
                self.newline();
            } else {
                self.bump();
            }
        }
    }

    /// Scans a numeric literal starting at the current digit.
    ///
    /// The integer scan runs first; the literal only becomes a float when
    /// the byte right after the integer part is a dot. That keeps `1e5` an
    /// integer followed by an identifier, while `1.5e2` is a single float.
    fn scan_number(&mut self, tokens: &mut Vec<Token>) {
        let start = self.pos;
        let line = self.line;
        let column = self.column;
        let rest = &self.source[start..];

        if let Some((_, consumed)) = scan_integer(rest)
            && rest.get(consumed) != Some(&b'.')
        {
            self.advance_by(consumed);
            tokens.push(Token::new(
                TokenKind::Integer,
                Span::new(start, consumed),
                line,
                column,
            ));
            return;
        }

        if let Some((_, consumed)) = scan_float(rest) {
            self.advance_by(consumed);
            tokens.push(Token::new(
                TokenKind::Float,
                Span::new(start, consumed),
                line,
                column,
            ));
        }
    }

    /// Scans a string literal delimited by `quote`.
    ///
    /// The content is taken verbatim (escape sequences are processed when a
    /// value is printed, not here), so the scan is a plain run to the next
    /// matching quote. Content may span newlines.
    fn scan_string(&mut self, quote: u8, tokens: &mut Vec<Token>) -> Result<(), LexError> {
        let line = self.line;
        let column = self.column;
        let opening = self.pos;
        self.bump();

        let start = self.pos;
        self.skip_until(quote);

        if self.peek().is_none() {
            return Err(LexError::UnterminatedString {
                span: Span::new(opening, self.source.len() - opening),
                line,
                column,
            });
        }

        tokens.push(Token::new(
            TokenKind::Str,
            Span::new(start, self.pos - start),
            line,
            column,
        ));
        self.bump();
        Ok(())
    }

    fn scan_identifier(&mut self, tokens: &mut Vec<Token>) {
        let start = self.pos;
        let line = self.line;
        let column = self.column;

        while self
            .peek()
            .is_some_and(|byte| byte.is_ascii_alphanumeric() || byte == b'_')
        {
            self.bump();
        }

        tokens.push(Token::new(
            TokenKind::Identifier,
            Span::new(start, self.pos - start),
            line,
            column,
        ));
    }

    /// Scans an operator or punctuation token, with one byte of lookahead
    /// for the two-character forms.
    fn scan_operator(&mut self) -> Option<Token> {
        let byte = self.peek()?;
        let start = self.pos;
        let line = self.line;
        let column = self.column;

        let (kind, len) = match byte {
            b'+' => (TokenKind::Plus, 1),
            b'-' => match self.peek_next() {
                Some(b'>') => (TokenKind::Arrow, 2),
                _ => (TokenKind::Minus, 1),
            },
            b'*' => (TokenKind::Star, 1),
            b'/' => (TokenKind::Slash, 1),
            b'%' => (TokenKind::Percent, 1),
            b'=' => match self.peek_next() {
                Some(b'=') => (TokenKind::EqualEqual, 2),
                _ => (TokenKind::Equals, 1),
            },
            b'!' => match self.peek_next() {
                Some(b'=') => (TokenKind::BangEqual, 2),
                _ => (TokenKind::Bang, 1),
            },
            b'<' => match self.peek_next() {
                Some(b'=') => (TokenKind::LessEqual, 2),
                Some(b'<') => (TokenKind::ShiftLeft, 2),
                _ => (TokenKind::Less, 1),
            },
            b'>' => match self.peek_next() {
                Some(b'=') => (TokenKind::GreaterEqual, 2),
                Some(b'>') => (TokenKind::ShiftRight, 2),
                _ => (TokenKind::Greater, 1),
            },
            b'&' => match self.peek_next() {
                Some(b'&') => (TokenKind::AmpAmp, 2),
                _ => (TokenKind::Amp, 1),
            },
            b'|' => match self.peek_next() {
                Some(b'|') => (TokenKind::PipePipe, 2),
                _ => (TokenKind::Pipe, 1),
            },
            b'^' => (TokenKind::Caret, 1),
            b'~' => (TokenKind::Tilde, 1),
            b'(' => (TokenKind::LeftParen, 1),
            b')' => (TokenKind::RightParen, 1),
            b'{' => (TokenKind::LeftBrace, 1),
            b'}' => (TokenKind::RightBrace, 1),
            b'[' => (TokenKind::LeftBracket, 1),
            b']' => (TokenKind::RightBracket, 1),
            b';' => (TokenKind::Semicolon, 1),
            b',' => (TokenKind::Comma, 1),
            b'.' => (TokenKind::Dot, 1),
            b':' => (TokenKind::Colon, 1),
            b'?' => (TokenKind::Question, 1),
            _ => return None,
        };

        self.advance_by(len);
        Some(Token::new(kind, Span::new(start, len), line, column))
    }
}
