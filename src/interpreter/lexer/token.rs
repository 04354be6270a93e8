use std::fmt::Write as _;
use std::ops::Range;

/// A non-owning `(offset, length)` reference into a byte buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub offset: usize,
    pub len: usize,
}

impl Span {
    #[must_use]
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// The half-open byte range this span covers.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }

    /// Resolves the span against its backing buffer.
    #[must_use]
    pub fn bytes<'b>(&self, buffer: &'b [u8]) -> &'b [u8] {
        &buffer[self.range()]
    }
}

/// The kind tag of a [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// The addition operator `+`.
    Plus,
    /// The subtraction operator `-`.
    Minus,
    /// The multiplication operator `*`.
    Star,
    /// The division operator `/`.
    Slash,
    /// The modulo operator `%`.
    Percent,
    /// The assignment operator `=`.
    Equals,
    /// The equality operator `==`.
    EqualEqual,
    /// The logical negation operator `!`, also spelled `not`.
    Bang,
    /// The inequality operator `!=`.
    BangEqual,
    /// The comparison operator `<`.
    Less,
    /// The comparison operator `<=`.
    LessEqual,
    /// The left shift operator `<<`.
    ShiftLeft,
    /// The comparison operator `>`.
    Greater,
    /// The comparison operator `>=`.
    GreaterEqual,
    /// The right shift operator `>>`.
    ShiftRight,
    /// The bitwise and operator `&`.
    Amp,
    /// The logical and operator `&&`, also spelled `and`.
    AmpAmp,
    /// The bitwise or operator `|`.
    Pipe,
    /// The logical or operator `||`, also spelled `or`.
    PipePipe,
    /// The bitwise xor operator `^`.
    Caret,
    /// The bitwise not operator `~`.
    Tilde,
    /// An opening parenthesis.
    LeftParen,
    /// A closing parenthesis.
    RightParen,
    /// An opening brace.
    LeftBrace,
    /// A closing brace.
    RightBrace,
    /// An opening bracket.
    LeftBracket,
    /// A closing bracket.
    RightBracket,
    /// The statement terminator `;`.
    Semicolon,
    /// The list separator `,`.
    Comma,
    /// A dot `.`.
    Dot,
    /// A colon `:`.
    Colon,
    /// A question mark `?`.
    Question,
    /// An arrow `->`.
    Arrow,
    /// An integer literal.
    Integer,
    /// A floating-point literal.
    Float,
    /// A string literal; the span excludes the quotes.
    Str,
    /// An identifier.
    Identifier,
    /// The reserved type keyword `int`.
    KwInt,
    /// The reserved type keyword `boolean`.
    KwBoolean,
    /// The reserved type keyword `string`.
    KwString,
    /// The literal `true`.
    KwTrue,
    /// The literal `false`.
    KwFalse,
    /// The literal `null`.
    KwNull,
    /// The `if` keyword.
    KwIf,
    /// The `else` keyword.
    KwElse,
    /// The `while` keyword.
    KwWhile,
    /// The `var` keyword.
    KwVar,
    /// The `fn` keyword.
    KwFn,
    /// The `return` keyword.
    KwReturn,
}

/// Keyword spellings and the kinds identifier tokens matching them take on.
///
/// `and`, `or` and `not` are alternate spellings of `&&`, `||` and `!`, so
/// they map to the operator kinds rather than to kinds of their own.
const KEYWORDS: [(&[u8], TokenKind); 15] = [
    (b"int", TokenKind::KwInt),
    (b"boolean", TokenKind::KwBoolean),
    (b"string", TokenKind::KwString),
    (b"true", TokenKind::KwTrue),
    (b"false", TokenKind::KwFalse),
    (b"null", TokenKind::KwNull),
    (b"if", TokenKind::KwIf),
    (b"else", TokenKind::KwElse),
    (b"while", TokenKind::KwWhile),
    (b"var", TokenKind::KwVar),
    (b"fn", TokenKind::KwFn),
    (b"return", TokenKind::KwReturn),
    (b"and", TokenKind::AmpAmp),
    (b"or", TokenKind::PipePipe),
    (b"not", TokenKind::Bang),
];

/// Looks up the keyword kind for an identifier's text, if any.
#[must_use]
pub fn keyword_kind(text: &[u8]) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(spelling, _)| *spelling == text)
        .map(|(_, kind)| *kind)
}

/// One lexical unit: a kind plus its source span and position.
///
/// Line and column are 1-based. A string literal's span excludes its quotes
/// while its column names the opening quote, so diagnostics underline the
/// literal from where it starts in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub line: usize,
    pub column: usize,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span, line: usize, column: usize) -> Self {
        Self {
            kind,
            span,
            line,
            column,
        }
    }

    /// The token's text in `source`.
    #[must_use]
    pub fn text<'b>(&self, source: &'b [u8]) -> &'b [u8] {
        self.span.bytes(source)
    }
}

/// Renders one descriptive line per token.
///
/// # Example
/// ```
/// use lume::interpreter::lexer::core::tokenize;
/// use lume::interpreter::lexer::token::dump_tokens;
///
/// let source = b"var x = 1;";
/// let (tokens, errors) = tokenize(source);
/// assert!(errors.is_empty());
///
/// let dump = dump_tokens(&tokens, source);
/// assert!(dump.starts_with("token 0: kind=KwVar, lexeme=var, line=1, column=1"));
/// ```
#[must_use]
pub fn dump_tokens(tokens: &[Token], source: &[u8]) -> String {
    let mut out = String::new();
    for (index, token) in tokens.iter().enumerate() {
        let lexeme = String::from_utf8_lossy(token.text(source));
        let _ = writeln!(
            out,
            "token {index}: kind={:?}, lexeme={lexeme}, line={}, column={}",
            token.kind, token.line, token.column
        );
    }
    out
}
