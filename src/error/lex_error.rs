use crate::error::report::Reportable;
use crate::interpreter::lexer::token::Span;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Represents all errors the lexer can produce while scanning source bytes.
pub enum LexError {
    /// A string literal reached the end of the source without its closing
    /// quote. Fatal: tokenization stops where this happened.
    UnterminatedString {
        /// From the opening quote to the end of the source.
        span: Span,
        /// The source line of the opening quote.
        line: usize,
        /// The source column of the opening quote.
        column: usize,
    },
    /// A byte no lexical rule recognizes. Non-fatal: the byte is skipped
    /// and scanning continues.
    UnknownCharacter {
        /// The offending byte.
        byte: u8,
        /// The byte's position in the source.
        span: Span,
        /// The source line of the byte.
        line: usize,
        /// The source column of the byte.
        column: usize,
    },
}

impl LexError {
    /// Whether this error stopped tokenization.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::UnterminatedString { .. })
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString { line, column, .. } => {
                write!(f, "Error on line {line}: Unterminated string starting at column {column}.")
            },

            Self::UnknownCharacter { byte, line, .. } => {
                write!(f, "Error on line {line}: Unknown character '{}'.", char::from(*byte))
            },
        }
    }
}

impl std::error::Error for LexError {}

impl Reportable for LexError {
    fn span(&self) -> Option<Span> {
        match self {
            Self::UnterminatedString { span, .. } | Self::UnknownCharacter { span, .. } => {
                Some(*span)
            },
        }
    }
}
