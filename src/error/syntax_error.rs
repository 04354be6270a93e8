use crate::error::report::Reportable;
use crate::interpreter::lexer::token::{Span, Token};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Represents all errors that can occur while parsing tokens into a program.
///
/// Parsing is strict and non-recovering, so the first error aborts the
/// whole parse and carries the token it tripped over for anchoring.
pub enum SyntaxError {
    /// A specific construct was expected but something else was found.
    Expected {
        /// What the parser was looking for.
        what: &'static str,
        /// The token encountered instead.
        found: Token,
    },
    /// The left-hand side of an assignment was not a bare identifier.
    AssignmentTarget {
        /// The first token of the offending expression.
        found: Token,
    },
    /// A function parameter was not a bare identifier.
    ParameterName {
        /// The token encountered in parameter position.
        found: Token,
    },
    /// A block was opened but never closed.
    UnclosedBlock {
        /// The opening brace.
        token: Token,
    },
    /// A `while` statement was encountered; the construct is recognized
    /// but has no implementation.
    WhileUnsupported {
        /// The `while` keyword.
        token: Token,
    },
    /// The token stream ended in the middle of a construct.
    UnexpectedEndOfInput {
        /// The last token of the stream.
        token: Token,
    },
    /// A numeric literal's text could not be decoded.
    InvalidNumber {
        /// The offending literal token.
        found: Token,
    },
    /// The token stream was empty.
    EmptyProgram,
}

impl SyntaxError {
    /// The token the error is anchored to, if any.
    #[must_use]
    pub const fn token(&self) -> Option<Token> {
        match self {
            Self::Expected { found, .. }
            | Self::AssignmentTarget { found }
            | Self::ParameterName { found }
            | Self::InvalidNumber { found } => Some(*found),
            Self::UnclosedBlock { token }
            | Self::WhileUnsupported { token }
            | Self::UnexpectedEndOfInput { token } => Some(*token),
            Self::EmptyProgram => None,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expected { what, found } => {
                write!(
                    f,
                    "Error on line {}: Expected {what}, found {:?}.",
                    found.line, found.kind
                )
            },

            Self::AssignmentTarget { found } => {
                write!(
                    f,
                    "Error on line {}: Assignment target must be an identifier.",
                    found.line
                )
            },

            Self::ParameterName { found } => {
                write!(
                    f,
                    "Error on line {}: Function parameters must be plain identifiers.",
                    found.line
                )
            },

            Self::UnclosedBlock { token } => {
                write!(f, "Error on line {}: Unclosed block.", token.line)
            },

            Self::WhileUnsupported { token } => {
                write!(
                    f,
                    "Error on line {}: While loops are not implemented.",
                    token.line
                )
            },

            Self::UnexpectedEndOfInput { token } => {
                write!(f, "Error on line {}: Unexpected end of input.", token.line)
            },

            Self::InvalidNumber { found } => {
                write!(f, "Error on line {}: Invalid numeric literal.", found.line)
            },

            Self::EmptyProgram => write!(f, "Error: The program contains no statements."),
        }
    }
}

impl std::error::Error for SyntaxError {}

impl Reportable for SyntaxError {
    fn span(&self) -> Option<Span> {
        self.token().map(|token| token.span)
    }
}
