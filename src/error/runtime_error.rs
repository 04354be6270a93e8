use crate::error::report::Reportable;
use crate::interpreter::lexer::token::{Span, Token};

#[derive(Clone, Debug, PartialEq)]
/// Represents all errors that can be raised during evaluation.
///
/// Every variant is anchored to the token of the construct being evaluated
/// when it was raised. Propagation is immediate and final: no evaluation
/// rule recovers from an error produced by one of its sub-evaluations.
pub enum RuntimeError {
    /// Looked up a name with no binding anywhere in the scope chain.
    UndefinedReference {
        /// The name that failed to resolve.
        name: String,
        /// The identifier token.
        token: Token,
    },
    /// An operator was applied to operand types it is not defined for.
    TypeMismatch {
        /// A human-readable name of the operation.
        operation: &'static str,
        /// The operator token.
        token: Token,
    },
    /// Division with a zero divisor.
    DivisionByZero {
        /// The `/` token.
        token: Token,
    },
    /// Modulo with a zero divisor.
    ModuloByZero {
        /// The `%` token.
        token: Token,
    },
    /// Called a value that is not a function.
    NotCallable {
        /// The call's callee token.
        token: Token,
    },
    /// Called a function with the wrong number of arguments.
    ArityMismatch {
        /// The declared parameter count.
        expected: usize,
        /// The argument count supplied.
        found: usize,
        /// The call's callee token.
        token: Token,
    },
    /// Coerced a value with no truthiness (a function) to a condition.
    InvalidCondition {
        /// The condition or operator token.
        token: Token,
    },
    /// A builtin needed a string argument but got something else.
    ExpectedString {
        /// The call's callee token.
        token: Token,
    },
}

impl RuntimeError {
    /// The token the error is anchored to.
    #[must_use]
    pub const fn token(&self) -> Token {
        match self {
            Self::UndefinedReference { token, .. }
            | Self::TypeMismatch { token, .. }
            | Self::DivisionByZero { token }
            | Self::ModuloByZero { token }
            | Self::NotCallable { token }
            | Self::ArityMismatch { token, .. }
            | Self::InvalidCondition { token }
            | Self::ExpectedString { token } => *token,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedReference { name, token } => {
                write!(f, "Error on line {}: Undefined reference '{name}'.", token.line)
            },

            Self::TypeMismatch { operation, token } => {
                write!(
                    f,
                    "Error on line {}: Incompatible operand types for {operation}.",
                    token.line
                )
            },

            Self::DivisionByZero { token } => {
                write!(f, "Error on line {}: Division by zero.", token.line)
            },

            Self::ModuloByZero { token } => {
                write!(f, "Error on line {}: Modulo by zero.", token.line)
            },

            Self::NotCallable { token } => {
                write!(f, "Error on line {}: Value is not callable.", token.line)
            },

            Self::ArityMismatch {
                expected,
                found,
                token,
            } => {
                write!(
                    f,
                    "Error on line {}: Expected {expected} arguments, found {found}.",
                    token.line
                )
            },

            Self::InvalidCondition { token } => {
                write!(
                    f,
                    "Error on line {}: Value cannot be used as a condition.",
                    token.line
                )
            },

            Self::ExpectedString { token } => {
                write!(f, "Error on line {}: Expected a string argument.", token.line)
            },
        }
    }
}

impl std::error::Error for RuntimeError {}

impl Reportable for RuntimeError {
    fn span(&self) -> Option<Span> {
        Some(self.token().span)
    }
}
