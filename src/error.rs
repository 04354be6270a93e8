/// Lexical errors.
///
/// Defines the errors the lexer can raise while scanning raw source bytes:
/// unterminated strings (fatal) and unknown characters (skipped). Each
/// carries the position and span of the offending input.
pub mod lex_error;
/// Diagnostic rendering.
///
/// Turns errors into leveled, colorized reports on the interpreter's output
/// stream. Span-anchored diagnostics reproduce the offending source line
/// with a caret run; spanless ones use a plain `[LEVEL] message` form.
pub mod report;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: type
/// mismatches, undefined references, bad calls, division by zero, and
/// builtin argument errors. Each is anchored to the token being evaluated.
pub mod runtime_error;
/// Syntax errors.
///
/// Defines all error types the parser can produce. Parsing is strict and
/// non-recovering, so each error also marks the end of the parse.
pub mod syntax_error;

pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;
