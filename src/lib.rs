//! # lume
//!
//! lume is a tree-walking interpreter for the Lume scripting language.
//! It tokenizes, parses, and evaluates scripts with support for variables,
//! functions, strings, blocks, and conditional control flow.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use crate::{
    error::{
        LexError,
        report::{self, Level},
    },
    interpreter::{
        arena::Arena,
        environment::Environment,
        evaluator::core::Evaluator,
        lexer::core::tokenize,
        parser::core::parse,
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches anchor tokens to AST nodes for error reporting.
/// - Provides the indented tree dump used for debugging parsed code.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while running a script.
/// It standardizes error reporting and carries detailed information about
/// failures, including error kinds, descriptions, and source locations for
/// debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches anchor tokens and positions for context.
/// - Renders diagnostics as leveled, colorized reports on an output stream.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and all supporting infrastructure to provide a complete
/// runtime for Lume scripts.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for tokenizing, parsing, and evaluating user
///   code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities shared across phases.
///
/// This module provides reusable helpers used by more than one stage of the
/// interpreter, currently the numeric literal scanners shared between the
/// lexer and the parser.
///
/// # Responsibilities
/// - Scan integer literals in decimal, hexadecimal, and octal notation.
/// - Scan floating-point literals with optional exponents.
pub mod util;

/// Runs a script from source bytes to an exit code.
///
/// This function drives the full pipeline: tokenize, parse, evaluate. Every
/// diagnostic along the way is rendered on `output`, anchored to the
/// offending source location where one is known. Non-fatal lexical errors
/// are reported and skipped; a fatal one stops the run.
///
/// The returned code follows shell conventions: a final `Integer` value
/// becomes the exit code (truncated to `i32`), any reported fatal error
/// yields 1, and every other result yields 0.
///
/// # Parameters
/// - `source`: the entire script as raw bytes.
/// - `filename`: the name shown in diagnostics.
/// - `input`: the stream the `input` builtin reads from.
/// - `output`: the stream for program output and diagnostics.
/// - `color`: whether diagnostics use ANSI colors.
///
/// # Example
/// ```
/// use lume::run_script;
///
/// let mut input = std::io::empty();
/// let mut output = Vec::new();
///
/// let code = run_script(b"return 2 + 3;", "demo.lm", &mut input, &mut output, false);
/// assert_eq!(code, 5);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn run_script(
    source: &[u8],
    filename: &str,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    color: bool,
) -> i32 {
    if source.is_empty() {
        report::emit_plain(output, Level::Error, "Source file is empty.", color);
        return 1;
    }

    let (tokens, lex_errors) = tokenize(source);
    for error in &lex_errors {
        report::emit(output, source, filename, error, color);
    }
    if lex_errors.iter().any(LexError::is_fatal) {
        return 1;
    }

    let program = match parse(&tokens, source) {
        Ok(program) => program,
        Err(error) => {
            report::emit(output, source, filename, &error, color);
            return 1;
        },
    };

    let mut env = Environment::new();
    let mut evaluator =
        Evaluator::with_io(source, Arena::new(), Box::new(&mut *input), Box::new(&mut *output));
    let result = evaluator.evaluate(&program, &mut env);
    drop(evaluator);

    match result {
        Ok(Value::Integer(code)) => code as i32,
        Ok(_) => 0,
        Err(error) => {
            report::emit(output, source, filename, &error, color);
            1
        },
    }
}
