/// Parser entry points.
///
/// Contains the program-level parse loop, the expression entry point, and
/// assignment handling, the lowest precedence level.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence ladder for all binary operators, from
/// logical OR down to the multiplicative level, plus the token-to-operator
/// mappings.
pub mod binary;

/// Unary, call and primary parsing.
///
/// Handles prefix operators, postfix argument lists, grouping, and
/// literal decoding.
pub mod unary;

/// Block parsing.
///
/// Parses brace-delimited statement sequences and reports unclosed
/// blocks against their opening brace.
pub mod block;

/// Statement parsing.
///
/// Dispatches on the leading token to parse declarations, conditionals,
/// returns, blocks, and expression statements.
pub mod statement;

/// The token cursor shared by all parsing functions.
pub mod utils;
