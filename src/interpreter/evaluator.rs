/// Core evaluation logic and state.
///
/// Contains the evaluator itself, statement and expression dispatch,
/// control flow handling, and error propagation.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations, including arithmetic,
/// string concatenation, comparisons, logical operators, and the bitwise
/// family.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the prefix operators: identity, negation, and bitwise
/// complement.
pub mod unary;

/// Call evaluation.
///
/// Handles user-defined function calls, argument evaluation order, arity
/// checking, and call scope management.
pub mod call;

/// Built-in functions.
///
/// Declares the builtins, their registration into the global scope, and
/// their implementations.
pub mod builtin;
