/// The arena module owns storage for strings built at run time.
///
/// Concatenation results and input lines live here, addressed by span so
/// the buffer can grow freely behind handed-out references.
pub mod arena;
/// The environment module tracks name bindings.
///
/// Implements the scope stack: declaration, shadowing, lookup from the
/// innermost scope outward, and reassignment of existing bindings.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages variable state,
/// and drives the interpreter's I/O. It is the core execution engine.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, scopes, and control flow.
/// - Reports runtime errors such as division by zero or invalid
///   operations.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source bytes and produces a stream of tokens,
/// each corresponding to a meaningful language element such as a number,
/// identifier, operator, delimiter, or keyword. This is the first stage
/// of interpretation.
///
/// # Responsibilities
/// - Converts the input byte stream into tokens with kind and source
///   location.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of
/// expressions and statements.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar, reporting the first error with its location.
/// - Supports arithmetic, function declarations, calls, assignments, and
///   control flow.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum used during execution, the string reference
/// type backing it, truthiness coercion, and the textual form printed
/// values take.
pub mod value;
