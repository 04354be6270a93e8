/// The scanner itself.
///
/// Walks the source buffer byte by byte with one byte of lookahead,
/// producing tokens and lexical errors. Handles comments, the int-first
/// numeric rule, verbatim string literals, and the keyword
/// reclassification pass.
///
/// # Responsibilities
/// - Track 1-based line and column positions across every construct.
/// - Collect non-fatal errors and keep scanning; stop on fatal ones.
/// - Reclassify identifier tokens that spell keywords.
pub mod core;
/// Token definitions.
///
/// Declares `Span`, `TokenKind` and `Token`, the keyword table, and the
/// token dump used by `--dump-tokens`.
pub mod token;
