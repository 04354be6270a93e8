/// Numeric literal scanning helpers.
///
/// This module provides the low-level routines that decode integer and
/// floating-point literals from raw source bytes. The lexer uses them to
/// decide which kind of numeric token to emit, and the parser uses them
/// again to recover the literal's value from the token's text.
///
/// All functions are total: they return `None` instead of panicking when the
/// input does not start with a valid literal.
pub mod num;
