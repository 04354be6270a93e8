use std::io::{self, Write};

use crate::{
    ast::FunctionDef,
    interpreter::{arena::Arena, evaluator::builtin::Builtin, lexer::token::Span},
};

/// A reference to string bytes, either in the source or in the arena.
///
/// String values never own their bytes. A literal points straight into
/// the source buffer; anything built at evaluation time points into the
/// arena. Copying a string value therefore copies two words, regardless
/// of how long the string is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrRef {
    /// Bytes of a string literal, in place in the source.
    Source(Span),
    /// Bytes built at evaluation time, owned by the arena.
    Arena(Span),
}

impl StrRef {
    /// Length of the referenced string, in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Source(span) | Self::Arena(span) => span.len,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolves the reference against the buffer it points into.
    #[must_use]
    pub fn bytes<'b>(&self, source: &'b [u8], arena: &'b Arena) -> &'b [u8] {
        match self {
            Self::Source(span) => span.bytes(source),
            Self::Arena(span) => arena.get(*span),
        }
    }
}

/// Represents a runtime value in the interpreter.
///
/// This enum models all the types that can appear in expressions,
/// assignments, function returns, and conditions. Values are small and
/// `Copy`; strings are spans into a shared buffer and functions are
/// borrowed from the program tree, so nothing here owns heap storage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value<'a> {
    /// A 64 bit integer value.
    Integer(i64),
    /// A double precision floating-point value.
    Floating(f64),
    /// A string value, referenced rather than owned.
    Str(StrRef),
    /// A boolean value (`true` or `false`).
    Boolean(bool),
    /// The absent value.
    Null,
    /// A user-defined function, borrowed from the program tree.
    Function(&'a FunctionDef),
    /// A built-in function.
    Builtin(Builtin),
}

impl From<i64> for Value<'_> {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value<'_> {
    fn from(v: f64) -> Self {
        Self::Floating(v)
    }
}

impl From<bool> for Value<'_> {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl Value<'_> {
    /// The value's truth when used as a condition.
    ///
    /// Numbers are truthy when nonzero, strings when nonempty, and `null`
    /// is always falsy. Functions have no truth value, so using one as a
    /// condition is reported by the caller.
    #[must_use]
    pub fn truthiness(&self) -> Option<bool> {
        match self {
            Self::Integer(n) => Some(*n != 0),
            Self::Floating(x) => Some(*x != 0.0),
            Self::Str(s) => Some(!s.is_empty()),
            Self::Boolean(b) => Some(*b),
            Self::Null => Some(false),
            Self::Function(_) | Self::Builtin(_) => None,
        }
    }

    /// The value as an `f64` when it is numeric.
    ///
    /// Integers are promoted with a plain cast, so values beyond 2^53
    /// lose precision the same way a C double would.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_floating(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Floating(x) => Some(*x),
            _ => None,
        }
    }
}

/// Writes a value's textual form to `output`.
///
/// Integers print in decimal, floats with six fractional digits, booleans
/// as `true` or `false` and the absent value as `null`, each followed by
/// a newline. Strings print with their escape sequences processed and no
/// trailing newline. Functions print as a bracketed name.
///
/// # Errors
/// Any error from writing to `output`.
pub fn write_value(
    output: &mut dyn Write,
    value: Value<'_>,
    source: &[u8],
    arena: &Arena,
) -> io::Result<()> {
    match value {
        Value::Integer(n) => writeln!(output, "{n}"),
        Value::Floating(x) => writeln!(output, "{x:.6}"),
        Value::Str(s) => write_escaped(output, s.bytes(source, arena)),
        Value::Boolean(b) => writeln!(output, "{b}"),
        Value::Null => writeln!(output, "null"),
        Value::Function(def) => {
            output.write_all(b"<fn ")?;
            output.write_all(def.name.text(source))?;
            output.write_all(b">")
        },
        Value::Builtin(builtin) => {
            output.write_all(b"<builtin ")?;
            output.write_all(builtin.name().as_bytes())?;
            output.write_all(b">")
        },
    }
}

/// Writes string bytes with escape sequences processed.
///
/// A backslash followed by `n`, `t` or `r` produces the corresponding
/// control character. A backslash followed by any other byte produces
/// that byte unchanged, which also covers `\\` and `\"`. A trailing lone
/// backslash is written as-is.
///
/// # Errors
/// Any error from writing to `output`.
///
/// # Example
/// ```
/// use lume::interpreter::value::write_escaped;
///
/// let mut out = Vec::new();
/// write_escaped(&mut out, b"a\\tb\\x").unwrap();
/// assert_eq!(out, b"a\tbx");
/// ```
pub fn write_escaped(output: &mut dyn Write, bytes: &[u8]) -> io::Result<()> {
    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        if byte == b'\\' && i + 1 < bytes.len() {
            let escaped = match bytes[i + 1] {
                b'n' => b'\n',
                b't' => b'\t',
                b'r' => b'\r',
                other => other,
            };
            output.write_all(&[escaped])?;
            i += 2;
            continue;
        }
        output.write_all(&[byte])?;
        i += 1;
    }
    Ok(())
}
