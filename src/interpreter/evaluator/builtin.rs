use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        lexer::token::Token,
        value::{StrRef, Value, write_value},
    },
};

/// Identifies a built-in function.
///
/// Builtins are ordinary values bound in the global scope, so they can
/// be passed around, shadowed by user declarations, and printed like any
/// other value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Builtin {
    /// `print(args...)`: writes each argument's textual form.
    Print,
    /// `input(args...)`: prompts like `print`, then reads one line.
    Input,
    /// `length(s)`: byte length of a string.
    Length,
}

impl Builtin {
    /// The name the builtin is bound to.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Print => "print",
            Self::Input => "input",
            Self::Length => "length",
        }
    }
}

/// Binds the builtins in a root environment.
///
/// Registration is idempotent: when `print` is already bound, the
/// environment has been populated before and is left alone. A non-root
/// environment is never touched, so user scopes cannot be polluted by a
/// nested evaluation.
pub fn register(env: &mut Environment<'_>) {
    if !env.is_global() || env.get(b"print").is_some() {
        return;
    }
    for builtin in [Builtin::Print, Builtin::Input, Builtin::Length] {
        env.declare(builtin.name(), Value::Builtin(builtin));
    }
}

/// Dispatches a builtin call with already-evaluated arguments.
///
/// # Errors
/// Whatever the builtin itself raises; errors are anchored at the
/// call-site token.
pub fn call<'p>(
    ev: &mut Evaluator<'_>,
    builtin: Builtin,
    args: &[Value<'p>],
    token: Token,
) -> EvalResult<Value<'p>> {
    match builtin {
        Builtin::Print => Ok(print(ev, args)),
        Builtin::Input => Ok(input(ev, args)),
        Builtin::Length => length(args, token),
    }
}

/// Writes the arguments separated by single spaces, then flushes.
///
/// Stream errors are swallowed; printing to a closed pipe does not abort
/// the program.
fn write_args(ev: &mut Evaluator<'_>, args: &[Value<'_>]) {
    for (index, value) in args.iter().enumerate() {
        if index > 0 {
            let _ = ev.output.write_all(b" ");
        }
        let _ = write_value(&mut *ev.output, *value, ev.source, &ev.arena);
    }
    let _ = ev.output.flush();
}

/// `print(args...)`: prints the arguments and yields `null`.
fn print<'p>(ev: &mut Evaluator<'_>, args: &[Value<'p>]) -> Value<'p> {
    write_args(ev, args);
    Value::Null
}

/// `input(args...)`: prints the arguments as a prompt, then reads one
/// line from the input stream.
///
/// The result is the line's bytes, without the trailing newline or a
/// carriage return preceding it, copied into the arena. End of input and
/// read failures both yield `null`.
fn input<'p>(ev: &mut Evaluator<'_>, args: &[Value<'p>]) -> Value<'p> {
    write_args(ev, args);

    let mut line = Vec::new();
    match ev.input.read_until(b'\n', &mut line) {
        Ok(0) | Err(_) => return Value::Null,
        Ok(_) => {},
    }

    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }

    let span = ev.arena.alloc(&line);
    Value::Str(StrRef::Arena(span))
}

/// `length(s)`: the byte length of a string, as an integer.
///
/// # Errors
/// `ArityMismatch` unless called with exactly one argument,
/// `ExpectedString` when that argument is not a string.
fn length<'p>(args: &[Value<'p>], token: Token) -> EvalResult<Value<'p>> {
    match args {
        [Value::Str(s)] => {
            let len = i64::try_from(s.len()).unwrap_or(i64::MAX);
            Ok(Value::Integer(len))
        },
        [_] => Err(RuntimeError::ExpectedString { token }),
        _ => Err(RuntimeError::ArityMismatch {
            expected: 1,
            found: args.len(),
            token,
        }),
    }
}
