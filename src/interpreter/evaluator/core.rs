use std::io::{self, BufRead, Write};

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        arena::Arena,
        environment::Environment,
        evaluator::builtin,
        lexer::token::Token,
        value::{StrRef, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Control flow outcome of a statement.
///
/// Statements normally complete with a value; a `return` travels outward
/// as its own flow so enclosing constructs can decide whether to stop or
/// to absorb it.
#[derive(Clone, Copy, Debug)]
pub enum Flow<'p> {
    /// Ordinary completion.
    Value(Value<'p>),
    /// A `return` propagating outward.
    Return(Value<'p>),
}

impl<'p> Flow<'p> {
    /// The carried value, whichever way control flowed.
    #[must_use]
    pub const fn into_value(self) -> Value<'p> {
        match self {
            Self::Value(value) | Self::Return(value) => value,
        }
    }
}

/// The tree-walking evaluator.
///
/// Owns the string arena and both ends of the interpreter's I/O: the
/// stream `input` reads lines from and the stream printed values and
/// prompts are written to. The source buffer is shared with the lexer's
/// output so string literals can be referenced in place instead of
/// copied.
///
/// Evaluation methods borrow the program tree under a lifetime of their
/// own, so the values they produce stay usable while the evaluator moves
/// on or is dropped.
pub struct Evaluator<'a> {
    pub(crate) source: &'a [u8],
    pub(crate) arena: Arena,
    pub(crate) input: Box<dyn BufRead + 'a>,
    pub(crate) output: Box<dyn Write + 'a>,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator wired to standard input and output.
    #[must_use]
    pub fn new(source: &'a [u8], arena: Arena) -> Self {
        Self {
            source,
            arena,
            input: Box::new(io::stdin().lock()),
            output: Box::new(io::stdout()),
        }
    }

    /// Creates an evaluator with explicit streams.
    ///
    /// The runner uses this to share its output stream with diagnostics;
    /// tests use it to capture what a program printed.
    #[must_use]
    pub fn with_io(
        source: &'a [u8],
        arena: Arena,
        input: Box<dyn BufRead + 'a>,
        output: Box<dyn Write + 'a>,
    ) -> Self {
        Self {
            source,
            arena,
            input,
            output,
        }
    }

    /// The arena backing evaluated strings.
    #[must_use]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Resolves a string value to its bytes.
    pub(crate) fn str_bytes(&self, s: StrRef) -> &[u8] {
        s.bytes(self.source, &self.arena)
    }

    /// Coerces a value to its truth, reporting values that have none.
    pub(crate) fn truthy(value: Value<'_>, token: Token) -> EvalResult<bool> {
        value
            .truthiness()
            .ok_or(RuntimeError::InvalidCondition { token })
    }

    /// Evaluates a whole program in `env`.
    ///
    /// Builtins are registered into a fresh root environment first. Every
    /// top-level statement runs, even after a top-level `return`; the
    /// result of the last one, unwrapped from any `return` flow, becomes
    /// the program's result.
    ///
    /// # Errors
    /// The first `RuntimeError` raised by any statement.
    pub fn evaluate<'p>(
        &mut self,
        program: &'p Program,
        env: &mut Environment<'p>,
    ) -> EvalResult<Value<'p>> {
        builtin::register(env);

        let mut last = Value::Null;
        for statement in &program.statements {
            last = self.eval_statement(statement, env)?.into_value();
        }
        Ok(last)
    }

    /// Evaluates a single statement.
    ///
    /// # Errors
    /// Any `RuntimeError` raised while evaluating the statement.
    pub fn eval_statement<'p>(
        &mut self,
        statement: &'p Statement,
        env: &mut Environment<'p>,
    ) -> EvalResult<Flow<'p>> {
        match statement {
            Statement::Expression { expr } => {
                let value = self.eval_expression(expr, env)?;
                Ok(Flow::Value(value))
            },
            Statement::Block { statements, .. } => self.eval_block(statements, env),
            Statement::If {
                condition,
                then_branch,
                else_branch,
                token,
            } => self.eval_if(condition, then_branch, else_branch.as_deref(), *token, env),
            Statement::Return { value, .. } => {
                let value = self.eval_expression(value, env)?;
                Ok(Flow::Return(value))
            },
            Statement::Var { name, value, .. } => {
                let value = self.eval_expression(value, env)?;
                let name = String::from_utf8_lossy(name.text(self.source));
                env.declare(&name, value);
                Ok(Flow::Value(Value::Null))
            },
            Statement::Fn(def) => {
                let name = String::from_utf8_lossy(def.name.text(self.source));
                env.declare(&name, Value::Function(def));
                Ok(Flow::Value(Value::Function(def)))
            },
        }
    }

    /// Evaluates the statements of a block inside a fresh scope.
    ///
    /// A `return` flow stops the block immediately and propagates
    /// unchanged; otherwise the block yields `null`. The scope is popped
    /// on every exit path, the error path included.
    fn eval_block<'p>(
        &mut self,
        statements: &'p [Statement],
        env: &mut Environment<'p>,
    ) -> EvalResult<Flow<'p>> {
        env.push_scope();

        let mut flow = Flow::Value(Value::Null);
        for statement in statements {
            match self.eval_statement(statement, env) {
                Ok(Flow::Return(value)) => {
                    flow = Flow::Return(value);
                    break;
                },
                Ok(Flow::Value(_)) => {},
                Err(err) => {
                    env.pop_scope();
                    return Err(err);
                },
            }
        }

        env.pop_scope();
        Ok(flow)
    }

    /// Evaluates an `if` statement.
    ///
    /// Exactly one branch runs; without an `else`, a falsy condition
    /// yields `null`. A `return` flow coming out of the branch is
    /// absorbed into a plain value here, so an early return only escapes
    /// a function whose whole body is the `if` itself.
    fn eval_if<'p>(
        &mut self,
        condition: &'p Expr,
        then_branch: &'p Statement,
        else_branch: Option<&'p Statement>,
        token: Token,
        env: &mut Environment<'p>,
    ) -> EvalResult<Flow<'p>> {
        let condition = self.eval_expression(condition, env)?;
        let truthy = Self::truthy(condition, token)?;

        let flow = if truthy {
            self.eval_statement(then_branch, env)?
        } else if let Some(else_branch) = else_branch {
            self.eval_statement(else_branch, env)?
        } else {
            Flow::Value(Value::Null)
        };

        Ok(Flow::Value(flow.into_value()))
    }

    /// Evaluates an expression to a value.
    ///
    /// # Errors
    /// Any `RuntimeError` raised while evaluating the expression.
    pub fn eval_expression<'p>(
        &mut self,
        expr: &'p Expr,
        env: &mut Environment<'p>,
    ) -> EvalResult<Value<'p>> {
        match expr {
            Expr::Integer { value, .. } => Ok(Value::Integer(*value)),
            Expr::Float { value, .. } => Ok(Value::Floating(*value)),
            Expr::Str { token } => Ok(Value::Str(StrRef::Source(token.span))),
            Expr::Boolean { value, .. } => Ok(Value::Boolean(*value)),
            Expr::Null { .. } => Ok(Value::Null),
            Expr::Identifier { token } => self.eval_identifier(*token, env),
            Expr::Assignment { target, value } => self.eval_assignment(*target, value, env),
            Expr::Binary {
                op,
                left,
                right,
                token,
            } => self.eval_binary(*op, left, right, *token, env),
            Expr::Unary { op, operand, token } => self.eval_unary(*op, operand, *token, env),
            Expr::Call {
                callee,
                args,
                token,
            } => self.eval_call(callee, args, *token, env),
        }
    }

    /// Resolves an identifier through the scope chain.
    fn eval_identifier<'p>(&self, token: Token, env: &Environment<'p>) -> EvalResult<Value<'p>> {
        let name = token.text(self.source);
        env.get(name).ok_or_else(|| RuntimeError::UndefinedReference {
            name: String::from_utf8_lossy(name).into_owned(),
            token,
        })
    }

    /// Evaluates an assignment expression.
    ///
    /// The right-hand side is evaluated before the target is resolved.
    /// Assignment only ever overwrites an existing binding; an unknown
    /// target is an undefined reference, the same as reading one.
    fn eval_assignment<'p>(
        &mut self,
        target: Token,
        value: &'p Expr,
        env: &mut Environment<'p>,
    ) -> EvalResult<Value<'p>> {
        let value = self.eval_expression(value, env)?;

        let name = target.text(self.source);
        if env.assign(name, value) {
            Ok(value)
        } else {
            Err(RuntimeError::UndefinedReference {
                name: String::from_utf8_lossy(name).into_owned(),
                token: target,
            })
        }
    }
}
