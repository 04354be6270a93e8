use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        lexer::token::Token,
        value::Value,
    },
};

impl<'a> Evaluator<'a> {
    /// Evaluates a unary operation.
    ///
    /// Supported operators:
    /// - `+`: identity for integers and floats.
    /// - `-`: numeric negation; integer negation wraps, so `-` applied to
    ///   the smallest integer yields it back.
    /// - `~`: bitwise complement, integers only.
    /// - `!` (also spelled `not`): reported as a type mismatch for every
    ///   operand. The operator parses, and its diagnostic is the defined
    ///   behavior.
    ///
    /// # Errors
    /// A `RuntimeError` from the operand, or a type mismatch anchored at
    /// the operator token.
    pub fn eval_unary<'p>(
        &mut self,
        op: UnaryOperator,
        operand: &'p Expr,
        token: Token,
        env: &mut Environment<'p>,
    ) -> EvalResult<Value<'p>> {
        let value = self.eval_expression(operand, env)?;
        Self::apply_unary(op, value, token)
    }

    /// Applies a unary operator to an already-evaluated value.
    pub(crate) fn apply_unary<'p>(
        op: UnaryOperator,
        value: Value<'p>,
        token: Token,
    ) -> EvalResult<Value<'p>> {
        let mismatch = || RuntimeError::TypeMismatch {
            operation: op.describe(),
            token,
        };

        match op {
            UnaryOperator::Plus => match value {
                Value::Integer(_) | Value::Floating(_) => Ok(value),
                _ => Err(mismatch()),
            },
            UnaryOperator::Minus => match value {
                Value::Integer(n) => Ok(Value::Integer(n.wrapping_neg())),
                Value::Floating(x) => Ok(Value::Floating(-x)),
                _ => Err(mismatch()),
            },
            UnaryOperator::BitNot => match value {
                Value::Integer(n) => Ok(Value::Integer(!n)),
                _ => Err(mismatch()),
            },
            UnaryOperator::Not => Err(mismatch()),
        }
    }
}
