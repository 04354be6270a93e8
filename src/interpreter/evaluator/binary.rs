use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        lexer::token::Token,
        value::{StrRef, Value},
    },
};

impl<'a> Evaluator<'a> {
    /// Evaluates a binary operation.
    ///
    /// Both operands are always evaluated, left first. The logical
    /// operators go through here too, so `&&` and `||` never skip their
    /// right operand or its side effects.
    ///
    /// # Errors
    /// A `RuntimeError` from either operand, or a type mismatch anchored
    /// at the operator token.
    pub fn eval_binary<'p>(
        &mut self,
        op: BinaryOperator,
        left: &'p Expr,
        right: &'p Expr,
        token: Token,
        env: &mut Environment<'p>,
    ) -> EvalResult<Value<'p>> {
        let lhs = self.eval_expression(left, env)?;
        let rhs = self.eval_expression(right, env)?;
        self.apply_binary(op, lhs, rhs, token)
    }

    /// Applies a binary operator to two already-evaluated values.
    pub(crate) fn apply_binary<'p>(
        &mut self,
        op: BinaryOperator,
        lhs: Value<'p>,
        rhs: Value<'p>,
        token: Token,
    ) -> EvalResult<Value<'p>> {
        match op {
            BinaryOperator::Add => self.eval_add(lhs, rhs, token),
            BinaryOperator::Sub | BinaryOperator::Mul => {
                Self::eval_arithmetic(op, lhs, rhs, token)
            },
            BinaryOperator::Div => Self::eval_div(lhs, rhs, token),
            BinaryOperator::Mod => Self::eval_mod(lhs, rhs, token),
            BinaryOperator::Equal | BinaryOperator::NotEqual => {
                self.eval_equality(op, lhs, rhs, token)
            },
            BinaryOperator::Less
            | BinaryOperator::Greater
            | BinaryOperator::LessEqual
            | BinaryOperator::GreaterEqual => Self::eval_ordering(op, lhs, rhs, token),
            BinaryOperator::And | BinaryOperator::Or => Self::eval_logical(op, lhs, rhs, token),
            BinaryOperator::BitAnd
            | BinaryOperator::BitOr
            | BinaryOperator::BitXor
            | BinaryOperator::ShiftLeft
            | BinaryOperator::ShiftRight => Self::eval_bitwise(op, lhs, rhs, token),
        }
    }

    /// Evaluates `+`.
    ///
    /// Integer sums wrap on overflow. A floating operand promotes the
    /// other side. Two strings concatenate into a fresh arena span; the
    /// operands themselves are left untouched.
    fn eval_add<'p>(
        &mut self,
        lhs: Value<'p>,
        rhs: Value<'p>,
        token: Token,
    ) -> EvalResult<Value<'p>> {
        match (lhs, rhs) {
            (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a.wrapping_add(b))),
            (Value::Str(a), Value::Str(b)) => {
                let span = self.arena.concat(self.source, a, b);
                Ok(Value::Str(StrRef::Arena(span)))
            },
            _ => match (lhs.as_floating(), rhs.as_floating()) {
                (Some(a), Some(b)) => Ok(Value::Floating(a + b)),
                _ => Err(RuntimeError::TypeMismatch {
                    operation: BinaryOperator::Add.describe(),
                    token,
                }),
            },
        }
    }

    /// Evaluates `-` and `*`, numeric only.
    fn eval_arithmetic<'p>(
        op: BinaryOperator,
        lhs: Value<'p>,
        rhs: Value<'p>,
        token: Token,
    ) -> EvalResult<Value<'p>> {
        if let (Value::Integer(a), Value::Integer(b)) = (lhs, rhs) {
            let result = match op {
                BinaryOperator::Sub => a.wrapping_sub(b),
                _ => a.wrapping_mul(b),
            };
            return Ok(Value::Integer(result));
        }
        match (lhs.as_floating(), rhs.as_floating()) {
            (Some(a), Some(b)) => {
                let result = match op {
                    BinaryOperator::Sub => a - b,
                    _ => a * b,
                };
                Ok(Value::Floating(result))
            },
            _ => Err(RuntimeError::TypeMismatch {
                operation: op.describe(),
                token,
            }),
        }
    }

    /// Evaluates `/`.
    ///
    /// A zero divisor is an error for every numeric combination, the
    /// floating ones included.
    fn eval_div<'p>(lhs: Value<'p>, rhs: Value<'p>, token: Token) -> EvalResult<Value<'p>> {
        match (lhs, rhs) {
            (Value::Integer(a), Value::Integer(b)) => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero { token });
                }
                Ok(Value::Integer(a.wrapping_div(b)))
            },
            _ => match (lhs.as_floating(), rhs.as_floating()) {
                (Some(a), Some(b)) => {
                    if b == 0.0 {
                        return Err(RuntimeError::DivisionByZero { token });
                    }
                    Ok(Value::Floating(a / b))
                },
                _ => Err(RuntimeError::TypeMismatch {
                    operation: BinaryOperator::Div.describe(),
                    token,
                }),
            },
        }
    }

    /// Evaluates `%`.
    ///
    /// The floating remainder keeps the dividend's sign, like `fmod`.
    fn eval_mod<'p>(lhs: Value<'p>, rhs: Value<'p>, token: Token) -> EvalResult<Value<'p>> {
        match (lhs, rhs) {
            (Value::Integer(a), Value::Integer(b)) => {
                if b == 0 {
                    return Err(RuntimeError::ModuloByZero { token });
                }
                Ok(Value::Integer(a.wrapping_rem(b)))
            },
            _ => match (lhs.as_floating(), rhs.as_floating()) {
                (Some(a), Some(b)) => {
                    if b == 0.0 {
                        return Err(RuntimeError::ModuloByZero { token });
                    }
                    Ok(Value::Floating(a % b))
                },
                _ => Err(RuntimeError::TypeMismatch {
                    operation: BinaryOperator::Mod.describe(),
                    token,
                }),
            },
        }
    }

    /// Evaluates `==` and `!=`.
    ///
    /// Numbers compare numerically after promotion, strings compare by
    /// length then bytes. Booleans, `null` and functions have no equality
    /// and are reported as a mismatch.
    fn eval_equality<'p>(
        &self,
        op: BinaryOperator,
        lhs: Value<'p>,
        rhs: Value<'p>,
        token: Token,
    ) -> EvalResult<Value<'p>> {
        let equal = match (lhs, rhs) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => self.str_bytes(a) == self.str_bytes(b),
            _ => match (lhs.as_floating(), rhs.as_floating()) {
                (Some(a), Some(b)) => a == b,
                _ => {
                    return Err(RuntimeError::TypeMismatch {
                        operation: op.describe(),
                        token,
                    });
                },
            },
        };

        Ok(Value::Boolean(match op {
            BinaryOperator::NotEqual => !equal,
            _ => equal,
        }))
    }

    /// Evaluates `<`, `>`, `<=` and `>=`, numeric only.
    ///
    /// Two integers compare as integers; a floating operand promotes the
    /// comparison.
    fn eval_ordering<'p>(
        op: BinaryOperator,
        lhs: Value<'p>,
        rhs: Value<'p>,
        token: Token,
    ) -> EvalResult<Value<'p>> {
        if let (Value::Integer(a), Value::Integer(b)) = (lhs, rhs) {
            return Ok(Value::Boolean(ordering_holds(op, a, b)));
        }
        match (lhs.as_floating(), rhs.as_floating()) {
            (Some(a), Some(b)) => Ok(Value::Boolean(ordering_holds(op, a, b))),
            _ => Err(RuntimeError::TypeMismatch {
                operation: op.describe(),
                token,
            }),
        }
    }

    /// Evaluates `&&` and `||` over both operands' truth values.
    fn eval_logical<'p>(
        op: BinaryOperator,
        lhs: Value<'p>,
        rhs: Value<'p>,
        token: Token,
    ) -> EvalResult<Value<'p>> {
        let a = Self::truthy(lhs, token)?;
        let b = Self::truthy(rhs, token)?;
        let result = match op {
            BinaryOperator::And => a && b,
            _ => a || b,
        };
        Ok(Value::Boolean(result))
    }

    /// Evaluates the bitwise and shift operators, integers only.
    ///
    /// Shift counts wrap modulo the integer width, so shifting by 64 or
    /// by a negative amount is well defined rather than an error.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn eval_bitwise<'p>(
        op: BinaryOperator,
        lhs: Value<'p>,
        rhs: Value<'p>,
        token: Token,
    ) -> EvalResult<Value<'p>> {
        match (lhs, rhs) {
            (Value::Integer(a), Value::Integer(b)) => {
                let result = match op {
                    BinaryOperator::BitAnd => a & b,
                    BinaryOperator::BitOr => a | b,
                    BinaryOperator::BitXor => a ^ b,
                    BinaryOperator::ShiftLeft => a.wrapping_shl(b as u32),
                    _ => a.wrapping_shr(b as u32),
                };
                Ok(Value::Integer(result))
            },
            _ => Err(RuntimeError::TypeMismatch {
                operation: op.describe(),
                token,
            }),
        }
    }
}

/// Checks whether an ordering comparison holds for two operands.
fn ordering_holds<T: PartialOrd>(op: BinaryOperator, a: T, b: T) -> bool {
    match op {
        BinaryOperator::Less => a < b,
        BinaryOperator::Greater => a > b,
        BinaryOperator::LessEqual => a <= b,
        _ => a >= b,
    }
}
