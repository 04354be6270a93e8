use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            builtin,
            core::{EvalResult, Evaluator},
        },
        lexer::token::Token,
        value::Value,
    },
};

impl<'a> Evaluator<'a> {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then every argument, eagerly and
    /// left to right, all in the caller's environment. Anything that is
    /// not a function or builtin value cannot be called.
    ///
    /// # Errors
    /// A `RuntimeError` from the callee or any argument, `NotCallable`
    /// for a non-function callee, or whatever the call itself raises.
    pub fn eval_call<'p>(
        &mut self,
        callee: &'p Expr,
        args: &'p [Expr],
        token: Token,
        env: &mut Environment<'p>,
    ) -> EvalResult<Value<'p>> {
        let callee = self.eval_expression(callee, env)?;

        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval_expression(arg, env)?);
        }

        match callee {
            Value::Function(def) => self.call_function(def, &values, token, env),
            Value::Builtin(builtin) => builtin::call(self, builtin, &values, token),
            _ => Err(RuntimeError::NotCallable { token }),
        }
    }

    /// Calls a user-defined function.
    ///
    /// The call scope is pushed onto the caller's environment, so a body
    /// can see its caller's locals while the call lasts. Arity is exact;
    /// parameters bind positionally. The scope is popped on every exit
    /// path, and a `return` flowing out of the body becomes the call's
    /// value.
    fn call_function<'p>(
        &mut self,
        def: &'p FunctionDef,
        args: &[Value<'p>],
        token: Token,
        env: &mut Environment<'p>,
    ) -> EvalResult<Value<'p>> {
        if args.len() != def.params.len() {
            return Err(RuntimeError::ArityMismatch {
                expected: def.params.len(),
                found: args.len(),
                token,
            });
        }

        env.push_scope();
        for (param, value) in def.params.iter().zip(args) {
            let name = String::from_utf8_lossy(param.text(self.source));
            env.declare(&name, *value);
        }

        let flow = self.eval_statement(&def.body, env);
        env.pop_scope();

        Ok(flow?.into_value())
    }
}
