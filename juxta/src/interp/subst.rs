//! Substitution of a value for a free variable

use super::env::Environment;
use super::error::InterpResult;
use super::reduce::Reducer;
use super::value::Value;

/// Copy `expr` with every `variable` identifier replaced by `value`
pub fn replace(expr: &Value, variable: &str, value: &Value, env: &Environment) -> InterpResult<Value> {
    Reducer::new(env).replace(expr, variable, value)
}

impl Reducer<'_> {
    /// Structural substitution.
    ///
    /// Does not stop at a function whose own parameter is `variable`: an inner
    /// `\ x => ...` still has its `x` replaced. A conditional whose condition
    /// becomes a boolean once substituted collapses to the chosen branch.
    pub fn replace(&mut self, expr: &Value, variable: &str, value: &Value) -> InterpResult<Value> {
        self.nested(|r| r.replace_inner(expr, variable, value))
    }

    fn replace_inner(&mut self, expr: &Value, variable: &str, value: &Value) -> InterpResult<Value> {
        let replaced = match expr {
            Value::IntLiteral(_) | Value::BoolLiteral(_) | Value::StringLiteral(_) => expr.clone(),

            Value::Identifier(name) if name == variable => value.clone(),
            Value::Identifier(_) => expr.clone(),

            Value::Operation { lhs, op, rhs } => Value::operation(
                self.replace(lhs, variable, value)?,
                *op,
                self.replace(rhs, variable, value)?,
            ),

            Value::Conditional {
                cond,
                then_branch,
                else_branch,
            } => {
                let cond = self.replace(cond, variable, value)?;
                match self.simplify(&cond)? {
                    Value::BoolLiteral(true) => {
                        let branch = self.replace(then_branch, variable, value)?;
                        self.simplify(&branch)?
                    }
                    Value::BoolLiteral(false) => {
                        let branch = self.replace(else_branch, variable, value)?;
                        self.simplify(&branch)?
                    }
                    cond => Value::conditional(
                        cond,
                        self.replace(then_branch, variable, value)?,
                        self.replace(else_branch, variable, value)?,
                    ),
                }
            }

            Value::Function { param, body } => {
                Value::function(param.clone(), self.replace(body, variable, value)?)
            }

            Value::Sequence(items) => Value::Sequence(self.replace_all(items, variable, value)?),

            Value::List(items) => Value::List(self.replace_all(items, variable, value)?),
        };

        if tracing::enabled!(tracing::Level::TRACE) && replaced != *expr {
            tracing::trace!(%variable, %value, from = %expr, to = %replaced, "replaced");
        }
        Ok(replaced)
    }

    fn replace_all(&mut self, items: &[Value], variable: &str, value: &Value) -> InterpResult<Vec<Value>> {
        items
            .iter()
            .map(|item| self.replace(item, variable, value))
            .collect()
    }
}
