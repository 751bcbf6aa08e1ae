//! Reduction toward normal form

use super::env::Environment;
use super::error::{InterpResult, RuntimeError};
use super::ops::apply;
use super::value::Value;
use crate::ast::BinOp;

/// Nesting limit for one reduction; hit by bindings like `x := x`
pub const MAX_REDUCTION_DEPTH: usize = 10_000;

/// Stack growth parameters for deep recursion
const STACK_RED_ZONE: usize = 128 * 1024;
const STACK_GROW_SIZE: usize = 4 * 1024 * 1024;

/// Reduce `expr` against `env`
pub fn simplify(expr: &Value, env: &Environment) -> InterpResult<Value> {
    Reducer::new(env).simplify(expr)
}

/// Reduction and substitution state for a single top-level request
pub struct Reducer<'env> {
    pub(super) env: &'env Environment,
    depth: usize,
}

impl<'env> Reducer<'env> {
    pub fn new(env: &'env Environment) -> Self {
        Reducer { env, depth: 0 }
    }

    /// Run `f` one level deeper, growing the stack if needed
    pub(super) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> InterpResult<T>,
    ) -> InterpResult<T> {
        if self.depth >= MAX_REDUCTION_DEPTH {
            return Err(RuntimeError::recursion_limit(MAX_REDUCTION_DEPTH));
        }
        self.depth += 1;
        let result = stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || f(self));
        self.depth -= 1;
        result
    }

    /// Drive `expr` toward normal form
    pub fn simplify(&mut self, expr: &Value) -> InterpResult<Value> {
        let reduced = self.nested(|r| r.simplify_inner(expr))?;
        tracing::trace!(from = %expr, to = %reduced, "simplified");
        Ok(reduced)
    }

    fn simplify_inner(&mut self, expr: &Value) -> InterpResult<Value> {
        match expr {
            Value::IntLiteral(_) | Value::BoolLiteral(_) | Value::StringLiteral(_) => {
                Ok(expr.clone())
            }

            Value::Identifier(name) => match name.as_str() {
                "true" => Ok(Value::BoolLiteral(true)),
                "false" => Ok(Value::BoolLiteral(false)),
                _ => match self.env.get(name) {
                    Some(bound) => self.simplify(bound),
                    None => Ok(expr.clone()),
                },
            },

            Value::Operation { lhs, op, rhs } => self.simplify_operation(lhs, *op, rhs),

            Value::Conditional {
                cond,
                then_branch,
                else_branch,
            } => match self.simplify(cond)? {
                Value::BoolLiteral(true) => self.simplify(then_branch),
                Value::BoolLiteral(false) => self.simplify(else_branch),
                // Untaken branches stay as written
                cond => Ok(Value::Conditional {
                    cond: Box::new(cond),
                    then_branch: then_branch.clone(),
                    else_branch: else_branch.clone(),
                }),
            },

            Value::Function { param, body } => Ok(Value::function(param.clone(), self.simplify(body)?)),

            Value::Sequence(items) => self.simplify_sequence(items),

            Value::List(items) => Ok(Value::List(self.simplify_all(items)?)),
        }
    }

    fn simplify_all(&mut self, items: &[Value]) -> InterpResult<Vec<Value>> {
        items.iter().map(|item| self.simplify(item)).collect()
    }

    fn simplify_operation(&mut self, lhs: &Value, op: BinOp, rhs: &Value) -> InterpResult<Value> {
        let lhs = self.simplify(lhs)?;

        // `and`/`or` decided by the left operand never look at the right one
        match (op, &lhs) {
            (BinOp::And, Value::BoolLiteral(false)) => return Ok(Value::BoolLiteral(false)),
            (BinOp::Or, Value::BoolLiteral(true)) => return Ok(Value::BoolLiteral(true)),
            _ => {}
        }

        let rhs = self.simplify(rhs)?;
        combine(lhs, op, rhs)
    }

    /// Reduce every item, then collapse `function . literal` pairs left to right
    fn simplify_sequence(&mut self, items: &[Value]) -> InterpResult<Value> {
        let mut items = self.simplify_all(items)?;

        let mut i = 0;
        while i + 1 < items.len() {
            let applied = match (function_parts(&items[i]), &items[i + 1]) {
                (Some((param, body)), arg @ (Value::IntLiteral(_) | Value::BoolLiteral(_))) => {
                    tracing::trace!(%param, %arg, "beta-reducing");
                    let instantiated = self.replace(body, param, arg)?;
                    Some(self.simplify(&instantiated)?)
                }
                _ => None,
            };
            match applied {
                Some(result) => {
                    items.splice(i..i + 2, std::iter::once(result));
                }
                None => i += 1,
            }
        }

        if items.len() == 1 {
            let only = items.remove(0);
            self.simplify(&only)
        } else {
            Ok(Value::Sequence(items))
        }
    }
}

/// Parameter and body of a function value
///
/// Items are already reduced, so an identifier bound to a function has been
/// replaced by the function itself.
fn function_parts(value: &Value) -> Option<(&str, &Value)> {
    match value {
        Value::Function { param, body } => Some((param, body)),
        _ => None,
    }
}

/// Fold two reduced operands, keep a residual node, or report a mismatch
fn combine(lhs: Value, op: BinOp, rhs: Value) -> InterpResult<Value> {
    if let (Some(l), Some(r)) = (lhs.as_primitive(), rhs.as_primitive()) {
        return apply(op, l, r).map(Value::from);
    }
    if lhs.is_symbolic() || rhs.is_symbolic() {
        return Ok(Value::operation(lhs, op, rhs));
    }
    Err(RuntimeError::type_mismatch(op, lhs, rhs))
}
