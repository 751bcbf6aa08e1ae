//! Lowering: surface syntax to `Value`
//!
//! This is where the work attached to each grammar production happens.
//! Built-in list calls and `not` consult the environment right away; every
//! other form is only translated, and reduction is left to the statement
//! that uses it.

use super::env::Environment;
use super::error::{InterpResult, RuntimeError};
use super::list;
use super::reduce::Reducer;
use super::value::Value;
use crate::ast::{BinOp, Expr, Spanned, UnOp};

/// Lower `expr` against `env`
pub fn lower(expr: &Spanned<Expr>, env: &Environment) -> InterpResult<Value> {
    Reducer::new(env).lower(expr)
}

impl Reducer<'_> {
    pub fn lower(&mut self, expr: &Spanned<Expr>) -> InterpResult<Value> {
        self.nested(|r| r.lower_inner(&expr.node))
    }

    fn lower_inner(&mut self, expr: &Expr) -> InterpResult<Value> {
        match expr {
            Expr::IntLit(n) => Ok(Value::IntLiteral(*n)),
            Expr::StringLit(s) => Ok(Value::StringLiteral(s.clone())),
            Expr::Var(name) => Ok(Value::Identifier(name.clone())),

            Expr::Binary { left, op, right } => {
                Ok(Value::operation(self.lower(left)?, *op, self.lower(right)?))
            }

            Expr::Unary { op: UnOp::Neg, expr } => Ok(Value::operation(
                Value::IntLiteral(0),
                BinOp::Sub,
                self.lower(expr)?,
            )),
            Expr::Unary { op: UnOp::Not, expr } => {
                let operand = self.lower(expr)?;
                self.negate(operand)
            }

            Expr::If {
                cond,
                then_branch,
                else_branch,
            } => Ok(Value::conditional(
                self.lower(cond)?,
                self.lower(then_branch)?,
                self.lower(else_branch)?,
            )),

            Expr::Lambda { param, body } => Ok(Value::function(param.node.clone(), self.lower(body)?)),

            Expr::List(items) => Ok(Value::List(self.lower_all(items)?)),
            Expr::Seq(items) => Ok(Value::Sequence(self.lower_all(items)?)),

            Expr::ListCall { func, arg } => {
                let operand = self.lower(arg)?;
                list::call(*func, &operand, self.env)
            }
        }
    }

    fn lower_all(&mut self, items: &[Spanned<Expr>]) -> InterpResult<Vec<Value>> {
        items.iter().map(|item| self.lower(item)).collect()
    }

    /// `not` folds a known boolean and defers on anything still symbolic
    fn negate(&mut self, operand: Value) -> InterpResult<Value> {
        match self.simplify(&operand)? {
            Value::BoolLiteral(b) => Ok(Value::BoolLiteral(!b)),
            reduced if reduced.is_symbolic() => Ok(Value::conditional(
                reduced,
                Value::BoolLiteral(false),
                Value::BoolLiteral(true),
            )),
            other => Err(RuntimeError::invalid_operand(UnOp::Not, other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interp::{ErrorKind, simplify};
    use crate::lexer::tokenize;
    use crate::parser::parse_expr;

    fn lower_src(source: &str, env: &Environment) -> InterpResult<Value> {
        let tokens = tokenize(source).unwrap();
        let expr = parse_expr(tokens).unwrap();
        lower(&expr, env)
    }

    fn eval_src(source: &str, env: &Environment) -> InterpResult<Value> {
        simplify(&lower_src(source, env)?, env)
    }

    #[test]
    fn test_literals_and_identifiers() {
        let env = Environment::new();
        assert_eq!(lower_src("42", &env).unwrap(), Value::IntLiteral(42));
        assert_eq!(
            lower_src("\"hi\"", &env).unwrap(),
            Value::StringLiteral("hi".into())
        );
        assert_eq!(
            lower_src("true", &env).unwrap(),
            Value::Identifier("true".into())
        );
    }

    #[test]
    fn test_operations_are_not_reduced() {
        let env = Environment::new();
        assert_eq!(
            lower_src("1 + 2", &env).unwrap(),
            Value::operation(Value::IntLiteral(1), BinOp::Add, Value::IntLiteral(2))
        );
    }

    #[test]
    fn test_unary_minus() {
        let env = Environment::new();
        assert_eq!(
            lower_src("-5", &env).unwrap(),
            Value::operation(Value::IntLiteral(0), BinOp::Sub, Value::IntLiteral(5))
        );
        assert_eq!(eval_src("-5 * 2", &env).unwrap(), Value::IntLiteral(-10));
    }

    #[test]
    fn test_not() {
        let env = Environment::new();
        assert_eq!(lower_src("not true", &env).unwrap(), Value::BoolLiteral(false));
        assert_eq!(lower_src("not (1 > 2)", &env).unwrap(), Value::BoolLiteral(true));
        assert_eq!(
            lower_src("not 3", &env).unwrap_err().kind,
            ErrorKind::TypeMismatch
        );
    }

    #[test]
    fn test_not_of_unknown_is_residual() {
        let env = Environment::new();
        let lowered = lower_src("not b", &env).unwrap();
        assert_eq!(
            lowered,
            Value::conditional(
                Value::Identifier("b".into()),
                Value::BoolLiteral(false),
                Value::BoolLiteral(true),
            )
        );
    }

    #[test]
    fn test_lambda() {
        let env = Environment::new();
        assert_eq!(
            lower_src("\\ n => n + 1", &env).unwrap(),
            Value::function(
                "n",
                Value::operation(Value::Identifier("n".into()), BinOp::Add, Value::IntLiteral(1)),
            )
        );
    }

    #[test]
    fn test_list_calls_run_eagerly() {
        let mut env = Environment::new();
        env.define(
            "xs",
            Value::List(vec![Value::IntLiteral(3), Value::IntLiteral(1)]),
        );
        assert_eq!(lower_src("head . xs", &env).unwrap(), Value::IntLiteral(3));
        assert_eq!(lower_src("length . xs", &env).unwrap(), Value::IntLiteral(2));
        assert_eq!(
            lower_src("sort . xs", &env).unwrap(),
            Value::List(vec![Value::IntLiteral(1), Value::IntLiteral(3)])
        );
        assert_eq!(
            lower_src("head . []", &env).unwrap_err().kind,
            ErrorKind::EmptyList
        );
    }

    #[test]
    fn test_sequence_and_list() {
        let env = Environment::new();
        assert_eq!(
            lower_src("[1, 2]", &env).unwrap(),
            Value::List(vec![Value::IntLiteral(1), Value::IntLiteral(2)])
        );
        assert_eq!(
            lower_src("f . 1", &env).unwrap(),
            Value::Sequence(vec![Value::Identifier("f".into()), Value::IntLiteral(1)])
        );
    }
}
