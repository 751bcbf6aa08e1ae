//! Statement executor

use super::env::Environment;
use super::error::InterpResult;
use super::list;
use super::lower::lower;
use super::reduce::simplify;
use super::value::Value;
use crate::ast::{Expr, Spanned, Stmt};

/// The interpreter: one environment, one statement at a time
pub struct Interpreter {
    /// Global bindings; the only state that outlives a statement
    env: Environment,
}

impl Interpreter {
    /// Create a new interpreter with an empty environment
    pub fn new() -> Self {
        Interpreter {
            env: Environment::new(),
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Run one statement and return the lines it prints
    ///
    /// A failure leaves every earlier binding in place.
    pub fn execute(&mut self, stmt: &Spanned<Stmt>) -> InterpResult<Vec<String>> {
        tracing::debug!(span = %stmt.span, "executing statement");
        match &stmt.node {
            Stmt::Assign { name, value } => {
                self.assign(name, value)?;
                Ok(Vec::new())
            }
            Stmt::Print(value) => Ok(vec![self.print(value)?]),
            Stmt::Dump => Ok(self.dump()),
            Stmt::Append { name, value } => {
                self.append(name, value)?;
                Ok(Vec::new())
            }
        }
    }

    /// Lower and reduce the right-hand side, then bind it to `name`
    pub fn assign(&mut self, name: &str, value: &Spanned<Expr>) -> InterpResult<()> {
        let reduced = self.evaluate(value)?;
        tracing::debug!(%name, value = %reduced, "bound");
        self.env.define(name, reduced);
        Ok(())
    }

    /// Reduce `value` to normal form and render it for output
    pub fn print(&self, value: &Spanned<Expr>) -> InterpResult<String> {
        Ok(self.evaluate(value)?.render_for_print())
    }

    /// Structural form of every binding, sorted by name
    pub fn dump(&self) -> Vec<String> {
        self.env
            .names()
            .into_iter()
            .filter_map(|name| self.env.get(name).map(|value| format!("{name}: {value:?}")))
            .collect()
    }

    /// Push `value` onto the list bound to `name`
    pub fn append(&mut self, name: &str, value: &Spanned<Expr>) -> InterpResult<()> {
        let element = lower(value, &self.env)?;
        list::append(&mut self.env, name, &element)
    }

    fn evaluate(&self, value: &Spanned<Expr>) -> InterpResult<Value> {
        let lowered = lower(value, &self.env)?;
        simplify(&lowered, &self.env)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interp::ErrorKind;
    use crate::lexer::tokenize;
    use crate::parser::parse;

    fn run(interp: &mut Interpreter, line: &str) -> InterpResult<Vec<String>> {
        let stmt = parse(tokenize(line).unwrap()).unwrap();
        interp.execute(&stmt)
    }

    fn run_all(lines: &[&str]) -> Vec<String> {
        let mut interp = Interpreter::new();
        lines
            .iter()
            .flat_map(|line| run(&mut interp, line).unwrap())
            .collect()
    }

    #[test]
    fn test_assign_then_print() {
        assert_eq!(run_all(&["x := 5", "print x"]), vec!["5"]);
    }

    #[test]
    fn test_assign_replaces_binding() {
        assert_eq!(run_all(&["x := 5", "x := x + 1", "print x"]), vec!["6"]);
    }

    #[test]
    fn test_assign_stores_reduced_value() {
        let mut interp = Interpreter::new();
        run(&mut interp, "x := 2 * 3").unwrap();
        assert_eq!(interp.env().get("x"), Some(&Value::IntLiteral(6)));
    }

    #[test]
    fn test_print_function_application() {
        assert_eq!(run_all(&["inc := \\ n => n + 1", "print inc . 4"]), vec!["5"]);
    }

    #[test]
    fn test_print_renders_surface_syntax() {
        assert_eq!(run_all(&["print \"hi\""]), vec!["\"hi\""]);
        assert_eq!(run_all(&["print [1, 2 + 3]"]), vec!["[1, 5]"]);
        assert_eq!(run_all(&["print 1 < 2"]), vec!["true"]);
        assert_eq!(run_all(&["print \\ n => n * 2"]), vec!["\\ n => (n * 2)"]);
    }

    #[test]
    fn test_dump() {
        let out = run_all(&["y := true", "x := 5", "dump"]);
        assert_eq!(out, vec!["x: IntLiteral(5)", "y: BoolLiteral(true)"]);
    }

    #[test]
    fn test_dump_empty_environment() {
        assert!(run_all(&["dump"]).is_empty());
    }

    #[test]
    fn test_append_in_place() {
        let out = run_all(&[
            "lst := [1, 2]",
            "append . lst . 3",
            "print length . lst",
            "print lst",
        ]);
        assert_eq!(out, vec!["3", "[1, 2, 3]"]);
    }

    #[test]
    fn test_append_errors() {
        let mut interp = Interpreter::new();
        let err = run(&mut interp, "append . lst . 3").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UndefinedVariable);

        run(&mut interp, "x := 1").unwrap();
        let err = run(&mut interp, "append . x . 3").unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotAList);
    }

    #[test]
    fn test_failure_keeps_earlier_bindings() {
        let mut interp = Interpreter::new();
        run(&mut interp, "x := 1").unwrap();
        assert!(run(&mut interp, "x := 3 + \"a\"").is_err());
        assert_eq!(interp.env().get("x"), Some(&Value::IntLiteral(1)));
    }

    #[test]
    fn test_list_builtins() {
        let out = run_all(&[
            "xs := [3, 1, 2]",
            "print head . xs",
            "print tail . xs",
            "print sort . xs",
        ]);
        assert_eq!(out, vec!["3", "[1, 2]", "[1, 2, 3]"]);
    }
}
