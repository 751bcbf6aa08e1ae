//! Runtime errors for the interpreter

use super::value::Value;
use std::fmt;

/// Runtime error; aborts the statement being executed
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Kinds of runtime errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operator or list operation applied to incompatible operands
    TypeMismatch,
    /// append target is not bound
    UndefinedVariable,
    /// List operation applied to something that is not a list
    NotAList,
    /// head of an empty list
    EmptyList,
    /// Integer division by zero
    DivisionByZero,
    /// Integer arithmetic left the i64 range
    Overflow,
    /// Reduction nested too deeply (e.g. a binding that refers to itself)
    RecursionLimit,
}

impl RuntimeError {
    fn new(kind: ErrorKind, message: String) -> Self {
        RuntimeError { kind, message }
    }

    /// `op` applied to operands it does not accept
    pub fn type_mismatch(op: impl fmt::Display, lhs: impl fmt::Display, rhs: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!("invalid operand types for '{op}': {lhs}, {rhs}"),
        )
    }

    /// Unary `op` applied to an operand it does not accept
    pub fn invalid_operand(op: impl fmt::Display, operand: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!("invalid operand type for '{op}': {operand}"),
        )
    }

    /// A list operation was handed something other than a list
    pub fn not_a_list(operation: &str, operand: &Value) -> Self {
        Self::new(
            ErrorKind::NotAList,
            format!("{operation} expects a list, found {}", operand.type_name()),
        )
    }

    pub fn not_a_list_variable(name: &str) -> Self {
        Self::new(ErrorKind::NotAList, format!("variable '{name}' is not a list"))
    }

    pub fn undefined_variable(name: &str) -> Self {
        Self::new(ErrorKind::UndefinedVariable, format!("undefined variable: {name}"))
    }

    pub fn empty_list() -> Self {
        Self::new(ErrorKind::EmptyList, "can't take the head of an empty list".to_string())
    }

    pub fn unsortable(element: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!("sorting is only supported for integer lists, found: {element}"),
        )
    }

    pub fn division_by_zero() -> Self {
        Self::new(ErrorKind::DivisionByZero, "division by zero".to_string())
    }

    pub fn overflow(op: impl fmt::Display, lhs: i64, rhs: i64) -> Self {
        Self::new(
            ErrorKind::Overflow,
            format!("integer overflow: {lhs} {op} {rhs}"),
        )
    }

    pub fn recursion_limit(limit: usize) -> Self {
        Self::new(
            ErrorKind::RecursionLimit,
            format!("reduction exceeded {limit} nested steps"),
        )
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Runtime error: {}", self.message)
    }
}

impl std::error::Error for RuntimeError {}

/// Result type for interpreter operations
pub type InterpResult<T> = Result<T, RuntimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_names_operator_and_operands() {
        let err = RuntimeError::type_mismatch("+", 3, "\"a\"");
        assert_eq!(err.kind, ErrorKind::TypeMismatch);
        assert_eq!(err.message, "invalid operand types for '+': 3, \"a\"");
    }

    #[test]
    fn test_not_a_list() {
        let err = RuntimeError::not_a_list("head", &Value::IntLiteral(5));
        assert_eq!(err.kind, ErrorKind::NotAList);
        assert_eq!(err.message, "head expects a list, found int");

        let func = Value::function("n", Value::Identifier("n".to_string()));
        let err = RuntimeError::not_a_list("sort", &func);
        assert_eq!(err.message, "sort expects a list, found function");
        assert_eq!(RuntimeError::not_a_list_variable("x").kind, ErrorKind::NotAList);
    }

    #[test]
    fn test_undefined_variable() {
        let err = RuntimeError::undefined_variable("lst");
        assert_eq!(err.kind, ErrorKind::UndefinedVariable);
        assert!(err.message.contains("lst"));
    }

    #[test]
    fn test_display_prefix() {
        assert_eq!(
            RuntimeError::division_by_zero().to_string(),
            "Runtime error: division by zero"
        );
    }
}
