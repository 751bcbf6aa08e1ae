//! Primitive operator semantics

use super::error::{InterpResult, RuntimeError};
use super::value::Primitive;
use crate::ast::BinOp;

/// Apply `op` to two already-reduced primitives.
///
/// Arithmetic wants two ints, except `+` which also concatenates two
/// strings. Equality wants two operands of the same type. Ordering wants
/// two ints and `and`/`or` two bools. Everything else is a type mismatch.
pub fn apply(op: BinOp, lhs: Primitive, rhs: Primitive) -> InterpResult<Primitive> {
    use Primitive::{Bool, Int, Str};

    match (op, lhs, rhs) {
        // Arithmetic
        (BinOp::Add, Int(a), Int(b)) => checked(op, a, b, a.checked_add(b)),
        (BinOp::Add, Str(a), Str(b)) => Ok(Str(a + &b)),
        (BinOp::Sub, Int(a), Int(b)) => checked(op, a, b, a.checked_sub(b)),
        (BinOp::Mul, Int(a), Int(b)) => checked(op, a, b, a.checked_mul(b)),
        (BinOp::Div, Int(_), Int(0)) => Err(RuntimeError::division_by_zero()),
        (BinOp::Div, Int(a), Int(b)) => checked(op, a, b, floor_div(a, b)),

        // Equality
        (BinOp::Eq, a, b) if same_type(&a, &b) => Ok(Bool(a == b)),
        (BinOp::Ne, a, b) if same_type(&a, &b) => Ok(Bool(a != b)),

        // Ordering
        (BinOp::Lt, Int(a), Int(b)) => Ok(Bool(a < b)),
        (BinOp::Le, Int(a), Int(b)) => Ok(Bool(a <= b)),
        (BinOp::Gt, Int(a), Int(b)) => Ok(Bool(a > b)),
        (BinOp::Ge, Int(a), Int(b)) => Ok(Bool(a >= b)),

        // Logical
        (BinOp::And, Bool(a), Bool(b)) => Ok(Bool(a && b)),
        (BinOp::Or, Bool(a), Bool(b)) => Ok(Bool(a || b)),

        (op, lhs, rhs) => Err(RuntimeError::type_mismatch(op, lhs, rhs)),
    }
}

fn same_type(a: &Primitive, b: &Primitive) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}

fn checked(op: BinOp, a: i64, b: i64, result: Option<i64>) -> InterpResult<Primitive> {
    result
        .map(Primitive::Int)
        .ok_or_else(|| RuntimeError::overflow(op, a, b))
}

/// Integer division rounding toward negative infinity
fn floor_div(a: i64, b: i64) -> Option<i64> {
    let q = a.checked_div(b)?;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        Some(q - 1)
    } else {
        Some(q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interp::ErrorKind;
    use Primitive::{Bool, Int, Str};

    fn s(text: &str) -> Primitive {
        Str(text.to_string())
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(apply(BinOp::Add, Int(3), Int(4)).unwrap(), Int(7));
        assert_eq!(apply(BinOp::Sub, Int(3), Int(4)).unwrap(), Int(-1));
        assert_eq!(apply(BinOp::Mul, Int(3), Int(4)).unwrap(), Int(12));
        assert_eq!(apply(BinOp::Div, Int(7), Int(2)).unwrap(), Int(3));
    }

    #[test]
    fn test_division_floors() {
        assert_eq!(apply(BinOp::Div, Int(-7), Int(2)).unwrap(), Int(-4));
        assert_eq!(apply(BinOp::Div, Int(7), Int(-2)).unwrap(), Int(-4));
        assert_eq!(apply(BinOp::Div, Int(-7), Int(-2)).unwrap(), Int(3));
        assert_eq!(apply(BinOp::Div, Int(-8), Int(2)).unwrap(), Int(-4));
    }

    #[test]
    fn test_division_by_zero() {
        let err = apply(BinOp::Div, Int(1), Int(0)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::DivisionByZero);
    }

    #[test]
    fn test_overflow_is_an_error() {
        let err = apply(BinOp::Add, Int(i64::MAX), Int(1)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Overflow);
        let err = apply(BinOp::Div, Int(i64::MIN), Int(-1)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Overflow);
    }

    #[test]
    fn test_string_concatenation() {
        assert_eq!(apply(BinOp::Add, s("a"), s("b")).unwrap(), s("ab"));
    }

    #[test]
    fn test_string_only_supports_plus() {
        let err = apply(BinOp::Sub, s("a"), s("b")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeMismatch);
        assert_eq!(err.message, "invalid operand types for '-': \"a\", \"b\"");
    }

    #[test]
    fn test_mixed_arithmetic_is_type_mismatch() {
        let err = apply(BinOp::Add, Int(3), s("a")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeMismatch);
        assert!(err.message.contains("'+'"));
        assert!(apply(BinOp::Mul, Bool(true), Int(2)).is_err());
    }

    #[test]
    fn test_equality_requires_same_type() {
        assert_eq!(apply(BinOp::Eq, Int(3), Int(3)).unwrap(), Bool(true));
        assert_eq!(apply(BinOp::Ne, s("a"), s("b")).unwrap(), Bool(true));
        assert_eq!(apply(BinOp::Eq, Bool(true), Bool(false)).unwrap(), Bool(false));
        let err = apply(BinOp::Eq, Int(3), Bool(true)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_ordering_is_int_only() {
        assert_eq!(apply(BinOp::Lt, Int(3), Int(5)).unwrap(), Bool(true));
        assert_eq!(apply(BinOp::Ge, Int(3), Int(5)).unwrap(), Bool(false));
        assert_eq!(apply(BinOp::Le, Int(5), Int(5)).unwrap(), Bool(true));
        assert!(apply(BinOp::Lt, s("a"), s("b")).is_err());
        assert!(apply(BinOp::Gt, Bool(true), Bool(false)).is_err());
    }

    #[test]
    fn test_logical() {
        assert_eq!(apply(BinOp::And, Bool(true), Bool(false)).unwrap(), Bool(false));
        assert_eq!(apply(BinOp::Or, Bool(false), Bool(true)).unwrap(), Bool(true));
        assert!(apply(BinOp::And, Int(1), Bool(true)).is_err());
    }
}
