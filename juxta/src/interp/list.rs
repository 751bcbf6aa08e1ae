//! Built-in list operations
//!
//! `head`, `tail`, `length` and `sort` reduce their operand first and never
//! touch the environment. `append` is the one operation that grows a stored
//! list in place.

use super::env::Environment;
use super::error::{InterpResult, RuntimeError};
use super::reduce::simplify;
use super::value::Value;
use crate::ast::ListFn;

/// Run the built-in `func` on `operand`
pub fn call(func: ListFn, operand: &Value, env: &Environment) -> InterpResult<Value> {
    match func {
        ListFn::Head => head(operand, env),
        ListFn::Tail => tail(operand, env),
        ListFn::Sort => sort(operand, env),
        ListFn::Length => length(operand, env),
    }
}

fn reduce_to_list(operation: &str, operand: &Value, env: &Environment) -> InterpResult<Vec<Value>> {
    match simplify(operand, env)? {
        Value::List(items) => Ok(items),
        other => Err(RuntimeError::not_a_list(operation, &other)),
    }
}

/// First element of a non-empty list
pub fn head(operand: &Value, env: &Environment) -> InterpResult<Value> {
    reduce_to_list("head", operand, env)?
        .into_iter()
        .next()
        .ok_or_else(RuntimeError::empty_list)
}

/// Everything after the first element; empty for an empty list
pub fn tail(operand: &Value, env: &Environment) -> InterpResult<Value> {
    let items = reduce_to_list("tail", operand, env)?;
    Ok(Value::List(items.into_iter().skip(1).collect()))
}

/// Element count of a list or character count of a string
pub fn length(operand: &Value, env: &Environment) -> InterpResult<Value> {
    let count = match simplify(operand, env)? {
        Value::List(items) => items.len(),
        Value::StringLiteral(s) => s.chars().count(),
        other => return Err(RuntimeError::not_a_list("length", &other)),
    };
    Ok(Value::IntLiteral(count as i64))
}

/// Integers of the list in non-decreasing order
pub fn sort(operand: &Value, env: &Environment) -> InterpResult<Value> {
    let keys = reduce_to_list("sort", operand, env)?
        .into_iter()
        .map(|item| match item {
            Value::IntLiteral(n) => Ok(n),
            other => Err(RuntimeError::unsortable(other)),
        })
        .collect::<InterpResult<Vec<i64>>>()?;

    Ok(Value::List(
        merge_sort(&keys).into_iter().map(Value::IntLiteral).collect(),
    ))
}

/// Stable top-down merge sort: split at the midpoint, sort both halves, merge
pub fn merge_sort(keys: &[i64]) -> Vec<i64> {
    if keys.len() <= 1 {
        return keys.to_vec();
    }
    let mid = keys.len() / 2;
    let left = merge_sort(&keys[..mid]);
    let right = merge_sort(&keys[mid..]);
    merge(&left, &right)
}

/// Ties go to the left half
fn merge(left: &[i64], right: &[i64]) -> Vec<i64> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

/// Reduce `element` and push it onto the list bound to `name`
pub fn append(env: &mut Environment, name: &str, element: &Value) -> InterpResult<()> {
    if !env.contains(name) {
        return Err(RuntimeError::undefined_variable(name));
    }
    let element = simplify(element, env)?;
    match env.get_mut(name) {
        Some(Value::List(items)) => {
            items.push(element);
            Ok(())
        }
        Some(_) => Err(RuntimeError::not_a_list_variable(name)),
        None => Err(RuntimeError::undefined_variable(name)),
    }
}
