//! Runtime values: every expression is reduced into and out of this one tree

use crate::ast::BinOp;
use std::fmt;

/// An expression, partially or fully reduced
///
/// Literals are terminal. `Identifier`, `Operation`, `Conditional` and
/// `Sequence` may survive reduction as residual nodes when something they
/// depend on is still unknown.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    IntLiteral(i64),
    BoolLiteral(bool),
    StringLiteral(String),
    /// Reference not yet resolved against the environment
    Identifier(String),
    Operation {
        lhs: Box<Value>,
        op: BinOp,
        rhs: Box<Value>,
    },
    Conditional {
        cond: Box<Value>,
        then_branch: Box<Value>,
        else_branch: Box<Value>,
    },
    /// Single-parameter function; captures nothing, substitution does the binding
    Function { param: String, body: Box<Value> },
    /// Juxtaposed expressions `e1 . e2 . ...`; also how functions are applied
    Sequence(Vec<Value>),
    List(Vec<Value>),
}

/// Operand domain of the primitive operators
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primitive {
    Int(i64),
    Bool(bool),
    Str(String),
}

impl Value {
    pub fn operation(lhs: Value, op: BinOp, rhs: Value) -> Self {
        Value::Operation {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }

    pub fn conditional(cond: Value, then_branch: Value, else_branch: Value) -> Self {
        Value::Conditional {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    pub fn function(param: impl Into<String>, body: Value) -> Self {
        Value::Function {
            param: param.into(),
            body: Box::new(body),
        }
    }

    /// Int, bool or string literal as an operator operand
    pub fn as_primitive(&self) -> Option<Primitive> {
        match self {
            Value::IntLiteral(n) => Some(Primitive::Int(*n)),
            Value::BoolLiteral(b) => Some(Primitive::Bool(*b)),
            Value::StringLiteral(s) => Some(Primitive::Str(s.clone())),
            _ => None,
        }
    }

    /// Nodes that may still become a literal once more is known
    pub fn is_symbolic(&self) -> bool {
        matches!(
            self,
            Value::Identifier(_)
                | Value::Operation { .. }
                | Value::Conditional { .. }
                | Value::Sequence(_)
        )
    }

    /// Kind of node, as named in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::IntLiteral(_) => "int",
            Value::BoolLiteral(_) => "bool",
            Value::StringLiteral(_) => "string",
            Value::Identifier(_) => "identifier",
            Value::Operation { .. } => "operation",
            Value::Conditional { .. } => "conditional",
            Value::Function { .. } => "function",
            Value::Sequence(_) => "sequence",
            Value::List(_) => "list",
        }
    }

    /// Surface rendering with every redundant enclosing pair of parentheses removed
    pub fn render_for_print(&self) -> String {
        let rendered = self.to_string();
        strip_enclosing_parens(&rendered).to_string()
    }
}

impl From<Primitive> for Value {
    fn from(p: Primitive) -> Self {
        match p {
            Primitive::Int(n) => Value::IntLiteral(n),
            Primitive::Bool(b) => Value::BoolLiteral(b),
            Primitive::Str(s) => Value::StringLiteral(s),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Int(n) => write!(f, "{n}"),
            Primitive::Bool(b) => write!(f, "{b}"),
            Primitive::Str(s) => write!(f, "\"{s}\""),
        }
    }
}

fn join(items: &[Value], sep: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = match self {
            Value::IntLiteral(n) => n.to_string(),
            Value::BoolLiteral(b) => b.to_string(),
            Value::StringLiteral(s) => format!("\"{s}\""),
            Value::Identifier(name) => name.clone(),
            Value::Operation { lhs, op, rhs } => format!("({lhs} {op} {rhs})"),
            Value::Conditional {
                cond,
                then_branch,
                else_branch,
            } => format!("if {cond} then {then_branch} else {else_branch}"),
            Value::Function { param, body } => format!("\\ {param} => {body}"),
            Value::Sequence(items) => format!("({})", join(items, " . ")),
            Value::List(items) => format!("[{}]", join(items, ", ")),
        };
        f.write_str(collapse_doubled_parens(&rendered))
    }
}

/// True when `s` is wrapped in one pair of parentheses that match each other.
/// Parentheses inside string literals do not count.
fn is_enclosed(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.first() != Some(&b'(') || bytes.last() != Some(&b')') {
        return false;
    }
    let mut depth = 0usize;
    let mut in_string = false;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'"' => in_string = !in_string,
            b'(' if !in_string => depth += 1,
            b')' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return i == bytes.len() - 1;
                }
            }
            _ => {}
        }
    }
    false
}

fn unwrap_once(s: &str) -> &str {
    &s[1..s.len() - 1]
}

/// `((x))` becomes `(x)`
fn collapse_doubled_parens(mut s: &str) -> &str {
    while s.starts_with("((") && is_enclosed(s) && is_enclosed(unwrap_once(s)) {
        s = unwrap_once(s);
    }
    s
}

/// `((x))` and `(x)` both become `x`
fn strip_enclosing_parens(mut s: &str) -> &str {
    while is_enclosed(s) {
        s = unwrap_once(s);
    }
    s
}
