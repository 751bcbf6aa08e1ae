//! Surface expression nodes, as produced by the parser

use super::Spanned;
use serde::{Deserialize, Serialize};

/// Expression exactly as written, before any environment lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Integer literal
    IntLit(i64),
    /// String literal (quotes stripped)
    StringLit(String),
    /// Identifier reference; `true` and `false` land here too
    Var(String),

    /// Binary operation
    Binary {
        left: Box<Spanned<Expr>>,
        op: BinOp,
        right: Box<Spanned<Expr>>,
    },

    /// Unary operation
    Unary {
        op: UnOp,
        expr: Box<Spanned<Expr>>,
    },

    /// if cond then then_branch else else_branch endif
    If {
        cond: Box<Spanned<Expr>>,
        then_branch: Box<Spanned<Expr>>,
        else_branch: Box<Spanned<Expr>>,
    },

    /// Function literal: \ param => body
    Lambda {
        param: Spanned<String>,
        body: Box<Spanned<Expr>>,
    },

    /// List literal: [e1, e2, ...]
    List(Vec<Spanned<Expr>>),

    /// Juxtaposition: e1 . e2 . ... (always two or more items)
    Seq(Vec<Spanned<Expr>>),

    /// Built-in list operation: head . e, tail . e, sort . e, length . e
    ListCall {
        func: ListFn,
        arg: Box<Spanned<Expr>>,
    },
}

/// Binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Equality
    Eq,
    Ne,

    // Ordering
    Lt,
    Le,
    Gt,
    Ge,

    // Logical
    And,
    Or,
}

impl std::fmt::Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinOp::Add => write!(f, "+"),
            BinOp::Sub => write!(f, "-"),
            BinOp::Mul => write!(f, "*"),
            BinOp::Div => write!(f, "/"),
            BinOp::Eq => write!(f, "=="),
            BinOp::Ne => write!(f, "!="),
            BinOp::Lt => write!(f, "<"),
            BinOp::Le => write!(f, "<="),
            BinOp::Gt => write!(f, ">"),
            BinOp::Ge => write!(f, ">="),
            BinOp::And => write!(f, "and"),
            BinOp::Or => write!(f, "or"),
        }
    }
}

/// Unary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnOp {
    /// Negation (-)
    Neg,
    /// Logical not
    Not,
}

impl std::fmt::Display for UnOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnOp::Neg => write!(f, "-"),
            UnOp::Not => write!(f, "not"),
        }
    }
}

/// Built-in list operations written as `keyword . operand`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListFn {
    Head,
    Tail,
    Sort,
    Length,
}

impl std::fmt::Display for ListFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListFn::Head => write!(f, "head"),
            ListFn::Tail => write!(f, "tail"),
            ListFn::Sort => write!(f, "sort"),
            ListFn::Length => write!(f, "length"),
        }
    }
}
