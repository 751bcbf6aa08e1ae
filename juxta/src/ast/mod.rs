//! Abstract Syntax Tree definitions

mod expr;
mod span;

pub use expr::*;
pub use span::*;

use serde::{Deserialize, Serialize};

/// One input line is one statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    /// name := sequence
    Assign { name: String, value: Spanned<Expr> },
    /// print sequence
    Print(Spanned<Expr>),
    /// dump
    Dump,
    /// append . name . expr
    Append { name: String, value: Spanned<Expr> },
}
