//! Interpreter: values, reduction and the statement executor

mod env;
mod error;
mod eval;
mod list;
mod lower;
mod ops;
mod reduce;
mod subst;
mod value;

pub use env::Environment;
pub use error::{ErrorKind, InterpResult, RuntimeError};
pub use eval::Interpreter;
pub use list::{append, head, length, merge_sort, sort, tail};
pub use lower::lower;
pub use ops::apply;
pub use reduce::{MAX_REDUCTION_DEPTH, Reducer, simplify};
pub use subst::replace;
pub use value::{Primitive, Value};
