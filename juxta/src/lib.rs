//! juxta: a small expression language reduced by substitution
//!
//! Values are untyped trees; functions are applied by juxtaposition
//! (`f . x`) and reduced with capture-unaware substitution.

pub mod ast;
pub mod error;
pub mod interp;
pub mod lexer;
pub mod parser;
pub mod repl;

pub use ast::Span;
pub use error::{Error, Result};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber when `RUST_LOG` is set
///
/// Safe to call more than once; only the first call does anything.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_ok() {
            use tracing_subscriber::prelude::*;
            use tracing_subscriber::{EnvFilter, fmt};

            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
