//! Lexer implementation using logos

mod token;

pub use token::Token;

use crate::ast::Span;
use crate::error::{Error, Result};
use logos::Logos;

/// Tokenize source code, stopping at the first bad character
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>> {
    let (tokens, mut errors) = tokenize_lossy(source);
    if errors.is_empty() {
        Ok(tokens)
    } else {
        Err(errors.remove(0))
    }
}

/// Tokenize source code, skipping bad characters and collecting an error for each
pub fn tokenize_lossy(source: &str) -> (Vec<(Token, Span)>, Vec<Error>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::new(lexer.span().start, lexer.span().end);
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => errors.push(lex_error(lexer.slice(), span)),
        }
    }

    (tokens, errors)
}

/// Digits only fail to lex when the literal does not fit an `i64`
fn lex_error(slice: &str, span: Span) -> Error {
    if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
        Error::lexer(format!("integer literal out of range: {slice}"), span)
    } else {
        Error::lexer(format!("unexpected character: {slice:?}"), span)
    }
}
