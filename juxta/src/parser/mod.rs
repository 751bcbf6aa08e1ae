//! Parser implementation using lalrpop

use crate::ast::{Expr, Span, Spanned, Stmt};
use crate::error::{Error, Result};
use crate::lexer::Token;


lalrpop_util::lalrpop_mod!(
    #[allow(clippy::all)]
    grammar
);

type GrammarError = lalrpop_util::ParseError<usize, Token, &'static str>;

/// Parse one line's tokens into a statement
pub fn parse(tokens: Vec<(Token, Span)>) -> Result<Spanned<Stmt>> {
    grammar::StatementParser::new()
        .parse(spanned_triples(tokens))
        .map_err(into_error)
}

/// Parse a bare `.`-separated sequence (no statement keyword)
pub fn parse_expr(tokens: Vec<(Token, Span)>) -> Result<Spanned<Expr>> {
    grammar::SequenceParser::new()
        .parse(spanned_triples(tokens))
        .map_err(into_error)
}

fn spanned_triples(tokens: Vec<(Token, Span)>) -> impl Iterator<Item = (usize, Token, usize)> {
    tokens
        .into_iter()
        .map(|(tok, span)| (span.start, tok, span.end))
}

fn into_error(e: GrammarError) -> Error {
    let span = match &e {
        lalrpop_util::ParseError::InvalidToken { location } => Span::new(*location, *location + 1),
        lalrpop_util::ParseError::UnrecognizedEof { location, .. } => {
            Span::new(*location, *location + 1)
        }
        lalrpop_util::ParseError::UnrecognizedToken { token, .. } => Span::new(token.0, token.2),
        lalrpop_util::ParseError::ExtraToken { token } => Span::new(token.0, token.2),
        lalrpop_util::ParseError::User { .. } => Span::new(0, 1),
    };
    Error::parser(format!("{e}"), span)
}
