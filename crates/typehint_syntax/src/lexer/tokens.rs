//! Token types for the type-name hint lexer.
//!
//! ## Notes
//! - Structural tokens carry a registry-backed `PunctuationId` instead of a raw `char`.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::ast::Span;
use typehint_core::lang::punctuation::{self, PunctuationId};

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// `<`, `>` or `,`.
    Punctuation(PunctuationId),
    /// A maximal run of non-structural characters. Whitespace is kept.
    Name(String),
    /// End of input.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Punctuation(id) => write!(f, "`{}`", punctuation::as_char(*id)),
            TokenKind::Name(name) => write!(f, "name `{name}`"),
            TokenKind::Eof => f.write_str("end of input"),
        }
    }
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}
