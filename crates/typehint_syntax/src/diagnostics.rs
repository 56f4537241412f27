//! Diagnostics for malformed type-name hints.
//!
//! There is exactly one error type, [`TypeNameHintError`]. It keeps the whole input so a
//! `miette::Report` can underline the offending bytes, and a [`HintErrorReason`] saying which
//! grammar rule was broken.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::ast::Span;
use crate::lexer::TokenKind;

/// Why a type-name hint was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HintErrorReason {
    /// A name was required: at the start, after `<`, or after `,`.
    #[error("expected a type name, found {found}")]
    ExpectedName { found: TokenKind },

    /// A type argument was followed by something other than `,` or `>`.
    #[error("expected `,` or `>` after a type argument, found {found}")]
    ExpectedSeparator { found: TokenKind },

    /// Input ended inside an argument list.
    #[error("`<` is never closed")]
    UnclosedBracket,

    /// `>` appeared outside any argument list.
    #[error("`>` has no matching `<`")]
    UnmatchedClose,

    /// A complete type was followed by more input.
    #[error("unexpected {found} after a complete type")]
    TrailingInput { found: TokenKind },

    /// Argument lists nest deeper than [`crate::options::ParseOptions::max_depth`].
    #[error("type arguments nest deeper than the limit of {limit}")]
    NestingTooDeep { limit: usize },
}

/// A syntactically invalid type-name hint.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("malformed type name hint `{input}`: {reason}")]
#[diagnostic(
    code(typehint::malformed_hint),
    help("a hint is `name` or `name<arg,...>`, and names cannot contain `<`, `>` or `,`")
)]
pub struct TypeNameHintError {
    #[source_code]
    input: String,
    #[label("here")]
    at: SourceSpan,
    reason: HintErrorReason,
}

impl TypeNameHintError {
    pub fn new(input: impl Into<String>, reason: HintErrorReason, span: Span) -> Self {
        Self {
            input: input.into(),
            at: (span.start..span.end).into(),
            reason,
        }
    }

    /// The hint that failed to parse, unchanged.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn reason(&self) -> &HintErrorReason {
        &self.reason
    }

    /// Byte range of the offending token. For an unclosed bracket this is the opening `<`.
    pub fn span(&self) -> Span {
        Span::new(self.at.offset(), self.at.offset() + self.at.len())
    }
}
