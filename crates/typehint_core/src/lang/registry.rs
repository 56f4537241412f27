//! Shareable metadata for `typehint_core::lang` registries.
//!
//! ## Notes
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of syntax rules still lives in the lexer/parser.

/// Human-readable description of a vocabulary item, used in diagnostics.
pub type Description = &'static str;
