//! Syntax frontend for type-name hints: lexer, parser, type tree, diagnostics.
//!
//! A type-name hint describes the shape of a structurally typed value, e.g. `mapping<UUID,set<Addr>>`. Serialization
//! code parses the hint once and walks the resulting [`ast::TypeTree`] to pick a codec per node.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it does not check that a name refers to a known codec.
//! - Parsing is all-or-nothing. A malformed hint yields a single [`diagnostics::TypeNameHintError`] and no tree.
//! - Structural characters come from `typehint_core::lang::punctuation`.
//!
//! ## Examples
//! ```rust
//! use typehint_syntax::parser;
//!
//! let tree = parser::parse_type("mapping<FOO,set<BAR>>").unwrap();
//! assert_eq!(tree.name(), "mapping");
//! assert_eq!(tree.subtypes().len(), 2);
//! assert_eq!(tree.depth(), 2);
//!
//! assert!(parser::parse_type("mapping<<foo><bar>>").is_err());
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod options;
pub mod parser;
pub mod token_helpers;
