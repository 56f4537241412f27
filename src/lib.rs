#![forbid(unsafe_code)]
//! typehint: parse generic type-name hints into type trees.
//!
//! Serialization code describes structured values with hints such as `mapping<UUID,set<Addr>>`.
//! This crate turns a hint into a [`TypeTree`] that an encoder/decoder can walk recursively, and
//! renders trees back into text.
//!
//! ## Crates
//!
//! - `typehint_core`: the structural punctuation registry (`<`, `>`, `,`)
//! - `typehint_syntax`: lexer, parser, type tree, diagnostics
//! - `typehint` (this crate): re-exports, renderers, and the `typehint` CLI
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! use typehint::{RenderConfig, RenderStyle, parse_type, render};
//!
//! let tree = parse_type("mapping<FOO,BAR>").unwrap();
//! let tuple = render(&tree, &RenderConfig::new().with_style(RenderStyle::Tuple));
//! assert_eq!(tuple, "('mapping', (('FOO', ()), ('BAR', ())))");
//! ```

pub mod cli;
pub mod render;

pub use typehint_core::lang;
pub use typehint_syntax::{ast, diagnostics, lexer, options, parser};

pub use ast::TypeTree;
pub use diagnostics::{HintErrorReason, TypeNameHintError};
pub use options::ParseOptions;
pub use parser::{parse_type, parse_type_with};
pub use render::{RenderConfig, RenderStyle, render};
