//! Parser for type-name hints
//!
//! Converts a hint such as `mapping<FOO,set<BAR>>` into a [`TypeTree`] by recursive descent over
//! the token stream:
//!
//! ```text
//! type     := name [ "<" arglist ">" ]
//! arglist  := type ("," type)*
//! ```
//!
//! The whole input must reduce to exactly one `type`.
//!
//! ## Examples
//!
//! ```rust
//! use typehint_syntax::ast::TypeTree;
//! use typehint_syntax::parser;
//!
//! let tree = parser::parse_type("set<UUID>").unwrap();
//! assert_eq!(tree, TypeTree::new("set", vec![TypeTree::leaf("UUID")]));
//! ```

use std::str::FromStr;

use crate::ast::{Span, TypeTree};
use crate::diagnostics::{HintErrorReason, TypeNameHintError};
use crate::lexer::{self, Token, TokenKind};
use crate::options::ParseOptions;
use typehint_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns).

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/types.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
