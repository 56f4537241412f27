//! Type-name hint vocabulary registries.
//!
//! Callers work with **stable IDs** (e.g. `PunctuationId`) and look up spellings/metadata via registry tables instead
//! of comparing characters inline.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics,
//!   rendering).
//!
//! ## Examples
//! ```rust
//! use typehint_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_char('<'), Some(PunctuationId::LAngle));
//! assert_eq!(punctuation::as_char(PunctuationId::Comma), ',');
//! ```

pub mod punctuation;
pub mod registry;
