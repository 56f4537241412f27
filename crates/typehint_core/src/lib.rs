//! Provide the canonical vocabulary of the type-name hint grammar.
//!
//! A type-name hint is a string such as `mapping<UUID,set<Addr>>`. Its structure is carried entirely by three
//! punctuation characters; everything else is part of a name. This crate owns those characters as a registry so the
//! lexer, renderers, and diagnostics all agree on the same spellings.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no parser types.
//! - Type names themselves are not registered here. Whether `FOO` names a real codec is decided by whoever consumes
//!   the parsed tree.

pub mod lang;
