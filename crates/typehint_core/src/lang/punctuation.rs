//! Punctuation vocabulary.
//!
//! The type-name grammar has exactly three structural characters: `<` opens an argument list, `>` closes it, and `,`
//! separates arguments. Every other character belongs to a name.
//!
//! ## Notes
//! - Lookup via [`from_char`] is exact; there are no aliases.
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use typehint_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_char('>'), Some(PunctuationId::RAngle));
//! assert!(!punctuation::is_structural('_'));
//! ```

use super::registry::Description;

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets around an argument list.
    Delimiter,
    /// Separators between arguments.
    Separator,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    LAngle,
    RAngle,
    Comma,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: char,
    pub category: PunctuationCategory,
    pub description: Description,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(
        PunctuationId::LAngle,
        '<',
        PunctuationCategory::Delimiter,
        "opens the argument list of a generic type",
    ),
    info(
        PunctuationId::RAngle,
        '>',
        PunctuationCategory::Delimiter,
        "closes the argument list of a generic type",
    ),
    info(
        PunctuationId::Comma,
        ',',
        PunctuationCategory::Separator,
        "separates type arguments",
    ),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_char(id: PunctuationId) -> char {
    info_for(id).canonical
}

/// Return the category for a punctuation token.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Return the full metadata entry for a punctuation token.
///
/// ## Notes
/// - The `match` is exhaustive, so a registry entry exists for every id by construction.
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    match id {
        PunctuationId::LAngle => &PUNCTUATION[0],
        PunctuationId::RAngle => &PUNCTUATION[1],
        PunctuationId::Comma => &PUNCTUATION[2],
    }
}

/// Resolve a character to its punctuation identifier.
pub fn from_char(c: char) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == c).map(|p| p.id)
}

/// Return `true` if `c` ends a name and starts a punctuation token.
pub fn is_structural(c: char) -> bool {
    from_char(c).is_some()
}

const fn info(
    id: PunctuationId,
    canonical: char,
    category: PunctuationCategory,
    description: Description,
) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        category,
        description,
    }
}
