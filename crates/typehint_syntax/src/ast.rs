//! Type tree definitions for parsed type-name hints.

use std::fmt;

use typehint_core::lang::punctuation::{self, PunctuationId};

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A parsed type-name hint.
///
/// `mapping<FOO,set<BAR>>` becomes a `mapping` node with two subtypes: the leaf `FOO` and a `set` node whose only
/// subtype is the leaf `BAR`.
///
/// ## Notes
/// - Trees are immutable; build them with [`TypeTree::leaf`] / [`TypeTree::new`] or by parsing.
/// - `subtypes` keeps the left-to-right order of the source arguments.
/// - [`fmt::Display`] renders the canonical hint, so parsing the rendered string yields an equal tree for any tree the
///   parser produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeTree {
    name: String,
    subtypes: Vec<TypeTree>,
}

impl TypeTree {
    /// Create a node with the given arguments. An empty `subtypes` makes a leaf.
    ///
    /// `name` must be non-empty and free of `<`, `>` and `,`; otherwise the canonical rendering would not parse
    /// back to this tree. Debug builds assert this.
    pub fn new(name: impl Into<String>, subtypes: Vec<TypeTree>) -> Self {
        let name = name.into();
        debug_assert!(
            !name.is_empty() && !name.chars().any(punctuation::is_structural),
            "invalid type name {name:?}"
        );
        Self { name, subtypes }
    }

    /// Create a node without arguments. Same precondition on `name` as [`TypeTree::new`].
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subtypes(&self) -> &[TypeTree] {
        &self.subtypes
    }

    pub fn is_leaf(&self) -> bool {
        self.subtypes.is_empty()
    }

    /// Number of nested argument lists: `0` for a leaf, `1` for `set<A>`, `2` for `set<set<A>>`.
    pub fn depth(&self) -> usize {
        self.subtypes.iter().map(|t| t.depth() + 1).max().unwrap_or(0)
    }
}

impl fmt::Display for TypeTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.subtypes.is_empty() {
            return Ok(());
        }
        write!(f, "{}", punctuation::as_char(PunctuationId::LAngle))?;
        for (i, subtype) in self.subtypes.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", punctuation::as_char(PunctuationId::Comma))?;
            }
            write!(f, "{subtype}")?;
        }
        write!(f, "{}", punctuation::as_char(PunctuationId::RAngle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_has_no_subtypes() {
        let tree = TypeTree::leaf("UUID");
        assert!(tree.is_leaf());
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.to_string(), "UUID");
    }

    #[test]
    fn test_depth_follows_deepest_argument() {
        let tree = TypeTree::new(
            "tuple",
            vec![
                TypeTree::leaf("A"),
                TypeTree::new("set", vec![TypeTree::new("set", vec![TypeTree::leaf("B")])]),
            ],
        );
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn test_display_is_canonical() {
        let tree = TypeTree::new(
            "mapping",
            vec![TypeTree::leaf("FOO"), TypeTree::new("set", vec![TypeTree::leaf("BAR")])],
        );
        assert_eq!(tree.to_string(), "mapping<FOO,set<BAR>>");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid type name")]
    fn test_empty_name_is_rejected() {
        let _ = TypeTree::leaf("");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid type name")]
    fn test_structural_name_is_rejected() {
        let _ = TypeTree::new("map<a", vec![TypeTree::leaf("b")]);
    }
}
