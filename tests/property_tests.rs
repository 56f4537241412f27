//! Property-based tests for the type-name hint parser
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;
use typehint::lang::punctuation::PUNCTUATION;
use typehint::{TypeTree, parse_type};

// =============================================================================
// Strategies
// =============================================================================

/// Names exclude the structural characters; anything else is allowed.
fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_:]{0,7}"
}

fn tree_strategy() -> impl Strategy<Value = TypeTree> {
    let leaf = name_strategy().prop_map(TypeTree::leaf);
    leaf.prop_recursive(5, 48, 4, |inner| {
        (name_strategy(), prop::collection::vec(inner, 1..4)).prop_map(|(name, subtypes)| TypeTree::new(name, subtypes))
    })
}

fn structural_char() -> impl Strategy<Value = char> {
    prop::sample::select(PUNCTUATION.iter().map(|p| p.canonical).collect::<Vec<_>>())
}

/// Count `<` nesting directly from the text.
fn bracket_depth(hint: &str) -> usize {
    let mut depth = 0usize;
    let mut max = 0usize;
    for c in hint.chars() {
        match c {
            '<' => {
                depth += 1;
                max = max.max(depth);
            }
            '>' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max
}

// =============================================================================
// Well-formed input
// =============================================================================

proptest! {
    /// Property: rendering then parsing gives back the same tree
    #[test]
    fn canonical_rendering_reparses(tree in tree_strategy()) {
        let hint = tree.to_string();
        prop_assert_eq!(parse_type(&hint).unwrap(), tree);
    }

    /// Property: tree depth equals bracket nesting depth
    #[test]
    fn depth_matches_bracket_nesting(tree in tree_strategy()) {
        let hint = tree.to_string();
        let parsed = parse_type(&hint).unwrap();
        prop_assert_eq!(parsed.depth(), bracket_depth(&hint));
    }

    /// Property: parsing the same string twice gives equal trees
    #[test]
    fn parsing_is_deterministic(tree in tree_strategy()) {
        let hint = tree.to_string();
        prop_assert_eq!(parse_type(&hint).unwrap(), parse_type(&hint).unwrap());
    }

    /// Property: any string without structural characters is a leaf of itself
    #[test]
    fn bare_names_are_leaves(name in "[^<>,]{1,24}") {
        let tree = parse_type(&name).unwrap();
        prop_assert!(tree.is_leaf());
        prop_assert_eq!(tree.name(), name.as_str());
    }
}

// =============================================================================
// Mutated input (fuzz properties)
// =============================================================================

proptest! {
    /// Property: inserting one structural character either still parses
    /// (and renders back to exactly the input) or fails cleanly
    #[test]
    fn single_insertion_never_misparses(
        tree in tree_strategy(),
        at in any::<prop::sample::Index>(),
        c in structural_char(),
    ) {
        let mut hint = tree.to_string();
        let at = at.index(hint.len() + 1);
        hint.insert(at, c);

        if let Ok(parsed) = parse_type(&hint) {
            prop_assert_eq!(parsed.to_string(), hint);
        }
    }

    /// Property: removing one structural character either still parses
    /// (and renders back to exactly the input) or fails cleanly
    #[test]
    fn single_removal_never_misparses(tree in tree_strategy(), at in any::<prop::sample::Index>()) {
        let hint = tree.to_string();
        let positions: Vec<usize> = hint
            .char_indices()
            .filter(|(_, c)| matches!(c, '<' | '>' | ','))
            .map(|(i, _)| i)
            .collect();
        prop_assume!(!positions.is_empty());

        let mut mutated = hint.clone();
        mutated.remove(positions[at.index(positions.len())]);

        match parse_type(&mutated) {
            Ok(parsed) => {
                prop_assert_eq!(parsed.to_string(), mutated);
            }
            Err(err) => {
                prop_assert_eq!(err.input(), mutated.as_str());
            }
        }
    }

    /// Property: arbitrary strings over the grammar's alphabet never panic,
    /// and accepted strings are exactly their own canonical rendering
    #[test]
    fn arbitrary_input_is_total(hint in "[ab<>, ]{0,24}") {
        match parse_type(&hint) {
            Ok(parsed) => {
                prop_assert_eq!(parsed.to_string(), hint);
            }
            Err(err) => {
                prop_assert!(err.span().end <= hint.len());
                prop_assert_eq!(err.input(), hint.as_str());
            }
        }
    }
}
