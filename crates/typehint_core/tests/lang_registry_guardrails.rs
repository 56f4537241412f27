use std::collections::HashMap;

use typehint_core::lang::punctuation::{self, PunctuationCategory, PunctuationId};

#[test]
fn punctuation_spellings_unique_and_resolvable() {
    let mut seen: HashMap<char, PunctuationId> = HashMap::new();

    for info in punctuation::PUNCTUATION {
        assert_eq!(
            punctuation::from_char(info.canonical),
            Some(info.id),
            "punctuation spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            punctuation::as_char(info.id),
            info.canonical,
            "punctuation as_char mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate punctuation spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn info_for_returns_matching_entry() {
    for id in [PunctuationId::LAngle, PunctuationId::RAngle, PunctuationId::Comma] {
        assert_eq!(punctuation::info_for(id).id, id);
        assert!(!punctuation::info_for(id).description.is_empty());
    }
}

#[test]
fn brackets_are_delimiters_and_comma_separates() {
    assert_eq!(punctuation::category(PunctuationId::LAngle), PunctuationCategory::Delimiter);
    assert_eq!(punctuation::category(PunctuationId::RAngle), PunctuationCategory::Delimiter);
    assert_eq!(punctuation::category(PunctuationId::Comma), PunctuationCategory::Separator);
}

#[test]
fn name_characters_are_not_structural() {
    for c in ['a', 'Z', '0', '_', ' ', ':', '[', '(', '-', 'é'] {
        assert!(!punctuation::is_structural(c), "{c:?} should be part of a name");
    }
    for c in ['<', '>', ','] {
        assert!(punctuation::is_structural(c), "{c:?} should be structural");
    }
}
