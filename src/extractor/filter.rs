use crate::dictionary::Dictionaries;

/// Candidates shorter than this (in characters) are noise.
pub const MIN_ITEM_CHARS: usize = 3;

/// The gate a candidate failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    TooShort,
    Blacklisted,
    StandaloneBlacklisted,
    NotFurniture,
}

/// First gate `item` fails, or `None` when it is accepted.
///
/// Gates run in order: length, blacklist (lowercased item equals an entry),
/// standalone blacklist (equal ignoring case), vocabulary (lowercased item
/// contains a furniture label). The vocabulary gate is a substring test while
/// both blacklists need a whole match.
pub fn rejection(item: &str, dictionaries: &Dictionaries) -> Option<Rejection> {
    if item.chars().count() < MIN_ITEM_CHARS {
        return Some(Rejection::TooShort);
    }

    let lowered = item.to_lowercase();

    if dictionaries.blacklist.iter().any(|entry| *entry == lowered) {
        return Some(Rejection::Blacklisted);
    }

    if dictionaries
        .standalone_blacklist
        .iter()
        .any(|entry| entry.to_lowercase() == lowered)
    {
        return Some(Rejection::StandaloneBlacklisted);
    }

    if !contains_furniture_label(&lowered, dictionaries) {
        return Some(Rejection::NotFurniture);
    }

    None
}

pub fn accept(item: &str, dictionaries: &Dictionaries) -> bool {
    rejection(item, dictionaries).is_none()
}

/// Whether `term` mentions any furniture label, ignoring the term's case.
pub fn is_valid_furniture_term(term: &str, dictionaries: &Dictionaries) -> bool {
    contains_furniture_label(&term.to_lowercase(), dictionaries)
}

fn contains_furniture_label(lowered: &str, dictionaries: &Dictionaries) -> bool {
    dictionaries
        .furniture_labels
        .iter()
        .any(|label| lowered.contains(label.as_str()))
}


#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    fn dictionaries() -> Dictionaries {
        Dictionaries::new(
            vec!["chair".to_string(), "table".to_string()],
            vec!["stool".to_string()],
            vec!["seat".to_string()],
        )
    }

    proptest! {
        #[test]
        fn short_items_never_accepted(item in ".{0,2}") {
            prop_assert!(!accept(&item, &dictionaries()));
        }

        #[test]
        fn blacklisted_items_never_accepted(item in "[sS][tT][oO][oO][lL]") {
            prop_assert_eq!(rejection(&item, &dictionaries()), Some(Rejection::Blacklisted));
        }

        #[test]
        fn standalone_items_never_accepted(item in "[sS][eE][aA][tT]") {
            prop_assert!(!accept(&item, &dictionaries()));
        }

        #[test]
        fn items_without_label_never_accepted(item in "[dfgkmnpqvwxyz ]{3,40}") {
            prop_assert_eq!(rejection(&item, &dictionaries()), Some(Rejection::NotFurniture));
        }

        #[test]
        fn accepted_items_satisfy_every_gate(item in "\\PC{0,30}") {
            let dicts = dictionaries();
            if accept(&item, &dicts) {
                let lowered = item.to_lowercase();
                prop_assert!(item.chars().count() >= MIN_ITEM_CHARS);
                prop_assert!(!dicts.blacklist.contains(&lowered));
                prop_assert!(!dicts.standalone_blacklist.iter().any(|s| s.to_lowercase() == lowered));
                prop_assert!(is_valid_furniture_term(&item, &dicts));
            }
        }
    }
}
