//! Property tests for the alias scan.

use proptest::prelude::*;
use rx_verifier_core::extractor::{scan, ExtractionOrder};
use rx_verifier_core::KnowledgeBase;

/// Every (canonical key, alias) pair in the bundled vocabulary.
fn builtin_aliases() -> Vec<(String, String)> {
    KnowledgeBase::builtin()
        .drugs()
        .iter()
        .flat_map(|d| d.aliases.iter().map(move |a| (d.key.clone(), a.clone())))
        .collect()
}

proptest! {
    #[test]
    fn alias_anywhere_is_found_exactly_once(
        pick in any::<prop::sample::Index>(),
        prefix in "[a-z0-9 ,.]{0,24}",
        suffix in "[a-z0-9 ,.]{0,24}",
        repeats in 1usize..4,
        shout in any::<bool>(),
        order in prop_oneof![
            Just(ExtractionOrder::KnowledgeBase),
            Just(ExtractionOrder::TextOccurrence),
        ],
    ) {
        let kb = KnowledgeBase::builtin();
        let aliases = builtin_aliases();
        let (key, alias) = pick.get(&aliases);

        let mention = if shout { alias.to_uppercase() } else { alias.clone() };
        let text = format!("{}{}{}", prefix, vec![mention; repeats].join(" "), suffix);

        let found = scan(&kb, &text, order);
        let hits = found.iter().filter(|d| &d.key == key).count();
        prop_assert_eq!(hits, 1);
    }

    #[test]
    fn scan_never_repeats_a_drug(text in "\\PC{0,64}") {
        let kb = KnowledgeBase::builtin();
        let found = scan(&kb, &text, ExtractionOrder::TextOccurrence);

        let mut keys: Vec<&str> = found.iter().map(|d| d.key.as_str()).collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        prop_assert_eq!(keys.len(), total);
    }

    #[test]
    fn orderings_find_the_same_drugs(text in "[a-z ]{0,16}(tylenol|advil|lipitor|aspirin|amox)[a-z ]{0,16}(metformin|motrin|glucophage)?") {
        let kb = KnowledgeBase::builtin();

        let mut by_kb: Vec<String> = scan(&kb, &text, ExtractionOrder::KnowledgeBase)
            .iter().map(|d| d.key.clone()).collect();
        let mut by_text: Vec<String> = scan(&kb, &text, ExtractionOrder::TextOccurrence)
            .iter().map(|d| d.key.clone()).collect();
        by_kb.sort();
        by_text.sort();
        prop_assert_eq!(by_kb, by_text);
    }
}
