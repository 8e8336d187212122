//! Pairwise interaction checks.

use std::collections::HashSet;

use crate::knowledge::KnowledgeBase;
use crate::models::DrugInteraction;

/// Find interactions between drugs in `drug_names`.
///
/// Every name's own rules are consulted, so a rule filed under either drug
/// of a pair is found whatever the input order. Each unordered pair is
/// reported once, keeping the first rule discovered.
pub fn check<S: AsRef<str>>(knowledge: &KnowledgeBase, drug_names: &[S]) -> Vec<DrugInteraction> {
    let lowered: Vec<String> = drug_names
        .iter()
        .map(|name| name.as_ref().to_lowercase())
        .collect();

    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for name in &lowered {
        for rule in knowledge.interactions_for(name) {
            if !lowered.contains(&rule.partner) {
                continue;
            }
            let interaction = DrugInteraction {
                pair: [name.clone(), rule.partner.clone()],
                severity: rule.severity,
                explanation: rule.explanation.clone(),
            };
            if seen.insert(interaction.pair_key()) {
                found.push(interaction);
            }
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeTables;
    use crate::models::{DrugRecord, InteractionRule, Severity};

    #[test]
    fn test_ibuprofen_aspirin() {
        let kb = KnowledgeBase::builtin();
        let found = check(&kb, &["ibuprofen", "aspirin"]);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].pair, ["ibuprofen".to_string(), "aspirin".to_string()]);
        assert_eq!(found[0].severity, Severity::Moderate);
    }

    #[test]
    fn test_reversed_order_same_result() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(check(&kb, &["aspirin", "ibuprofen"]), check(&kb, &["ibuprofen", "aspirin"]));
    }

    #[test]
    fn test_case_insensitive_input() {
        let kb = KnowledgeBase::builtin();
        let found = check(&kb, &["IBUPROFEN", "Aspirin"]);
        assert_eq!(found.len(), 1);
        assert!(found[0].involves("ibuprofen", "aspirin"));
    }

    #[test]
    fn test_no_rule_between_drugs() {
        let kb = KnowledgeBase::builtin();
        assert!(check(&kb, &["metformin", "paracetamol"]).is_empty());
    }

    #[test]
    fn test_partner_outside_vocabulary() {
        let kb = KnowledgeBase::builtin();
        let found = check(&kb, &["warfarin", "amoxicillin", "xyzdrug"]);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].pair, ["amoxicillin".to_string(), "warfarin".to_string()]);
    }

    #[test]
    fn test_repeated_names_reported_once() {
        let kb = KnowledgeBase::builtin();
        let found = check(&kb, &["ibuprofen", "aspirin", "Ibuprofen"]);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_rules_in_both_directions_deduplicated() {
        let mut a = DrugRecord::new("a", "");
        a.aliases = vec!["a".into()];
        let mut b = DrugRecord::new("b", "");
        b.aliases = vec!["b".into()];
        let kb = KnowledgeBase::new(KnowledgeTables {
            drugs: vec![a, b],
            interactions: vec![
                InteractionRule::new("a", "b", Severity::High, "first"),
                InteractionRule::new("b", "a", Severity::Low, "second"),
            ],
            ..KnowledgeTables::default()
        })
        .unwrap();

        let found = check(&kb, &["b", "a"]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].explanation, "second");
        assert_eq!(found[0].severity, Severity::Low);
    }

    #[test]
    fn test_discovery_order() {
        let kb = KnowledgeBase::builtin();
        let found = check(
            &kb,
            &["cimetidine", "metformin", "aspirin", "ibuprofen", "atorvastatin", "clarithromycin"],
        );

        let pairs: Vec<String> = found.iter().map(|i| i.pair_key()).collect();
        assert_eq!(
            pairs,
            vec!["cimetidine|metformin", "aspirin|ibuprofen", "atorvastatin|clarithromycin"]
        );
    }
}
