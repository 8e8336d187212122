//! Substitute drug suggestions.

use crate::knowledge::KnowledgeBase;
use crate::models::AlternativeSuggestion;

/// Suggest alternatives for each named drug, in input then rule order.
///
/// Names are not deduplicated: a drug listed twice gets its suggestions twice.
pub fn suggest<S: AsRef<str>>(
    knowledge: &KnowledgeBase,
    drug_names: &[S],
) -> Vec<AlternativeSuggestion> {
    drug_names
        .iter()
        .map(|name| name.as_ref().to_lowercase())
        .flat_map(move |name| {
            knowledge
                .alternatives_for(&name)
                .iter()
                .map(move |rule| AlternativeSuggestion {
                    for_drug: name.clone(),
                    suggestion: rule.suggestion.clone(),
                    reason: rule.reason.clone(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ibuprofen_alternative() {
        let kb = KnowledgeBase::builtin();
        let found = suggest(&kb, &["ibuprofen"]);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].for_drug, "ibuprofen");
        assert!(found[0].suggestion.contains("Paracetamol"));
        assert!(found[0].suggestion.contains("Acetaminophen"));
    }

    #[test]
    fn test_input_order_and_no_dedup() {
        let kb = KnowledgeBase::builtin();
        let found = suggest(&kb, &["Metformin", "aspirin", "amoxicillin", "metformin"]);

        let drugs: Vec<&str> = found.iter().map(|s| s.for_drug.as_str()).collect();
        assert_eq!(drugs, vec!["metformin", "amoxicillin", "metformin"]);
    }

    #[test]
    fn test_unknown_drug() {
        let kb = KnowledgeBase::builtin();
        assert!(suggest(&kb, &["xyzdrug"]).is_empty());
        assert!(suggest::<&str>(&kb, &[]).is_empty());
    }
}
