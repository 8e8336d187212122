//! Matching recognizer tokens against the vocabulary.

use crate::knowledge::KnowledgeBase;
use crate::models::{DrugRecord, EntityToken};

/// Map recognizer tokens to drugs by exact alias match.
///
/// A token is tested against every record, so an alias shared by two drugs
/// yields both. Keeps the order of first occurrence; repeated drugs are
/// dropped.
pub fn match_tokens<'kb>(
    knowledge: &'kb KnowledgeBase,
    tokens: &[EntityToken],
) -> Vec<&'kb DrugRecord> {
    let mut found: Vec<&DrugRecord> = Vec::new();

    for token in tokens {
        let Some(text) = token.text() else {
            continue;
        };
        for drug in knowledge.drugs() {
            if drug.has_alias(text) && !found.iter().any(|d| d.key == drug.key) {
                found.push(drug);
            }
        }
    }

    found
}
