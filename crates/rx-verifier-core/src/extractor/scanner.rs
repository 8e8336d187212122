//! Alias substring scan used when no recognizer is available.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::knowledge::KnowledgeBase;
use crate::models::DrugRecord;

/// Order of drugs returned by the substring scan.
///
/// Recognizer output always follows token order. The scan defaults to
/// knowledge-base order.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionOrder {
    /// Vocabulary iteration order
    #[default]
    KnowledgeBase,
    /// Position of each drug's first alias occurrence in the text
    TextOccurrence,
}

impl FromStr for ExtractionOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "knowledge-base" | "kb" => Ok(Self::KnowledgeBase),
            "text" | "text-occurrence" => Ok(Self::TextOccurrence),
            other => Err(format!(
                "unknown extraction order '{}' (expected 'knowledge-base' or 'text')",
                other
            )),
        }
    }
}

/// Find every drug with an alias occurring anywhere in `text`.
///
/// Each drug appears at most once, however many of its aliases match.
pub fn scan<'kb>(
    knowledge: &'kb KnowledgeBase,
    text: &str,
    order: ExtractionOrder,
) -> Vec<&'kb DrugRecord> {
    let lower = text.to_lowercase();

    let mut found: Vec<(usize, &DrugRecord)> = knowledge
        .drugs()
        .iter()
        .filter_map(|drug| drug.earliest_mention(&lower).map(|pos| (pos, drug)))
        .collect();

    if order == ExtractionOrder::TextOccurrence {
        // Stable sort keeps vocabulary order for ties.
        found.sort_by_key(|(pos, _)| *pos);
    }

    found.into_iter().map(|(_, drug)| drug).collect()
}
