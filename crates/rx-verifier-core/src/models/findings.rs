//! Per-request results returned to callers.

use serde::{Deserialize, Serialize};

use super::Severity;

/// An interaction between two drugs present in the same input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrugInteraction {
    /// The two drugs, in the direction the rule was found
    pub pair: [String; 2],
    pub severity: Severity,
    pub explanation: String,
}

impl DrugInteraction {
    /// Order-independent key for the pair.
    pub fn pair_key(&self) -> String {
        let mut names = [self.pair[0].as_str(), self.pair[1].as_str()];
        names.sort_unstable();
        names.join("|")
    }

    /// Check whether this interaction links the two named drugs, in either order.
    pub fn involves(&self, a: &str, b: &str) -> bool {
        let (x, y) = (&self.pair[0], &self.pair[1]);
        (x == a && y == b) || (x == b && y == a)
    }
}

/// Dose guidance for a recognized drug.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DosageRecommendation {
    pub drug: String,
    pub recommended_dose: String,
    pub rationale: String,
    /// Age was considered (not necessarily that it changed the dose)
    pub age_adjusted: bool,
    /// Dose was computed from body weight
    pub weight_adjusted: bool,
}

/// A substitute drug suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeSuggestion {
    pub for_drug: String,
    pub suggestion: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_key_is_order_independent() {
        let a = DrugInteraction {
            pair: ["ibuprofen".into(), "aspirin".into()],
            severity: Severity::Moderate,
            explanation: String::new(),
        };
        let b = DrugInteraction {
            pair: ["aspirin".into(), "ibuprofen".into()],
            ..a.clone()
        };
        assert_eq!(a.pair_key(), "aspirin|ibuprofen");
        assert_eq!(a.pair_key(), b.pair_key());
        assert!(b.involves("ibuprofen", "aspirin"));
    }

    #[test]
    fn test_dosage_recommendation_wire_names() {
        let rec = DosageRecommendation {
            drug: "ibuprofen".into(),
            recommended_dose: "200 mg".into(),
            rationale: "adult".into(),
            age_adjusted: true,
            weight_adjusted: false,
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["recommendedDose"], "200 mg");
        assert_eq!(json["ageAdjusted"], true);
        assert_eq!(json["weightAdjusted"], false);
    }
}
