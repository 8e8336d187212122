//! Lookup rules stored in the knowledge base.

use serde::{Deserialize, Serialize};

/// Interaction severity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directional interaction rule: `subject` interacts with `partner`.
///
/// Only the subject's side needs to be stored; the checker consults the rules
/// of every drug in the input, so either input order finds the pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionRule {
    /// Drug the rule is filed under
    pub subject: String,
    /// Interacting drug (need not be in the vocabulary)
    #[serde(alias = "with")]
    pub partner: String,
    pub severity: Severity,
    pub explanation: String,
}

impl InteractionRule {
    pub fn new(
        subject: impl Into<String>,
        partner: impl Into<String>,
        severity: Severity,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            partner: partner.into(),
            severity,
            explanation: explanation.into(),
        }
    }
}

/// Substitute suggestion for a drug.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlternativeRule {
    pub for_drug: String,
    pub suggestion: String,
    pub reason: String,
}

impl AlternativeRule {
    pub fn new(
        for_drug: impl Into<String>,
        suggestion: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            for_drug: for_drug.into(),
            suggestion: suggestion.into(),
            reason: reason.into(),
        }
    }
}

/// Placeholder replaced by the computed amount in `pediatric_dose`.
pub const DOSE_PLACEHOLDER: &str = "{mg}";

/// Dosing guidance for one drug.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DosingRule {
    pub drug: String,
    /// Weight-based coefficient for pediatric patients (mg per kg)
    pub pediatric_mg_per_kg: f64,
    /// Pediatric dose text; `{mg}` is replaced by the computed amount
    pub pediatric_dose: String,
    pub pediatric_rationale: String,
    /// Fixed adult dose text
    pub adult_dose: String,
    pub adult_rationale: String,
}

impl DosingRule {
    /// Weight-based amount in whole milligrams.
    ///
    /// Halves round to the even neighbour (e.g. 2.5 kg of a 1 mg/kg drug
    /// gives 2 mg).
    pub fn pediatric_amount(&self, weight_kg: f64) -> i64 {
        (weight_kg * self.pediatric_mg_per_kg).round_ties_even() as i64
    }

    /// Pediatric dose text for a given weight.
    pub fn pediatric_dose_for(&self, weight_kg: f64) -> String {
        self.pediatric_dose.replace(
            DOSE_PLACEHOLDER,
            &self.pediatric_amount(weight_kg).to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paracetamol_rule() -> DosingRule {
        DosingRule {
            drug: "paracetamol".into(),
            pediatric_mg_per_kg: 15.0,
            pediatric_dose: "{mg} mg per dose".into(),
            pediatric_rationale: "weight based".into(),
            adult_dose: "500 mg".into(),
            adult_rationale: "adult".into(),
        }
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
        let parsed: Severity = serde_json::from_str("\"moderate\"").unwrap();
        assert_eq!(parsed, Severity::Moderate);
        assert_eq!(Severity::Low.to_string(), "low");
    }

    #[test]
    fn test_interaction_rule_accepts_with_key() {
        let json = r#"{"subject":"ibuprofen","with":"aspirin","severity":"moderate","explanation":"x"}"#;
        let rule: InteractionRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.partner, "aspirin");
    }

    #[test]
    fn test_pediatric_amount() {
        let rule = paracetamol_rule();
        assert_eq!(rule.pediatric_amount(20.0), 300);
        assert_eq!(rule.pediatric_amount(1.5), 22); // 22.5
        assert_eq!(rule.pediatric_amount(2.5), 38); // 37.5
        assert_eq!(rule.pediatric_dose_for(20.0), "300 mg per dose");
    }
}
