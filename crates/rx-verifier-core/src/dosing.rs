//! Dosage guidance for extracted drugs.
//!
//! Children under [`PEDIATRIC_AGE_LIMIT`] with a known body weight get a
//! weight-based amount; everyone else gets the drug's fixed adult dose.

use crate::knowledge::KnowledgeBase;
use crate::models::{DosageRecommendation, ExtractedDrug};

/// Patients younger than this (in years) are dosed by weight.
pub const PEDIATRIC_AGE_LIMIT: i32 = 12;

/// Recommend a dose for every drug that has a dosing rule.
///
/// Drugs without a rule are skipped. `age_adjusted` reports whether an age
/// was supplied at all, not whether it changed the dose.
pub fn recommend(
    knowledge: &KnowledgeBase,
    drugs: &[ExtractedDrug],
    age_years: Option<i32>,
    weight_kg: Option<f64>,
) -> Vec<DosageRecommendation> {
    drugs
        .iter()
        .filter_map(|drug| {
            let rule = knowledge.dosing_for(&drug.name)?;
            let recommendation = match pediatric_weight(age_years, weight_kg) {
                Some(weight) => DosageRecommendation {
                    drug: rule.drug.clone(),
                    recommended_dose: rule.pediatric_dose_for(weight),
                    rationale: rule.pediatric_rationale.clone(),
                    age_adjusted: true,
                    weight_adjusted: true,
                },
                None => DosageRecommendation {
                    drug: rule.drug.clone(),
                    recommended_dose: rule.adult_dose.clone(),
                    rationale: rule.adult_rationale.clone(),
                    age_adjusted: age_years.is_some(),
                    weight_adjusted: false,
                },
            };
            Some(recommendation)
        })
        .collect()
}

/// Weight to dose by, when the patient qualifies for pediatric dosing.
///
/// A zero weight counts as unknown.
fn pediatric_weight(age_years: Option<i32>, weight_kg: Option<f64>) -> Option<f64> {
    match (age_years, weight_kg) {
        (Some(age), Some(weight)) if age < PEDIATRIC_AGE_LIMIT && weight != 0.0 => Some(weight),
        _ => None,
    }
}
