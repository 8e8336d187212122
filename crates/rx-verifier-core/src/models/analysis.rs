//! Request and response shapes for a prescription analysis.

use serde::{Deserialize, Deserializer, Serialize};

use super::{AlternativeSuggestion, DosageRecommendation, DrugInteraction, ExtractedDrug};

/// Input to a combined analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub prescription_text: Option<String>,
    /// Accepted for compatibility; image content is not analysed
    pub image_base64: Option<String>,
    /// Whole years; integral floats such as `5.0` are accepted
    #[serde(default, deserialize_with = "deserialize_whole_years")]
    pub age_years: Option<i32>,
    pub weight_kg: Option<f64>,
}

/// Accept `5` or `5.0` for an age, rejecting fractions and out-of-range values.
fn deserialize_whole_years<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let whole = match number.as_i64() {
        Some(n) => Some(n),
        None => number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
            .map(|f| f as i64),
    };

    whole
        .and_then(|n| i32::try_from(n).ok())
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("ageYears must be a whole number, got {}", number)))
}

impl AnalysisRequest {
    /// Non-empty prescription text, if any.
    pub fn text(&self) -> Option<&str> {
        self.prescription_text.as_deref().filter(|t| !t.is_empty())
    }

    /// Non-empty image payload, if any.
    pub fn image(&self) -> Option<&str> {
        self.image_base64.as_deref().filter(|i| !i.is_empty())
    }

    /// Whether the request has something to analyse.
    pub fn has_input(&self) -> bool {
        self.text().is_some() || self.image().is_some()
    }
}

/// Output of a combined analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub drugs: Vec<ExtractedDrug>,
    pub interactions: Vec<DrugInteraction>,
    pub dosage_recommendations: Vec<DosageRecommendation>,
    pub alternative_suggestions: Vec<AlternativeSuggestion>,
}

/// Body of the interaction and alternative lookups.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DrugListRequest {
    pub drugs: Vec<String>,
}
