//! Prescription analysis coordinator.
//!
//! Pipeline: Extraction → Dosage → Interactions → Alternatives

use std::sync::Arc;

use thiserror::Error;

use crate::extractor::DrugExtractor;
use crate::knowledge::KnowledgeBase;
use crate::models::{
    AlternativeSuggestion, AnalysisRequest, AnalysisResult, DosageRecommendation,
    DrugInteraction, ExtractedDrug,
};
use crate::{alternatives, dosing, interactions};

/// Verifier errors.
#[derive(Error, Debug, PartialEq)]
pub enum VerifierError {
    #[error("Provide prescriptionText or imageBase64")]
    MissingInput,
}

pub type VerifierResult<T> = Result<T, VerifierError>;

/// Runs the full analysis, or any single step, against one knowledge base.
///
/// The knowledge base is the extractor's own, so extraction and every
/// lookup always read the same tables.
#[derive(Clone)]
pub struct PrescriptionVerifier {
    extractor: DrugExtractor,
}

impl PrescriptionVerifier {
    pub fn new(extractor: DrugExtractor) -> Self {
        Self { extractor }
    }

    /// Verifier using only the alias scan for extraction.
    pub fn offline(knowledge: Arc<KnowledgeBase>) -> Self {
        Self::new(DrugExtractor::new(knowledge))
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        self.extractor.knowledge()
    }

    pub fn extractor(&self) -> &DrugExtractor {
        &self.extractor
    }

    /// Analyse a prescription end to end.
    ///
    /// The image payload only satisfies the input check; drugs are read from
    /// the text alone.
    pub async fn analyze(&self, request: &AnalysisRequest) -> VerifierResult<AnalysisResult> {
        if !request.has_input() {
            return Err(VerifierError::MissingInput);
        }

        // Step 1: Extract drugs
        let drugs = self.extract(request.text().unwrap_or_default()).await;
        let names: Vec<&str> = drugs.iter().map(|d| d.name.as_str()).collect();

        // Step 2: Dosage guidance
        let dosage_recommendations =
            self.recommend_dosage(&drugs, request.age_years, request.weight_kg);

        // Step 3: Interactions and alternatives among the extracted drugs
        let interactions = self.check_interactions(&names);
        let alternative_suggestions = self.suggest_alternatives(&names);

        tracing::info!(
            drugs = drugs.len(),
            interactions = interactions.len(),
            dosage = dosage_recommendations.len(),
            alternatives = alternative_suggestions.len(),
            "Prescription analysed"
        );

        Ok(AnalysisResult {
            drugs,
            interactions,
            dosage_recommendations,
            alternative_suggestions,
        })
    }

    /// Extract known drugs from text.
    pub async fn extract(&self, text: &str) -> Vec<ExtractedDrug> {
        self.extractor.extract(text).await
    }

    /// Dose guidance for already extracted drugs.
    pub fn recommend_dosage(
        &self,
        drugs: &[ExtractedDrug],
        age_years: Option<i32>,
        weight_kg: Option<f64>,
    ) -> Vec<DosageRecommendation> {
        dosing::recommend(self.knowledge(), drugs, age_years, weight_kg)
    }

    /// Interactions among the named drugs.
    pub fn check_interactions<S: AsRef<str>>(&self, drug_names: &[S]) -> Vec<DrugInteraction> {
        interactions::check(self.knowledge(), drug_names)
    }

    /// Substitutes for the named drugs.
    pub fn suggest_alternatives<S: AsRef<str>>(
        &self,
        drug_names: &[S],
    ) -> Vec<AlternativeSuggestion> {
        alternatives::suggest(self.knowledge(), drug_names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeTables;
    use crate::models::{DrugRecord, InteractionRule, Severity};

    fn verifier() -> PrescriptionVerifier {
        PrescriptionVerifier::offline(Arc::new(KnowledgeBase::builtin()))
    }

    #[tokio::test]
    async fn test_missing_input_rejected() {
        let result = verifier().analyze(&AnalysisRequest::default()).await;
        assert_eq!(result, Err(VerifierError::MissingInput));
        assert_eq!(
            VerifierError::MissingInput.to_string(),
            "Provide prescriptionText or imageBase64"
        );
    }

    #[tokio::test]
    async fn test_image_only_gives_empty_result() {
        let request = AnalysisRequest {
            image_base64: Some("aGVsbG8=".into()),
            ..AnalysisRequest::default()
        };
        let result = verifier().analyze(&request).await.unwrap();
        assert_eq!(result, AnalysisResult::default());
    }

    #[tokio::test]
    async fn test_full_analysis() {
        let request = AnalysisRequest {
            prescription_text: Some("Advil 200mg tid, Aspirin 81mg daily, xyzdrug 5mg".into()),
            age_years: Some(8),
            weight_kg: Some(25.0),
            ..AnalysisRequest::default()
        };
        let result = verifier().analyze(&request).await.unwrap();

        let names: Vec<&str> = result.drugs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["ibuprofen", "aspirin"]);

        assert_eq!(result.interactions.len(), 1);
        assert!(result.interactions[0].involves("ibuprofen", "aspirin"));

        assert_eq!(result.dosage_recommendations.len(), 1);
        assert!(result.dosage_recommendations[0]
            .recommended_dose
            .starts_with("250 mg per dose"));

        assert_eq!(result.alternative_suggestions.len(), 1);
        assert_eq!(result.alternative_suggestions[0].for_drug, "ibuprofen");
    }

    fn sleep_aid_tables() -> KnowledgeTables {
        let mut zolpidem = DrugRecord::new("zolpidem", "Sedative-hypnotic.");
        zolpidem.aliases = vec!["zolpidem".into(), "ambien".into()];
        let mut oxycodone = DrugRecord::new("oxycodone", "Opioid analgesic.");
        oxycodone.aliases = vec!["oxycodone".into(), "oxycontin".into()];

        KnowledgeTables {
            drugs: vec![zolpidem, oxycodone],
            interactions: vec![InteractionRule::new(
                "oxycodone",
                "zolpidem",
                Severity::High,
                "Additive CNS depression.",
            )],
            ..KnowledgeTables::default()
        }
    }

    #[tokio::test]
    async fn test_lookups_use_extractor_knowledge() {
        let kb = Arc::new(KnowledgeBase::new(sleep_aid_tables()).unwrap());
        let verifier = PrescriptionVerifier::new(DrugExtractor::new(kb));

        let request = AnalysisRequest {
            prescription_text: Some("ambien and oxycontin".into()),
            ..AnalysisRequest::default()
        };
        let result = verifier.analyze(&request).await.unwrap();

        let names: Vec<&str> = result.drugs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["zolpidem", "oxycodone"]);
        assert_eq!(result.interactions.len(), 1);
        assert_eq!(result.interactions[0].severity, Severity::High);
        assert!(verifier.knowledge().drug("aspirin").is_none());
    }
}
