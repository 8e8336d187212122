//! Drug-name extraction from prescription text.
//!
//! Pipeline: Entity recognition (optional, remote) → Alias matching
//!           └─ on any recognizer failure ─→ Alias substring scan

mod matcher;
mod scanner;

pub use matcher::*;
pub use scanner::*;

use std::sync::Arc;

use async_trait::async_trait;

use crate::knowledge::KnowledgeBase;
use crate::models::{EntityToken, ExtractedDrug};

/// Source of candidate tokens for a piece of text.
///
/// Failures are opaque to the extractor: they are logged and the alias scan
/// is used instead.
#[async_trait]
pub trait EntityRecognizer: Send + Sync {
    /// Split `text` into candidate entity tokens.
    async fn recognize(&self, text: &str) -> anyhow::Result<Vec<EntityToken>>;

    /// Short name used in logs.
    fn name(&self) -> &str {
        "recognizer"
    }
}

/// Extracts known drugs from free text.
#[derive(Clone)]
pub struct DrugExtractor {
    knowledge: Arc<KnowledgeBase>,
    recognizer: Option<Arc<dyn EntityRecognizer>>,
    fallback_order: ExtractionOrder,
}

impl DrugExtractor {
    /// Create an extractor that only uses the alias scan.
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self {
            knowledge,
            recognizer: None,
            fallback_order: ExtractionOrder::default(),
        }
    }

    /// Prefer `recognizer` over the alias scan.
    pub fn with_recognizer(mut self, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    /// Set the ordering used by the alias scan.
    pub fn with_fallback_order(mut self, order: ExtractionOrder) -> Self {
        self.fallback_order = order;
        self
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn has_recognizer(&self) -> bool {
        self.recognizer.is_some()
    }

    pub fn fallback_order(&self) -> ExtractionOrder {
        self.fallback_order
    }

    /// Extract the drugs mentioned in `text`.
    ///
    /// Blank text returns nothing without contacting the recognizer. A
    /// recognizer that answers successfully is authoritative, even when none
    /// of its tokens name a known drug.
    pub async fn extract(&self, text: &str) -> Vec<ExtractedDrug> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        if let Some(recognizer) = &self.recognizer {
            match recognizer.recognize(text).await {
                Ok(tokens) => {
                    let drugs = match_tokens(&self.knowledge, &tokens);
                    tracing::debug!(
                        recognizer = recognizer.name(),
                        tokens = tokens.len(),
                        drugs = drugs.len(),
                        "Matched recognizer tokens"
                    );
                    return drugs.into_iter().map(ExtractedDrug::from).collect();
                }
                Err(e) => {
                    tracing::warn!(
                        recognizer = recognizer.name(),
                        error = %format!("{:#}", e),
                        "Entity recognition failed, falling back to alias scan"
                    );
                }
            }
        }

        self.scan(text)
    }

    /// Alias substring scan only.
    pub fn scan(&self, text: &str) -> Vec<ExtractedDrug> {
        let drugs = scan(&self.knowledge, text, self.fallback_order);
        tracing::debug!(drugs = drugs.len(), order = ?self.fallback_order, "Alias scan complete");
        drugs.into_iter().map(ExtractedDrug::from).collect()
    }
}
