//! Shared handler state.

use std::sync::Arc;

use anyhow::Context;
use rx_verifier_core::{DrugExtractor, KnowledgeBase, PrescriptionVerifier};
use rx_verifier_ner::HuggingFaceNer;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<PrescriptionVerifier>,
}

impl AppState {
    pub fn new(verifier: PrescriptionVerifier) -> Self {
        Self {
            verifier: Arc::new(verifier),
        }
    }

    /// Load the knowledge base and wire the extractor described by `config`.
    pub fn from_config(config: &ServerConfig) -> anyhow::Result<Self> {
        let knowledge = match &config.knowledge_base {
            Some(path) => {
                let kb = KnowledgeBase::from_path(path).with_context(|| {
                    format!("Failed to load knowledge base from {}", path.display())
                })?;
                tracing::info!(path = %path.display(), drugs = kb.len(), "Loaded knowledge base");
                kb
            }
            None => {
                let kb = KnowledgeBase::builtin();
                tracing::info!(drugs = kb.len(), "Using builtin knowledge base");
                kb
            }
        };

        let mut extractor =
            DrugExtractor::new(Arc::new(knowledge)).with_fallback_order(config.fallback_order);
        match &config.ner {
            Some(ner) => {
                tracing::info!(endpoint = %ner.endpoint, "Remote entity recognition enabled");
                let client = HuggingFaceNer::new(ner.clone())
                    .context("Failed to build NER client")?;
                extractor = extractor.with_recognizer(Arc::new(client));
            }
            None => tracing::info!("No NER API key set, using alias scan only"),
        }

        Ok(Self::new(PrescriptionVerifier::new(extractor)))
    }
}
