//! Hugging Face inference API client.

use std::time::Duration;

use async_trait::async_trait;
use rx_verifier_core::{EntityRecognizer, EntityToken};

use crate::extraction::{parse_entities_str, NerError, NerResult};

/// Biomedical NER model queried by default.
pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/d4data/biomedical-ner-all";

/// Upper bound on one recognition round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest error body kept in a `NerError::Status`.
const MAX_ERROR_BODY: usize = 200;

/// Connection settings for the NER service.
#[derive(Clone)]
pub struct NerConfig {
    pub endpoint: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl NerConfig {
    /// Default endpoint and timeout with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl std::fmt::Debug for NerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NerConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// NER client posting `{"inputs": text}` with bearer authentication.
#[derive(Debug, Clone)]
pub struct HuggingFaceNer {
    config: NerConfig,
    client: reqwest::Client,
}

impl HuggingFaceNer {
    /// Build a client; the timeout applies to the whole request.
    pub fn new(config: NerConfig) -> NerResult<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &NerConfig {
        &self.config
    }

    /// Send `text` to the service and parse the returned entities.
    pub async fn recognize_text(&self, text: &str) -> NerResult<Vec<EntityToken>> {
        let body = serde_json::json!({ "inputs": text });
        let resp = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let raw = resp.text().await?;
        if !status.is_success() {
            return Err(NerError::Status {
                status: status.as_u16(),
                message: excerpt(&raw),
            });
        }

        let tokens = parse_entities_str(&raw)?;
        tracing::debug!(tokens = tokens.len(), "NER response parsed");
        Ok(tokens)
    }
}

#[async_trait]
impl EntityRecognizer for HuggingFaceNer {
    async fn recognize(&self, text: &str) -> anyhow::Result<Vec<EntityToken>> {
        Ok(self.recognize_text(text).await?)
    }

    fn name(&self) -> &str {
        "huggingface-ner"
    }
}

/// First `MAX_ERROR_BODY` characters of an error body, trimmed.
fn excerpt(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((cut, _)) => format!("{}…", &body[..cut]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = NerConfig::new("hf_key");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(30));

        let config = config
            .with_endpoint("http://localhost:9000/ner")
            .with_timeout(Duration::from_millis(500));
        assert_eq!(config.endpoint, "http://localhost:9000/ner");
        assert_eq!(config.timeout, Duration::from_millis(500));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let debug = format!("{:?}", NerConfig::new("hf_secret_value"));
        assert!(!debug.contains("hf_secret_value"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("  short  "), "short");
        let long = "x".repeat(500);
        let cut = excerpt(&long);
        assert_eq!(cut.chars().count(), MAX_ERROR_BODY + 1);
        assert!(cut.ends_with('…'));
    }
}
