//! Server configuration, resolved once from the environment at startup.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use rx_verifier_core::ExtractionOrder;
use rx_verifier_ner::NerConfig;
use thiserror::Error;

pub const ADDR_VAR: &str = "RX_VERIFIER_ADDR";
pub const KNOWLEDGE_BASE_VAR: &str = "RX_VERIFIER_KNOWLEDGE_BASE";
pub const API_KEY_VAR: &str = "HUGGINGFACE_API_KEY";
pub const NER_URL_VAR: &str = "RX_VERIFIER_NER_URL";
pub const NER_TIMEOUT_VAR: &str = "RX_VERIFIER_NER_TIMEOUT_SECS";
pub const FALLBACK_ORDER_VAR: &str = "RX_VERIFIER_FALLBACK_ORDER";

pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";

/// Configuration errors. All are fatal at startup.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{var}: invalid socket address '{value}'")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var}: expected a whole number of seconds, got '{value}'")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{var}: {message}")]
    InvalidOrder { var: &'static str, message: String },
}

/// Resolved server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// JSON tables to load instead of the bundled ones
    pub knowledge_base: Option<PathBuf>,
    /// Remote recognizer settings; `None` when no API key is set
    pub ner: Option<NerConfig>,
    pub fallback_order: ExtractionOrder,
}

impl ServerConfig {
    /// Read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Resolve settings through `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let addr_value = get(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: addr_value.clone(),
            })?;

        let fallback_order = match get(FALLBACK_ORDER_VAR) {
            Some(value) => value
                .parse::<ExtractionOrder>()
                .map_err(|message| ConfigError::InvalidOrder {
                    var: FALLBACK_ORDER_VAR,
                    message,
                })?,
            None => ExtractionOrder::default(),
        };

        let timeout = match get(NER_TIMEOUT_VAR) {
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        var: NER_TIMEOUT_VAR,
                        value,
                    })
                }
            },
            None => None,
        };

        let ner = get(API_KEY_VAR).map(|key| {
            let mut config = NerConfig::new(key);
            if let Some(url) = get(NER_URL_VAR) {
                config = config.with_endpoint(url);
            }
            if let Some(timeout) = timeout {
                config = config.with_timeout(timeout);
            }
            config
        });

        Ok(Self {
            addr,
            knowledge_base: get(KNOWLEDGE_BASE_VAR).map(PathBuf::from),
            ner,
            fallback_order,
        })
    }
}
