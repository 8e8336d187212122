//! Entity token parsing from NER responses.

use rx_verifier_core::EntityToken;
use serde_json::Value;
use thiserror::Error;

/// NER client errors.
#[derive(Error, Debug)]
pub enum NerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("NER service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response format: {0}")]
    InvalidFormat(String),
}

pub type NerResult<T> = Result<T, NerError>;

/// Parse a raw response body into entity tokens.
pub fn parse_entities_str(body: &str) -> NerResult<Vec<EntityToken>> {
    let value: Value = serde_json::from_str(body)?;
    parse_entities(&value)
}

/// Convert a decoded response into entity tokens.
///
/// Expects a list of objects such as
/// `{"entity_group": "Medication", "word": "tylenol", "score": 0.99, ...}`.
/// Only `word` and `entity` are read; non-string values count as absent.
/// An empty object holds no entities and parses as an empty list.
pub fn parse_entities(value: &Value) -> NerResult<Vec<EntityToken>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) if map.is_empty() => return Ok(Vec::new()),
        Value::Object(map) => {
            // The inference API reports model errors as {"error": "..."}
            let detail = map
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("expected a list of entities, got an object");
            return Err(NerError::InvalidFormat(detail.to_string()));
        }
        other => {
            return Err(NerError::InvalidFormat(format!(
                "expected a list of entities, got {}",
                type_name(other)
            )))
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let obj = item.as_object().ok_or_else(|| {
                NerError::InvalidFormat(format!(
                    "entity {} is {}, not an object",
                    i,
                    type_name(item)
                ))
            })?;
            Ok(EntityToken {
                word: string_field(obj, "word"),
                entity: string_field(obj, "entity"),
            })
        })
        .collect()
}

fn string_field(obj: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
