//! Read-only drug knowledge base.
//!
//! Holds the drug vocabulary (canonical key → aliases, classes, description)
//! and the interaction, alternative and dosing rules keyed by canonical drug.
//! Built once at startup, either from the bundled tables or from a JSON file,
//! and shared behind an `Arc` afterwards.

mod builtin;

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{AlternativeRule, DosingRule, DrugRecord, InteractionRule};

/// Knowledge base loading errors.
#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("Failed to read knowledge base file: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate drug key: {0}")]
    DuplicateDrug(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

pub type KnowledgeResult<T> = Result<T, KnowledgeError>;

/// Flat tables as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeTables {
    pub drugs: Vec<DrugRecord>,
    #[serde(default)]
    pub interactions: Vec<InteractionRule>,
    #[serde(default)]
    pub alternatives: Vec<AlternativeRule>,
    #[serde(default)]
    pub dosing: Vec<DosingRule>,
}

/// Indexed, immutable knowledge base.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeBase {
    /// Vocabulary in iteration order
    drugs: Vec<DrugRecord>,
    /// Canonical key → index into `drugs`
    by_key: HashMap<String, usize>,
    interactions: HashMap<String, Vec<InteractionRule>>,
    alternatives: HashMap<String, Vec<AlternativeRule>>,
    dosing: HashMap<String, DosingRule>,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KnowledgeBase {
    /// Validate and index a set of tables.
    pub fn new(tables: KnowledgeTables) -> KnowledgeResult<Self> {
        validate(&tables)?;
        Ok(Self::index(tables))
    }

    /// The bundled demo vocabulary and rules.
    pub fn builtin() -> Self {
        Self::index(builtin::tables())
    }

    /// Parse tables from a JSON document.
    pub fn from_json_str(json: &str) -> KnowledgeResult<Self> {
        let tables: KnowledgeTables = serde_json::from_str(json)?;
        Self::new(tables)
    }

    /// Load tables from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> KnowledgeResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Lower-case every key and group rules by their drug.
    fn index(tables: KnowledgeTables) -> Self {
        let drugs: Vec<DrugRecord> = tables
            .drugs
            .into_iter()
            .map(DrugRecord::normalized)
            .collect();

        let mut by_key = HashMap::with_capacity(drugs.len());
        for (i, drug) in drugs.iter().enumerate() {
            by_key.entry(drug.key.clone()).or_insert(i);
        }

        let mut interactions: HashMap<String, Vec<InteractionRule>> = HashMap::new();
        for mut rule in tables.interactions {
            rule.subject = rule.subject.trim().to_lowercase();
            rule.partner = rule.partner.trim().to_lowercase();
            interactions.entry(rule.subject.clone()).or_default().push(rule);
        }

        let mut alternatives: HashMap<String, Vec<AlternativeRule>> = HashMap::new();
        for mut rule in tables.alternatives {
            rule.for_drug = rule.for_drug.trim().to_lowercase();
            alternatives.entry(rule.for_drug.clone()).or_default().push(rule);
        }

        let mut dosing = HashMap::new();
        for mut rule in tables.dosing {
            rule.drug = rule.drug.trim().to_lowercase();
            dosing.entry(rule.drug.clone()).or_insert(rule);
        }

        Self {
            drugs,
            by_key,
            interactions,
            alternatives,
            dosing,
        }
    }

    /// All drug records in iteration order.
    pub fn drugs(&self) -> &[DrugRecord] {
        &self.drugs
    }

    /// Look up a drug by canonical key (case-insensitive).
    pub fn drug(&self, key: &str) -> Option<&DrugRecord> {
        self.by_key
            .get(&key.to_lowercase())
            .map(|&i| &self.drugs[i])
    }

    /// Look up the drug owning an alias (exact, case-insensitive).
    pub fn resolve_alias(&self, token: &str) -> Option<&DrugRecord> {
        self.drugs.iter().find(|d| d.has_alias(token))
    }

    /// Interaction rules filed under a drug.
    pub fn interactions_for(&self, key: &str) -> &[InteractionRule] {
        self.interactions
            .get(&key.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Alternative suggestions for a drug.
    pub fn alternatives_for(&self, key: &str) -> &[AlternativeRule] {
        self.alternatives
            .get(&key.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Dosing rule for a drug.
    pub fn dosing_for(&self, key: &str) -> Option<&DosingRule> {
        self.dosing.get(&key.to_lowercase())
    }

    /// Number of drugs in the vocabulary.
    pub fn len(&self) -> usize {
        self.drugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drugs.is_empty()
    }
}

fn validate(tables: &KnowledgeTables) -> KnowledgeResult<()> {
    let mut seen: Vec<String> = Vec::with_capacity(tables.drugs.len());
    for drug in &tables.drugs {
        let key = drug.key.trim().to_lowercase();
        if key.is_empty() {
            return Err(KnowledgeError::InvalidRecord(
                "drug key cannot be empty".into(),
            ));
        }
        if seen.contains(&key) {
            return Err(KnowledgeError::DuplicateDrug(key));
        }
        if drug.aliases.iter().all(|a| a.trim().is_empty()) {
            return Err(KnowledgeError::InvalidRecord(format!(
                "drug '{}' has no aliases",
                key
            )));
        }
        seen.push(key);
    }

    for rule in &tables.interactions {
        if rule.subject.trim().is_empty() || rule.partner.trim().is_empty() {
            return Err(KnowledgeError::InvalidRecord(
                "interaction rule needs both a subject and a partner".into(),
            ));
        }
    }

    if tables.alternatives.iter().any(|r| r.for_drug.trim().is_empty()) {
        return Err(KnowledgeError::InvalidRecord(
            "alternative rule needs a drug".into(),
        ));
    }

    for rule in &tables.dosing {
        if rule.drug.trim().is_empty() {
            return Err(KnowledgeError::InvalidRecord(
                "dosing rule needs a drug".into(),
            ));
        }
        if !rule.pediatric_mg_per_kg.is_finite() || rule.pediatric_mg_per_kg < 0.0 {
            return Err(KnowledgeError::InvalidRecord(format!(
                "dosing rule for '{}' has an invalid mg/kg coefficient",
                rule.drug
            )));
        }
    }

    Ok(())
}
