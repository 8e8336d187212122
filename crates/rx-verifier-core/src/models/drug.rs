//! Drug vocabulary models.

use serde::{Deserialize, Serialize};

/// A single drug in the knowledge base vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrugRecord {
    /// Canonical key, always lower-case (e.g. "paracetamol")
    pub key: String,
    /// Brand names and synonyms used as match keys
    pub aliases: Vec<String>,
    /// Pharmacological classes (e.g. ["NSAID", "analgesic"])
    #[serde(default)]
    pub classes: Vec<String>,
    /// Short human-readable description
    #[serde(default)]
    pub description: String,
}

impl DrugRecord {
    /// Create a record with no aliases or classes.
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            aliases: Vec::new(),
            classes: Vec::new(),
            description: description.into(),
        }
    }

    /// Check whether a token is exactly one of this drug's aliases.
    pub fn has_alias(&self, token: &str) -> bool {
        let token_lower = token.to_lowercase();
        self.aliases.iter().any(|a| a.to_lowercase() == token_lower)
    }

    /// Byte offset of the earliest alias occurrence in already lower-cased text.
    ///
    /// Aliases are stored lower-case once the record is indexed by a
    /// knowledge base, so plain substring search is case-insensitive here.
    pub fn earliest_mention(&self, text_lower: &str) -> Option<usize> {
        self.aliases
            .iter()
            .filter(|a| !a.is_empty())
            .filter_map(|a| text_lower.find(a.as_str()))
            .min()
    }

    /// Lower-case the key and aliases, dropping empty and repeated aliases.
    pub(crate) fn normalized(mut self) -> Self {
        self.key = self.key.trim().to_lowercase();
        let mut aliases: Vec<String> = Vec::with_capacity(self.aliases.len());
        for alias in self.aliases {
            let alias = alias.trim().to_lowercase();
            if !alias.is_empty() && !aliases.contains(&alias) {
                aliases.push(alias);
            }
        }
        self.aliases = aliases;
        self
    }
}

/// A drug found in prescription text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractedDrug {
    /// Canonical key of the matched record
    pub name: String,
    pub description: Option<String>,
    pub classes: Option<Vec<String>>,
    /// Prescribed dose, when an extractor can read one
    pub dosage: Option<String>,
    /// Prescribed frequency, when an extractor can read one
    pub frequency: Option<String>,
}

impl From<&DrugRecord> for ExtractedDrug {
    fn from(record: &DrugRecord) -> Self {
        Self {
            name: record.key.clone(),
            description: Some(record.description.clone()),
            classes: Some(record.classes.clone()),
            dosage: None,
            frequency: None,
        }
    }
}

/// A candidate token returned by a named-entity recognizer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EntityToken {
    /// Surface text of the token
    #[serde(default)]
    pub word: Option<String>,
    /// Entity label or text, used when `word` is missing
    #[serde(default)]
    pub entity: Option<String>,
}

impl EntityToken {
    /// Token carrying only a surface word.
    pub fn word(word: impl Into<String>) -> Self {
        Self {
            word: Some(word.into()),
            entity: None,
        }
    }

    /// Text to match against aliases: `word` first, then `entity`.
    pub fn text(&self) -> Option<&str> {
        [self.word.as_deref(), self.entity.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
    }
}
