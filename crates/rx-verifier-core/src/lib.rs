//! Rx Verifier Core Library
//!
//! Rule-based prescription checks backed by a small static knowledge base.
//!
//! # Architecture
//!
//! ```text
//! Prescription text
//!        │
//!        ▼
//!   Extraction ── EntityRecognizer (optional, remote)
//!        │            └─ failure ─→ alias substring scan
//!        ▼
//!  ExtractedDrug[] ──┬──→ Dosage Advisor
//!                    ├──→ Interaction Checker
//!                    └──→ Alternative Advisor
//! ```
//!
//! Unrecognized drugs are never an error: they simply produce no findings.
//!
//! # Modules
//!
//! - [`knowledge`]: Vocabulary and rule tables (builtin or JSON file)
//! - [`models`]: Domain types (DrugRecord, DrugInteraction, etc.)
//! - [`extractor`]: Drug-name extraction with recognizer fallback
//! - [`dosing`], [`interactions`], [`alternatives`]: Per-drug lookups
//! - [`verifier`]: End-to-end analysis

pub mod alternatives;
pub mod dosing;
pub mod extractor;
pub mod interactions;
pub mod knowledge;
pub mod models;
pub mod verifier;

// Re-export commonly used types
pub use extractor::{DrugExtractor, EntityRecognizer, ExtractionOrder};
pub use knowledge::{KnowledgeBase, KnowledgeError, KnowledgeResult, KnowledgeTables};
pub use models::{
    AlternativeSuggestion, AnalysisRequest, AnalysisResult, DosageRecommendation,
    DrugInteraction, DrugListRequest, DrugRecord, EntityToken, ExtractedDrug, Severity,
};
pub use verifier::{PrescriptionVerifier, VerifierError, VerifierResult};
