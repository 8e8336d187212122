//! Remote named-entity recognition for drug extraction.
//!
//! Provides a Hugging Face inference API client that implements the core
//! crate's `EntityRecognizer`, so the extractor can prefer it over the local
//! alias scan.

pub mod client;
pub mod extraction;

pub use client::*;
pub use extraction::*;
