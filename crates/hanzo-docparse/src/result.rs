//! Extraction result types

use crate::DocumentFormat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of extracting text from one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResult {
    /// The extracted text, whitespace-trimmed
    pub text: String,

    /// Source path
    pub source: String,

    /// Detected document format
    pub format: DocumentFormat,

    /// Pages for PDF, body paragraphs for DOCX
    pub unit_count: usize,

    /// Metadata read from the document
    pub metadata: BTreeMap<String, String>,
}

impl ExtractResult {
    /// Create a new result. `text` is trimmed here so every extractor
    /// returns the same shape.
    pub fn new(text: impl AsRef<str>, source: impl Into<String>, format: DocumentFormat) -> Self {
        Self {
            text: text.as_ref().trim().to_string(),
            source: source.into(),
            format,
            unit_count: 0,
            metadata: BTreeMap::new(),
        }
    }

    /// Set the unit count
    pub fn with_unit_count(mut self, count: usize) -> Self {
        self.unit_count = count;
        self
    }

    /// Add metadata
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Length of the text in characters
    pub fn text_length(&self) -> usize {
        self.text.chars().count()
    }
}
