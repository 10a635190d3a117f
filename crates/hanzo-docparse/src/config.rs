//! Parser configuration

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Text returned for `.doc` files, which are not decoded
pub const DOC_PLACEHOLDER: &str =
    "DOC file format not fully supported yet. Please convert to PDF or DOCX.";

/// Configuration for document parsing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum length of extracted text in characters. `None` means no limit.
    pub max_length: Option<usize>,

    /// Text returned for `.doc` input
    pub doc_placeholder: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_length: None,
            doc_placeholder: DOC_PLACEHOLDER.to_string(),
        }
    }
}

impl ParserConfig {
    /// Load a config from a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Set the maximum extracted text length
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Set the `.doc` placeholder text
    pub fn with_doc_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.doc_placeholder = placeholder.into();
        self
    }
}
