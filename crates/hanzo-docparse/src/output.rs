//! JSON envelope written to stdout by the CLI

use crate::{ExtractResult, ParseError};
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of one parser invocation, as seen by the calling process
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParseOutput {
    Success {
        text: String,
        success: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        metadata: Option<BTreeMap<String, String>>,
    },
    Failure {
        error: String,
        success: bool,
    },
}

impl ParseOutput {
    pub fn success(result: ExtractResult) -> Self {
        Self::Success {
            text: result.text,
            success: true,
            metadata: None,
        }
    }

    /// Success output that also carries the document metadata, unit count
    /// and format.
    pub fn success_with_metadata(result: ExtractResult) -> Self {
        let mut metadata = result.metadata;
        metadata.insert("format".to_string(), result.format.to_string());
        metadata.insert("mime_type".to_string(), result.format.mime_type().to_string());
        metadata.insert("unit_count".to_string(), result.unit_count.to_string());

        Self::Success {
            text: result.text,
            success: true,
            metadata: Some(metadata),
        }
    }

    pub fn failure(error: impl ToString) -> Self {
        Self::Failure {
            error: error.to_string(),
            success: false,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Process exit code for this outcome
    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// Single-line JSON
    pub fn to_json(&self) -> String {
        // Only strings, bools and string maps; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(r#"{{"error":{:?},"success":false}}"#, e.to_string())
        })
    }
}

impl From<ParseError> for ParseOutput {
    fn from(err: ParseError) -> Self {
        Self::failure(err)
    }
}
