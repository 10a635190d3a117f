//! Suffix-based dispatch to the format extractors

use crate::{
    config::ParserConfig,
    error::{ParseError, Result},
    DocumentFormat, ExtractResult, Extractor,
};
use std::path::Path;
use tracing::{debug, info};

/// Routes a path to the extractor for its format
pub struct DocumentParser {
    config: ParserConfig,
    extractors: Vec<Box<dyn Extractor>>,
}

impl DocumentParser {
    /// Create a parser with every backend enabled at compile time
    pub fn new(config: ParserConfig) -> Self {
        #[allow(unused_mut)]
        let mut extractors: Vec<Box<dyn Extractor>> = Vec::new();

        #[cfg(feature = "pdf")]
        extractors.push(Box::new(crate::PdfExtractor::new()));

        #[cfg(feature = "docx")]
        extractors.push(Box::new(crate::DocxExtractor::new()));

        Self { config, extractors }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    fn extractor_for(&self, format: DocumentFormat) -> Option<&dyn Extractor> {
        self.extractors
            .iter()
            .find(|e| e.format() == format)
            .map(|e| e.as_ref())
    }

    /// Extract text from the document at `path`.
    ///
    /// Fails with `FileNotFound` before looking at the suffix, then with
    /// `UnsupportedFormat` for suffixes that have no enabled backend.
    pub fn parse(&self, path: &Path) -> Result<ExtractResult> {
        if !path.exists() {
            return Err(ParseError::FileNotFound(path.to_path_buf()));
        }

        let format = DocumentFormat::from_path(path)?;
        info!(path = %path.display(), %format, "Parsing document");

        let result = match format {
            DocumentFormat::Doc => ExtractResult::new(
                &self.config.doc_placeholder,
                path.to_string_lossy(),
                DocumentFormat::Doc,
            ),
            _ => match self.extractor_for(format) {
                Some(extractor) => extractor.extract_file(path)?,
                None => {
                    debug!(%format, "Backend disabled at compile time");
                    return Err(ParseError::UnsupportedFormat(DocumentFormat::suffix_of(path)));
                }
            },
        };

        if let Some(max) = self.config.max_length {
            let size = result.text_length();
            if size > max {
                return Err(ParseError::ContentTooLarge { size, max });
            }
        }

        debug!(chars = result.text_length(), units = result.unit_count, "Extraction complete");
        Ok(result)
    }
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}
