//! PDF text extraction

use crate::{
    error::{ParseError, Result},
    DocumentFormat, ExtractResult, Extractor,
};
use lopdf::{Dictionary, Document, Object};
use std::path::Path;
use tracing::{debug, warn};

/// PDF document text extractor backed by `lopdf`
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract text from PDF bytes
    pub fn extract_from_bytes(&self, bytes: &[u8], source: impl Into<String>) -> Result<ExtractResult> {
        let doc = Document::load_mem(bytes)?;
        Ok(self.extract_from_document(&doc, source.into()))
    }

    /// Extract page text in page order. Each page's trailing whitespace is
    /// dropped so pages are separated by exactly one newline.
    fn extract_from_document(&self, doc: &Document, source: String) -> ExtractResult {
        let pages = doc.get_pages();
        let mut page_texts: Vec<String> = Vec::with_capacity(pages.len());

        for page_num in pages.keys() {
            match doc.extract_text(&[*page_num]) {
                Ok(text) => page_texts.push(text.trim_end().to_string()),
                Err(e) => {
                    warn!(page = *page_num, error = %e, "Failed to extract page text");
                    page_texts.push(String::new());
                }
            }
        }

        debug!(pages = pages.len(), source = %source, "Extracted PDF pages");

        let mut result = ExtractResult::new(page_texts.join("\n"), source, DocumentFormat::Pdf)
            .with_unit_count(pages.len())
            .with_metadata("page_count", pages.len().to_string());

        if let Some(info) = info_dictionary(doc) {
            for (key, name) in [(b"Title".as_slice(), "title"), (b"Author".as_slice(), "author")] {
                if let Some(value) = info.get(key).ok().and_then(decode_text_string) {
                    if !value.is_empty() {
                        result = result.with_metadata(name, value);
                    }
                }
            }
        }

        result
    }
}

impl Extractor for PdfExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn extract_file(&self, path: &Path) -> Result<ExtractResult> {
        let doc = Document::load(path).map_err(ParseError::pdf)?;
        Ok(self.extract_from_document(&doc, path.to_string_lossy().to_string()))
    }
}

/// The trailer's `/Info` dictionary, direct or referenced
fn info_dictionary(doc: &Document) -> Option<&Dictionary> {
    match doc.trailer.get(b"Info").ok()? {
        Object::Reference(id) => doc.get_dictionary(*id).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

/// Decode a PDF text string: UTF-16BE when it carries a BOM, otherwise
/// treated as (lossy) UTF-8.
fn decode_text_string(object: &Object) -> Option<String> {
    let bytes = object.as_str().ok()?;

    let text = if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    };

    Some(text.trim().to_string())
}
