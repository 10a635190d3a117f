//! # Hanzo DocParse
//!
//! Plain-text extraction from PDF and DOCX documents.
//!
//! The crate routes a file to an extractor by its suffix and returns the
//! trimmed text. The `document-parser` binary wraps this in a JSON
//! envelope for callers in other processes.
//!
//! ## Features
//!
//! - **pdf**: page text via `lopdf`
//! - **docx**: body paragraph text via `zip` + `xml-rs`
//!
//! `.doc` files are recognised but answered with a fixed placeholder.
//!
//! ## Example
//!
//! ```rust,no_run
//! use hanzo_docparse::{DocumentParser, ParserConfig};
//! use std::path::Path;
//!
//! let parser = DocumentParser::new(ParserConfig::default());
//! let result = parser.parse(Path::new("report.pdf"))?;
//! println!("{}", result.text);
//! # Ok::<(), hanzo_docparse::ParseError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌────────────────┐     ┌─────────────────┐
//! │    Path     │ ──► │ DocumentParser │ ──► │ Pdf / Docx      │
//! │ (.pdf/.docx)│     │ (suffix match) │     │ Extractor       │
//! └─────────────┘     └────────────────┘     └─────────────────┘
//!                                                   │
//!                                                   ▼
//!                                          ┌─────────────────┐
//!                                          │  ParseOutput    │
//!                                          │ (JSON envelope) │
//!                                          └─────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod output;
pub mod parser;
pub mod result;

#[cfg(feature = "pdf")]
pub mod pdf;

#[cfg(feature = "docx")]
pub mod docx;

use std::path::Path;

pub use config::{ParserConfig, DOC_PLACEHOLDER};
pub use error::{ParseError, Result};
pub use format::DocumentFormat;
pub use output::ParseOutput;
pub use parser::DocumentParser;
pub use result::ExtractResult;

#[cfg(feature = "pdf")]
pub use pdf::PdfExtractor;

#[cfg(feature = "docx")]
pub use docx::DocxExtractor;

/// Common trait for format extractors
pub trait Extractor: Send + Sync {
    /// Format this extractor reads
    fn format(&self) -> DocumentFormat;

    /// Extract text from a file on disk
    fn extract_file(&self, path: &Path) -> Result<ExtractResult>;
}

/// Extract the text of `path` with the default configuration
pub fn parse_document(path: impl AsRef<Path>) -> Result<String> {
    DocumentParser::default()
        .parse(path.as_ref())
        .map(|result| result.text)
}
