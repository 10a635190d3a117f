//! Error types for document parsing

use crate::DocumentFormat;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing a document
#[derive(Error, Debug)]
pub enum ParseError {
    /// Input path does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Suffix has no handler. Holds the suffix with its leading dot, or an
    /// empty string when the path has none.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// The backing library failed to read the document
    #[error("Error extracting {format} text: {message}")]
    Extraction {
        format: DocumentFormat,
        message: String,
    },

    /// Extracted text exceeds the configured limit
    #[error("Content too large: {size} characters exceeds max {max} characters")]
    ContentTooLarge { size: usize, max: usize },

    /// Invalid configuration file
    #[error("Config error: {0}")]
    Config(String),

    /// Bad command line
    #[error("{0}")]
    Usage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    pub fn extraction(format: DocumentFormat, message: impl ToString) -> Self {
        Self::Extraction {
            format,
            message: message.to_string(),
        }
    }

    pub fn pdf(message: impl ToString) -> Self {
        Self::extraction(DocumentFormat::Pdf, message)
    }

    pub fn docx(message: impl ToString) -> Self {
        Self::extraction(DocumentFormat::Docx, message)
    }
}

#[cfg(feature = "pdf")]
impl From<lopdf::Error> for ParseError {
    fn from(err: lopdf::Error) -> Self {
        ParseError::pdf(err)
    }
}

#[cfg(feature = "docx")]
impl From<zip::result::ZipError> for ParseError {
    fn from(err: zip::result::ZipError) -> Self {
        ParseError::docx(err)
    }
}

#[cfg(feature = "docx")]
impl From<xml::reader::Error> for ParseError {
    fn from(err: xml::reader::Error) -> Self {
        ParseError::docx(err)
    }
}

impl From<toml::de::Error> for ParseError {
    fn from(err: toml::de::Error) -> Self {
        ParseError::Config(err.to_string())
    }
}
