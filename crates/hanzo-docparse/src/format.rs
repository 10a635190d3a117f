//! Document format detection by file suffix

use crate::error::{ParseError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Document formats the parser knows how to route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    /// Legacy Word binary format; answered with a placeholder
    Doc,
}

impl DocumentFormat {
    /// Lowercase suffix of `path` including the leading dot, or `""` when
    /// the file name has no extension.
    pub fn suffix_of(path: &Path) -> String {
        match path.extension() {
            Some(ext) if !ext.is_empty() => format!(".{}", ext.to_string_lossy().to_lowercase()),
            _ => String::new(),
        }
    }

    /// Map a lowercase suffix (with dot) to a format
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            ".pdf" => Some(Self::Pdf),
            ".docx" => Some(Self::Docx),
            ".doc" => Some(Self::Doc),
            _ => None,
        }
    }

    /// Detect the format of `path`, failing with `UnsupportedFormat` for
    /// anything the parser does not route.
    pub fn from_path(path: &Path) -> Result<Self> {
        let suffix = Self::suffix_of(path);
        Self::from_suffix(&suffix).ok_or(ParseError::UnsupportedFormat(suffix))
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            Self::Doc => "application/msword",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::Doc => "DOC",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_is_lowercased() {
        assert_eq!(DocumentFormat::suffix_of(Path::new("REPORT.PDF")), ".pdf");
        assert_eq!(DocumentFormat::suffix_of(Path::new("a/b/Notes.DocX")), ".docx");
        assert_eq!(DocumentFormat::suffix_of(Path::new("archive.tar.gz")), ".gz");
    }

    #[test]
    fn test_missing_suffix() {
        assert_eq!(DocumentFormat::suffix_of(Path::new("README")), "");
        assert_eq!(DocumentFormat::suffix_of(Path::new("trailing.")), "");
        assert_eq!(DocumentFormat::suffix_of(Path::new(".pdf")), "");
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("x.pdf")).unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("x.Docx")).unwrap(),
            DocumentFormat::Docx
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("x.doc")).unwrap(),
            DocumentFormat::Doc
        );

        match DocumentFormat::from_path(Path::new("notes.txt")) {
            Err(ParseError::UnsupportedFormat(suffix)) => assert_eq!(suffix, ".txt"),
            other => panic!("expected UnsupportedFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(DocumentFormat::Pdf.to_string(), "PDF");
        assert_eq!(DocumentFormat::Docx.to_string(), "DOCX");
    }
}
