//! DOCX text extraction
//!
//! A `.docx` file is a zip container; the main story lives in
//! `word/document.xml`. Only body-level paragraphs are read, so text in
//! tables, text boxes, headers and footers is skipped.

use crate::{
    error::{ParseError, Result},
    DocumentFormat, ExtractResult, Extractor,
};
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use tracing::debug;
use xml::attribute::OwnedAttribute;
use xml::name::OwnedName;
use xml::reader::{EventReader, XmlEvent};
use zip::ZipArchive;

/// WordprocessingML main namespace
const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Archive entry holding the document body
const DOCUMENT_PART: &str = "word/document.xml";

/// DOCX document text extractor backed by `zip` and `xml-rs`
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxExtractor;

impl DocxExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract text from DOCX bytes
    pub fn extract_from_bytes(&self, bytes: &[u8], source: impl Into<String>) -> Result<ExtractResult> {
        self.extract_from_reader(Cursor::new(bytes), source.into())
    }

    fn extract_from_reader<R: Read + Seek>(&self, reader: R, source: String) -> Result<ExtractResult> {
        let mut archive = ZipArchive::new(reader)?;
        let part = archive.by_name(DOCUMENT_PART)?;
        let paragraphs = read_body_paragraphs(part)?;

        debug!(paragraphs = paragraphs.len(), source = %source, "Extracted DOCX paragraphs");

        Ok(ExtractResult::new(paragraphs.join("\n"), source, DocumentFormat::Docx)
            .with_unit_count(paragraphs.len())
            .with_metadata("paragraph_count", paragraphs.len().to_string()))
    }
}

impl Extractor for DocxExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    fn extract_file(&self, path: &Path) -> Result<ExtractResult> {
        let file = File::open(path).map_err(ParseError::docx)?;
        self.extract_from_reader(file, path.to_string_lossy().to_string())
    }
}

/// Element kinds that matter for paragraph assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Body,
    Paragraph,
    Hyperlink,
    Run,
    Text,
    Other,
}

impl Tag {
    fn of(name: &OwnedName) -> Self {
        if name.namespace.as_deref() != Some(WORDML_NS) {
            return Tag::Other;
        }
        match name.local_name.as_str() {
            "body" => Tag::Body,
            "p" => Tag::Paragraph,
            "hyperlink" => Tag::Hyperlink,
            "r" => Tag::Run,
            "t" => Tag::Text,
            _ => Tag::Other,
        }
    }
}

/// True when the innermost open element is a run that belongs to a body
/// paragraph, either directly or through a hyperlink.
fn in_body_run(stack: &[Tag]) -> bool {
    match stack {
        [.., Tag::Body, Tag::Paragraph, Tag::Run] => true,
        [.., Tag::Body, Tag::Paragraph, Tag::Hyperlink, Tag::Run] => true,
        _ => false,
    }
}

/// Text contributed by an empty run child such as `w:tab` or `w:br`
fn run_child_text(local_name: &str, attributes: &[OwnedAttribute]) -> Option<&'static str> {
    match local_name {
        "tab" | "ptab" => Some("\t"),
        "cr" => Some("\n"),
        "noBreakHyphen" => Some("-"),
        "br" => {
            // Page and column breaks carry no text; line breaks do.
            let kind = attributes
                .iter()
                .find(|a| a.name.local_name == "type")
                .map(|a| a.value.as_str());
            match kind {
                None | Some("textWrapping") => Some("\n"),
                Some(_) => None,
            }
        }
        _ => None,
    }
}

/// Stream `document.xml` and collect the text of each body paragraph
fn read_body_paragraphs<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut paragraphs = Vec::new();
    let mut stack: Vec<Tag> = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    for event in EventReader::new(reader) {
        match event? {
            XmlEvent::StartElement {
                name, attributes, ..
            } => {
                let tag = Tag::of(&name);
                match tag {
                    Tag::Paragraph if stack.last() == Some(&Tag::Body) => current.clear(),
                    Tag::Text if in_body_run(&stack) => in_text = true,
                    Tag::Other if in_body_run(&stack) && name.namespace.as_deref() == Some(WORDML_NS) => {
                        if let Some(text) = run_child_text(&name.local_name, &attributes) {
                            current.push_str(text);
                        }
                    }
                    _ => {}
                }
                stack.push(tag);
            }
            XmlEvent::EndElement { .. } => {
                let closed = stack.pop();
                match closed {
                    Some(Tag::Text) => in_text = false,
                    Some(Tag::Paragraph) if stack.last() == Some(&Tag::Body) => {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                    _ => {}
                }
            }
            XmlEvent::Characters(text) | XmlEvent::Whitespace(text) | XmlEvent::CData(text) => {
                if in_text {
                    current.push_str(&text);
                }
            }
            _ => {}
        }
    }

    Ok(paragraphs)
}
