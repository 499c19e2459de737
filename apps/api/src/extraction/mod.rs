//! Text Extraction — turns uploaded resume bytes into plain text.
//!
//! Two decoders sit behind `extract_document`:
//! - PDF via `pdf-extract`, one segment per page
//! - DOCX via `zip` + `quick-xml`, segments split at explicit page breaks
//!
//! Callers resolve a `DocumentKind` from the declared type tag first, so an
//! unsupported format never reaches a decoder.

pub mod docx;
pub mod pdf;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported document type '{0}'. Upload a PDF or DOC/DOCX file.")]
    UnsupportedFormat(String),

    #[error("No document content supplied")]
    Empty,

    #[error("Failed to decode PDF: {0}")]
    Pdf(String),

    #[error("Failed to decode DOCX: {0}")]
    Docx(String),
}

/// The two document families the service can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Parses a declared type tag: a short name (`pdf`, `docx`) or a MIME type.
    /// MIME parameters (`; charset=...`) and case are ignored.
    pub fn from_tag(tag: &str) -> Result<Self, ExtractError> {
        let essence = tag
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "pdf" | "application/pdf" => Ok(DocumentKind::Pdf),
            "doc"
            | "docx"
            | "application/msword"
            | "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Ok(DocumentKind::Docx)
            }
            _ => Err(ExtractError::UnsupportedFormat(tag.trim().to_string())),
        }
    }

    /// Infers the kind from a file name's extension, if it has a known one.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        Self::from_tag(ext).ok()
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Pdf => f.write_str("pdf"),
            DocumentKind::Docx => f.write_str("docx"),
        }
    }
}

/// Decoded text of one document, kept as page segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    pub kind: DocumentKind,
    pub pages: Vec<String>,
}

impl ExtractedDocument {
    pub fn new(kind: DocumentKind, pages: Vec<String>) -> Self {
        Self { kind, pages }
    }

    /// All segments concatenated in order, no separator.
    pub fn text(&self) -> String {
        self.pages.concat()
    }

    /// The first page (PDF) or first segment (DOCX). Empty when the document has none.
    pub fn first_page(&self) -> &str {
        self.pages.first().map(String::as_str).unwrap_or_default()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Decodes `bytes` as a document of the declared `kind`.
pub fn extract_document(bytes: &[u8], kind: DocumentKind) -> Result<ExtractedDocument, ExtractError> {
    if bytes.is_empty() {
        return Err(ExtractError::Empty);
    }

    let pages = match kind {
        DocumentKind::Pdf => pdf::extract_pages(bytes)?,
        DocumentKind::Docx => docx::extract_pages(bytes)?,
    };

    debug!(%kind, pages = pages.len(), bytes = bytes.len(), "Document decoded");
    Ok(ExtractedDocument::new(kind, pages))
}
