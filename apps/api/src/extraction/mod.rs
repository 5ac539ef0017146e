//! Resume text extraction.
//!
//! PDF goes through `pdf-extract`; DOCX is read straight from the OOXML archive.
//! Both outputs are whitespace-normalised and capped at a configured number of
//! characters before scoring.

pub mod docx;
pub mod pdf;

use async_trait::async_trait;
use thiserror::Error;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("DOCX read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("DOCX is missing word/document.xml")]
    MissingDocumentBody,
}

/// Resume formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Exact MIME match, as sent in the multipart part's `Content-Type`.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            PDF_MIME => Some(DocumentFormat::Pdf),
            DOCX_MIME => Some(DocumentFormat::Docx),
            _ => None,
        }
    }

    /// Case-insensitive file-extension lookup, used by the intake client.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            _ => None,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            DocumentFormat::Pdf => PDF_MIME,
            DocumentFormat::Docx => DOCX_MIME,
        }
    }
}

/// Turns uploaded resume bytes into plain text.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, format: DocumentFormat, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// Format-aware extractor backed by real parsers.
#[derive(Debug, Clone)]
pub struct DocumentTextExtractor {
    max_chars: usize,
}

impl DocumentTextExtractor {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }
}

#[async_trait]
impl TextExtractor for DocumentTextExtractor {
    async fn extract(&self, format: DocumentFormat, bytes: &[u8]) -> Result<String, ExtractionError> {
        let raw = match format {
            // CPU-bound and prone to panics on malformed input; keep it off the runtime.
            DocumentFormat::Pdf => {
                let owned = bytes.to_vec();
                tokio::task::spawn_blocking(move || pdf::extract_text(&owned))
                    .await
                    .map_err(|e| ExtractionError::Pdf(format!("parser task failed: {e}")))??
            }
            DocumentFormat::Docx => docx::extract_text(bytes)?,
        };

        Ok(truncate_chars(&normalize_whitespace(&raw), self.max_chars))
    }
}

/// Collapses every whitespace run to a single space and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keeps at most `max_chars` characters, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text.to_string(),
    }
}
