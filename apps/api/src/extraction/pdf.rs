use tracing::debug;

use crate::extraction::ExtractionError;

/// Extracts the text layer of a PDF held in memory.
/// Blocking; callers on the async runtime go through `spawn_blocking`.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;
    debug!(bytes = bytes.len(), chars = text.chars().count(), "PDF text extracted");
    Ok(text)
}
