//! Minimal DOCX reader: pulls the visible text runs out of `word/document.xml`.

use std::io::{Cursor, Read};
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::extraction::ExtractionError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Matches, in document order: a text run, a paragraph end, a tab, or a break.
fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)<w:t(?:\s[^>]*)?>(.*?)</w:t>|</w:p>|<w:tab/>|<w:br/>")
            .expect("DOCX token pattern is valid")
    })
}

pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;

    let mut xml = String::new();
    match archive.by_name(DOCUMENT_PART) {
        Ok(mut part) => {
            part.read_to_string(&mut xml)?;
        }
        Err(zip::result::ZipError::FileNotFound) => return Err(ExtractionError::MissingDocumentBody),
        Err(e) => return Err(e.into()),
    }

    let text = document_xml_to_text(&xml);
    debug!(xml_len = xml.len(), chars = text.chars().count(), "DOCX text extracted");
    Ok(text)
}

/// Flattens WordprocessingML into plain text, one line per paragraph.
pub fn document_xml_to_text(xml: &str) -> String {
    let mut text = String::new();

    for caps in token_pattern().captures_iter(xml) {
        if let Some(run) = caps.get(1) {
            text.push_str(&decode_entities(run.as_str()));
            continue;
        }
        match &caps[0] {
            "<w:tab/>" => text.push(' '),
            _ => text.push('\n'),
        }
    }

    text
}

fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
