//! Plain-text extraction for uploaded résumés and job descriptions.

use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported document format: {0} (expected .pdf, .txt or .md)")]
    UnsupportedFormat(String),

    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("Text document is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("Document contains no extractable text")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Text,
}

impl DocumentFormat {
    /// Detects the format from the file extension.
    pub fn from_filename(filename: &str) -> Result<Self, ExtractError> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "txt" | "md" => Ok(DocumentFormat::Text),
            _ => Err(ExtractError::UnsupportedFormat(filename.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: String,
    pub data: Bytes,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractedDocument {
    pub filename: String,
    pub format: DocumentFormat,
    pub text: String,
    pub characters: usize,
}

pub fn extract_text(upload: UploadedDocument) -> Result<ExtractedDocument, ExtractError> {
    let format = DocumentFormat::from_filename(&upload.filename)?;

    let raw = match format {
        DocumentFormat::Pdf => pdf_extract::extract_text_from_mem(&upload.data)
            .map_err(|e| ExtractError::Pdf(e.to_string()))?,
        DocumentFormat::Text => String::from_utf8(upload.data.to_vec())?,
    };

    let text = normalize_whitespace(&raw);
    if text.is_empty() {
        return Err(ExtractError::Empty);
    }
    debug!(
        "Extracted {} characters from {}",
        text.chars().count(),
        upload.filename
    );

    Ok(ExtractedDocument {
        filename: upload.filename,
        format,
        characters: text.chars().count(),
        text,
    })
}

/// Trims every line and collapses runs of blank lines to a single one.
fn normalize_whitespace(raw: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    for line in raw.lines().map(str::trim) {
        if line.is_empty() && out.last().map_or(true, |l| l.is_empty()) {
            continue;
        }
        out.push(line);
    }
    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out.join("\n")
}
