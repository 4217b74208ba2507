// PDF → plain text, feeding the analysis endpoints.
// pdf-extract is synchronous and CPU-bound: callers must run it inside
// tokio::task::spawn_blocking.

pub mod handlers;

use thiserror::Error;

const PDF_MAGIC: &[u8] = b"%PDF";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unreadable PDF: {0}")]
    UnreadablePdf(String),

    #[error("PDF contains no extractable text")]
    EmptyDocument,
}

/// Extracts the text layer of an in-memory PDF.
pub fn extract_text_from_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    if !bytes.starts_with(PDF_MAGIC) {
        return Err(ExtractionError::UnreadablePdf(
            "file is not a PDF document".to_string(),
        ));
    }

    let raw = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::UnreadablePdf(e.to_string()))?;

    let text = normalize_text(&raw);
    if text.is_empty() {
        return Err(ExtractionError::EmptyDocument);
    }
    Ok(text)
}

/// Trims every line and collapses runs of blank lines into one.
pub fn normalize_text(raw: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut previous_blank = true;

    for line in raw.lines() {
        let line = line.trim_end();
        let blank = line.trim().is_empty();
        if blank && previous_blank {
            continue;
        }
        lines.push(if blank { "" } else { line });
        previous_blank = blank;
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}
