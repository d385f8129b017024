//! PDF entry verification.
//!
//! Extracts the full plain-text content of a PDF document (reading order
//! as emitted by the extraction library, no layout logic of our own) and
//! checks for the expected substring.

use crate::Result;
use crate::VerifyError;

/// Substring that must appear somewhere in the extracted text.
const EXPECTED_SNIPPET: &str = "Билет на каток";

/// Maximum number of characters of extracted text echoed in a mismatch.
const PREVIEW_CHARS: usize = 120;

/// Verifies that the PDF's extracted text contains the expected snippet.
///
/// Containment, not equality: surrounding text is allowed. The match is
/// case-sensitive and exact at the Unicode level.
///
/// # Errors
///
/// Returns [`VerifyError::Decode`] if the bytes are not a readable PDF
/// document and [`VerifyError::Mismatch`] if the snippet is absent.
pub fn verify(entry: &str, data: &[u8]) -> Result<()> {
    let text = pdf_extract::extract_text_from_mem(data)
        .map_err(|e| VerifyError::decode(entry, format!("PDF text extraction failed: {e}")))?;

    if text.contains(EXPECTED_SNIPPET) {
        Ok(())
    } else {
        Err(VerifyError::mismatch(
            entry,
            "extracted text",
            format!("text containing {EXPECTED_SNIPPET:?}"),
            preview(&text),
        ))
    }
}

/// Truncates extracted text to a diagnosable preview.
fn preview(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return "<no text extracted>".to_owned();
    }
    let mut out: String = trimmed.chars().take(PREVIEW_CHARS).collect();
    if trimmed.chars().count() > PREVIEW_CHARS {
        out.push_str("...");
    }
    out
}
