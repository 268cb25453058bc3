//! PDF text extraction — a thin wrapper over `pdf-extract`.
//!
//! An unreadable or text-free document is a terminal per-document error; the
//! pipeline reports it and moves on to the next file in the batch.

use anyhow::{Context, Result};

/// Extracts plain text from PDF bytes.
///
/// Returns an error for malformed documents. A successfully parsed document
/// may still yield whitespace-only text (e.g. scanned images); callers must
/// treat that as unextractable too.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes).context("failed to extract text from PDF")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_an_error() {
        assert!(extract_text(b"this is not a PDF file").is_err());
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(extract_text(b"").is_err());
    }
}
