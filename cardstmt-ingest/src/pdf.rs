//! PDF page-text acquisition.
//!
//! Wraps pdf-extract so the rest of the pipeline only ever sees ordered
//! page strings. Encrypted, scanned, or corrupt files surface as one error
//! for the whole file; the caller isolates that per statement.

use std::path::Path;

use anyhow::{Result, anyhow};

/// Extract per-page text from a PDF, in reading order.
pub fn read_pages(path: &Path) -> Result<Vec<String>> {
    pdf_extract::extract_text_by_pages(path)
        .map_err(|err| anyhow!("extracting text from {}: {err}", path.display()))
}
