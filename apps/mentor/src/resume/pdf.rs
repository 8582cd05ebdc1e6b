use std::path::Path;

use tracing::{debug, warn};

/// Extracts the text of every page of the PDF at `path`.
///
/// Never fails: a missing, unreadable or undecodable file yields an empty
/// string, which the parser turns into a resume with four empty sections.
pub fn extract_text_from_pdf(path: &Path) -> String {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            warn!("Error reading PDF {}: {e}", path.display());
            return String::new();
        }
    };

    extract_text_from_bytes(&bytes).unwrap_or_else(|| {
        warn!("Could not extract text from PDF {}", path.display());
        String::new()
    })
}

/// Extracts text from an in-memory PDF. `None` if the bytes are not a
/// readable PDF.
pub fn extract_text_from_bytes(bytes: &[u8]) -> Option<String> {
    // pdf-extract panics on some malformed inputs instead of returning Err.
    let result = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes));

    match result {
        Ok(Ok(text)) => {
            let text = text.trim().to_string();
            debug!("Extracted {} characters from PDF", text.len());
            Some(text)
        }
        Ok(Err(e)) => {
            warn!("PDF decode error: {e}");
            None
        }
        Err(_) => {
            warn!("PDF decoder panicked on malformed input");
            None
        }
    }
}

/// Async wrapper that keeps PDF decoding off the runtime's worker threads.
pub async fn extract_text_from_pdf_async(path: &Path) -> String {
    let path = path.to_path_buf();
    match tokio::task::spawn_blocking(move || extract_text_from_pdf(&path)).await {
        Ok(text) => text,
        Err(e) => {
            warn!("PDF extraction task failed: {e}");
            String::new()
        }
    }
}
