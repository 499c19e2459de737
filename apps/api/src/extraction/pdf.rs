use std::panic::{self, AssertUnwindSafe};

use tracing::warn;

use super::ExtractError;

/// Decodes a PDF and returns the text of each page, in page order.
///
/// `pdf-extract` panics on some malformed inputs; a panic is reported as a
/// decode failure so no partial text escapes.
pub fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }));

    match outcome {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(ExtractError::Pdf(e.to_string())),
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!("PDF decoder panicked: {message}");
            Err(ExtractError::Pdf(message))
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "decoder aborted on malformed input".to_string()
    }
}
