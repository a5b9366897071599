use bytes::Bytes;
use tracing::warn;

pub const IMAGE_PDF_MESSAGE: &str = "This appears to be an image-based PDF. \
Please provide a text-based PDF or manually enter the content.";

/// Text of every page, concatenated and trimmed.
///
/// Parsing is CPU-bound, so it runs on the blocking pool.
pub async fn pdf_to_text(data: Bytes) -> String {
    let extracted = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await;

    match extracted {
        Ok(Ok(text)) => text_or_image_notice(&text),
        Ok(Err(e)) => {
            warn!("PDF text extraction failed: {e}");
            format!("Error extracting text from PDF: {e}")
        }
        Err(e) => {
            warn!("PDF extraction task failed: {e}");
            format!("Error extracting text from PDF: {e}")
        }
    }
}

fn text_or_image_notice(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        IMAGE_PDF_MESSAGE.to_string()
    } else {
        trimmed.to_string()
    }
}
