//! Document-to-text readers for uploaded job descriptions and resumes.
//!
//! Readers never fail: a document that cannot be read yields a short
//! explanatory sentence in place of its text, which then flows through
//! extraction like any other input.

pub mod csv;
pub mod pdf;

use bytes::Bytes;

/// File kinds the upload endpoints accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Csv,
}

impl DocumentKind {
    /// Kind from the file extension, case-insensitive.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, extension) = file_name.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "csv" => Some(DocumentKind::Csv),
            _ => None,
        }
    }
}

pub async fn extract_text(kind: DocumentKind, data: Bytes) -> String {
    match kind {
        DocumentKind::Pdf => pdf::pdf_to_text(data).await,
        DocumentKind::Csv => csv::csv_to_text(&data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_file_name() {
        assert_eq!(DocumentKind::from_file_name("jd.pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_file_name("Roles.CSV"), Some(DocumentKind::Csv));
        assert_eq!(DocumentKind::from_file_name("resume.docx"), None);
        assert_eq!(DocumentKind::from_file_name("pdf"), None);
    }

    #[tokio::test]
    async fn test_extract_text_dispatches_csv() {
        let data = Bytes::from_static(b"title,description\nAnalyst,Build reports\n");
        let text = extract_text(DocumentKind::Csv, data).await;
        assert!(text.contains("**Analyst:**"));
    }
}
