use engine_logging::engine_debug;
use lopdf::Document;

use crate::{FailureKind, FetchError};

pub trait TextExtractor: Send + Sync {
    /// Returns the document text, pages joined with `\n` in page order.
    fn extract(&self, bytes: &[u8]) -> Result<String, FetchError>;
}

/// PDF text extraction backed by `lopdf`.
///
/// A document that cannot be loaded is a decode failure. A single page whose
/// content stream cannot be interpreted contributes empty text instead, so one
/// odd page does not hide the keyword on the others.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn page_texts(&self, bytes: &[u8]) -> Result<Vec<String>, FetchError> {
        let document = Document::load_mem(bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;

        let texts = document
            .get_pages()
            .keys()
            .map(|&page_number| {
                document.extract_text(&[page_number]).unwrap_or_else(|err| {
                    engine_debug!("page {} has no extractable text: {}", page_number, err);
                    String::new()
                })
            })
            .collect();
        Ok(texts)
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, FetchError> {
        Ok(self.page_texts(bytes)?.join("\n"))
    }
}
