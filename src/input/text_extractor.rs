//! Text extraction from various file formats

use crate::error::{Result, ScreenerError};
use log::warn;
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ScreenerError::Io)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ScreenerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await.map_err(ScreenerError::Io)?;
        Ok(content)
    }
}

/// Word documents are decoded lossily as UTF-8. Binary container bytes come
/// through garbled; downstream extraction falls back field by field instead
/// of failing.
pub struct WordExtractor;

impl TextExtractor for WordExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ScreenerError::Io)?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        warn!(
            "Word document '{}' decoded as raw text; extraction quality may be degraded",
            path.display()
        );
        Ok(text)
    }
}
