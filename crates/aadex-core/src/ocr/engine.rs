//! Tesseract-backed recognizer, behind the `tesseract` feature.

use std::path::Path;

use tesseract::Tesseract;
use tracing::debug;

use crate::error::RecognitionError;

use super::TextRecognizer;

/// Recognizer backed by a local Tesseract installation.
pub struct TesseractRecognizer {
    language: String,
}

impl TesseractRecognizer {
    /// Create a recognizer for the given OCR language (e.g. `eng`).
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize(&self, source: &Path) -> Result<String, RecognitionError> {
        let path = source
            .to_str()
            .ok_or_else(|| RecognitionError::Engine("non-UTF-8 image path".to_string()))?;

        debug!("running tesseract ({}) on {}", self.language, path);

        Tesseract::new(None, Some(&self.language))
            .map_err(|e| RecognitionError::Engine(e.to_string()))?
            .set_image(path)
            .map_err(|e| RecognitionError::Engine(e.to_string()))?
            .get_text()
            .map_err(|e| RecognitionError::Engine(e.to_string()))
    }
}
