//! Recognizer over pre-recognized text dumps.

use std::path::Path;

use crate::error::RecognitionError;

use super::TextRecognizer;

/// Reads already-recognized text from disk, one file per card side.
///
/// This is the recognizer the CLI uses: the OCR step ran elsewhere and
/// left plain-text dumps behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFileRecognizer;

impl TextRecognizer for TextFileRecognizer {
    fn recognize(&self, source: &Path) -> Result<String, RecognitionError> {
        Ok(std::fs::read_to_string(source)?)
    }
}
