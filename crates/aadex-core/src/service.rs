//! Card processing service: recognition plus parsing.

use std::path::Path;

use tracing::info;

use crate::aadhaar::{AadhaarParser, CardParser, ExtractionResult};
use crate::error::Result;
use crate::models::card::RecognizedText;
use crate::ocr::TextRecognizer;

/// End-to-end card processor over a text-recognition provider.
///
/// Composes a recognizer and a parser: recognize front, recognize back,
/// then run the extraction pipeline. Upload handling and temp-file
/// lifecycle stay with the caller.
pub struct AadhaarService<R: TextRecognizer> {
    recognizer: R,
    parser: AadhaarParser,
}

impl<R: TextRecognizer> AadhaarService<R> {
    /// Create a service with the default parser.
    pub fn new(recognizer: R) -> Self {
        Self::with_parser(recognizer, AadhaarParser::new())
    }

    /// Create a service with a custom-configured parser.
    pub fn with_parser(recognizer: R, parser: AadhaarParser) -> Self {
        Self { recognizer, parser }
    }

    /// Recognize both card sides.
    pub fn recognize_sides(&self, front: &Path, back: &Path) -> Result<RecognizedText> {
        let front = self.recognizer.recognize(front)?;
        let back = self.recognizer.recognize(back)?;
        Ok(RecognizedText::new(front, back))
    }

    /// Process a card: recognize both sides and extract the record.
    pub fn process(&self, front: &Path, back: &Path) -> Result<ExtractionResult> {
        info!(
            "processing card: front {}, back {}",
            front.display(),
            back.display()
        );
        let text = self.recognize_sides(front, back)?;
        Ok(self.parser.parse(&text.front, &text.back)?)
    }

    /// Process a card and render the record as labeled lines.
    pub fn process_labeled(&self, front: &Path, back: &Path) -> Result<String> {
        self.process(front, back)
            .map(|result| result.record.to_labeled_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AadexError, RecognitionError};

    /// Stub recognizer keyed on the source file name.
    struct FixedRecognizer;

    impl TextRecognizer for FixedRecognizer {
        fn recognize(&self, source: &Path) -> std::result::Result<String, RecognitionError> {
            match source.file_name().and_then(|n| n.to_str()) {
                Some("front.png") => {
                    Ok("RAHUL SHARMA\nDOB: 15/08/1995\nMale\n4521 8765 3321".to_string())
                }
                Some("back.png") => {
                    Ok("Address: S/O Mohan Sharma, Malappuram, Kerala - 676505".to_string())
                }
                _ => Err(RecognitionError::Engine("unknown side".to_string())),
            }
        }
    }

    /// Stub recognizer that always fails.
    struct FailingRecognizer;

    impl TextRecognizer for FailingRecognizer {
        fn recognize(&self, _source: &Path) -> std::result::Result<String, RecognitionError> {
            Err(RecognitionError::Engine("scanner offline".to_string()))
        }
    }

    #[test]
    fn test_process_labeled_card() {
        let service = AadhaarService::new(FixedRecognizer);
        let labeled = service
            .process_labeled(Path::new("front.png"), Path::new("back.png"))
            .unwrap();

        assert!(labeled.contains("Id Number: 4521 8765 3321"));
        assert!(labeled.contains("Name: RAHUL SHARMA"));
        assert!(labeled.contains("Postal Code: 676505"));
    }

    #[test]
    fn test_recognition_failure_surfaces_unchanged() {
        let service = AadhaarService::new(FailingRecognizer);
        let err = service
            .process(Path::new("front.png"), Path::new("back.png"))
            .unwrap_err();

        match err {
            AadexError::Recognition(RecognitionError::Engine(msg)) => {
                assert_eq!(msg, "scanner offline");
            }
            other => panic!("expected recognition error, got {other:?}"),
        }
    }
}
