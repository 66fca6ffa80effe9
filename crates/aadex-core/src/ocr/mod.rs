//! Text recognition seam.
//!
//! The pipeline never touches images itself: a [`TextRecognizer`] turns a
//! card-side source into recognized text, and everything downstream works
//! on strings. Recognition failures are opaque upstream errors; the
//! pipeline surfaces them unchanged and never retries.

#[cfg(feature = "tesseract")]
mod engine;
mod text_file;

#[cfg(feature = "tesseract")]
pub use engine::TesseractRecognizer;
pub use text_file::TextFileRecognizer;

use std::path::Path;

use crate::error::RecognitionError;

/// Trait for text recognition over one card side.
pub trait TextRecognizer {
    /// Recognize the text of the card side at `source`.
    fn recognize(&self, source: &Path) -> Result<String, RecognitionError>;
}
