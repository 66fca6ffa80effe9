//! Error types for the aadex-core library.

use thiserror::Error;

/// Main error type for the aadex library.
#[derive(Error, Debug)]
pub enum AadexError {
    /// Card extraction was rejected.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Text recognition error from the upstream provider.
    #[error("recognition error: {0}")]
    Recognition(#[from] RecognitionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Terminal rejections from card extraction.
///
/// Both variants are final for a given pair of inputs: re-running on the
/// same text is deterministic and yields the same rejection. A caller may
/// retry with re-captured images, never with the same ones.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionError {
    /// The recognized text carries no Aadhaar evidence.
    #[error("uploaded image is not a valid Aadhaar card")]
    NotAadhaarCard,

    /// Validation passed but no field cleared the completeness gate.
    #[error("could not extract sufficient data from the Aadhaar card")]
    InsufficientData,
}

/// Errors from the upstream text-recognition provider.
///
/// These are opaque pass-throughs: the pipeline surfaces them unchanged and
/// never retries.
#[derive(Error, Debug)]
pub enum RecognitionError {
    /// The recognition engine failed on an image.
    #[error("failed to process image with OCR: {0}")]
    Engine(String),

    /// A recognized-text dump could not be read.
    #[error("failed to read recognized text: {0}")]
    Read(#[from] std::io::Error),
}

/// Result type for the aadex library.
pub type Result<T> = std::result::Result<T, AadexError>;
