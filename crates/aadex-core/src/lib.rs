//! Core library for Aadhaar card OCR processing.
//!
//! This crate provides:
//! - A text recognition seam over card-side images or text dumps
//! - Document validation (is this plausibly an Aadhaar card?)
//! - Rule-based field extraction (number, name, DOB, gender, address, PIN)
//! - A service layer composing recognition and extraction

pub mod aadhaar;
pub mod error;
pub mod models;
pub mod ocr;
pub mod service;

pub use aadhaar::{AadhaarParser, CardParser, DocumentValidator, ExtractionResult};
pub use error::{AadexError, ExtractionError, RecognitionError, Result};
pub use models::card::{AadhaarRecord, RecognizedText};
pub use models::config::{AadexConfig, ExtractionConfig, RecognitionConfig};
pub use ocr::{TextFileRecognizer, TextRecognizer};
#[cfg(feature = "tesseract")]
pub use ocr::TesseractRecognizer;
pub use service::AadhaarService;
