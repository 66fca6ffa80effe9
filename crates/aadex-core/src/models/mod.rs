//! Data models for card records and pipeline configuration.

pub mod card;
pub mod config;

pub use card::{AadhaarRecord, RecognizedText, field_label};
pub use config::{AadexConfig, ExtractionConfig, RecognitionConfig};
