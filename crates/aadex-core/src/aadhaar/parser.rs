//! Card parser: validation gate, field resolution, completeness gate.

use std::time::Instant;

use tracing::{debug, info};

use crate::error::ExtractionError;
use crate::models::card::AadhaarRecord;
use crate::models::config::ExtractionConfig;

use super::Result;
use super::rules::{
    AddressReconstructor, find_postal_code, parse_date, resolve_date_of_birth, resolve_gender,
    resolve_id_number, resolve_name,
};
use super::validator::DocumentValidator;

/// Result of one card extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted card record.
    pub record: AadhaarRecord,

    /// Extraction warnings. Never fatal; the two gates are the only
    /// rejection paths.
    pub warnings: Vec<String>,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for card parsing.
pub trait CardParser {
    /// Parse recognized front and back text into a card record.
    fn parse(&self, front: &str, back: &str) -> Result<ExtractionResult>;
}

/// Rule-based Aadhaar card parser.
///
/// Holds the two configuration-bearing components; the per-field
/// resolvers are pure functions. One call runs validation first, then
/// resolves every field independently, then applies the completeness
/// gate. Both rejections are terminal for a given input pair: the
/// pipeline is deterministic, so retrying the same text cannot help.
pub struct AadhaarParser {
    validator: DocumentValidator,
    address: AddressReconstructor,
}

impl AadhaarParser {
    /// Create a parser with the default evidence lists.
    pub fn new() -> Self {
        Self::with_config(&ExtractionConfig::default())
    }

    /// Create a parser with custom evidence lists.
    pub fn with_config(config: &ExtractionConfig) -> Self {
        Self {
            validator: DocumentValidator::new(config),
            address: AddressReconstructor::new(config),
        }
    }

    fn collect_warnings(record: &AadhaarRecord) -> Vec<String> {
        let mut warnings = Vec::new();

        for (name, value) in record.fields() {
            if value.is_empty() {
                warnings.push(format!("could not resolve {name}"));
            }
        }

        if !record.date_of_birth.is_empty() && parse_date(&record.date_of_birth).is_none() {
            warnings.push(format!(
                "date of birth '{}' is not a calendar date",
                record.date_of_birth
            ));
        }

        warnings
    }
}

impl Default for AadhaarParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CardParser for AadhaarParser {
    fn parse(&self, front: &str, back: &str) -> Result<ExtractionResult> {
        let start = Instant::now();

        info!(
            "parsing card text: front {} chars, back {} chars",
            front.chars().count(),
            back.chars().count()
        );

        if !self.validator.is_aadhaar_card(front, back) {
            debug!("rejected: no Aadhaar evidence in either side");
            return Err(ExtractionError::NotAadhaarCard);
        }

        // Field resolvers are independent of each other: the ID number,
        // name, date of birth, and gender read the front text, the
        // address and PIN code read the back.
        let record = AadhaarRecord {
            id_number: resolve_id_number(front),
            name: resolve_name(front),
            date_of_birth: resolve_date_of_birth(front),
            gender: resolve_gender(front),
            address: self.address.reconstruct(back),
            postal_code: find_postal_code(back).unwrap_or_default(),
        };

        if !record.has_minimum_data() {
            debug!("rejected: completeness gate failed");
            return Err(ExtractionError::InsufficientData);
        }

        let warnings = Self::collect_warnings(&record);

        debug!(
            "extracted record with {} warning(s): {:?}",
            warnings.len(),
            warnings
        );

        Ok(ExtractionResult {
            record,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}
