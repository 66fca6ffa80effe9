//! Document validation: does the recognized text plausibly come from an
//! Aadhaar card?

use tracing::debug;

use crate::models::config::ExtractionConfig;

use super::rules::patterns::{AADHAAR_DIRECT, AADHAAR_SPACE_GROUPED};

/// Keyword- and number-shape-based document check.
///
/// The check is a deliberate disjunction: OCR recall on the keyword
/// phrases is unreliable, so 12-digit number-shape evidence alone is
/// accepted.
pub struct DocumentValidator {
    /// Accepted keywords, lowercased once at construction.
    keywords: Vec<String>,
}

impl DocumentValidator {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            keywords: config
                .document_keywords
                .iter()
                .map(|k| k.to_lowercase())
                .collect(),
        }
    }

    /// Decide whether the combined front and back text plausibly belongs
    /// to an Aadhaar card.
    pub fn is_aadhaar_card(&self, front: &str, back: &str) -> bool {
        let combined = format!("{front} {back}");
        let lowered = combined.to_lowercase();

        let has_keyword = self.keywords.iter().any(|k| lowered.contains(k.as_str()));
        let has_number = AADHAAR_DIRECT.is_match(&combined);
        let has_grouped_number = AADHAAR_SPACE_GROUPED.is_match(&combined);

        debug!(
            has_keyword,
            has_number, has_grouped_number, "document evidence check"
        );

        has_keyword || has_number || has_grouped_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> DocumentValidator {
        DocumentValidator::new(&ExtractionConfig::default())
    }

    #[test]
    fn test_keyword_evidence() {
        assert!(validator().is_aadhaar_card("GOVERNMENT OF INDIA", ""));
        assert!(validator().is_aadhaar_card("", "unique identification authority"));
        assert!(validator().is_aadhaar_card("mera aadhaar, meri pehchan", ""));
    }

    #[test]
    fn test_number_shape_evidence_alone() {
        assert!(validator().is_aadhaar_card("9876 5432 1098", ""));
        assert!(validator().is_aadhaar_card("987654321098", ""));
    }

    #[test]
    fn test_evidence_split_across_sides() {
        assert!(validator().is_aadhaar_card("nothing here", "Aadhaar"));
    }

    #[test]
    fn test_no_evidence_rejects() {
        assert!(!validator().is_aadhaar_card("random receipt text", "totally unrelated"));
    }
}
