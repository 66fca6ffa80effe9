//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the aadex pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AadexConfig {
    /// Text recognition configuration.
    pub recognition: RecognitionConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Text recognition configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionConfig {
    /// OCR language passed to the recognition engine.
    pub language: String,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            language: "eng".to_string(),
        }
    }
}

/// Field extraction configuration.
///
/// The token lists are evidence data, not logic: the validator and the
/// address reconstructor take them as-is at construction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Keywords accepted as document evidence. Partial tokens are
    /// deliberate: OCR rarely yields the full issuing-authority phrases.
    pub document_keywords: Vec<String>,

    /// Known locality names accepted as address evidence.
    pub locality_gazetteer: Vec<String>,

    /// Substrings marking boilerplate lines the address fallback skips.
    pub boilerplate_markers: Vec<String>,

    /// Minimum address length (in characters) before the line-join
    /// fallback kicks in.
    pub min_address_chars: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            document_keywords: vec![
                "Unique Identif".to_string(), // partial "Unique Identification"
                "Authority of In".to_string(), // partial "Authority of India"
                "Aadhaar".to_string(),
                "आधार".to_string(),
                "VID".to_string(),
                "Government of In".to_string(), // partial "Government of India"
                "UID".to_string(),
            ],
            locality_gazetteer: vec![
                "Puthoopadam".to_string(),
                "Cherukavu".to_string(),
                "Avikkarapadi".to_string(),
                "Malappuram".to_string(),
                "Kerala".to_string(),
            ],
            boilerplate_markers: vec![
                "Unique Identification".to_string(),
                "Uidal".to_string(),
                "www".to_string(),
            ],
            min_address_chars: 10,
        }
    }
}

impl AadexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trip() {
        let config = AadexConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: AadexConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.recognition.language, "eng");
        assert_eq!(back.extraction.min_address_chars, 10);
        assert_eq!(
            back.extraction.locality_gazetteer,
            config.extraction.locality_gazetteer
        );
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: AadexConfig =
            serde_json::from_str(r#"{"recognition": {"language": "hin"}}"#).unwrap();

        assert_eq!(config.recognition.language, "hin");
        assert!(!config.extraction.document_keywords.is_empty());
    }
}
