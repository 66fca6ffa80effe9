//! Address reconstruction from back text.
//!
//! The back of a card is the noisiest input in the pipeline: the address
//! wraps across lines, labels lose their punctuation, and watermark text
//! bleeds into the scan. Reconstruction therefore runs a seed cascade,
//! an override that reassembles the address from discrete fragments, and
//! a coarse line-join fallback, in that order.

use regex::Regex;
use tracing::debug;

use crate::models::config::ExtractionConfig;

use super::digits::find_postal_code;
use super::patterns::{
    ADDRESS_GREEDY, ADDRESS_LABEL, ADDRESS_RELATION, COMMA_SPACING, DUP_COMMAS, HOUSE_FRAGMENT,
    MULTI_SPACE, NON_ADDRESS_CHARS, RELATION_NAME, SEPARATOR_LINE, TIGHT_PUNCT, WHITESPACE_RUN,
};
use super::capture_trimmed;

/// Reassembles a postal address from fragmented back-side text.
pub struct AddressReconstructor {
    /// Locality alternation compiled from the configured gazetteer;
    /// `None` when the gazetteer is empty.
    gazetteer: Option<Regex>,

    /// Substrings marking boilerplate lines the fallback skips.
    boilerplate: Vec<String>,

    /// Results shorter than this fall through to the line-join fallback.
    min_chars: usize,
}

impl AddressReconstructor {
    pub fn new(config: &ExtractionConfig) -> Self {
        let gazetteer = if config.locality_gazetteer.is_empty() {
            None
        } else {
            let alternation = config
                .locality_gazetteer
                .iter()
                .map(|token| regex::escape(token))
                .collect::<Vec<_>>()
                .join("|");
            // Tokens come from configuration; escaping keeps the
            // alternation well-formed for any token list.
            Regex::new(&format!(r"(?i)(?:{alternation})(?:[,\s]|$)")).ok()
        };

        Self {
            gazetteer,
            boilerplate: config.boilerplate_markers.clone(),
            min_chars: config.min_address_chars,
        }
    }

    /// Reconstruct a single normalized address string from back text.
    pub fn reconstruct(&self, back: &str) -> String {
        let mut address = match seed_text(back) {
            Some(raw) => normalize(&raw),
            None => String::new(),
        };

        // Label-based capture often truncates mid-address on noisy scans;
        // discrete fragment presence is more robust than contiguous-span
        // capture, so a fragment assembly replaces the seed outright.
        if let Some(assembled) = self.assemble_fragments(back) {
            debug!("address reassembled from fragments: {}", assembled);
            address = assembled;
        }

        let address = final_cleanup(&address);

        if address.chars().count() < self.min_chars {
            if let Some(rebuilt) = self.rebuild_from_lines(back) {
                debug!("address rebuilt from line join: {}", rebuilt);
                return rebuilt;
            }
        }

        address
    }

    /// Reassemble the address from discrete fragments: relation marker,
    /// house token, gazetteer localities, and PIN code. Any of the first
    /// three triggers the override.
    fn assemble_fragments(&self, back: &str) -> Option<String> {
        let relation = capture_trimmed(&RELATION_NAME, back);
        let house = HOUSE_FRAGMENT
            .find(back)
            .map(|m| m.as_str().trim().to_string());
        let localities: Vec<String> = self
            .gazetteer
            .as_ref()
            .map(|re| {
                re.find_iter(back)
                    .map(|m| {
                        m.as_str()
                            .trim_matches(|c: char| c == ',' || c.is_whitespace())
                            .to_string()
                    })
                    .collect()
            })
            .unwrap_or_default();

        if relation.is_none() && house.is_none() && localities.is_empty() {
            return None;
        }

        let mut parts = Vec::new();
        if let Some(name) = relation {
            parts.push(format!("S/O: {name}"));
        }
        if let Some(house) = house {
            parts.push(house);
        }
        if !localities.is_empty() {
            parts.push(localities.join(", "));
        }
        if let Some(pin) = find_postal_code(back) {
            parts.push(pin);
        }

        Some(parts.join(", "))
    }

    /// Last-resort rebuild: join every line that is long enough and not
    /// boilerplate. Higher recall, lower precision; downstream consumers
    /// treat the address as advisory text.
    fn rebuild_from_lines(&self, back: &str) -> Option<String> {
        let parts: Vec<&str> = back
            .lines()
            .map(str::trim)
            .filter(|line| line.chars().count() > 5)
            .filter(|line| !SEPARATOR_LINE.is_match(line))
            .filter(|line| !self.boilerplate.iter().any(|marker| line.contains(marker.as_str())))
            .collect();

        if parts.is_empty() {
            return None;
        }

        let joined = parts.join(", ");
        let joined = MULTI_SPACE.replace_all(&joined, " ");
        let joined = NON_ADDRESS_CHARS.replace_all(&joined, "");
        let joined = DUP_COMMAS.replace_all(&joined, ",");
        Some(joined.trim().to_string())
    }
}

/// Seed cascade: first non-empty capture feeds normalization.
fn seed_text(back: &str) -> Option<String> {
    label_capture(back)
        .or_else(|| relation_capture(back))
        .or_else(|| longest_line(back))
        .or_else(|| greedy_capture(back))
}

/// Text after an "Address" label, up to a PIN code or end of text.
fn label_capture(back: &str) -> Option<String> {
    capture_trimmed(&ADDRESS_LABEL, back)
}

/// Text after a relation marker, same capture boundary.
fn relation_capture(back: &str) -> Option<String> {
    capture_trimmed(&ADDRESS_RELATION, back)
}

/// Longest line over 15 characters that contains a comma or "house".
fn longest_line(back: &str) -> Option<String> {
    back.lines()
        .map(str::trim)
        .filter(|line| {
            line.chars().count() > 15
                && (line.contains(',') || line.to_lowercase().contains("house"))
        })
        .fold(None, |best: Option<&str>, line| match best {
            Some(current) if line.chars().count() <= current.chars().count() => best,
            _ => Some(line),
        })
        .map(|line| line.to_string())
}

/// Greedy span from the first address-ish token to a PIN code or end of
/// text.
fn greedy_capture(back: &str) -> Option<String> {
    capture_trimmed(&ADDRESS_GREEDY, back)
}

/// Always-applied seed normalization: collapse whitespace, space out
/// punctuation wedged between letters, drop characters outside the
/// address alphabet, and standardize comma spacing.
fn normalize(raw: &str) -> String {
    let s = WHITESPACE_RUN.replace_all(raw.trim(), " ");
    let s = TIGHT_PUNCT.replace_all(&s, "${1}, ${2}");
    let s = NON_ADDRESS_CHARS.replace_all(&s, "");
    let s = COMMA_SPACING.replace_all(&s, ", ");
    s.trim().to_string()
}

/// Final cleanup applied to whichever candidate wins: collapse duplicate
/// commas, trim comma/space edges, collapse multi-spaces.
fn final_cleanup(address: &str) -> String {
    let s = DUP_COMMAS.replace_all(address, ",");
    let s = s.trim_matches(|c: char| c == ',' || c.is_whitespace());
    MULTI_SPACE.replace_all(s, " ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reconstructor() -> AddressReconstructor {
        AddressReconstructor::new(&ExtractionConfig::default())
    }

    #[test]
    fn test_label_capture_stops_at_pin_code() {
        let back = "Address: 12 Gandhi Road, Cochin 676505 extra";
        assert_eq!(
            label_capture(back),
            Some("12 Gandhi Road, Cochin".to_string())
        );
    }

    #[test]
    fn test_longest_qualifying_line_wins() {
        let back = "Government\n12 Main Street, Springfield\nshort, one";
        assert_eq!(
            reconstructor().reconstruct(back),
            "12 Main Street, Springfield"
        );
    }

    #[test]
    fn test_fragment_override_beats_seed_text() {
        // The label capture seeds a non-empty result, but the relation
        // marker and gazetteer hits trigger the fragment reassembly.
        let back = "Address: somewhere S/O: Raman Nair, Malappuram, Kerala, 676505";
        assert_eq!(
            reconstructor().reconstruct(back),
            "S/O: Raman Nair, Malappuram, Kerala, 676505"
        );
    }

    #[test]
    fn test_house_fragment_triggers_override() {
        let back = "Palliyalil House, Arakkal Road";
        assert_eq!(
            reconstructor().reconstruct(back),
            "Palliyalil House, Arakkal Road"
        );
    }

    #[test]
    fn test_normalization_cleans_ocr_noise() {
        let back = "Address: 12   Gandhi* Road,Cochin";
        assert_eq!(reconstructor().reconstruct(back), "12 Gandhi Road, Cochin");
    }

    #[test]
    fn test_line_join_fallback_skips_boilerplate() {
        let back = "====\nC/O Items\nwww.uidai.gov.in\nNear Temple Road\nXYZ";
        assert_eq!(
            reconstructor().reconstruct(back),
            "CO Items, Near Temple Road"
        );
    }

    #[test]
    fn test_empty_back_text() {
        assert_eq!(reconstructor().reconstruct(""), "");
    }

    #[test]
    fn test_empty_gazetteer_disables_locality_evidence() {
        let config = ExtractionConfig {
            locality_gazetteer: Vec::new(),
            ..Default::default()
        };
        let reconstructor = AddressReconstructor::new(&config);

        // Without gazetteer hits (and no relation/house fragment), the
        // seed capture stands.
        let back = "Address: 14 Church Street, Bandra West Mumbai";
        assert_eq!(
            reconstructor.reconstruct(back),
            "14 Church Street, Bandra West Mumbai"
        );
    }
}
