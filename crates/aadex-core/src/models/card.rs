//! Card-side text and the extracted record.

use serde::{Deserialize, Serialize};

/// Raw recognized text for the two sides of one card.
///
/// Both strings are taken as-is from the recognition step: arbitrary
/// Unicode, line breaks, and OCR noise included. One value feeds exactly
/// one extraction call; there is no cross-call state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecognizedText {
    /// Text recognized from the card front.
    pub front: String,

    /// Text recognized from the card back.
    pub back: String,
}

impl RecognizedText {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

/// The six extracted identity fields.
///
/// Every field defaults to the empty string and stays empty when no
/// resolution strategy matched; fields are independent of each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AadhaarRecord {
    /// 12-digit Aadhaar number, formatted as `XXXX XXXX XXXX`.
    pub id_number: String,

    /// Card-holder name.
    pub name: String,

    /// Date of birth as printed (DD/MM/YYYY or DD/MM/YY).
    pub date_of_birth: String,

    /// Gender keyword as matched.
    pub gender: String,

    /// Reconstructed postal address (advisory text, not validated).
    pub address: String,

    /// 6-digit PIN code.
    pub postal_code: String,
}

impl AadhaarRecord {
    /// The fields in serialization order, keyed by their camelCase names.
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("idNumber", self.id_number.as_str()),
            ("name", self.name.as_str()),
            ("dateOfBirth", self.date_of_birth.as_str()),
            ("gender", self.gender.as_str()),
            ("address", self.address.as_str()),
            ("postalCode", self.postal_code.as_str()),
        ]
    }

    /// Minimum-completeness check: the record is viable if it has an ID
    /// number, or both name and date of birth, or an address.
    pub fn has_minimum_data(&self) -> bool {
        !self.id_number.is_empty()
            || (!self.name.is_empty() && !self.date_of_birth.is_empty())
            || !self.address.is_empty()
    }

    /// Render the record as ordered `"<Field Label>: <value>"` lines.
    pub fn to_labeled_string(&self) -> String {
        self.fields()
            .iter()
            .map(|(name, value)| format!("{}: {}", field_label(name), value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Derive a display label from a camelCase field name: every internal
/// uppercase letter gets a preceding space, and the first letter is
/// capitalized (`dateOfBirth` -> `Date Of Birth`).
pub fn field_label(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            label.push(' ');
            label.push(c);
        } else {
            label.push(c);
        }
    }
    label
}
