//! Name resolution from front text.

use super::patterns::{
    NAME_AFTER_LABEL, NAME_AFTER_QUOTE_ARTIFACT, NAME_BEFORE_DOB_LABEL, NAME_BEFORE_GENDER,
    NAME_BEFORE_MARKER,
};
use super::{Strategy, capture_trimmed, first_match};

/// Resolve the card-holder name, first matching strategy wins.
pub fn resolve_name(text: &str) -> String {
    const STRATEGIES: &[Strategy] = &[
        before_dob_label,
        before_marker,
        after_quote_artifact,
        before_gender,
        after_name_label,
    ];
    first_match(STRATEGIES, text)
}

/// Text immediately preceding a DOB / "Date of Birth" label.
fn before_dob_label(text: &str) -> Option<String> {
    capture_trimmed(&NAME_BEFORE_DOB_LABEL, text)
}

/// Capitalized multi-word run bounded by a DOB, gender, relation, year, or
/// date marker.
fn before_marker(text: &str) -> Option<String> {
    capture_trimmed(&NAME_BEFORE_MARKER, text)
}

/// Text following the stray `he "` quote artifact OCR leaves ahead of the
/// printed name.
fn after_quote_artifact(text: &str) -> Option<String> {
    capture_trimmed(&NAME_AFTER_QUOTE_ARTIFACT, text)
}

/// Capitalized run immediately preceding a gender keyword.
fn before_gender(text: &str) -> Option<String> {
    capture_trimmed(&NAME_BEFORE_GENDER, text)
}

/// Text following an explicit "Name" / "नाम" label.
fn after_name_label(text: &str) -> Option<String> {
    capture_trimmed(&NAME_AFTER_LABEL, text)
}
