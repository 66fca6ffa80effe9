//! Gender resolution from front text.

use super::patterns::GENDER;

/// Resolve gender as the first whole-word "male"/"female" occurrence,
/// kept in its original casing.
pub fn resolve_gender(text: &str) -> String {
    GENDER
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_gender_keeps_casing() {
        assert_eq!(resolve_gender("JOHN SMITH Male"), "Male");
        assert_eq!(resolve_gender("anita FEMALE"), "FEMALE");
    }

    #[test]
    fn test_female_is_not_male() {
        // "Female" contains "male" but the word boundary rejects it.
        assert_eq!(resolve_gender("Female"), "Female");
    }

    #[test]
    fn test_gender_absent() {
        assert_eq!(resolve_gender("JOHN SMITH"), "");
    }
}
