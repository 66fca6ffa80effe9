//! Numeric token scanning: digit runs, Aadhaar number, PIN code.

use super::patterns::{AADHAAR_DIRECT, PIN_CODE};

/// Scan the ordered maximal digit runs in `text`.
///
/// A single interior space between digit groups continues the run, so
/// `"1234 5678 9012"` scans as one 12-digit run; two or more spaces, or
/// any other character, end it. Returned runs are space-stripped.
pub fn digit_runs(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut runs = Vec::new();
    let mut current = String::new();

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_digit() {
            current.push(c);
        } else if c == ' '
            && !current.is_empty()
            && i + 1 < chars.len()
            && chars[i + 1].is_ascii_digit()
        {
            // single interior space joins adjacent digit groups
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
        i += 1;
    }
    if !current.is_empty() {
        runs.push(current);
    }

    runs
}

/// Resolve the Aadhaar number from front text.
///
/// The first digit run of 12 or more digits wins; its first 12 digits are
/// regrouped as `XXXX XXXX XXXX`. With no such run, a direct
/// boundary-delimited 12-digit match is kept exactly as it appears.
/// No match leaves the field empty.
pub fn resolve_id_number(text: &str) -> String {
    if let Some(run) = digit_runs(text).into_iter().find(|r| r.len() >= 12) {
        let digits = &run[..12];
        return format!("{} {} {}", &digits[0..4], &digits[4..8], &digits[8..12]);
    }

    AADHAAR_DIRECT
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Find a standalone 6-digit PIN code.
///
/// The boundary match rejects digits embedded in longer runs, so this is
/// independent of the 12-digit search above.
pub fn find_postal_code(text: &str) -> Option<String> {
    PIN_CODE.captures(text).map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_digit_runs_plain() {
        assert_eq!(digit_runs("abc 123 def 45"), vec!["123", "45"]);
    }

    #[test]
    fn test_digit_runs_joined_across_single_spaces() {
        assert_eq!(digit_runs("1234 5678 9012"), vec!["123456789012"]);
    }

    #[test]
    fn test_digit_runs_broken_by_double_space() {
        assert_eq!(digit_runs("1234  5678"), vec!["1234", "5678"]);
    }

    #[test]
    fn test_digit_runs_broken_by_punctuation() {
        assert_eq!(digit_runs("15/08/1995"), vec!["15", "08", "1995"]);
    }

    #[test]
    fn test_id_number_reformats_contiguous_digits() {
        assert_eq!(resolve_id_number("123456789012"), "1234 5678 9012");
    }

    #[test]
    fn test_id_number_from_spaced_groups() {
        assert_eq!(
            resolve_id_number("no 4521 8765 3321 issued"),
            "4521 8765 3321"
        );
    }

    #[test]
    fn test_id_number_truncates_longer_runs_to_twelve() {
        assert_eq!(resolve_id_number("12345678901299"), "1234 5678 9012");
    }

    #[test]
    fn test_id_number_skips_short_runs() {
        assert_eq!(resolve_id_number("phone 9876543210"), "");
    }

    #[test]
    fn test_id_number_absent() {
        assert_eq!(resolve_id_number("no numbers here"), "");
    }

    #[test]
    fn test_postal_code_standalone() {
        assert_eq!(find_postal_code("Kerala - 676505"), Some("676505".to_string()));
    }

    #[test]
    fn test_postal_code_rejects_longer_runs() {
        assert_eq!(find_postal_code("ref 6765051"), None);
    }

    #[test]
    fn test_postal_code_absent() {
        assert_eq!(find_postal_code("Kerala"), None);
    }
}
