//! Date-of-birth resolution from front text.

use chrono::NaiveDate;

use super::patterns::{DOB_BARE, DOB_LABELED, DOB_SHORT_LABEL};
use super::{Strategy, capture_trimmed, first_match};

/// Resolve the printed date of birth, first matching strategy wins.
///
/// The value is kept exactly as matched (`DD/MM/YYYY` or `DD/MM/YY`,
/// slash or hyphen separated); calendar plausibility is checked
/// separately via [`parse_date`].
pub fn resolve_date_of_birth(text: &str) -> String {
    const STRATEGIES: &[Strategy] = &[labeled, bare, short_labeled];
    first_match(STRATEGIES, text)
}

/// DOB / "Date of Birth" / "Birth" label followed by a date.
fn labeled(text: &str) -> Option<String> {
    capture_trimmed(&DOB_LABELED, text)
}

/// Bare `DD/MM/YYYY` anywhere in the text.
fn bare(text: &str) -> Option<String> {
    capture_trimmed(&DOB_BARE, text)
}

/// "DOB" label variant, four-digit year only.
fn short_labeled(text: &str) -> Option<String> {
    capture_trimmed(&DOB_SHORT_LABEL, text)
}

/// Parse a resolved date-of-birth string into a calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    const FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d/%m/%y", "%d-%m-%y"];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_labeled_dob() {
        assert_eq!(
            resolve_date_of_birth("JOHN SMITH DOB: 01/02/1990 Male"),
            "01/02/1990"
        );
    }

    #[test]
    fn test_labeled_dob_hyphen_and_short_year() {
        assert_eq!(resolve_date_of_birth("Date of Birth 06-03-02"), "06-03-02");
    }

    #[test]
    fn test_bare_date() {
        assert_eq!(resolve_date_of_birth("issued 06/03/2002 xyz"), "06/03/2002");
    }

    #[test]
    fn test_labeled_wins_over_earlier_bare_date() {
        // The bare-date strategy would pick the leftmost date; the labeled
        // strategy outranks it.
        assert_eq!(
            resolve_date_of_birth("Issue 05/05/2020 DOB: 01/01/2000"),
            "01/01/2000"
        );
    }

    #[test]
    fn test_no_date_resolves_empty() {
        assert_eq!(resolve_date_of_birth("JOHN SMITH Male"), "");
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(
            parse_date("15/08/1995"),
            NaiveDate::from_ymd_opt(1995, 8, 15)
        );
        assert_eq!(
            parse_date("15-08-1995"),
            NaiveDate::from_ymd_opt(1995, 8, 15)
        );
        assert!(parse_date("99/99/9999").is_none());
    }
}
