//! Common regex patterns for Aadhaar card extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Aadhaar number patterns (12 digits, optionally grouped in fours)
    pub static ref AADHAAR_DIRECT: Regex = Regex::new(
        r"\b\d{4}\s?\d{4}\s?\d{4}\b"
    ).unwrap();

    pub static ref AADHAAR_SPACE_GROUPED: Regex = Regex::new(
        r"\d{4}\s+\d{4}\s+\d{4}"
    ).unwrap();

    // PIN code pattern (standalone 6 digits)
    pub static ref PIN_CODE: Regex = Regex::new(
        r"\b(\d{6})\b"
    ).unwrap();

    // Name strategies, in priority order
    pub static ref NAME_BEFORE_DOB_LABEL: Regex = Regex::new(
        r"(?i)([A-Za-z\s]+)\s+(?:DOB|Date of Birth)\s*:"
    ).unwrap();

    pub static ref NAME_BEFORE_MARKER: Regex = Regex::new(
        r"(?i)(?:^|[^\w\n])([A-Za-z][A-Za-z\s]+(?:\s[A-Za-z]+){1,3})\s+(?:DOB|Male|Female|S/O|D/O|W/O|Year|\d{2}/\d{2}/\d{4})"
    ).unwrap();

    // stray quote artifact OCR leaves ahead of the printed name
    pub static ref NAME_AFTER_QUOTE_ARTIFACT: Regex = Regex::new(
        r#"(?i)he\s*"\s*([A-Za-z][A-Za-z\s.]+(?:\s[A-Za-z.]+){1,3})"#
    ).unwrap();

    pub static ref NAME_BEFORE_GENDER: Regex = Regex::new(
        r"(?i)([A-Za-z][A-Za-z\s.]+(?:\s[A-Za-z.]+){1,3})\s+(?:DOB|Male|Female)"
    ).unwrap();

    pub static ref NAME_AFTER_LABEL: Regex = Regex::new(
        r"(?i)(?:Name|नाम)[:\s]+([A-Za-z\s.]+)"
    ).unwrap();

    // Date of birth strategies, in priority order
    pub static ref DOB_LABELED: Regex = Regex::new(
        r"(?i)(?:DOB|Date of Birth|Birth)\s*:?\s*(\d{2}[/-]\d{2}[/-]\d{4}|\d{2}[/-]\d{2}[/-]\d{2})"
    ).unwrap();

    pub static ref DOB_BARE: Regex = Regex::new(
        r"(\d{2}[/-]\d{2}[/-]\d{4})"
    ).unwrap();

    pub static ref DOB_SHORT_LABEL: Regex = Regex::new(
        r"(?i)DOB\s*:?\s*(\d{2}[/-]\d{2}[/-]\d{4})"
    ).unwrap();

    // Gender (whole-word, first occurrence)
    pub static ref GENDER: Regex = Regex::new(
        r"\b(?i:male|female)\b"
    ).unwrap();

    // Address seed strategies
    pub static ref ADDRESS_LABEL: Regex = Regex::new(
        r"(?is)Address\s*:?\s*(.*?)(?:\d{6}|$)"
    ).unwrap();

    pub static ref ADDRESS_RELATION: Regex = Regex::new(
        r"(?is)(?:S/O|D/O|W/O|Son of|Daughter of|Wife of)[:\s]+(.*?)(?:\d{6}|$)"
    ).unwrap();

    pub static ref ADDRESS_GREEDY: Regex = Regex::new(
        r"(?is)((?:Address|S/O|D/O|W/O|House).*?)(?:\d{6}|$)"
    ).unwrap();

    // Structured address fragments
    pub static ref RELATION_NAME: Regex = Regex::new(
        r"(?i)(?:S/O|D/O|W/O)[:\s]+([A-Za-z\s]+)(?:,|\s|$)"
    ).unwrap();

    pub static ref HOUSE_FRAGMENT: Regex = Regex::new(
        r"(?i)(?:[A-Za-z]+ House|House)[,\s]([^,]*)"
    ).unwrap();

    // Address cleanup
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    pub static ref MULTI_SPACE: Regex = Regex::new(r"\s{2,}").unwrap();

    pub static ref TIGHT_PUNCT: Regex = Regex::new(r"(\w)[,.](\w)").unwrap();

    pub static ref NON_ADDRESS_CHARS: Regex = Regex::new(r"[^\w\s,.:-]").unwrap();

    pub static ref COMMA_SPACING: Regex = Regex::new(r"\s*,\s*").unwrap();

    pub static ref DUP_COMMAS: Regex = Regex::new(r",\s*,").unwrap();

    pub static ref SEPARATOR_LINE: Regex = Regex::new(r"^[=\-_\s]+$").unwrap();
}
