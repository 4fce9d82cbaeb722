//! Common regex patterns for identity document extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Date of birth preceded by a "DOB" / "D.O.B" label
    pub static ref DOB_LABELED: Regex = Regex::new(
        r"(?i)(?:dob|d\.o\.b)[\s:]*((\d{2})[/\-.](\d{2})[/\-.](\d{4}))"
    ).unwrap();

    // DD/MM/YYYY, DD-MM-YYYY or DD.MM.YYYY
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b((\d{2})[/\-.](\d{2})[/\-.](\d{4}))\b"
    ).unwrap();

    // DD/MM/YYYY or DD-MM-YYYY, no dots
    pub static ref DATE_DMY_STRICT: Regex = Regex::new(
        r"\b((\d{2})[/\-](\d{2})[/\-](\d{4}))\b"
    ).unwrap();

    // National ID number, 12 digits grouped 4-4-4
    pub static ref NATIONAL_ID_NUMBER: Regex = Regex::new(
        r"\b\d{4}\s*\d{4}\s*\d{4}\b"
    ).unwrap();

    // One Unicode decimal digit (any script)
    pub static ref DECIMAL_DIGIT: Regex = Regex::new(r"^\d$").unwrap();

    // Tax ID number (5 letters, 4 digits, 1 letter); match against uppercased text
    pub static ref TAX_ID_NUMBER: Regex = Regex::new(
        r"[A-Z]{5}[0-9]{4}[A-Z]"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_dob_variants() {
        assert!(DOB_LABELED.is_match("DOB: 15/08/1990"));
        assert!(DOB_LABELED.is_match("D.O.B 15-08-1990"));
        assert!(DOB_LABELED.is_match("dob15.08.1990"));
        assert!(!DOB_LABELED.is_match("Birth 15/08/1990"));
    }

    #[test]
    fn test_strict_date_rejects_dots() {
        assert!(DATE_DMY.is_match("15.08.1990"));
        assert!(!DATE_DMY_STRICT.is_match("15.08.1990"));
        assert!(DATE_DMY_STRICT.is_match("15-08-1990"));
    }

    #[test]
    fn test_national_id_number_grouping() {
        assert!(NATIONAL_ID_NUMBER.is_match("1234 5678 9012"));
        assert!(NATIONAL_ID_NUMBER.is_match("123456789012"));
        assert!(!NATIONAL_ID_NUMBER.is_match("1234 5678 901"));
    }

    #[test]
    fn test_decimal_digit_any_script() {
        assert!(DECIMAL_DIGIT.is_match("7"));
        assert!(DECIMAL_DIGIT.is_match("९"));
        assert!(!DECIMAL_DIGIT.is_match("x"));
        assert!(!DECIMAL_DIGIT.is_match("12"));
    }

    #[test]
    fn test_tax_id_number() {
        assert!(TAX_ID_NUMBER.is_match("ABCDE1234F"));
        assert!(!TAX_ID_NUMBER.is_match("ABCD1234F"));
    }
}
