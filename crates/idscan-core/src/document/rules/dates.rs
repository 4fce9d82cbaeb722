//! Date of birth matching, normalization and age derivation.

use chrono::{Datelike, Local, NaiveDate};
use regex::{Captures, Regex};

use super::patterns::{DATE_DMY, DATE_DMY_STRICT, DECIMAL_DIGIT, DOB_LABELED};

/// Formats tried, in order, when parsing a normalized date.
pub const ACCEPTED_FORMATS: [&str; 2] = ["%d/%m/%Y", "%m/%d/%Y"];

/// A date token found in document text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    /// The matched text with its original separators.
    pub raw: String,
    /// First two-digit group.
    pub day: String,
    /// Second two-digit group.
    pub month: String,
    /// Four-digit year group.
    pub year: String,
    /// Byte range in the searched text.
    pub position: (usize, usize),
}

impl DateMatch {
    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        let whole = caps.get(1)?;
        Some(Self {
            raw: whole.as_str().to_string(),
            day: caps.get(2)?.as_str().to_string(),
            month: caps.get(3)?.as_str().to_string(),
            year: caps.get(4)?.as_str().to_string(),
            position: (whole.start(), whole.end()),
        })
    }

    /// The year group as a number.
    ///
    /// The patterns match decimal digits of any script, so each digit is
    /// converted by value rather than parsed as ASCII.
    pub fn year_value(&self) -> Option<i32> {
        self.year.chars().try_fold(0i32, |acc, c| {
            let digit = digit_value(c)?;
            acc.checked_mul(10)?.checked_add(digit as i32)
        })
    }
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Value of a Unicode decimal digit.
///
/// Decimal digits are laid out in runs of ten starting at zero, so the value
/// is the offset from the start of the contiguous run modulo ten.
fn digit_value(c: char) -> Option<u32> {
    if let Some(digit) = c.to_digit(10) {
        return Some(digit);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }

    Some((c as u32 - start) % 10)
}

fn first_match(pattern: &Regex, text: &str) -> Option<DateMatch> {
    pattern
        .captures(text)
        .and_then(|caps| DateMatch::from_captures(&caps))
}

/// Find a date directly preceded by a DOB label.
pub fn find_labeled_dob(text: &str) -> Option<DateMatch> {
    first_match(&DOB_LABELED, text)
}

/// Find the first `DD[/-.]MM[/-.]YYYY` token.
pub fn find_date(text: &str) -> Option<DateMatch> {
    first_match(&DATE_DMY, text)
}

/// Find the first `DD[/-]MM[/-]YYYY` token (dots not accepted).
pub fn find_date_strict(text: &str) -> Option<DateMatch> {
    first_match(&DATE_DMY_STRICT, text)
}

/// Replace `.` and `-` separators with `/`.
pub fn normalize_separators(raw: &str) -> String {
    raw.replace(['.', '-'], "/")
}

/// Parse a normalized date, day-month-year first, then month-day-year.
///
/// Years before 1 are rejected.
pub fn parse_date(normalized: &str) -> Option<NaiveDate> {
    ACCEPTED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(normalized, fmt).ok())
        .filter(|date| date.year() >= 1)
}

/// The current calendar year in local time.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Age as `current year - birth year`, without month/day adjustment.
pub fn age_from_year(birth_year: i32) -> i32 {
    current_year() - birth_year
}

/// A normalized date of birth with its derived age.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDate {
    /// Date text with `/` separators.
    pub text: String,
    /// Parsed date, if any accepted format matched.
    pub date: Option<NaiveDate>,
    /// Age derived from the parsed year.
    pub age: Option<i32>,
}

/// Normalize a raw date token and derive the age from it.
///
/// An unparseable token keeps its normalized text with no age.
pub fn normalize_date(raw: &str) -> NormalizedDate {
    let text = normalize_separators(raw);
    let date = parse_date(&text);
    let age = date.map(|d| age_from_year(d.year()));

    NormalizedDate { text, date, age }
}
