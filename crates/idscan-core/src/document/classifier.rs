//! Document type detection from free text.
//!
//! Independent of the caller-declared type; the extraction pipeline does not
//! consult it.

use tracing::debug;

use crate::models::record::DocumentType;

use super::rules::contains_any;
use super::rules::patterns::{NATIONAL_ID_NUMBER, TAX_ID_NUMBER};

const NATIONAL_ID_KEYWORDS: &[&str] = &[
    "aadhaar",
    "आधार",
    "uidai",
    "unique identification",
    "government of india",
    "भारत सरकार",
    "uid",
    "enrollment",
    "dob:",
    "vld",
    "vid",
];

const TAX_ID_KEYWORDS: &[&str] = &[
    "income tax",
    "permanent account",
    "pan",
    "आयकर",
    "signature",
    "पैन",
    "father",
];

const DRIVING_LICENSE_KEYWORDS: &[&str] = &[
    "driving",
    "transport",
    "licence",
    "license",
    "dl no",
    "motor vehicle",
    "vehicle class",
    "validity",
    "auth to drive",
];

const PASSPORT_KEYWORDS: &[&str] = &[
    "passport",
    "nationality",
    "date of issue",
    "republic of",
    "surname",
    "given name",
    "place of birth",
    "place of issue",
];

/// Guess the document type of `text`.
///
/// Rules are checked in priority order and the first match wins:
/// national ID (keyword and 12-digit number), tax ID (keyword and tax
/// number), driving license (keyword), passport (keyword). Returns `None`
/// when nothing matches.
pub fn classify_document(text: &str) -> Option<DocumentType> {
    let detected = if contains_any(text, NATIONAL_ID_KEYWORDS) && NATIONAL_ID_NUMBER.is_match(text)
    {
        Some(DocumentType::NationalId)
    } else if contains_any(text, TAX_ID_KEYWORDS) && TAX_ID_NUMBER.is_match(&text.to_uppercase()) {
        Some(DocumentType::TaxId)
    } else if contains_any(text, DRIVING_LICENSE_KEYWORDS) {
        Some(DocumentType::DrivingLicense)
    } else if contains_any(text, PASSPORT_KEYWORDS) {
        Some(DocumentType::Passport)
    } else {
        None
    };

    debug!("Classified document as {:?}", detected);

    detected
}
