//! National identity card (Aadhaar) extraction.

use tracing::debug;

use crate::document::filter::LineSequence;
use crate::document::rules::{
    contains_any, dates, female_overrides_male, is_name_shaped, normalize_date,
};
use crate::models::record::{DocumentType, ExtractionRecord};

use super::FieldExtractor;

/// Header lines that are never the holder's name.
const HEADER_TERMS: &[&str] = &["government", "india", "aadhaar", "male", "female"];

/// National ID card extractor.
///
/// The name is the first name-shaped line that is not a card header. The date
/// of birth prefers a "DOB" label and falls back to any date.
#[derive(Debug, Clone, Copy, Default)]
pub struct NationalIdExtractor;

impl FieldExtractor for NationalIdExtractor {
    fn document_type(&self) -> DocumentType {
        DocumentType::NationalId
    }

    fn extract(&self, lines: &LineSequence) -> ExtractionRecord {
        let mut record = ExtractionRecord::new(self.document_type());
        let text = lines.full_text();

        if let Some(name) = lines
            .lines()
            .iter()
            .filter(|line| !contains_any(line, HEADER_TERMS))
            .find(|line| is_name_shaped(line))
        {
            record.name = name.clone();
            debug!("Found name: {}", record.name);
        }

        if let Some(found) = dates::find_labeled_dob(text).or_else(|| dates::find_date(text)) {
            let dob = normalize_date(&found.raw);
            record.date_of_birth = dob.text;
            record.age = dob.age;
            debug!("Found DOB: {} (age: {:?})", record.date_of_birth, record.age);
        }

        record.gender = female_overrides_male(text);

        record
    }
}
