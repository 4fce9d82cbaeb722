//! Driving license extraction.

use tracing::debug;

use crate::document::filter::LineSequence;
use crate::document::rules::{dates, female_overrides_male, line_after_label};
use crate::models::record::{DocumentType, ExtractionRecord};

use super::FieldExtractor;

const NAME_LABELS: &[&str] = &["name", "holder"];

/// Driving license extractor.
///
/// Licenses print the holder's name on the line after its label. The date of
/// birth is kept exactly as printed, and the age comes straight from the
/// matched year even when the day or month are out of range.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrivingLicenseExtractor;

impl FieldExtractor for DrivingLicenseExtractor {
    fn document_type(&self) -> DocumentType {
        DocumentType::DrivingLicense
    }

    fn extract(&self, lines: &LineSequence) -> ExtractionRecord {
        let mut record = ExtractionRecord::new(self.document_type());
        let text = lines.full_text();

        if let Some(name) = line_after_label(lines.lines(), NAME_LABELS) {
            record.name = name.to_string();
            debug!("Found name: {}", record.name);
        }

        if let Some(found) = dates::find_date(text) {
            record.age = found.year_value().map(dates::age_from_year);
            record.date_of_birth = found.raw;
            debug!("Found DOB: {} (age: {:?})", record.date_of_birth, record.age);
        }

        record.gender = female_overrides_male(text);

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::rules::dates::current_year;
    use crate::models::record::{Gender, NOT_FOUND};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_typical_license() {
        let lines = LineSequence::from_lines([
            "TRANSPORT DEPARTMENT",
            "DL No MH12 20110012345",
            "Name",
            "RAHUL SHARMA",
            "DOB 15-08-1990",
            "Male",
        ]);

        let record = DrivingLicenseExtractor.extract(&lines);

        assert_eq!(
            record,
            ExtractionRecord {
                name: "RAHUL SHARMA".to_string(),
                date_of_birth: "15-08-1990".to_string(),
                age: Some(current_year() - 1990),
                gender: Gender::Male,
                document_type: DocumentType::DrivingLicense,
            }
        );
    }

    #[test]
    fn test_holder_label() {
        let lines = LineSequence::from_lines(["Holder's Signature", "A. KUMAR"]);

        assert_eq!(DrivingLicenseExtractor.extract(&lines).name, "A. KUMAR");
    }

    #[test]
    fn test_label_on_last_line() {
        let lines = LineSequence::from_lines(["RAHUL SHARMA", "Name"]);

        assert_eq!(DrivingLicenseExtractor.extract(&lines).name, NOT_FOUND);
    }

    #[test]
    fn test_age_from_year_even_for_invalid_date() {
        let lines = LineSequence::from_lines(["Valid 45.13.1985"]);

        let record = DrivingLicenseExtractor.extract(&lines);

        assert_eq!(record.date_of_birth, "45.13.1985");
        assert_eq!(record.age, Some(current_year() - 1985));
    }

    #[test]
    fn test_age_from_devanagari_year() {
        let lines = LineSequence::from_lines(["Name", "RAHUL SHARMA", "DOB १५-०८-१९९०"]);

        let record = DrivingLicenseExtractor.extract(&lines);

        assert_eq!(record.date_of_birth, "१५-०८-१९९०");
        assert_eq!(record.age, Some(current_year() - 1990));
    }

    #[test]
    fn test_female_overrides_male() {
        let lines = LineSequence::from_lines(["Sex: Male/Female"]);

        assert_eq!(DrivingLicenseExtractor.extract(&lines).gender, Gender::Female);
    }
}
