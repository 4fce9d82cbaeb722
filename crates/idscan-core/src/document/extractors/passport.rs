//! Passport extraction.

use tracing::debug;

use crate::document::filter::LineSequence;
use crate::document::rules::{dates, line_after_label, male_unless_female};
use crate::models::record::{DocumentType, ExtractionRecord};

use super::FieldExtractor;

const NAME_LABELS: &[&str] = &["name", "surname"];

/// Passport extractor.
///
/// Uses a stricter confidence threshold than the card extractors. Dates are
/// reassembled as `DD/MM/YYYY`; dotted dates are not recognized.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassportExtractor;

impl FieldExtractor for PassportExtractor {
    fn document_type(&self) -> DocumentType {
        DocumentType::Passport
    }

    fn confidence_threshold(&self) -> f32 {
        0.4
    }

    fn extract(&self, lines: &LineSequence) -> ExtractionRecord {
        let mut record = ExtractionRecord::new(self.document_type());
        let text = lines.full_text();

        if let Some(name) = line_after_label(lines.lines(), NAME_LABELS) {
            record.name = name.to_string();
            debug!("Found name: {}", record.name);
        }

        if let Some(found) = dates::find_date_strict(text) {
            record.date_of_birth = format!("{}/{}/{}", found.day, found.month, found.year);
            record.age = found.year_value().map(dates::age_from_year);
            debug!("Found DOB: {} (age: {:?})", record.date_of_birth, record.age);
        }

        record.gender = male_unless_female(text);

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::rules::dates::current_year;
    use crate::models::record::{Gender, NOT_FOUND};
    use crate::ocr::RecognizedFragment;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_typical_passport() {
        let lines = LineSequence::from_lines(["Name", "JOHN DOE", "Nationality: Indian", "10-05-1985"]);

        let record = PassportExtractor.extract(&lines);

        assert_eq!(
            record,
            ExtractionRecord {
                name: "JOHN DOE".to_string(),
                date_of_birth: "10/05/1985".to_string(),
                age: Some(current_year() - 1985),
                gender: Gender::Unknown,
                document_type: DocumentType::Passport,
            }
        );
    }

    #[test]
    fn test_dotted_dates_ignored() {
        let lines = LineSequence::from_lines(["Surname", "DOE", "10.05.1985"]);

        let record = PassportExtractor.extract(&lines);

        assert_eq!(record.name, "DOE");
        assert_eq!(record.date_of_birth, NOT_FOUND);
        assert_eq!(record.age, None);
    }

    #[test]
    fn test_age_from_devanagari_year() {
        let lines = LineSequence::from_lines(["Name", "RAHUL SHARMA", "DOB १५-०८-१९९०"]);

        let record = PassportExtractor.extract(&lines);

        assert_eq!(record.date_of_birth, "१५/०८/१९९०");
        assert_eq!(record.age, Some(current_year() - 1990));
    }

    #[test]
    fn test_gender_rules() {
        let male = LineSequence::from_lines(["Sex", "M", "MALE"]);
        let female = LineSequence::from_lines(["Sex", "F", "FEMALE"]);

        assert_eq!(PassportExtractor.extract(&male).gender, Gender::Male);
        assert_eq!(PassportExtractor.extract(&female).gender, Gender::Female);
    }

    #[test]
    fn test_stricter_threshold() {
        let fragments = vec![
            RecognizedFragment::new("Given Name", 0.9),
            RecognizedFragment::new("BLURRY", 0.35),
            RecognizedFragment::new("JANE ROE", 0.41),
        ];

        let lines = PassportExtractor.confidence_filter().apply(&fragments);
        let record = PassportExtractor.extract(&lines);

        assert_eq!(record.name, "JANE ROE");
    }
}
