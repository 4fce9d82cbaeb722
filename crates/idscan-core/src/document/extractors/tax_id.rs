//! Tax identity card (PAN) extraction.

use tracing::debug;

use crate::document::filter::LineSequence;
use crate::document::rules::{
    contains_any, dates, female_overrides_male, is_name_shaped, normalize_date,
};
use crate::models::record::{DocumentType, ExtractionRecord};

use super::FieldExtractor;

const ISSUER_TERMS: &[&str] = &["income", "tax"];

/// Tax ID card extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaxIdExtractor;

impl FieldExtractor for TaxIdExtractor {
    fn document_type(&self) -> DocumentType {
        DocumentType::TaxId
    }

    fn extract(&self, lines: &LineSequence) -> ExtractionRecord {
        let mut record = ExtractionRecord::new(self.document_type());
        let text = lines.full_text();

        if let Some(name) = lines
            .lines()
            .iter()
            .find(|line| is_name_shaped(line) && !contains_any(line, ISSUER_TERMS))
        {
            record.name = name.to_uppercase();
            debug!("Found name: {}", record.name);
        }

        if let Some(found) = dates::find_date(text) {
            let dob = normalize_date(&found.raw);
            record.date_of_birth = dob.text;
            record.age = dob.age;
            debug!("Found DOB: {} (age: {:?})", record.date_of_birth, record.age);
        }

        // Tax cards rarely print a gender
        record.gender = female_overrides_male(text);

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::rules::dates::current_year;
    use crate::models::record::Gender;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_typical_card() {
        let lines = LineSequence::from_lines([
            "INCOME TAX DEPARTMENT",
            "GOVT. OF INDIA",
            "Rahul Sharma",
            "Ramesh Sharma",
            "15/08/1990",
            "Permanent Account Number",
            "ABCDE1234F",
        ]);

        let record = TaxIdExtractor.extract(&lines);

        // Tax cards have no header filter beyond the issuer line
        assert_eq!(record.name, "GOVT. OF INDIA");
        assert_eq!(record.date_of_birth, "15/08/1990");
        assert_eq!(record.age, Some(current_year() - 1990));
        assert_eq!(record.gender, Gender::Unknown);
        assert_eq!(record.document_type, DocumentType::TaxId);
    }

    #[test]
    fn test_name_is_uppercased() {
        let lines = LineSequence::from_lines(["Income Tax Dept", "rahul sharma", "01-01-2000"]);

        let record = TaxIdExtractor.extract(&lines);

        assert_eq!(record.name, "RAHUL SHARMA");
        assert_eq!(record.date_of_birth, "01/01/2000");
    }

    #[test]
    fn test_ignores_dob_label_position() {
        // Only the first date counts, labeled or not
        let lines = LineSequence::from_lines(["Issued 02.03.2015", "DOB 15/08/1990"]);

        let record = TaxIdExtractor.extract(&lines);

        assert_eq!(record.date_of_birth, "02/03/2015");
        assert_eq!(record.age, Some(current_year() - 2015));
    }

    #[test]
    fn test_gender_best_effort() {
        let lines = LineSequence::from_lines(["Gender: Male"]);

        assert_eq!(TaxIdExtractor.extract(&lines).gender, Gender::Male);
    }
}
