//! Per-document field extraction strategies.

mod driving_license;
mod national_id;
mod passport;
mod tax_id;

pub use driving_license::DrivingLicenseExtractor;
pub use national_id::NationalIdExtractor;
pub use passport::PassportExtractor;
pub use tax_id::TaxIdExtractor;

use crate::models::record::{DocumentType, ExtractionRecord};

use super::filter::{ConfidenceFilter, LineSequence};

/// Confidence threshold used by most document types.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.3;

/// Extracts name, date of birth and gender for one document type.
///
/// Implementations never fail on missing fields; anything not found stays at
/// its [`ExtractionRecord::new`] default.
pub trait FieldExtractor: Send + Sync {
    /// The document type this extractor handles.
    fn document_type(&self) -> DocumentType;

    /// Fragments at or below this confidence are ignored.
    fn confidence_threshold(&self) -> f32 {
        DEFAULT_CONFIDENCE_THRESHOLD
    }

    /// The filter matching [`Self::confidence_threshold`].
    fn confidence_filter(&self) -> ConfidenceFilter {
        ConfidenceFilter::new(self.confidence_threshold())
    }

    /// Extract fields from filtered lines.
    fn extract(&self, lines: &LineSequence) -> ExtractionRecord;
}

static NATIONAL_ID: NationalIdExtractor = NationalIdExtractor;
static TAX_ID: TaxIdExtractor = TaxIdExtractor;
static DRIVING_LICENSE: DrivingLicenseExtractor = DrivingLicenseExtractor;
static PASSPORT: PassportExtractor = PassportExtractor;

/// The extractor for `document_type`.
pub fn extractor_for(document_type: DocumentType) -> &'static dyn FieldExtractor {
    match document_type {
        DocumentType::NationalId => &NATIONAL_ID,
        DocumentType::TaxId => &TAX_ID,
        DocumentType::DrivingLicense => &DRIVING_LICENSE,
        DocumentType::Passport => &PASSPORT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::{Gender, NOT_FOUND};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dispatch_matches_document_type() {
        for doc_type in DocumentType::ALL {
            assert_eq!(extractor_for(doc_type).document_type(), doc_type);
        }
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(extractor_for(DocumentType::NationalId).confidence_threshold(), 0.3);
        assert_eq!(extractor_for(DocumentType::TaxId).confidence_threshold(), 0.3);
        assert_eq!(extractor_for(DocumentType::DrivingLicense).confidence_threshold(), 0.3);
        assert_eq!(extractor_for(DocumentType::Passport).confidence_threshold(), 0.4);
    }

    #[test]
    fn test_empty_input_yields_defaults() {
        let empty = LineSequence::default();

        for doc_type in DocumentType::ALL {
            let record = extractor_for(doc_type).extract(&empty);

            assert_eq!(record, ExtractionRecord::new(doc_type));
            assert_eq!(record.name, NOT_FOUND);
            assert_eq!(record.date_of_birth, NOT_FOUND);
            assert_eq!(record.age, None);
            assert_eq!(record.gender, Gender::Unknown);
        }
    }

    #[test]
    fn test_every_record_serializes_all_keys() {
        let lines = LineSequence::from_lines(["noise", "12 34", "???"]);

        for doc_type in DocumentType::ALL {
            let record = extractor_for(doc_type).extract(&lines);
            let json = serde_json::to_value(&record).unwrap();
            let object = json.as_object().unwrap();

            for key in ["name", "dateOfBirth", "age", "gender", "documentType"] {
                assert!(object.contains_key(key), "{doc_type}: missing {key}");
            }
        }
    }
}
