//! Extraction record and document type models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder for a textual field the heuristics could not locate.
pub const NOT_FOUND: &str = "Not found";

/// Supported identity document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// National identity card (Aadhaar).
    NationalId,
    /// Tax identity card (PAN).
    TaxId,
    /// Driving license.
    DrivingLicense,
    /// Passport.
    Passport,
}

impl Default for DocumentType {
    fn default() -> Self {
        Self::NationalId
    }
}

impl DocumentType {
    /// All document types in code order.
    pub const ALL: [DocumentType; 4] = [
        DocumentType::NationalId,
        DocumentType::TaxId,
        DocumentType::DrivingLicense,
        DocumentType::Passport,
    ];

    /// Resolve a caller-supplied type code.
    ///
    /// `"1"` national ID, `"2"` tax ID, `"3"` driving license, `"4"` passport.
    /// Anything else, including padded codes, falls back to the national ID.
    pub fn from_code(code: &str) -> Self {
        match code {
            "2" => Self::TaxId,
            "3" => Self::DrivingLicense,
            "4" => Self::Passport,
            _ => Self::NationalId,
        }
    }

    /// The numeric code for this document type.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NationalId => "1",
            Self::TaxId => "2",
            Self::DrivingLicense => "3",
            Self::Passport => "4",
        }
    }

    /// Machine-readable name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NationalId => "national_id",
            Self::TaxId => "tax_id",
            Self::DrivingLicense => "driving_license",
            Self::Passport => "passport",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender as printed on the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "Male")]
    Male,
    #[serde(rename = "Female")]
    Female,
    /// No gender marker found.
    #[default]
    #[serde(rename = "")]
    Unknown,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Unknown => "",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields extracted from a single document image.
///
/// Every field always carries a value: unmatched text fields hold
/// [`NOT_FOUND`], `age` is `None` and `gender` is [`Gender::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRecord {
    /// Full name of the holder.
    pub name: String,

    /// Date of birth as text (format depends on the document type).
    pub date_of_birth: String,

    /// Age in whole years, `current year - birth year`.
    pub age: Option<i32>,

    /// Gender marker.
    pub gender: Gender,

    /// Document type the record was extracted as.
    pub document_type: DocumentType,
}

impl ExtractionRecord {
    /// Create a record with every field at its default.
    pub fn new(document_type: DocumentType) -> Self {
        Self {
            name: NOT_FOUND.to_string(),
            date_of_birth: NOT_FOUND.to_string(),
            age: None,
            gender: Gender::Unknown,
            document_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_document_type_codes() {
        assert_eq!(DocumentType::from_code("1"), DocumentType::NationalId);
        assert_eq!(DocumentType::from_code("2"), DocumentType::TaxId);
        assert_eq!(DocumentType::from_code("3"), DocumentType::DrivingLicense);
        assert_eq!(DocumentType::from_code("4"), DocumentType::Passport);

        for doc_type in DocumentType::ALL {
            assert_eq!(DocumentType::from_code(doc_type.code()), doc_type);
        }
    }

    #[test]
    fn test_unknown_code_defaults_to_national_id() {
        assert_eq!(DocumentType::from_code("9"), DocumentType::NationalId);
        assert_eq!(DocumentType::from_code(""), DocumentType::NationalId);
        assert_eq!(DocumentType::from_code("passport"), DocumentType::NationalId);
        assert_eq!(DocumentType::from_code(" 4"), DocumentType::NationalId);
        assert_eq!(DocumentType::from_code("3\n"), DocumentType::NationalId);
    }

    #[test]
    fn test_default_record_serializes_every_key() {
        let record = ExtractionRecord::new(DocumentType::DrivingLicense);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Not found",
                "dateOfBirth": "Not found",
                "age": null,
                "gender": "",
                "documentType": "driving_license",
            })
        );
    }

    #[test]
    fn test_gender_round_trip_through_json() {
        let json = serde_json::to_string(&Gender::Female).unwrap();
        assert_eq!(json, "\"Female\"");

        let gender: Gender = serde_json::from_str("\"\"").unwrap();
        assert_eq!(gender, Gender::Unknown);
    }
}
