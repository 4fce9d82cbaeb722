//! Identity document field extraction.

mod classifier;
pub mod extractors;
mod filter;
mod pipeline;
pub mod rules;

pub use classifier::classify_document;
pub use extractors::{
    extractor_for, DrivingLicenseExtractor, FieldExtractor, NationalIdExtractor,
    PassportExtractor, TaxIdExtractor,
};
pub use filter::{ConfidenceFilter, LineSequence};
pub use pipeline::{
    extract_fields, BatchItem, BatchReport, BatchSummary, DocumentPipeline, FileOutcome,
    ItemSource,
};
