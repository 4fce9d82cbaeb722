//! Core library for identity document OCR processing.
//!
//! This crate provides:
//! - A text recognition seam (`TextRecognizer`) with a PaddleOCR-backed engine
//! - Confidence filtering of recognized fragments
//! - Document type classification from free text
//! - Per-document field extraction (name, date of birth, age, gender)
//! - Batch orchestration with per-file error isolation

pub mod document;
pub mod error;
pub mod models;
pub mod ocr;

pub use document::{
    classify_document, extract_fields, extractor_for, BatchItem, BatchReport, BatchSummary,
    ConfidenceFilter, DocumentPipeline, FieldExtractor, FileOutcome, ItemSource, LineSequence,
};
pub use error::{BatchError, IdScanError, RecognitionError, Result};
pub use models::config::IdScanConfig;
pub use models::record::{DocumentType, ExtractionRecord, Gender, NOT_FOUND};
pub use ocr::{RecognizedFragment, TextRecognizer};

#[cfg(feature = "native")]
pub use ocr::PureOcrEngine;
