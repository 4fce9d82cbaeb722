//! Batch orchestration: decode, recognize, filter, extract.

use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use image::DynamicImage;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{BatchError, Result};
use crate::models::record::{DocumentType, ExtractionRecord};
use crate::ocr::{RecognizedFragment, TextRecognizer};

use super::extractors::extractor_for;

/// Number of characters of recognized text shown in debug logs.
const LOG_PREVIEW_CHARS: usize = 200;

/// Where a batch item's encoded bytes come from.
#[derive(Debug, Clone)]
pub enum ItemSource {
    /// Bytes already in memory, e.g. an upload.
    Bytes(Vec<u8>),
    /// A file read when the item is processed.
    Path(PathBuf),
}

/// One input file.
#[derive(Debug, Clone)]
pub struct BatchItem {
    /// Original filename as supplied by the caller.
    pub filename: String,
    /// Encoded image content.
    pub source: ItemSource,
}

impl BatchItem {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            source: ItemSource::Bytes(bytes),
        }
    }

    /// An item read from `path` during processing, named after its file name.
    ///
    /// Read failures surface in the item's outcome, not here.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            filename,
            source: ItemSource::Path(path),
        }
    }

    fn load(&self) -> Result<Cow<'_, [u8]>> {
        match &self.source {
            ItemSource::Bytes(bytes) => Ok(Cow::Borrowed(bytes.as_slice())),
            ItemSource::Path(path) => Ok(Cow::Owned(fs::read(path)?)),
        }
    }
}

/// Outcome for a single file in a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileOutcome {
    /// Whether extraction succeeded.
    pub success: bool,

    /// Filename the outcome belongs to.
    pub filename: String,

    /// Extracted record, on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ExtractionRecord>,

    /// Error message, on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileOutcome {
    pub fn succeeded(filename: impl Into<String>, record: ExtractionRecord) -> Self {
        Self {
            success: true,
            filename: filename.into(),
            data: Some(record),
            error: None,
        }
    }

    pub fn failed(filename: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            filename: filename.into(),
            data: None,
            error: Some(error.into()),
        }
    }
}

/// File counts for a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}

/// Per-file outcomes of a batch, in input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// Document type every file was processed as.
    pub document_type: DocumentType,

    /// One outcome per input file.
    pub results: Vec<FileOutcome>,

    /// Outcome counts.
    pub summary: BatchSummary,
}

impl BatchReport {
    fn new(document_type: DocumentType, results: Vec<FileOutcome>) -> Self {
        let successful = results.iter().filter(|r| r.success).count();
        let summary = BatchSummary {
            total: results.len(),
            successful,
            failed: results.len() - successful,
        };

        Self {
            document_type,
            results,
            summary,
        }
    }

    /// No file in the batch succeeded.
    pub fn is_failure(&self) -> bool {
        self.summary.successful == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.results.iter().filter(|r| !r.success)
    }
}

/// Filter already-recognized fragments and run the extractor for `document_type`.
pub fn extract_fields(
    document_type: DocumentType,
    fragments: &[RecognizedFragment],
) -> ExtractionRecord {
    let extractor = extractor_for(document_type);
    let lines = extractor.confidence_filter().apply(fragments);

    debug!(
        "Kept {}/{} fragments above {}: {}",
        lines.len(),
        fragments.len(),
        extractor.confidence_threshold(),
        lines.preview(LOG_PREVIEW_CHARS)
    );

    extractor.extract(&lines)
}

/// Extraction pipeline around an injected recognition engine.
///
/// The engine is built once by the caller and only read afterwards.
pub struct DocumentPipeline<R: TextRecognizer> {
    recognizer: R,
}

impl<R: TextRecognizer> DocumentPipeline<R> {
    pub fn new(recognizer: R) -> Self {
        Self { recognizer }
    }

    /// See [`extract_fields`].
    pub fn extract_fragments(
        &self,
        document_type: DocumentType,
        fragments: &[RecognizedFragment],
    ) -> ExtractionRecord {
        extract_fields(document_type, fragments)
    }

    /// Recognize a decoded image and extract its fields.
    pub fn process_image(
        &self,
        document_type: DocumentType,
        image: &DynamicImage,
    ) -> Result<ExtractionRecord> {
        let fragments = self.recognizer.recognize(image)?;
        Ok(self.extract_fragments(document_type, &fragments))
    }

    /// Decode encoded image bytes (converted to RGB) and extract their fields.
    pub fn process_bytes(&self, document_type: DocumentType, bytes: &[u8]) -> Result<ExtractionRecord> {
        let image = image::load_from_memory(bytes)?;
        let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
        self.process_image(document_type, &rgb)
    }

    /// Process every file as `document_type`, in order.
    ///
    /// A failing file is recorded in its outcome and does not stop the rest.
    /// Fails up front only when there is nothing to process.
    pub fn process_batch(
        &self,
        document_type: DocumentType,
        items: &[BatchItem],
    ) -> std::result::Result<BatchReport, BatchError> {
        if items.is_empty() {
            return Err(BatchError::NoFiles);
        }
        if items.iter().all(|item| item.filename.is_empty()) {
            return Err(BatchError::NoFilenames);
        }

        info!(
            "Processing {} file(s) as {} (code {}) with {}",
            items.len(),
            document_type,
            document_type.code(),
            self.recognizer.name()
        );

        let results = items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let start = Instant::now();
                info!("Processing file {}/{}: {}", idx + 1, items.len(), item.filename);

                let outcome = item
                    .load()
                    .and_then(|bytes| self.process_bytes(document_type, &bytes));

                match outcome {
                    Ok(record) => {
                        info!(
                            name = %record.name,
                            dob = %record.date_of_birth,
                            gender = %record.gender,
                            elapsed_ms = start.elapsed().as_millis() as u64,
                            "Extraction complete for {}",
                            item.filename
                        );
                        FileOutcome::succeeded(&item.filename, record)
                    }
                    Err(e) => {
                        warn!("Failed to process {}: {}", item.filename, e);
                        FileOutcome::failed(&item.filename, format!("Processing error: {}", e))
                    }
                }
            })
            .collect();

        let report = BatchReport::new(document_type, results);

        info!(
            "Batch finished: {} successful, {} failed",
            report.summary.successful, report.summary.failed
        );

        Ok(report)
    }
}
