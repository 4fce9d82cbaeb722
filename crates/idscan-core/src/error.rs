//! Error types for the idscan-core library.

use thiserror::Error;

/// Main error type for the idscan library.
#[derive(Error, Debug)]
pub enum IdScanError {
    /// Text recognition error.
    #[error("recognition error: {0}")]
    Recognition(#[from] RecognitionError),

    /// Image decoding error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Reading an input file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by a text recognition engine.
#[derive(Error, Debug)]
pub enum RecognitionError {
    /// Failed to load OCR models.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// Invalid image format or dimensions.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Errors rejecting a batch before any file is processed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// The batch contained no files.
    #[error("No images uploaded")]
    NoFiles,

    /// Every file in the batch had an empty filename.
    #[error("No files selected")]
    NoFilenames,
}

/// Result type for the idscan library.
pub type Result<T> = std::result::Result<T, IdScanError>;
