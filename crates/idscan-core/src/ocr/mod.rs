//! Text recognition seam.
//!
//! The extraction pipeline only needs recognized text fragments with their
//! confidence scores. Engines implement [`TextRecognizer`] and are handed to
//! the pipeline at construction time.

#[cfg(feature = "native")]
mod pure_engine;

#[cfg(feature = "native")]
pub use pure_engine::PureOcrEngine;

use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::error::RecognitionError;

/// One unit of recognized text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedFragment {
    /// Recognized text content.
    pub text: String,

    /// Recognition confidence score (0.0 - 1.0).
    pub confidence: f32,
}

impl RecognizedFragment {
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

/// A text recognition engine.
///
/// Fragments are returned in engine order, which need not match the visual
/// top-to-bottom order of the document.
pub trait TextRecognizer {
    /// Recognize every text fragment in an image.
    fn recognize(&self, image: &DynamicImage) -> Result<Vec<RecognizedFragment>, RecognitionError>;

    /// Short engine name for logs and health reports.
    fn name(&self) -> &str {
        "unnamed"
    }
}

impl<R: TextRecognizer + ?Sized> TextRecognizer for Box<R> {
    fn recognize(&self, image: &DynamicImage) -> Result<Vec<RecognizedFragment>, RecognitionError> {
        (**self).recognize(image)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
