//! Pure Rust OCR engine wrapper using `pure-onnx-ocr`.

use std::time::Instant;

use image::{DynamicImage, GenericImageView};
use tracing::{debug, info};

use crate::error::RecognitionError;
use crate::models::config::OcrConfig;

use super::{RecognizedFragment, TextRecognizer};

/// Recognition engine backed by `pure-onnx-ocr` (PaddleOCR models, no external runtime).
pub struct PureOcrEngine {
    engine: pure_onnx_ocr::engine::OcrEngine,
    keep_unk: bool,
}

impl PureOcrEngine {
    /// Load the detection model, recognition model and dictionary named in `config`.
    pub fn from_config(config: &OcrConfig) -> Result<Self, RecognitionError> {
        let det_path = config.detection_path();
        let rec_path = config.recognition_path();
        let dict_path = config.dictionary_path();

        for path in [&det_path, &rec_path, &dict_path] {
            if !path.exists() {
                return Err(RecognitionError::ModelLoad(format!(
                    "missing model file: {}",
                    path.display()
                )));
            }
        }

        let engine = pure_onnx_ocr::engine::OcrEngineBuilder::new()
            .det_model_path(&det_path)
            .rec_model_path(&rec_path)
            .dictionary_path(&dict_path)
            .build()
            .map_err(|e| RecognitionError::ModelLoad(format!("pure-onnx-ocr: {}", e)))?;

        info!("Loaded pure-onnx-ocr engine from {}", config.model_dir.display());

        Ok(Self {
            engine,
            keep_unk: config.keep_unk,
        })
    }
}

impl TextRecognizer for PureOcrEngine {
    fn recognize(&self, image: &DynamicImage) -> Result<Vec<RecognizedFragment>, RecognitionError> {
        let start = Instant::now();
        let (width, height) = image.dimensions();

        if width == 0 || height == 0 {
            return Err(RecognitionError::InvalidImage(format!(
                "empty image ({}x{})",
                width, height
            )));
        }

        debug!("Recognizing image: {}x{}", width, height);

        let results = self
            .engine
            .run_from_image(image)
            .map_err(|e| RecognitionError::Recognition(format!("pure-onnx-ocr: {}", e)))?;

        let fragments: Vec<RecognizedFragment> = results
            .iter()
            .map(|r| {
                let text = if self.keep_unk {
                    r.text.clone()
                } else {
                    r.text.replace("[UNK]", " ")
                };
                RecognizedFragment::new(text, r.confidence)
            })
            .collect();

        info!(
            "OCR complete: {} fragments in {}ms",
            fragments.len(),
            start.elapsed().as_millis()
        );

        Ok(fragments)
    }

    fn name(&self) -> &str {
        "pure-onnx-ocr"
    }
}
