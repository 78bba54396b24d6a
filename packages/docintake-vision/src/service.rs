use async_trait::async_trait;
use thiserror::Error;

use crate::analysis::AnalyzedImage;

/// A printed word as reported by the OCR capability, before any normalization.
///
/// `position` is the service's comma-separated coordinate string (`"x,y,w,h"`).
#[derive(Debug, Clone, PartialEq)]
pub struct OcrWord {
    pub text: String,
    pub position: String,
}

#[derive(Debug, Error)]
pub enum VisionError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("vision service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The two capabilities the intake pipeline needs from a vision backend.
///
/// Implementations must report "nothing found" as empty sequences, never as errors.
#[async_trait]
pub trait VisionService: Send + Sync {
    /// Scene analysis, with at least face and object detection enabled.
    async fn analyze_scene(&self, image: &[u8]) -> Result<AnalyzedImage, VisionError>;

    /// Printed-text OCR flattened in region, line, word order.
    async fn recognize_text(&self, image: &[u8]) -> Result<Vec<OcrWord>, VisionError>;
}
