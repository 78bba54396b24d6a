use async_trait::async_trait;
use tracing::debug;

use crate::analysis::AnalyzedImage;
use crate::azure::wire;
use crate::service::{OcrWord, VisionError, VisionService};

/// Serves recorded vision service responses instead of calling the network.
///
/// Responses use the same JSON format as the live REST API and go through the same
/// decoding, so a captured response replays exactly as it was received. The image
/// bytes passed to each call are ignored.
#[derive(Debug, Clone, Default)]
pub struct ReplayVisionService {
    scene: Option<String>,
    ocr: Option<String>,
}

impl ReplayVisionService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scene(mut self, json: impl Into<String>) -> Self {
        self.scene = Some(json.into());
        self
    }

    pub fn with_ocr(mut self, json: impl Into<String>) -> Self {
        self.ocr = Some(json.into());
        self
    }
}

#[async_trait]
impl VisionService for ReplayVisionService {
    async fn analyze_scene(&self, _image: &[u8]) -> Result<AnalyzedImage, VisionError> {
        let body = self
            .scene
            .as_deref()
            .ok_or(VisionError::Unsupported("no recorded scene analysis"))?;
        debug!("replaying recorded scene analysis");
        wire::parse_analysis(body)
    }

    async fn recognize_text(&self, _image: &[u8]) -> Result<Vec<OcrWord>, VisionError> {
        let body = self
            .ocr
            .as_deref()
            .ok_or(VisionError::Unsupported("no recorded text recognition"))?;
        debug!("replaying recorded text recognition");
        wire::parse_ocr(body)
    }
}
