//! In-process stand-ins for the vision service used by unit tests.

use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use docintake_vision::{AnalyzedImage, OcrWord, VisionError, VisionService};
use image::{ImageFormat, Rgb, RgbImage};

/// Returns canned results and counts how often each capability was called.
#[derive(Default)]
pub(crate) struct FakeVision {
    pub analysis: AnalyzedImage,
    pub words: Vec<OcrWord>,
    pub fail_scene: bool,
    pub fail_ocr: bool,
    pub scene_calls: AtomicUsize,
    pub ocr_calls: AtomicUsize,
}

impl FakeVision {
    pub fn with_analysis(analysis: AnalyzedImage) -> Self {
        Self {
            analysis,
            ..Default::default()
        }
    }

    pub fn with_words(words: &[(&str, &str)]) -> Self {
        Self {
            words: ocr_words(words),
            ..Default::default()
        }
    }
}

#[async_trait]
impl VisionService for FakeVision {
    async fn analyze_scene(&self, _image: &[u8]) -> Result<AnalyzedImage, VisionError> {
        self.scene_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_scene {
            return Err(VisionError::Status {
                status: 503,
                body: "scene analysis unavailable".into(),
            });
        }
        Ok(self.analysis.clone())
    }

    async fn recognize_text(&self, _image: &[u8]) -> Result<Vec<OcrWord>, VisionError> {
        self.ocr_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_ocr {
            return Err(VisionError::Status {
                status: 500,
                body: "ocr unavailable".into(),
            });
        }
        Ok(self.words.clone())
    }
}

pub(crate) fn ocr_words(words: &[(&str, &str)]) -> Vec<OcrWord> {
    words
        .iter()
        .map(|(text, position)| OcrWord {
            text: text.to_string(),
            position: position.to_string(),
        })
        .collect()
}

/// PNG of the given size where each pixel encodes its own coordinates.
pub(crate) fn coordinate_png(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 0]));
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .expect("encode test png");
    bytes.into_inner()
}
