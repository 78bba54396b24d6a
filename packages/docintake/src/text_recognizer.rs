//! Turns raw OCR output into normalized, positioned words.

use docintake_vision::{OcrWord, VisionService};
use tracing::{debug, instrument};

use crate::error::{IntakeError, Result};
use crate::geometry::AnchorPoint;

/// A recognized word with trimmed, upper-cased text and at least two finite coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizedWord {
    text: String,
    position: Vec<f64>,
}

impl RecognizedWord {
    /// Normalizes `text` and checks that `position` holds at least one finite coordinate pair.
    pub fn new(text: &str, position: Vec<f64>) -> Result<Self> {
        if position.len() < 2 || position.iter().any(|c| !c.is_finite()) {
            return Err(IntakeError::MalformedPosition {
                word: text.to_string(),
                position: format!("{position:?}"),
            });
        }
        Ok(Self {
            text: normalize_text(text),
            position,
        })
    }

    /// Parses the service's comma-separated position string.
    pub fn from_ocr(word: &OcrWord) -> Result<Self> {
        let malformed = || IntakeError::MalformedPosition {
            word: word.text.clone(),
            position: word.position.clone(),
        };

        let position = word
            .position
            .split(',')
            .map(|part| part.trim().parse::<f64>().map_err(|_| malformed()))
            .collect::<Result<Vec<_>>>()?;

        Self::new(&word.text, position).map_err(|_| malformed())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> &[f64] {
        &self.position
    }

    pub fn anchor(&self) -> AnchorPoint {
        AnchorPoint::new(self.position[0], self.position[1])
    }
}

pub fn normalize_text(text: &str) -> String {
    text.trim().to_uppercase()
}

/// Normalizes a whole OCR result. One bad position fails the lot.
pub fn normalize_words(words: &[OcrWord]) -> Result<Vec<RecognizedWord>> {
    words.iter().map(RecognizedWord::from_ocr).collect()
}

pub struct TextRecognizer<'a> {
    vision: &'a dyn VisionService,
}

impl<'a> TextRecognizer<'a> {
    pub fn new(vision: &'a dyn VisionService) -> Self {
        Self { vision }
    }

    /// One OCR call, flattened and normalized in the service's reading order.
    #[instrument(skip(self, image), fields(image_len = image.len()))]
    pub async fn recognize(&self, image: &[u8]) -> Result<Vec<RecognizedWord>> {
        let raw = self.vision.recognize_text(image).await?;
        let words = normalize_words(&raw)?;
        debug!(words = words.len(), "text recognized");
        Ok(words)
    }
}
