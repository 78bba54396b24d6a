use docintake_vision::VisionError;
use thiserror::Error;

/// Hard failures of the intake pipeline.
///
/// "Nothing found" outcomes (no face, no person, no label) are not errors; they surface as
/// `false`, `None` or empty strings.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("vision service call failed: {0}")]
    Vision(#[from] VisionError),
    #[error("malformed position {position:?} for recognized word {word:?}")]
    MalformedPosition { word: String, position: String },
    #[error("image processing failed: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T, E = IntakeError> = std::result::Result<T, E>;
