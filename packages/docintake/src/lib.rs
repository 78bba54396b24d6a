//! # docintake
//!
//! Intake pipeline for scanned identity documents.
//!
//! ## Features
//!
//! - **Photo validation**: accept a profile photo only when the vision service finds a face
//! - **Portrait cropping**: cut the detected person out of a scanned document as a PNG
//! - **Name extraction**: read first and last name by pairing the `NOME` / `COGNOME` labels
//!   with the nearest printed word
//!
//! The vision service itself sits behind [`VisionService`]; use [`AzureVisionClient`] for
//! a live endpoint or [`ReplayVisionService`] for recorded responses.
//!
//! ## Quick Start
//!
//! ```ignore
//! use docintake::prelude::*;
//!
//! let vision = AzureVisionClient::new(VisionConfig::from_env()?)?;
//! let intake = DocumentIntake::new(&vision);
//!
//! let scan = std::fs::read("id-card.jpg")?;
//! let data = intake.extract_user_data(&scan).await?;
//! println!("{} {}", data.first_name, data.last_name);
//! ```

pub mod error;
pub mod extraction;
pub mod face_validator;
pub mod geometry;
pub mod nearest_label;
pub mod person_region;
pub mod profile;
pub mod text_recognizer;

#[cfg(test)]
mod testing;

pub use docintake_vision::{
    AnalyzedImage, AzureVisionClient, BoundingBox, DetectedObject, FaceInfo, OcrWord,
    ReplayVisionService, VisionConfig, VisionError, VisionService,
};
pub use error::{IntakeError, Result};
pub use extraction::{resolve_label, DocumentIntake, ExtractedUserData, NameLabels};
pub use face_validator::{has_face, FaceValidator};
pub use geometry::{clip_to_image, squared_distance, AnchorPoint};
pub use nearest_label::nearest_text;
pub use person_region::{extract_person_region, PERSON_LABEL};
pub use profile::{FieldViolation, PhotoGate, PhotoVerdict, UserProfile};
pub use text_recognizer::{normalize_words, RecognizedWord, TextRecognizer};

/// Prelude module for convenient imports
///
/// ```ignore
/// use docintake::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        extract_person_region, has_face, nearest_text, AnalyzedImage, AzureVisionClient,
        DocumentIntake, ExtractedUserData, FaceValidator, IntakeError, NameLabels, PhotoGate,
        PhotoVerdict, RecognizedWord, ReplayVisionService, TextRecognizer, UserProfile,
        VisionConfig, VisionService,
    };
}
