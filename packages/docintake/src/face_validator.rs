//! Decides whether an uploaded image is acceptable as a profile portrait.

use docintake_vision::{AnalyzedImage, VisionService};
use tracing::{info, instrument};

use crate::error::Result;

/// True when scene analysis reported at least one face. Detected objects are irrelevant.
pub fn has_face(analysis: &AnalyzedImage) -> bool {
    !analysis.faces.is_empty()
}

/// Portrait gate backed by the vision service's face detection.
pub struct FaceValidator<'a> {
    vision: &'a dyn VisionService,
}

impl<'a> FaceValidator<'a> {
    pub fn new(vision: &'a dyn VisionService) -> Self {
        Self { vision }
    }

    /// Runs one scene analysis and reports whether it found a face.
    ///
    /// Service failures are returned as errors, never reported as "no face".
    #[instrument(skip(self, image), fields(image_len = image.len()))]
    pub async fn validate(&self, image: &[u8]) -> Result<bool> {
        let analysis = self.vision.analyze_scene(image).await?;
        let valid = has_face(&analysis);
        info!(faces = analysis.faces.len(), valid, "photo validated");
        Ok(valid)
    }
}
