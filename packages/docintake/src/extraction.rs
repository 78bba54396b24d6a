//! End-to-end "read the user's data off a scanned document" operation.

use docintake_vision::VisionService;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::{IntakeError, Result};
use crate::face_validator::FaceValidator;
use crate::nearest_label::nearest_text;
use crate::person_region::extract_person_region;
use crate::text_recognizer::{normalize_text, RecognizedWord, TextRecognizer};

/// What could be read off a document. Missing pieces are `None` / empty, not errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedUserData {
    #[serde(default, with = "base64_bytes")]
    pub portrait_bytes: Option<Vec<u8>>,
    pub first_name: String,
    pub last_name: String,
}

/// Prefixes identifying the name labels printed on the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameLabels {
    pub first_name: String,
    pub last_name: String,
}

impl Default for NameLabels {
    fn default() -> Self {
        Self {
            first_name: "NOME".to_string(),
            last_name: "COGNOME".to_string(),
        }
    }
}

/// The intake pipeline, bound to one shared vision service.
pub struct DocumentIntake<'a> {
    vision: &'a dyn VisionService,
    labels: NameLabels,
}

impl<'a> DocumentIntake<'a> {
    pub fn new(vision: &'a dyn VisionService) -> Self {
        Self {
            vision,
            labels: NameLabels::default(),
        }
    }

    pub fn with_labels(mut self, labels: NameLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn labels(&self) -> &NameLabels {
        &self.labels
    }

    /// Face check used by the profile create/update flow. No cropping, no OCR.
    pub async fn validate_photo(&self, image: &[u8]) -> Result<bool> {
        FaceValidator::new(self.vision).validate(image).await
    }

    /// Crops the portrait and reads first and last name from a scanned document.
    ///
    /// Scene analysis and OCR run concurrently; if either fails the other is dropped and
    /// the error is returned. Dropping the returned future cancels both calls.
    #[instrument(skip(self, image), fields(image_len = image.len()))]
    pub async fn extract_user_data(&self, image: &[u8]) -> Result<ExtractedUserData> {
        let recognizer = TextRecognizer::new(self.vision);
        let (analysis, words) = tokio::try_join!(
            async {
                self.vision
                    .analyze_scene(image)
                    .await
                    .map_err(IntakeError::from)
            },
            recognizer.recognize(image),
        )?;

        let portrait_bytes = extract_person_region(&analysis, image)?;
        let first_name = resolve_label(&words, &self.labels.first_name);
        let last_name = resolve_label(&words, &self.labels.last_name);

        info!(
            portrait = portrait_bytes.is_some(),
            first_name = !first_name.is_empty(),
            last_name = !last_name.is_empty(),
            "user data extracted"
        );

        Ok(ExtractedUserData {
            portrait_bytes,
            first_name,
            last_name,
        })
    }
}

/// Value printed nearest to the first word starting with `prefix`, or `""`.
///
/// `prefix` is normalized like the words. Prefix match is intentional: "NOME" also
/// matches "NOMEFILE".
pub fn resolve_label(words: &[RecognizedWord], prefix: &str) -> String {
    let prefix = normalize_text(prefix);
    let prefix = prefix.as_str();
    let Some(label) = words.iter().find(|word| word.text().starts_with(prefix)) else {
        debug!(prefix, "label not found");
        return String::new();
    };

    match nearest_text(words, label) {
        Some(text) => {
            debug!(prefix, value = text, "label resolved");
            text.to_string()
        }
        None => {
            debug!(prefix, "label has no neighbouring text");
            String::new()
        }
    }
}

/// Serializes optional binary as a base64 string, or `null`.
pub(crate) mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        match bytes {
            Some(bytes) => serializer.serialize_some(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|encoded| STANDARD.decode(encoded).map_err(serde::de::Error::custom))
            .transpose()
    }
}
