//! User profile record and the photo gate applied before it is stored.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::Result;
use crate::extraction::{base64_bytes, DocumentIntake, ExtractedUserData};

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_PHOTO_LEN: usize = 255;
pub const MAX_DESCRIPTION_LEN: usize = 500;

pub const PHOTO_NOT_VALID: &str = "Photo not valid!";

/// A user profile as exchanged with clients.
///
/// `photo` is the stored asset's name or URL; `photo_content` carries the raw upload and
/// is never persisted with the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default, with = "base64_bytes")]
    pub photo_content: Option<Vec<u8>>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl UserProfile {
    /// Checks the record's field constraints. An empty list means the record is valid.
    pub fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        required(&mut violations, "firstName", &self.first_name);
        max_len(&mut violations, "firstName", &self.first_name, MAX_NAME_LEN);
        required(&mut violations, "lastName", &self.last_name);
        max_len(&mut violations, "lastName", &self.last_name, MAX_NAME_LEN);
        if let Some(photo) = &self.photo {
            max_len(&mut violations, "photo", photo, MAX_PHOTO_LEN);
        }
        if let Some(description) = &self.description {
            max_len(&mut violations, "description", description, MAX_DESCRIPTION_LEN);
        }

        violations
    }
}

fn required(violations: &mut Vec<FieldViolation>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        violations.push(FieldViolation {
            field,
            message: "is required".to_string(),
        });
    }
}

fn max_len(violations: &mut Vec<FieldViolation>, field: &'static str, value: &str, max: usize) {
    let len = value.chars().count();
    if len > max {
        violations.push(FieldViolation {
            field,
            message: format!("must be at most {max} characters, got {len}"),
        });
    }
}

/// The auto-fill response: names and cropped portrait, everything else left empty.
impl From<ExtractedUserData> for UserProfile {
    fn from(data: ExtractedUserData) -> Self {
        Self {
            first_name: data.first_name,
            last_name: data.last_name,
            photo_content: data.portrait_bytes,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoVerdict {
    Accepted,
    Rejected(&'static str),
}

impl PhotoVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, PhotoVerdict::Accepted)
    }
}

/// Decides whether a profile's uploaded photo may be stored.
pub struct PhotoGate<'a> {
    intake: &'a DocumentIntake<'a>,
}

impl<'a> PhotoGate<'a> {
    pub fn new(intake: &'a DocumentIntake<'a>) -> Self {
        Self { intake }
    }

    #[instrument(skip_all, fields(id = profile.id))]
    pub async fn check(&self, profile: &UserProfile) -> Result<PhotoVerdict> {
        let Some(content) = profile.photo_content.as_deref() else {
            info!("profile has no photo content");
            return Ok(PhotoVerdict::Rejected(PHOTO_NOT_VALID));
        };

        if self.intake.validate_photo(content).await? {
            Ok(PhotoVerdict::Accepted)
        } else {
            Ok(PhotoVerdict::Rejected(PHOTO_NOT_VALID))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IntakeError;
    use crate::testing::FakeVision;
    use docintake_vision::{AnalyzedImage, BoundingBox, FaceInfo};
    use std::sync::atomic::Ordering;

    fn profile() -> UserProfile {
        UserProfile {
            id: 7,
            first_name: "Mario".into(),
            last_name: "Rossi".into(),
            photo: Some("mario.png".into()),
            photo_content: Some(vec![0x89, 0x50]),
            description: Some("Sales".into()),
        }
    }

    fn with_face() -> FakeVision {
        FakeVision::with_analysis(AnalyzedImage {
            faces: vec![FaceInfo {
                bounds: BoundingBox::new(0, 0, 4, 4),
                age: None,
                gender: None,
            }],
            objects: vec![],
        })
    }

    #[test]
    fn test_valid_profile() {
        assert!(profile().validate().is_empty());
    }

    #[test]
    fn test_missing_names() {
        let mut p = profile();
        p.first_name = "  ".into();
        p.last_name.clear();
        let fields: Vec<_> = p.validate().into_iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["firstName", "lastName"]);
    }

    #[test]
    fn test_length_limits() {
        let mut p = profile();
        p.first_name = "a".repeat(MAX_NAME_LEN);
        assert!(p.validate().is_empty());

        p.first_name = "a".repeat(MAX_NAME_LEN + 1);
        p.photo = Some("p".repeat(MAX_PHOTO_LEN + 1));
        p.description = Some("d".repeat(MAX_DESCRIPTION_LEN + 1));
        let fields: Vec<_> = p.validate().into_iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["firstName", "photo", "description"]);
    }

    #[test]
    fn test_from_extracted_data() {
        let p = UserProfile::from(ExtractedUserData {
            portrait_bytes: Some(vec![9]),
            first_name: "MARIO".into(),
            last_name: "ROSSI".into(),
        });
        assert_eq!(p.id, 0);
        assert_eq!(p.first_name, "MARIO");
        assert_eq!(p.last_name, "ROSSI");
        assert_eq!(p.photo_content, Some(vec![9]));
        assert_eq!(p.photo, None);
    }

    #[test]
    fn test_json_round_trip_uses_camel_case() {
        let json = serde_json::to_value(profile()).unwrap();
        assert_eq!(json["firstName"], "Mario");
        assert_eq!(json["photoContent"], "iVA=");
        let back: UserProfile = serde_json::from_value(json).unwrap();
        assert_eq!(back, profile());
    }

    #[tokio::test]
    async fn test_gate_accepts_face() {
        let vision = with_face();
        let intake = DocumentIntake::new(&vision);
        let verdict = PhotoGate::new(&intake).check(&profile()).await.unwrap();
        assert!(verdict.is_accepted());
    }

    #[tokio::test]
    async fn test_gate_rejects_faceless_photo() {
        let vision = FakeVision::default();
        let intake = DocumentIntake::new(&vision);
        let verdict = PhotoGate::new(&intake).check(&profile()).await.unwrap();
        assert_eq!(verdict, PhotoVerdict::Rejected(PHOTO_NOT_VALID));
    }

    #[tokio::test]
    async fn test_gate_rejects_missing_content_without_calling_service() {
        let vision = with_face();
        let intake = DocumentIntake::new(&vision);
        let mut p = profile();
        p.photo_content = None;
        let verdict = PhotoGate::new(&intake).check(&p).await.unwrap();
        assert!(!verdict.is_accepted());
        assert_eq!(vision.scene_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_gate_propagates_service_failure() {
        let vision = FakeVision {
            fail_scene: true,
            ..Default::default()
        };
        let intake = DocumentIntake::new(&vision);
        let result = PhotoGate::new(&intake).check(&profile()).await;
        assert!(matches!(result, Err(IntakeError::Vision(_))));
    }
}
