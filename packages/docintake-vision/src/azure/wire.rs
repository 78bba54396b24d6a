//! JSON shapes returned by the Computer Vision REST API and their
//! translation into the crate's own records.

use serde::Deserialize;

use crate::analysis::{AnalyzedImage, BoundingBox, DetectedObject, FaceInfo};
use crate::service::{OcrWord, VisionError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisResponse {
    #[serde(default)]
    faces: Vec<FaceDescription>,
    #[serde(default)]
    objects: Vec<ObjectDescription>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FaceDescription {
    face_rectangle: FaceRectangle,
    #[serde(default)]
    age: Option<u32>,
    #[serde(default)]
    gender: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FaceRectangle {
    left: u32,
    top: u32,
    width: u32,
    height: u32,
}

#[derive(Debug, Deserialize)]
struct ObjectDescription {
    rectangle: ObjectRectangle,
    object: String,
}

#[derive(Debug, Deserialize)]
struct ObjectRectangle {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

#[derive(Debug, Deserialize)]
struct OcrResponse {
    #[serde(default)]
    regions: Vec<OcrRegion>,
}

#[derive(Debug, Deserialize)]
struct OcrRegion {
    #[serde(default)]
    lines: Vec<OcrLine>,
}

#[derive(Debug, Deserialize)]
struct OcrLine {
    #[serde(default)]
    words: Vec<OcrWordDescription>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OcrWordDescription {
    bounding_box: String,
    text: String,
}

pub(crate) fn parse_analysis(body: &str) -> Result<AnalyzedImage, VisionError> {
    let response: AnalysisResponse = serde_json::from_str(body)?;

    let faces = response
        .faces
        .into_iter()
        .map(|face| FaceInfo {
            bounds: BoundingBox::new(
                face.face_rectangle.left,
                face.face_rectangle.top,
                face.face_rectangle.width,
                face.face_rectangle.height,
            ),
            age: face.age,
            gender: face.gender,
        })
        .collect();

    let objects = response
        .objects
        .into_iter()
        .map(|object| DetectedObject {
            label: object.object,
            bounds: BoundingBox::new(
                object.rectangle.x,
                object.rectangle.y,
                object.rectangle.w,
                object.rectangle.h,
            ),
        })
        .collect();

    Ok(AnalyzedImage { faces, objects })
}

pub(crate) fn parse_ocr(body: &str) -> Result<Vec<OcrWord>, VisionError> {
    let response: OcrResponse = serde_json::from_str(body)?;

    Ok(response
        .regions
        .into_iter()
        .flat_map(|region| region.lines)
        .flat_map(|line| line.words)
        .map(|word| OcrWord {
            text: word.text,
            position: word.bounding_box,
        })
        .collect())
}
