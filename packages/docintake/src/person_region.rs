//! Crops the portrait out of a scanned document using the scene analysis result.

use std::io::Cursor;

use docintake_vision::AnalyzedImage;
use image::ImageFormat;
use tracing::{debug, instrument, warn};

use crate::error::Result;
use crate::geometry::clip_to_image;

pub const PERSON_LABEL: &str = "person";

/// Returns the PNG-encoded crop of the first detected object when it is a person.
///
/// Only `analysis.objects[0]` is looked at. A box that overhangs the image is clipped to
/// the image bounds; a box entirely outside it yields `None`. `image` must be the same
/// bytes `analysis` was computed from.
#[instrument(skip_all, fields(objects = analysis.objects.len()))]
pub fn extract_person_region(analysis: &AnalyzedImage, image: &[u8]) -> Result<Option<Vec<u8>>> {
    let Some(first) = analysis.objects.first() else {
        debug!("no objects detected");
        return Ok(None);
    };
    if first.label != PERSON_LABEL {
        debug!(label = %first.label, "first detected object is not a person");
        return Ok(None);
    }

    let source = image::load_from_memory(image)?;
    let Some(region) = clip_to_image(&first.bounds, source.width(), source.height()) else {
        warn!(
            bounds = ?first.bounds,
            width = source.width(),
            height = source.height(),
            "person region lies outside the image"
        );
        return Ok(None);
    };
    if region != first.bounds {
        warn!(bounds = ?first.bounds, clipped = ?region, "person region clipped to image bounds");
    }

    let portrait = source.crop_imm(region.x, region.y, region.width, region.height);
    let mut encoded = Cursor::new(Vec::new());
    portrait.write_to(&mut encoded, ImageFormat::Png)?;
    Ok(Some(encoded.into_inner()))
}
