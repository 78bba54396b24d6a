/// Pixel rectangle relative to the top-left corner of the analyzed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaceInfo {
    pub bounds: BoundingBox,
    pub age: Option<u32>,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetectedObject {
    pub label: String,
    pub bounds: BoundingBox,
}

/// Result of a single scene analysis call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyzedImage {
    pub faces: Vec<FaceInfo>,
    pub objects: Vec<DetectedObject>,
}
