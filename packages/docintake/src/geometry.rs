//! Pixel rectangles and point distances shared by the cropping and matching steps.

pub use docintake_vision::BoundingBox;

/// Representative location of a recognized word: the first coordinate pair of its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPoint {
    pub x: f64,
    pub y: f64,
}

impl AnchorPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Squared Euclidean distance. Ordering by it is the same as ordering by true distance.
pub fn squared_distance(a: AnchorPoint, b: AnchorPoint) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Intersects `rect` with a `width` x `height` image, returning `None` when nothing is left.
pub fn clip_to_image(rect: &BoundingBox, width: u32, height: u32) -> Option<BoundingBox> {
    let left = rect.x.min(width);
    let top = rect.y.min(height);
    let right = rect.right().min(width);
    let bottom = rect.bottom().min(height);

    if right <= left || bottom <= top {
        return None;
    }

    Some(BoundingBox::new(left, top, right - left, bottom - top))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squared_distance() {
        let a = AnchorPoint::new(10.0, 10.0);
        assert_eq!(squared_distance(a, AnchorPoint::new(12.0, 11.0)), 5.0);
        assert_eq!(squared_distance(a, AnchorPoint::new(50.0, 50.0)), 3200.0);
        assert_eq!(squared_distance(a, a), 0.0);
    }

    #[test]
    fn test_squared_distance_is_symmetric() {
        let a = AnchorPoint::new(-3.5, 7.0);
        let b = AnchorPoint::new(4.0, -1.25);
        assert_eq!(squared_distance(a, b), squared_distance(b, a));
    }

    #[test]
    fn test_clip_inside_is_unchanged() {
        let rect = BoundingBox::new(10, 20, 30, 40);
        assert_eq!(clip_to_image(&rect, 100, 100), Some(rect));
    }

    #[test]
    fn test_clip_overhanging_edges() {
        let rect = BoundingBox::new(80, 90, 50, 50);
        assert_eq!(
            clip_to_image(&rect, 100, 120),
            Some(BoundingBox::new(80, 90, 20, 30))
        );
    }

    #[test]
    fn test_clip_fully_outside() {
        let rect = BoundingBox::new(150, 10, 20, 20);
        assert_eq!(clip_to_image(&rect, 100, 100), None);
    }

    #[test]
    fn test_clip_degenerate_box() {
        let rect = BoundingBox::new(10, 10, 0, 5);
        assert_eq!(clip_to_image(&rect, 100, 100), None);
    }
}
