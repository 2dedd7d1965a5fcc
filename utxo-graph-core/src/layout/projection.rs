// Packing space -> viewport transform.
//
// One uniform scale (aspect preserved) plus an offset that centers the
// scaled bounding box. Recomputed for every draw since the viewport size is
// only known at draw time.

use serde::{Deserialize, Serialize};

use super::BoundingBox;
use crate::geometry::Point;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Same viewport with negative or non-finite sides replaced by zero.
    pub fn sanitized(&self) -> Viewport {
        let clamp = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Viewport { width: clamp(self.width), height: clamp(self.height) }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Projection {
    pub fn identity(scale: f64) -> Self {
        Self { scale, offset_x: 0.0, offset_y: 0.0 }
    }

    pub fn to_screen(&self, p: Point) -> Point {
        Point::new(p.x * self.scale + self.offset_x, p.y * self.scale + self.offset_y)
    }

    /// Inverse of `to_screen`. `None` for a zero scale.
    pub fn to_layout(&self, p: Point) -> Option<Point> {
        if self.scale == 0.0 || !self.scale.is_finite() {
            return None;
        }
        Some(Point::new((p.x - self.offset_x) / self.scale, (p.y - self.offset_y) / self.scale))
    }
}

/// Fit `bounds` into `viewport`, centered.
///
/// A zero-width (or zero-height) box is scaled by the other dimension alone;
/// a box with no extent at all uses `default_scale`.
pub fn project(bounds: &BoundingBox, viewport: Viewport, default_scale: f64) -> Projection {
    let viewport = viewport.sanitized();
    let w = bounds.width();
    let h = bounds.height();

    let fit = |available: f64, extent: f64| {
        (extent > 0.0 && extent.is_finite()).then(|| available / extent)
    };
    let scale = match (fit(viewport.width, w), fit(viewport.height, h)) {
        (Some(sx), Some(sy)) => sx.min(sy),
        (Some(sx), None) => sx,
        (None, Some(sy)) => sy,
        (None, None) => default_scale,
    };

    Projection {
        scale,
        offset_x: (viewport.width - w * scale) / 2.0 - bounds.min_x * scale,
        offset_y: (viewport.height - h * scale) / 2.0 - bounds.min_y * scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn square16() -> BoundingBox {
        BoundingBox { min_x: -8.0, max_x: 8.0, min_y: -8.0, max_y: 8.0 }
    }

    #[test]
    fn test_fit_square_into_wide_viewport() {
        let p = project(&square16(), Viewport::new(320.0, 160.0), 1.0);
        assert!(approx(p.scale, 10.0));
        // 160px of content centered in 320px
        let top_left = p.to_screen(Point::new(-8.0, -8.0));
        let bottom_right = p.to_screen(Point::new(8.0, 8.0));
        assert!(approx(top_left.x, 80.0) && approx(top_left.y, 0.0));
        assert!(approx(bottom_right.x, 240.0) && approx(bottom_right.y, 160.0));
    }

    #[test]
    fn test_round_trip() {
        let b = BoundingBox { min_x: -13.5, max_x: 41.0, min_y: -7.0, max_y: 22.25 };
        let p = project(&b, Viewport::new(640.0, 480.0), 1.0);
        let original = Point::new(3.25, -1.5);
        let back = p.to_layout(p.to_screen(original)).unwrap();
        assert!(approx(back.x, original.x));
        assert!(approx(back.y, original.y));
    }

    #[test]
    fn test_zero_height_uses_width() {
        let b = BoundingBox { min_x: 0.0, max_x: 10.0, min_y: 5.0, max_y: 5.0 };
        let p = project(&b, Viewport::new(100.0, 50.0), 1.0);
        assert!(approx(p.scale, 10.0));
        let c = p.to_screen(Point::new(5.0, 5.0));
        assert!(approx(c.x, 50.0) && approx(c.y, 25.0));
    }

    #[test]
    fn test_point_box_uses_default_scale() {
        let b = BoundingBox { min_x: 2.0, max_x: 2.0, min_y: 2.0, max_y: 2.0 };
        let p = project(&b, Viewport::new(100.0, 100.0), 3.0);
        assert_eq!(p.scale, 3.0);
        let c = p.to_screen(Point::new(2.0, 2.0));
        assert!(approx(c.x, 50.0) && approx(c.y, 50.0));
    }

    #[test]
    fn test_zero_viewport_is_finite() {
        let p = project(&square16(), Viewport::new(0.0, 0.0), 1.0);
        assert_eq!(p.scale, 0.0);
        assert!(p.offset_x.is_finite() && p.offset_y.is_finite());
        assert!(p.to_layout(Point::ORIGIN).is_none());
    }

    #[test]
    fn test_negative_viewport_clamped() {
        let p = project(&square16(), Viewport::new(-50.0, f64::NAN), 1.0);
        assert_eq!(p.scale, 0.0);
        assert!(p.offset_x.is_finite() && p.offset_y.is_finite());
    }
}
