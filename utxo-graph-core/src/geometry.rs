// Plane geometry used by the circle packer.
//
// Everything works on a single point type with named fields. Degenerate
// configurations come back as `None` instead of NaN coordinates.

use serde::{Deserialize, Serialize};

/// Slack allowed when comparing sums of radii against center distances.
pub const EPSILON: f64 = 1e-9;

#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        distance(*self, *other)
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Intersection points of the circle around `c1` with radius `r1` and the
/// circle around `c2` with radius `r2`.
///
/// Returns `None` when the centers coincide, when the circles are too far
/// apart, or when one lies inside the other. Circles that only touch yield
/// the touching point twice.
pub fn circle_intersections(c1: Point, r1: f64, c2: Point, r2: f64) -> Option<[Point; 2]> {
    let d = distance(c1, c2);
    if !d.is_finite() || d < EPSILON {
        return None;
    }

    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    let mut h2 = r1 * r1 - a * a;
    if h2 < 0.0 {
        // Rounding can push an exact touch just below zero.
        if h2 > -EPSILON * r1.max(1.0) * r1.max(1.0) {
            h2 = 0.0;
        } else {
            return None;
        }
    }
    let h = h2.sqrt();
    if !h.is_finite() {
        return None;
    }

    let ux = (c2.x - c1.x) / d;
    let uy = (c2.y - c1.y) / d;
    let base = Point::new(c1.x + a * ux, c1.y + a * uy);

    Some([
        Point::new(base.x + h * uy, base.y - h * ux),
        Point::new(base.x - h * uy, base.y + h * ux),
    ])
}
