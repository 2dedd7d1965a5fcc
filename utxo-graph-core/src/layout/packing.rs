// Incremental circle packing.
//
// Circles are placed one at a time, largest first:
// 1. The first circle sits at the origin.
// 2. The second touches it on the positive x-axis.
// 3. Every later circle touches two placed circles and overlaps none.
//    Candidates come from pairwise tangency (two-circle intersection of the
//    pair's radii grown by the new radius). Among valid candidates the one
//    closest to the running center of mass wins.
//
// Each placed circle keeps its distance to every other placed circle, so
// pairs that are too far apart for a new circle to touch both can be skipped
// without recomputing distances.

use std::cmp::Ordering;

use super::{compute_bounds, GraphConfig, PackingResult, PlacedCircle, Utxo};
use crate::geometry::{circle_intersections, distance, Point, EPSILON};

/// Radius-weighted running average of placed centers.
#[derive(Debug, Copy, Clone, Default)]
struct CenterOfMass {
    center: Point,
    weight: f64,
}

impl CenterOfMass {
    fn add(&mut self, point: Point, radius: f64) {
        let weight = self.weight + radius;
        if weight <= 0.0 {
            return;
        }
        self.center = Point::new(
            (self.center.x * self.weight + point.x * radius) / weight,
            (self.center.y * self.weight + point.y * radius) / weight,
        );
        self.weight = weight;
    }
}

/// A valid tangent position with its distance to each placed circle.
#[derive(Debug, Clone)]
struct Candidate {
    point: Point,
    distances: Vec<f64>,
}

/// How a circle ended up where it is.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Placement {
    Tangent,
    Fallback,
}

/// Pack `items` into non-overlapping circles.
///
/// Only the `cfg.max_circles` largest outputs are placed. Items with equal
/// value keep their input order.
pub fn pack(items: &[Utxo], cfg: &GraphConfig) -> PackingResult {
    let mut order: Vec<&Utxo> = items.iter().collect();
    // Stable sort: equal values stay in input order
    order.sort_by(|a, b| b.value.cmp(&a.value));
    if order.len() > cfg.max_circles {
        tracing::debug!(
            "packing: keeping {} of {} outputs (dropped={})",
            cfg.max_circles,
            order.len(),
            order.len() - cfg.max_circles
        );
        order.truncate(cfg.max_circles);
    }

    if order.is_empty() {
        return PackingResult::default();
    }

    let mut circles: Vec<PlacedCircle> = Vec::with_capacity(order.len());
    let mut mass = CenterOfMass::default();
    let mut fallbacks = 0usize;

    for item in order {
        if place_next(&mut circles, &mut mass, item) == Placement::Fallback {
            fallbacks += 1;
        }
    }

    let bounds = compute_bounds(&circles);
    tracing::debug!(
        "packing: placed {} circles, fallbacks={}, bounds={:?}",
        circles.len(),
        fallbacks,
        bounds
    );

    PackingResult { circles, bounds }
}

/// Place one more circle for `item` and fold it into the center of mass.
fn place_next(
    circles: &mut Vec<PlacedCircle>,
    mass: &mut CenterOfMass,
    item: &Utxo,
) -> Placement {
    let radius = (item.value as f64).sqrt();
    let mut placement = Placement::Tangent;
    let candidate = match circles.len() {
        0 => Candidate { point: Point::ORIGIN, distances: Vec::new() },
        1 => {
            let first = &circles[0];
            let point = Point::new(first.radius + radius, 0.0);
            Candidate { point, distances: vec![distance(first.center, point)] }
        }
        _ => best_candidate(circles, radius, mass.center).unwrap_or_else(|| {
            placement = Placement::Fallback;
            tracing::warn!(
                "packing: no tangent position for circle {} (r={:.2}), placing at origin",
                circles.len(),
                radius
            );
            fallback_candidate(circles)
        }),
    };

    let center = candidate.point;
    place(circles, item, center, radius, candidate.distances);
    mass.add(center, radius);
    placement
}

/// The origin, with real distances so every row keeps its full length.
fn fallback_candidate(circles: &[PlacedCircle]) -> Candidate {
    let distances = circles.iter().map(|c| distance(c.center, Point::ORIGIN)).collect();
    Candidate { point: Point::ORIGIN, distances }
}

/// Append a circle and grow every distance row by one entry.
fn place(
    circles: &mut Vec<PlacedCircle>,
    item: &Utxo,
    center: Point,
    radius: f64,
    mut distances: Vec<f64>,
) {
    debug_assert_eq!(distances.len(), circles.len());
    for (placed, d) in circles.iter_mut().zip(&distances) {
        placed.distances.push(*d);
    }
    distances.push(0.0);
    circles.push(PlacedCircle { center, radius, item: item.clone(), distances });
}

/// The valid tangent position closest to `anchor`, if any.
fn best_candidate(circles: &[PlacedCircle], radius: f64, anchor: Point) -> Option<Candidate> {
    let mut best: Option<(f64, Candidate)> = None;

    for (i, c1) in circles.iter().enumerate() {
        for (j, c2) in circles.iter().enumerate().skip(i + 1) {
            // Too far apart for one circle to touch both
            if c1.distances[j] > c1.radius + c2.radius + 2.0 * radius {
                continue;
            }

            let Some(points) =
                circle_intersections(c1.center, c1.radius + radius, c2.center, c2.radius + radius)
            else {
                continue;
            };

            for point in points {
                // Scoring is cheap, the overlap scan is not
                let score = distance(point, anchor);
                if let Some((best_score, _)) = &best {
                    if score.partial_cmp(best_score) != Some(Ordering::Less) {
                        continue;
                    }
                }
                if let Some(distances) = check_candidate(circles, point, radius, i, j) {
                    best = Some((score, Candidate { point, distances }));
                }
            }
        }
    }

    best.map(|(_, c)| c)
}

/// Distances from `point` to every placed circle, or `None` if a circle of
/// `radius` there would overlap a circle other than the tangent pair.
fn check_candidate(
    circles: &[PlacedCircle],
    point: Point,
    radius: f64,
    i: usize,
    j: usize,
) -> Option<Vec<f64>> {
    if !point.x.is_finite() || !point.y.is_finite() {
        return None;
    }
    // Overlap scan first, allocation only for survivors
    for (k, other) in circles.iter().enumerate() {
        let reach = radius + other.radius;
        if k != i && k != j && distance(point, other.center) + overlap_slack(reach) < reach {
            return None;
        }
    }
    Some(circles.iter().map(|c| distance(point, c.center)).collect())
}

/// Rounding allowance for a touching test at the given scale.
fn overlap_slack(reach: f64) -> f64 {
    EPSILON * reach.max(1.0)
}
