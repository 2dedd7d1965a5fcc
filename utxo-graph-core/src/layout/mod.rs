// Circle layout for a set of UTXOs.
//
// Goals:
// - Deterministic: no randomness, ties broken by input order
// - Area proportional to value (radius = sqrt(value))
// - No overlap between placed circles
// - Stateless: every call starts from scratch, no state survives a call
//
// Submodules:
// - packing: incremental tangent-placement engine
// - projection: bbox -> viewport transform
//
// Output:
// - PackingResult with placed circles (placement order) + bounding box.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

mod packing;
mod projection;

pub use packing::pack;
pub use projection::{project, Projection, Viewport};

/// An unspent transaction output, the unit being laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utxo {
    pub txid: String,
    pub vout: u32,
    /// Amount in satoshis. Zero-valued outputs must be filtered by the caller.
    pub value: u64,
    #[serde(default = "default_confirmed")]
    pub confirmed: bool,
}

fn default_confirmed() -> bool {
    true
}

impl Utxo {
    pub fn new(txid: impl Into<String>, vout: u32, value: u64) -> Self {
        Self { txid: txid.into(), vout, value, confirmed: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Only this many of the largest outputs are packed.
    pub max_circles: usize,
    /// Circles smaller than this on screen are not drawn.
    pub min_screen_radius: f64,
    /// Subtracted from the screen radius so neighbours don't merge visually.
    pub circle_inset: f64,
    /// Label font size as a fraction of the screen radius.
    pub font_ratio: f64,
    pub max_font_size: f64,
    /// Labels at or below this size are dropped.
    pub min_font_size: f64,
    /// Scale used when the layout has no extent in either dimension.
    pub default_scale: f64,
    pub confirmed_color: String,
    pub unconfirmed_color: String,
    pub label_color: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_circles: 500,
            min_screen_radius: 3.0,
            circle_inset: 1.0,
            font_ratio: 0.25,
            max_font_size: 36.0,
            min_font_size: 8.0,
            default_scale: 1.0,
            confirmed_color: "#5470c6".to_string(),
            unconfirmed_color: "#b8860b".to_string(),
            label_color: "#ffffff".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn width(&self) -> f64 { self.max_x - self.min_x }
    pub fn height(&self) -> f64 { self.max_y - self.min_y }

    /// Smallest box holding a circle of `radius` around `center`.
    pub fn of_circle(center: Point, radius: f64) -> Self {
        Self {
            min_x: center.x - radius,
            max_x: center.x + radius,
            min_y: center.y - radius,
            max_y: center.y + radius,
        }
    }

    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min_x: self.min_x.min(other.min_x),
            max_x: self.max_x.max(other.max_x),
            min_y: self.min_y.min(other.min_y),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedCircle {
    pub center: Point,
    pub radius: f64,
    pub item: Utxo,
    /// Distance to every placed circle's center, by placement index.
    /// Entry at this circle's own index is 0.
    pub distances: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PackingResult {
    /// Circles in placement order (descending value).
    pub circles: Vec<PlacedCircle>,
    /// `None` when nothing was placed.
    pub bounds: Option<BoundingBox>,
}

impl PackingResult {
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// The output behind a placement index, if any.
    pub fn item(&self, data_index: usize) -> Option<&Utxo> {
        self.circles.get(data_index).map(|c| &c.item)
    }
}

/// Bounding box over `center ± radius` of all circles.
pub fn compute_bounds(circles: &[PlacedCircle]) -> Option<BoundingBox> {
    circles
        .iter()
        .map(|c| BoundingBox::of_circle(c.center, c.radius))
        .reduce(|acc, b| acc.union(&b))
}
