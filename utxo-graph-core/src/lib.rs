//! Circle-packed UTXO graph.
//!
//! Outputs are laid out as touching, non-overlapping circles whose area is
//! proportional to their value, then projected into a viewport and turned
//! into drawable primitives:
//!
//! outputs -> [`pack`] -> [`PackingResult`] -> [`render_frame`] -> [`Frame`]

pub mod geometry;
pub mod layout;
pub mod render;
pub mod interaction;
pub mod format;
pub mod graph;
mod input;
mod output;
mod canvas;
mod wasm;

pub use geometry::{circle_intersections, distance, Point};
pub use graph::UtxoGraph;
pub use input::InputError;
pub use interaction::{
    hit_test, resolve_activation, ActivationTarget, Modifiers, PointerActivation,
};
pub use layout::{
    pack, project, BoundingBox, GraphConfig, PackingResult, PlacedCircle, Projection, Utxo,
    Viewport,
};
pub use output::{layout_json, CircleOutput, ErrorInfo, GraphOutput};
pub use render::{build_primitives, render_frame, Frame, Primitive};
