//! Output types for JavaScript consumption.
//!
//! These structs are serialized to JSON and handed to the web frontend,
//! which draws the primitives and forwards clicks back.

use serde::Serialize;

use crate::graph::UtxoGraph;
use crate::input::InputError;
use crate::layout::{BoundingBox, GraphConfig, PackingResult, Projection, Viewport};
use crate::render::{render_frame, Primitive};

/// A placed output, without the internal distance table
#[derive(Debug, Clone, Serialize)]
pub struct CircleOutput {
    pub txid: String,
    pub vout: u32,
    pub value: u64,
    pub confirmed: bool,
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

/// Error information for the caller's error display
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub input: String,
    pub message: String,
    pub line: usize,   // 1-based line number
    pub column: usize, // 1-based column number
}

impl From<InputError> for ErrorInfo {
    fn from(e: InputError) -> Self {
        ErrorInfo { input: e.input.to_string(), message: e.msg, line: e.line, column: e.col }
    }
}

/// The combined output sent to the frontend
#[derive(Debug, Clone, Serialize)]
pub struct GraphOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub circles: Vec<CircleOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<Projection>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub primitives: Vec<Primitive>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl GraphOutput {
    pub fn from_error(e: InputError) -> Self {
        GraphOutput {
            circles: vec![],
            bounds: None,
            projection: None,
            primitives: vec![],
            error: Some(e.into()),
        }
    }

    pub fn from_result(result: &PackingResult, viewport: Viewport, cfg: &GraphConfig) -> Self {
        let circles = result
            .circles
            .iter()
            .map(|c| CircleOutput {
                txid: c.item.txid.clone(),
                vout: c.item.vout,
                value: c.item.value,
                confirmed: c.item.confirmed,
                x: c.center.x,
                y: c.center.y,
                r: c.radius,
            })
            .collect();
        let frame = render_frame(result, viewport, cfg);
        GraphOutput {
            circles,
            bounds: result.bounds,
            projection: result.bounds.map(|_| frame.projection),
            primitives: frame.primitives,
            error: None,
        }
    }
}

/// Parse, pack and render in one go.
pub fn layout_json(
    items_json: &str,
    config_json: &str,
    viewport: Viewport,
) -> Result<GraphOutput, InputError> {
    Ok(UtxoGraph::from_json(items_json, config_json)?.output(viewport))
}
