//! WASM bindings for the utxo-graph-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.
//! `UtxoGraphHandle` packs once per data refresh; drawing and clicks reuse it.

use wasm_bindgen::prelude::*;

use crate::canvas::{find_canvas, paint};
use crate::graph::UtxoGraph;
use crate::input::{parse_activation, InputError};
use crate::interaction::{ActivationTarget, Modifiers};
use crate::layout::Viewport;
use crate::output::{layout_json, GraphOutput};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

fn to_json(output: &GraphOutput) -> String {
    serde_json::to_string(output)
        .unwrap_or_else(|_| "{\"error\": \"Serialization error\"}".to_string())
}

fn target_json(target: Option<ActivationTarget>) -> String {
    serde_json::to_string(&target).unwrap_or_else(|_| "null".to_string())
}

fn graph_output_json(items_json: &str, config_json: &str, width: f64, height: f64) -> String {
    let output = match layout_json(items_json, config_json, Viewport::new(width, height)) {
        Ok(output) => output,
        Err(e) => {
            console_error(&format!("Error laying out UTXOs: {}", e));
            GraphOutput::from_error(e)
        }
    };
    to_json(&output)
}

/// One-shot: pack the outputs and build primitives for a `width` x `height`
/// viewport.
#[wasm_bindgen]
pub fn layout_utxos(items_json: &str, width: f64, height: f64) -> String {
    graph_output_json(items_json, "", width, height)
}

/// Like `layout_utxos`, with a partial `GraphConfig` as JSON.
#[wasm_bindgen]
pub fn layout_utxos_with_config(
    items_json: &str,
    config_json: &str,
    width: f64,
    height: f64,
) -> String {
    graph_output_json(items_json, config_json, width, height)
}

/// A packed UTXO graph held on the JavaScript side.
#[wasm_bindgen]
pub struct UtxoGraphHandle {
    graph: UtxoGraph,
    error: Option<InputError>,
}

#[wasm_bindgen]
impl UtxoGraphHandle {
    /// Parse and pack. Bad input leaves an empty graph that reports the
    /// error from `layout`.
    #[wasm_bindgen(constructor)]
    pub fn new(items_json: &str, config_json: &str) -> UtxoGraphHandle {
        match UtxoGraph::from_json(items_json, config_json) {
            Ok(graph) => UtxoGraphHandle { graph, error: None },
            Err(e) => {
                console_error(&format!("Error parsing UTXOs: {}", e));
                UtxoGraphHandle { graph: UtxoGraph::default(), error: Some(e) }
            }
        }
    }

    /// Number of placed circles.
    pub fn len(&self) -> usize {
        self.graph.result().circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.result().is_empty()
    }

    /// `GraphOutput` JSON for a `width` x `height` viewport.
    pub fn layout(&self, width: f64, height: f64) -> String {
        match &self.error {
            Some(e) => to_json(&GraphOutput::from_error(e.clone())),
            None => to_json(&self.graph.output(Viewport::new(width, height))),
        }
    }

    /// Resolve a click at screen position (x, y) on a `width` x `height`
    /// drawing. Returns a JSON target or `null`.
    pub fn hit_test(
        &self,
        width: f64,
        height: f64,
        x: f64,
        y: f64,
        ctrl: bool,
        meta: bool,
    ) -> String {
        let modifiers = Modifiers { ctrl, meta, shift: false };
        target_json(self.graph.hit_test(Viewport::new(width, height), x, y, modifiers))
    }

    /// Resolve an activation reported by the rendering surface
    /// (`{"data_index": n, "modifiers": {...}}`). Returns a JSON target or `null`.
    pub fn activate(&self, activation_json: &str) -> String {
        match parse_activation(activation_json) {
            Ok(activation) => target_json(self.graph.activate(&activation)),
            Err(e) => {
                console_error(&format!("Error resolving activation: {}", e));
                "null".to_string()
            }
        }
    }

    /// Draw onto the canvas with id `canvas_id`, sized to the canvas at call
    /// time. Returns whether anything was drawn.
    pub fn paint(&self, canvas_id: &str) -> bool {
        let painted = find_canvas(canvas_id)
            .and_then(|canvas| paint(&canvas, self.graph.result(), self.graph.config()));
        match painted {
            Ok(frame) => !frame.primitives.is_empty(),
            Err(e) => {
                console_error(&format!("Error painting UTXO graph: {:?}", e));
                false
            }
        }
    }
}
