// A packed graph kept between draws.
//
// Packing happens once per data refresh. Every draw, click or activation
// after that only reprojects the stored result for the viewport at hand, with
// the same config the graph was packed with.

use crate::input::{parse_config, parse_items, InputError};
use crate::interaction::{
    hit_test, resolve_activation, ActivationTarget, Modifiers, PointerActivation,
};
use crate::layout::{pack, GraphConfig, PackingResult, Utxo, Viewport};
use crate::output::GraphOutput;
use crate::render::{render_frame, Frame};

#[derive(Debug, Clone, Default)]
pub struct UtxoGraph {
    result: PackingResult,
    cfg: GraphConfig,
}

impl UtxoGraph {
    pub fn new(items: &[Utxo], cfg: GraphConfig) -> Self {
        let result = pack(items, &cfg);
        Self { result, cfg }
    }

    /// Parse outputs and a (partial) config, then pack.
    pub fn from_json(items_json: &str, config_json: &str) -> Result<Self, InputError> {
        let cfg = parse_config(config_json)?;
        let items = parse_items(items_json)?;
        Ok(Self::new(&items, cfg))
    }

    pub fn result(&self) -> &PackingResult {
        &self.result
    }

    pub fn config(&self) -> &GraphConfig {
        &self.cfg
    }

    pub fn frame(&self, viewport: Viewport) -> Frame {
        render_frame(&self.result, viewport, &self.cfg)
    }

    pub fn output(&self, viewport: Viewport) -> GraphOutput {
        GraphOutput::from_result(&self.result, viewport, &self.cfg)
    }

    /// The output under screen point (x, y) when drawn at `viewport`.
    pub fn hit_test(
        &self,
        viewport: Viewport,
        x: f64,
        y: f64,
        modifiers: Modifiers,
    ) -> Option<ActivationTarget> {
        let frame = self.frame(viewport);
        let data_index = hit_test(&frame.primitives, x, y)?;
        self.activate(&PointerActivation { data_index, modifiers })
    }

    pub fn activate(&self, activation: &PointerActivation) -> Option<ActivationTarget> {
        resolve_activation(&self.result, activation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_activation;
    use crate::render::Primitive;

    fn items_json(n: usize) -> String {
        let items: Vec<Utxo> =
            (0..n).map(|i| Utxo::new(format!("tx{}", i), i as u32, 100 + i as u64 * 50)).collect();
        serde_json::to_string(&items).unwrap()
    }

    #[test]
    fn test_activation_uses_layout_config() {
        let graph = UtxoGraph::from_json(&items_json(8), r#"{"max_circles": 5}"#).unwrap();
        let out = graph.output(Viewport::new(600.0, 400.0));
        assert_eq!(out.circles.len(), 5);

        for (data_index, circle) in out.circles.iter().enumerate() {
            let activation =
                parse_activation(&format!(r#"{{"data_index": {}}}"#, data_index)).unwrap();
            let target = graph.activate(&activation).unwrap();
            assert_eq!((target.txid.as_str(), target.vout), (circle.txid.as_str(), circle.vout));
            assert!(!target.open_in_new_tab);
        }
        // Index 5 exists under the default cap but not in this layout
        let past_end = PointerActivation { data_index: 5, modifiers: Modifiers::default() };
        assert!(graph.activate(&past_end).is_none());
    }

    #[test]
    fn test_click_on_drawn_circle_matches_output() {
        let graph = UtxoGraph::from_json(&items_json(6), r#"{"max_circles": 4}"#).unwrap();
        let viewport = Viewport::new(500.0, 500.0);
        let out = graph.output(viewport);

        let drawn: Vec<(f64, f64, usize)> = out
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Circle { cx, cy, data_index, .. } => Some((*cx, *cy, *data_index)),
                Primitive::Label { .. } => None,
            })
            .collect();
        assert_eq!(drawn.len(), 4);

        for (cx, cy, data_index) in drawn {
            let modifiers = Modifiers { ctrl: true, ..Default::default() };
            let target = graph.hit_test(viewport, cx, cy, modifiers).unwrap();
            assert_eq!(target.txid, out.circles[data_index].txid);
            assert!(target.open_in_new_tab);
        }
    }

    #[test]
    fn test_redraw_reuses_packing() {
        let items = [Utxo::new("a", 0, 400), Utxo::new("b", 1, 100)];
        let graph = UtxoGraph::new(&items, GraphConfig::default());
        let before = graph.result().clone();
        let small = graph.frame(Viewport::new(100.0, 100.0));
        let large = graph.frame(Viewport::new(400.0, 400.0));
        assert_eq!(graph.result(), &before);
        assert!((large.projection.scale / small.projection.scale - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_graph() {
        let graph = UtxoGraph::default();
        assert!(graph.result().is_empty());
        let target = graph.hit_test(Viewport::new(10.0, 10.0), 5.0, 5.0, Modifiers::default());
        assert!(target.is_none());
    }
}
