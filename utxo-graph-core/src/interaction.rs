// Pointer interaction boundary.
//
// The rendering surface reports which primitive was activated; this module
// maps that back to the output it represents. Navigation itself is left to
// the caller.

use serde::{Deserialize, Serialize};

use crate::layout::PackingResult;
use crate::render::Primitive;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerActivation {
    pub data_index: usize,
    #[serde(default)]
    pub modifiers: Modifiers,
}

/// The output a click resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivationTarget {
    pub txid: String,
    pub vout: u32,
    /// Ctrl/Cmd-click asks for a new tab.
    pub open_in_new_tab: bool,
}

/// `data_index` of the topmost circle under the screen point.
pub fn hit_test(primitives: &[Primitive], x: f64, y: f64) -> Option<usize> {
    primitives.iter().rev().find_map(|p| match p {
        Primitive::Circle { cx, cy, r, data_index, .. } => {
            let dx = x - cx;
            let dy = y - cy;
            (dx * dx + dy * dy <= r * r).then_some(*data_index)
        }
        Primitive::Label { .. } => None,
    })
}

pub fn resolve_activation(
    result: &PackingResult,
    activation: &PointerActivation,
) -> Option<ActivationTarget> {
    let item = result.item(activation.data_index)?;
    Some(ActivationTarget {
        txid: item.txid.clone(),
        vout: item.vout,
        open_in_new_tab: activation.modifiers.ctrl || activation.modifiers.meta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{pack, GraphConfig, Utxo, Viewport};
    use crate::render::render_frame;

    fn circle(cx: f64, cy: f64, r: f64, data_index: usize) -> Primitive {
        Primitive::Circle { cx, cy, r, fill: "#000".to_string(), data_index }
    }

    #[test]
    fn test_hit_test_picks_topmost() {
        let prims = vec![circle(0.0, 0.0, 10.0, 0), circle(5.0, 0.0, 10.0, 1)];
        assert_eq!(hit_test(&prims, 2.0, 0.0), Some(1));
        assert_eq!(hit_test(&prims, -8.0, 0.0), Some(0));
        assert_eq!(hit_test(&prims, 50.0, 50.0), None);
    }

    #[test]
    fn test_hit_test_ignores_labels() {
        let prims = vec![Primitive::Label {
            x: 0.0,
            y: 0.0,
            text: "1 BTC".to_string(),
            font_size: 12.0,
            color: "#fff".to_string(),
            data_index: 3,
        }];
        assert_eq!(hit_test(&prims, 0.0, 0.0), None);
    }

    #[test]
    fn test_click_resolves_to_output() {
        let items = vec![Utxo::new("small", 1, 100), Utxo::new("large", 7, 10_000)];
        let cfg = GraphConfig::default();
        let result = pack(&items, &cfg);
        let frame = render_frame(&result, Viewport::new(400.0, 200.0), &cfg);

        // The largest output is placed first and centered on its circle
        let center = frame.projection.to_screen(result.circles[0].center);
        let data_index = hit_test(&frame.primitives, center.x, center.y).unwrap();
        let modifiers = Modifiers { meta: true, ..Default::default() };
        let activation = PointerActivation { data_index, modifiers };
        let target = resolve_activation(&result, &activation).unwrap();
        assert_eq!(target.txid, "large");
        assert_eq!(target.vout, 7);
        assert!(target.open_in_new_tab);
    }

    #[test]
    fn test_out_of_range_activation() {
        let result = pack(&[Utxo::new("a", 0, 4)], &GraphConfig::default());
        let activation = PointerActivation { data_index: 5, modifiers: Modifiers::default() };
        assert!(resolve_activation(&result, &activation).is_none());
    }

    #[test]
    fn test_activation_from_json() {
        let json = r#"{"data_index":2,"modifiers":{"ctrl":true}}"#;
        let a: PointerActivation = serde_json::from_str(json).unwrap();
        assert_eq!(a.data_index, 2);
        assert!(a.modifiers.ctrl && !a.modifiers.meta);
    }
}
