//! Drawable primitives for an external rendering surface.
//!
//! The builder only decides what is drawn and where. Painting and pointer
//! handling belong to whoever consumes the primitives.

use serde::Serialize;

use crate::format::format_btc;
use crate::layout::{project, GraphConfig, PackingResult, Projection, Utxo, Viewport};

/// One thing to draw. `data_index` is the placement index of the circle it
/// belongs to, see [`PackingResult::item`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
        data_index: usize,
    },
    Label {
        x: f64,
        y: f64,
        text: String,
        font_size: f64,
        color: String,
        data_index: usize,
    },
}

impl Primitive {
    pub fn data_index(&self) -> usize {
        match self {
            Primitive::Circle { data_index, .. } | Primitive::Label { data_index, .. } => {
                *data_index
            }
        }
    }
}

/// Everything needed to draw one frame at a given viewport size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub projection: Projection,
    pub primitives: Vec<Primitive>,
}

pub fn fill_color<'a>(item: &Utxo, cfg: &'a GraphConfig) -> &'a str {
    if item.confirmed { cfg.confirmed_color.as_str() } else { cfg.unconfirmed_color.as_str() }
}

/// Primitives for every circle large enough to see, in placement order.
pub fn build_primitives(
    result: &PackingResult,
    projection: &Projection,
    cfg: &GraphConfig,
) -> Vec<Primitive> {
    let mut out = Vec::with_capacity(result.circles.len() * 2);
    let mut culled = 0usize;

    for (data_index, circle) in result.circles.iter().enumerate() {
        let screen_r = circle.radius * projection.scale;
        if screen_r.is_nan() || screen_r < cfg.min_screen_radius {
            culled += 1;
            continue;
        }

        let center = projection.to_screen(circle.center);
        out.push(Primitive::Circle {
            cx: center.x,
            cy: center.y,
            r: screen_r - cfg.circle_inset,
            fill: fill_color(&circle.item, cfg).to_string(),
            data_index,
        });

        let font_size = cfg.max_font_size.min(screen_r * cfg.font_ratio);
        if font_size > cfg.min_font_size {
            out.push(Primitive::Label {
                x: center.x,
                y: center.y,
                text: format_btc(circle.item.value),
                font_size,
                color: cfg.label_color.clone(),
                data_index,
            });
        }
    }

    if culled > 0 {
        tracing::trace!(
            "render: {} of {} circles below visibility cutoff",
            culled,
            result.circles.len()
        );
    }
    out
}

/// Project and build primitives for `viewport`.
pub fn render_frame(result: &PackingResult, viewport: Viewport, cfg: &GraphConfig) -> Frame {
    let Some(bounds) = result.bounds else {
        let projection = Projection::identity(cfg.default_scale);
        return Frame { projection, primitives: Vec::new() };
    };
    let projection = project(&bounds, viewport, cfg.default_scale);
    let primitives = build_primitives(result, &projection, cfg);
    Frame { projection, primitives }
}
