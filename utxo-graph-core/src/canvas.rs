// Paints a frame onto an HTML canvas through the 2D context.
//
// The viewport is the canvas's displayed size at the moment of drawing.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::layout::{GraphConfig, PackingResult, Viewport};
use crate::render::{render_frame, Frame, Primitive};

/// Look up a `<canvas>` element by id.
pub fn find_canvas(canvas_id: &str) -> Result<HtmlCanvasElement, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let element = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", canvas_id)))?;
    Ok(element.dyn_into::<HtmlCanvasElement>()?)
}

/// Size the canvas backing store to its displayed size and return it.
fn sync_viewport(canvas: &HtmlCanvasElement) -> Viewport {
    let (w, h) = (canvas.client_width(), canvas.client_height());
    if w > 0 && h > 0 {
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);
    }
    Viewport::new(canvas.width() as f64, canvas.height() as f64)
}

pub fn paint(
    canvas: &HtmlCanvasElement,
    result: &PackingResult,
    cfg: &GraphConfig,
) -> Result<Frame, JsValue> {
    let viewport = sync_viewport(canvas);
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    let frame = render_frame(result, viewport, cfg);

    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    for primitive in &frame.primitives {
        match primitive {
            Primitive::Circle { cx, cy, r, fill, .. } => {
                ctx.begin_path();
                ctx.arc(*cx, *cy, *r, 0.0, TAU)?;
                ctx.set_fill_style_str(fill);
                ctx.fill();
            }
            Primitive::Label { x, y, text, font_size, color, .. } => {
                ctx.set_font(&format!("{}px sans-serif", font_size.round()));
                ctx.set_fill_style_str(color);
                ctx.fill_text(text, *x, *y)?;
            }
        }
    }

    Ok(frame)
}
