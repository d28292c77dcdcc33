//! Rendering: draws the full drawing-surface scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of document, gesture, and style state and
//! produces pixels — it does not mutate any session state.
//!
//! Every repaint is a full clear-and-redraw: committed shapes in insertion
//! order, then the in-progress shape on top. The shared style is written into
//! the context before each shape, which is what makes restyling retroactive.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::session::Session::render`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::doc::{Shape, ShapeList, Style};
use crate::geom::Point;

/// Draw the full scene: committed shapes, then the active shape.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel
/// ratio; the backing store is `dpr` times larger than the CSS viewport.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    doc: &ShapeList,
    active: Option<&Shape>,
    style: &Style,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);

    for shape in doc.iter() {
        draw_shape(ctx, shape, style)?;
    }

    if let Some(shape) = active {
        draw_shape(ctx, shape, style)?;
    }

    Ok(())
}

// =============================================================
// Shape dispatch
// =============================================================

fn draw_shape(ctx: &CanvasRenderingContext2d, shape: &Shape, style: &Style) -> Result<(), JsValue> {
    apply_style(ctx, style);

    match shape {
        Shape::Path { points, closed } => {
            draw_path(ctx, points, *closed);
            Ok(())
        }
        Shape::Rectangle { start, end } => {
            // Negative width/height flows through the primitive unchanged.
            ctx.stroke_rect(start.x, start.y, end.x - start.x, end.y - start.y);
            Ok(())
        }
        Shape::Circle { start, end } => {
            let radius = start.distance_to(*end);
            ctx.begin_path();
            ctx.arc(start.x, start.y, radius, 0.0, 2.0 * PI)?;
            ctx.stroke();
            Ok(())
        }
        Shape::Line { start, end } => {
            ctx.begin_path();
            ctx.move_to(start.x, start.y);
            ctx.line_to(end.x, end.y);
            ctx.stroke();
            Ok(())
        }
    }
}

fn draw_path(ctx: &CanvasRenderingContext2d, points: &[Point], closed: bool) {
    let Some(first) = points.first() else {
        return;
    };
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in &points[1..] {
        ctx.line_to(p.x, p.y);
    }
    if closed {
        ctx.close_path();
    }
    ctx.stroke();
}

// =============================================================
// Helpers
// =============================================================

/// Write the shared style into the context. Fill color is tracked here for
/// parity with the style controls; no shape issues a fill call.
fn apply_style(ctx: &CanvasRenderingContext2d, style: &Style) {
    ctx.set_stroke_style_str(&style.stroke_color);
    ctx.set_fill_style_str(&style.fill_color);
    ctx.set_line_width(style.stroke_width);
}
