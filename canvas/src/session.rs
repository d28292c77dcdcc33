use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::doc::{Shape, ShapeList, Style};
use crate::geom::Point;
use crate::input::{Gesture, Tool};
use crate::render;

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone)]
pub enum Action {
    /// A completed gesture appended this shape to the committed list.
    ShapeCommitted(Shape),
    /// Session state changed in a way that requires a repaint.
    RenderNeeded,
}

/// Core session state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Session` so it can be tested without WASM/browser
/// dependencies. Pointer events come in as canvas-local [`Point`]s; the
/// reducer mutates the gesture/document state and reports what the host
/// should do next as [`Action`]s.
pub struct SessionCore {
    pub doc: ShapeList,
    pub style: Style,
    pub tool: Tool,
    pub gesture: Gesture,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for SessionCore {
    fn default() -> Self {
        Self {
            doc: ShapeList::new(),
            style: Style::default(),
            tool: Tool::default(),
            gesture: Gesture::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }
}

impl SessionCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Tool / style ---

    /// Set the active tool. A gesture already in progress keeps the shape it
    /// started with; the new tool applies from the next pointer-down.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Replace the shared style. Applied at repaint time, so previously
    /// committed shapes restyle along with everything drawn afterwards.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    // --- Viewport ---

    /// Record viewport dimensions (CSS pixels) and device pixel ratio.
    /// Committed shape coordinates are never rescaled on resize.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;
    }

    // --- Pointer events ---

    /// Start a gesture at `pt`. Drawing tools create their shape variant
    /// anchored there; the select tool holds the gesture with no shape.
    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        let active = self.tool.begin_shape(pt);
        let created = active.is_some();
        self.gesture = Gesture::Drawing { active };
        if created {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Fold `pt` into the active shape and request a repaint. Ignored when
    /// no pointer is held.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        let Gesture::Drawing { active } = &mut self.gesture else {
            return Vec::new();
        };
        if let Some(shape) = active {
            shape.drag_to(pt);
        }
        vec![Action::RenderNeeded]
    }

    /// End the gesture, committing the active shape (if any) to the list.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        let gesture = std::mem::take(&mut self.gesture);
        let Gesture::Drawing { active: Some(shape) } = gesture else {
            return Vec::new();
        };
        self.doc.push(shape.clone());
        vec![Action::ShapeCommitted(shape)]
    }

    /// Leaving the canvas mid-drag commits exactly like a release inside it.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.on_pointer_up()
    }

    // --- Queries ---

    /// The shape currently under construction, if a drawing gesture is live.
    #[must_use]
    pub fn active_shape(&self) -> Option<&Shape> {
        match &self.gesture {
            Gesture::Drawing { active } => active.as_ref(),
            Gesture::Idle => None,
        }
    }

    /// Whether a pointer is currently held on the canvas.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.gesture.is_drawing()
    }
}

/// The full drawing session. Wraps [`SessionCore`] and owns the browser
/// canvas element.
pub struct Session {
    canvas: HtmlCanvasElement,
    pub core: SessionCore,
}

impl Session {
    /// Create a new session bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: SessionCore::new() }
    }

    // --- Delegated state writes ---

    pub fn set_tool(&mut self, tool: Tool) {
        self.core.set_tool(tool);
    }

    pub fn set_style(&mut self, style: Style) {
        self.core.set_style(style);
    }

    /// Resize the backing store to the container's CSS dimensions scaled by
    /// the device pixel ratio, and record the new viewport.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.canvas.set_width((width_css * dpr) as u32);
        self.canvas.set_height((height_css * dpr) as u32);
        self.core.set_viewport(width_css, height_css, dpr);
    }

    // --- Delegated pointer events ---

    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_down(pt)
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(pt)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call
    /// fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let Some(context) = self.canvas.get_context("2d")? else {
            return Err(JsValue::from_str("canvas 2d context unavailable"));
        };
        let ctx: CanvasRenderingContext2d = context.dyn_into().map_err(JsValue::from)?;
        render::draw(
            &ctx,
            &self.core.doc,
            self.core.active_shape(),
            &self.core.style,
            self.core.viewport_width,
            self.core.viewport_height,
            self.core.dpr,
        )
    }
}
