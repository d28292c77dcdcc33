//! Document model: shape variants, the shared style, and the committed list.
//!
//! This module defines the core data types that describe what is on the
//! drawing surface (`Shape`), the single session-wide styling value
//! (`Style`), and the append-only store of finished shapes (`ShapeList`).
//!
//! Data flows into this layer from the input session (shape creation and
//! in-place mutation during a gesture). The renderer reads from `ShapeList`
//! in insertion order; shapes are never deleted, edited, or reordered after
//! they are committed.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FILL_COLOR, DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH};
use crate::geom::Point;

/// A drawable primitive, either committed or mid-gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    /// Freehand polyline captured from pen strokes, one point per pointer
    /// sample. `closed` is carried for path records but no tool sets it.
    Path {
        points: Vec<Point>,
        closed: bool,
    },
    /// Axis-aligned rectangle from the anchor corner to the live corner.
    Rectangle {
        start: Point,
        end: Point,
    },
    /// Circle centered at the anchor; the live point defines the radius.
    Circle {
        start: Point,
        end: Point,
    },
    /// Straight segment between two endpoints.
    Line {
        start: Point,
        end: Point,
    },
}

impl Shape {
    /// Fold the next pointer position into the in-progress shape: the pen
    /// appends a sample, every other variant overwrites its live point.
    pub fn drag_to(&mut self, pt: Point) {
        match self {
            Self::Path { points, .. } => points.push(pt),
            Self::Rectangle { end, .. } | Self::Circle { end, .. } | Self::Line { end, .. } => {
                *end = pt;
            }
        }
    }

    /// Lowercase variant name, matching the serialized tag.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Path { .. } => "path",
            Self::Rectangle { .. } => "rectangle",
            Self::Circle { .. } => "circle",
            Self::Line { .. } => "line",
        }
    }
}

/// Stroke and fill styling shared by every shape at repaint time.
///
/// A single session-wide value: the renderer applies whatever style is
/// current when it repaints, so committed shapes restyle retroactively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Stroke color as a CSS color string.
    pub stroke_color: String,
    /// Fill color as a CSS color string. Tracked in context state; no shape
    /// currently issues a fill call.
    pub fill_color: String,
    /// Stroke width in canvas pixels.
    pub stroke_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke_color: DEFAULT_STROKE_COLOR.to_owned(),
            fill_color: DEFAULT_FILL_COLOR.to_owned(),
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

/// Append-only list of committed shapes in draw order.
pub struct ShapeList {
    shapes: Vec<Shape>,
}

impl ShapeList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Append a finished shape. Insertion order is draw order.
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Committed shapes, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// The most recently committed shape, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Shape> {
        self.shapes.last()
    }

    /// Number of committed shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if nothing has been committed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Default for ShapeList {
    fn default() -> Self {
        Self::new()
    }
}
