//! Input model: tools and the gesture state machine.
//!
//! `Tool` captures the user's intent at pointer-down time: which shape
//! variant (if any) the gesture should produce. `Gesture` is the state
//! tracked between pointer-down and pointer-up; it carries the in-progress
//! shape so that mid-gesture tool changes cannot alter what gets committed.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::doc::Shape;
use crate::geom::Point;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Pointer tool (default). Holds a gesture but draws nothing.
    #[default]
    Select,
    /// Freehand pen capturing one path point per pointer sample.
    Pen,
    /// Drag out a rectangle from an anchor corner.
    Rectangle,
    /// Drag out a circle from its center.
    Circle,
    /// Drag a straight line segment.
    Line,
}

impl Tool {
    /// Whether pointer-down with this tool creates a shape.
    #[must_use]
    pub fn draws(self) -> bool {
        !matches!(self, Self::Select)
    }

    /// Parse a tool-name attribute from the DOM. Unknown names map to `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "select" => Some(Self::Select),
            "pen" => Some(Self::Pen),
            "rectangle" => Some(Self::Rectangle),
            "circle" => Some(Self::Circle),
            "line" => Some(Self::Line),
            _ => None,
        }
    }

    /// The shape variant this tool produces, anchored at `origin`, or `None`
    /// for the select tool.
    #[must_use]
    pub fn begin_shape(self, origin: Point) -> Option<Shape> {
        match self {
            Self::Select => None,
            Self::Pen => Some(Shape::Path { points: vec![origin], closed: false }),
            Self::Rectangle => Some(Shape::Rectangle { start: origin, end: origin }),
            Self::Circle => Some(Shape::Circle { start: origin, end: origin }),
            Self::Line => Some(Shape::Line { start: origin, end: origin }),
        }
    }
}

/// The gesture tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Default)]
pub enum Gesture {
    /// No pointer is held; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The pointer is held. `active` is the shape being constructed, or
    /// `None` when the active tool draws nothing.
    Drawing { active: Option<Shape> },
}

impl Gesture {
    /// Whether a pointer is currently held.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }
}
