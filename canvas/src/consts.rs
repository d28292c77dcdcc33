//! Shared style defaults for the canvas crate.

/// Stroke color applied before the user picks one.
pub const DEFAULT_STROKE_COLOR: &str = "#1F1A17";

/// Fill color tracked alongside stroke state.
pub const DEFAULT_FILL_COLOR: &str = "#FFFFFF";

/// Stroke width in canvas pixels.
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;
