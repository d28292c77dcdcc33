//! Reusable UI component modules.

pub mod canvas_host;
pub mod layer_panel;
pub mod style_bar;
pub mod tool_rail;
