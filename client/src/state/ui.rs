//! Local UI chrome state (active tool and shared style).
//!
//! DESIGN
//! ======
//! Keeps tool choice and styling as plain state so controls can treat them
//! as signals instead of reaching into the DOM or the drawing session.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use canvas::doc::Style;
use canvas::input::Tool;

/// UI state backing the tool rail and style bar. The canvas host mirrors it
/// into the drawing session whenever it changes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    /// Currently active drawing tool.
    pub active_tool: Tool,
    /// Shared style applied to every shape at repaint time.
    pub style: Style,
}
