use canvas::consts::{DEFAULT_FILL_COLOR, DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH};

use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_tool_is_select() {
    let state = UiState::default();
    assert_eq!(state.active_tool, Tool::Select);
}

#[test]
fn ui_state_default_style_matches_engine_defaults() {
    let state = UiState::default();
    assert_eq!(state.style.stroke_color, DEFAULT_STROKE_COLOR);
    assert_eq!(state.style.fill_color, DEFAULT_FILL_COLOR);
    assert!((state.style.stroke_width - DEFAULT_STROKE_WIDTH).abs() < f64::EPSILON);
}

#[test]
fn ui_state_style_edit_keeps_tool() {
    let mut state = UiState { active_tool: Tool::Pen, ..UiState::default() };
    state.style.stroke_color = "#FF0000".to_owned();
    assert_eq!(state.active_tool, Tool::Pen);
    assert_eq!(state.style.stroke_color, "#FF0000");
}

#[test]
fn ui_state_tool_edit_keeps_style() {
    let mut state = UiState::default();
    state.style.stroke_width = 9.0;
    state.active_tool = Tool::Circle;
    assert!((state.style.stroke_width - 9.0).abs() < f64::EPSILON);
}
