use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_has_no_layers_and_no_highlight() {
    let state = LayersState::default();
    assert!(state.is_empty());
    assert_eq!(state.len(), 0);
    assert_eq!(state.active(), None);
}

// =============================================================
// add_layer
// =============================================================

#[test]
fn add_layer_names_entries_in_sequence() {
    let mut state = LayersState::default();
    for _ in 0..4 {
        state.add_layer();
    }
    let names: Vec<&str> = state.layers().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["Layer 1", "Layer 2", "Layer 3", "Layer 4"]);
}

#[test]
fn add_layer_returns_the_new_index() {
    let mut state = LayersState::default();
    assert_eq!(state.add_layer(), 0);
    assert_eq!(state.add_layer(), 1);
    assert_eq!(state.add_layer(), 2);
}

#[test]
fn add_layer_does_not_move_the_highlight() {
    let mut state = LayersState::default();
    state.add_layer();
    state.set_active(0);
    state.add_layer();
    assert_eq!(state.active(), Some(0));
}

// =============================================================
// set_active
// =============================================================

#[test]
fn set_active_highlights_exactly_one_entry() {
    let mut state = LayersState::default();
    for _ in 0..3 {
        state.add_layer();
    }
    state.set_active(1);

    let highlighted: Vec<usize> = (0..state.len()).filter(|&i| state.is_active(i)).collect();
    assert_eq!(highlighted, [1]);
}

#[test]
fn set_active_switches_exclusively() {
    let mut state = LayersState::default();
    for _ in 0..3 {
        state.add_layer();
    }
    state.set_active(0);
    state.set_active(2);
    assert!(!state.is_active(0));
    assert!(state.is_active(2));
    assert_eq!(state.active(), Some(2));
}

#[test]
fn set_active_out_of_range_is_ignored() {
    let mut state = LayersState::default();
    state.add_layer();
    state.set_active(5);
    assert_eq!(state.active(), None);

    state.set_active(0);
    state.set_active(99);
    assert_eq!(state.active(), Some(0));
}

#[test]
fn is_active_false_for_every_entry_before_selection() {
    let mut state = LayersState::default();
    for _ in 0..3 {
        state.add_layer();
    }
    assert!((0..state.len()).all(|i| !state.is_active(i)));
}
