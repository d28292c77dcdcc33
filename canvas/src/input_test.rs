use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Tool basics
// =============================================================

#[test]
fn tool_default_is_select() {
    assert_eq!(Tool::default(), Tool::Select);
}

#[test]
fn tool_draws_for_every_shape_tool() {
    assert!(!Tool::Select.draws());
    assert!(Tool::Pen.draws());
    assert!(Tool::Rectangle.draws());
    assert!(Tool::Circle.draws());
    assert!(Tool::Line.draws());
}

#[test]
fn tool_serde_lowercase() {
    assert_eq!(serde_json::to_string(&Tool::Rectangle).unwrap(), "\"rectangle\"");
    let back: Tool = serde_json::from_str("\"pen\"").unwrap();
    assert_eq!(back, Tool::Pen);
}

// =============================================================
// Tool::from_name
// =============================================================

#[test]
fn from_name_parses_all_tools() {
    let cases = [
        ("select", Tool::Select),
        ("pen", Tool::Pen),
        ("rectangle", Tool::Rectangle),
        ("circle", Tool::Circle),
        ("line", Tool::Line),
    ];
    for (name, expected) in cases {
        assert_eq!(Tool::from_name(name), Some(expected));
    }
}

#[test]
fn from_name_unknown_is_none() {
    assert_eq!(Tool::from_name("eraser"), None);
    assert_eq!(Tool::from_name(""), None);
    assert_eq!(Tool::from_name("Rectangle"), None);
}

// =============================================================
// Tool::begin_shape
// =============================================================

#[test]
fn begin_shape_select_is_none() {
    assert!(Tool::Select.begin_shape(pt(5.0, 5.0)).is_none());
}

#[test]
fn begin_shape_pen_starts_with_origin_point() {
    let shape = Tool::Pen.begin_shape(pt(2.0, 3.0)).unwrap();
    assert_eq!(shape, Shape::Path { points: vec![pt(2.0, 3.0)], closed: false });
}

#[test]
fn begin_shape_anchors_coincide_at_origin() {
    for tool in [Tool::Rectangle, Tool::Circle, Tool::Line] {
        let shape = tool.begin_shape(pt(8.0, 9.0)).unwrap();
        match shape {
            Shape::Rectangle { start, end } | Shape::Circle { start, end } | Shape::Line { start, end } => {
                assert_eq!(start, pt(8.0, 9.0));
                assert_eq!(end, pt(8.0, 9.0));
            }
            Shape::Path { .. } => panic!("unexpected path from {tool:?}"),
        }
    }
}

#[test]
fn begin_shape_variant_matches_tool() {
    assert_eq!(Tool::Rectangle.begin_shape(pt(0.0, 0.0)).unwrap().label(), "rectangle");
    assert_eq!(Tool::Circle.begin_shape(pt(0.0, 0.0)).unwrap().label(), "circle");
    assert_eq!(Tool::Line.begin_shape(pt(0.0, 0.0)).unwrap().label(), "line");
    assert_eq!(Tool::Pen.begin_shape(pt(0.0, 0.0)).unwrap().label(), "path");
}

// =============================================================
// Gesture
// =============================================================

#[test]
fn gesture_default_is_idle() {
    assert!(!Gesture::default().is_drawing());
}

#[test]
fn gesture_drawing_reports_drawing_with_or_without_shape() {
    let with_shape = Gesture::Drawing { active: Tool::Line.begin_shape(pt(0.0, 0.0)) };
    let without_shape = Gesture::Drawing { active: None };
    assert!(with_shape.is_drawing());
    assert!(without_shape.is_drawing());
}
