#![allow(clippy::float_cmp)]

use super::*;

fn rect_at(x: f64, y: f64, w: f64, h: f64) -> Shape {
    Shape::rectangle("rect", Point::new(x, y), Size::new(w, h), 1)
}

fn area_at(x: f64, y: f64, w: f64, h: f64) -> Shape {
    Shape::area("area", Point::new(x, y), Size::new(w, h), 0)
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_shape_is_not_highlighted() {
    assert!(!rect_at(0.0, 0.0, 10.0, 10.0).is_highlighted());
    assert!(!area_at(0.0, 0.0, 10.0, 10.0).is_highlighted());
}

#[test]
fn factories_set_kind_id_and_z() {
    let r = rect_at(0.0, 0.0, 10.0, 10.0);
    assert_eq!(r.kind(), ShapeKind::Rectangle);
    assert_eq!(r.id(), "rect");
    assert_eq!(r.z_index(), 1);

    let a = area_at(0.0, 0.0, 10.0, 10.0);
    assert_eq!(a.kind(), ShapeKind::Area);
    assert_eq!(a.z_index(), 0);
}

#[test]
fn constructor_copies_position() {
    let mut p = Point::new(5.0, 6.0);
    let r = Shape::rectangle("r", p, Size::new(1.0, 1.0), 0);
    p.x = 100.0;
    assert_eq!(r.position(), Point::new(5.0, 6.0));
}

// =============================================================
// Bounds
// =============================================================

#[test]
fn bounds_match_position_and_size() {
    let r = rect_at(10.0, 20.0, 30.0, 40.0);
    assert_eq!(r.bounds(), Bbox { x: 10.0, y: 20.0, width: 30.0, height: 40.0 });
}

#[test]
fn bounds_follow_setters_without_drift() {
    let mut r = rect_at(0.0, 0.0, 10.0, 10.0);
    r.set_position(Point::new(50.0, 60.0));
    r.set_size(Size::new(5.0, 7.0));
    assert_eq!(r.bounds(), Bbox { x: 50.0, y: 60.0, width: 5.0, height: 7.0 });
}

#[test]
fn center_is_bbox_midpoint() {
    assert_eq!(rect_at(100.0, 100.0, 50.0, 50.0).center(), Point::new(125.0, 125.0));
}

// =============================================================
// Hit testing
// =============================================================

#[test]
fn contains_point_inclusive_edges() {
    let r = rect_at(50.0, 50.0, 50.0, 50.0);
    assert!(r.contains_point(Point::new(50.0, 50.0)));
    assert!(r.contains_point(Point::new(100.0, 100.0)));
    assert!(r.contains_point(Point::new(75.0, 75.0)));
    assert!(!r.contains_point(Point::new(49.9, 75.0)));
    assert!(!r.contains_point(Point::new(75.0, 100.1)));
}

// =============================================================
// Containment predicate
// =============================================================

#[test]
fn rect_inside_area_is_contained() {
    let area = area_at(100.0, 100.0, 200.0, 200.0);
    let rect = rect_at(150.0, 150.0, 50.0, 50.0);
    assert!(rect.is_fully_contained_within(&area));
    assert!(!area.is_fully_contained_within(&rect));
}

#[test]
fn equal_bounds_are_mutually_contained() {
    let area = area_at(100.0, 100.0, 200.0, 200.0);
    let rect = rect_at(100.0, 100.0, 200.0, 200.0);
    assert!(rect.is_fully_contained_within(&area));
    assert!(area.is_fully_contained_within(&rect));
}

#[test]
fn touching_edges_still_contained() {
    let area = area_at(100.0, 100.0, 200.0, 200.0);
    assert!(rect_at(100.0, 100.0, 50.0, 50.0).is_fully_contained_within(&area));
    assert!(rect_at(250.0, 250.0, 50.0, 50.0).is_fully_contained_within(&area));
}

#[test]
fn one_unit_over_is_not_contained() {
    let area = area_at(100.0, 100.0, 200.0, 200.0);
    assert!(!rect_at(100.0, 100.0, 201.0, 200.0).is_fully_contained_within(&area));
    assert!(!rect_at(100.0, 100.0, 200.0, 201.0).is_fully_contained_within(&area));
    assert!(!rect_at(99.0, 100.0, 50.0, 50.0).is_fully_contained_within(&area));
    assert!(!rect_at(251.0, 150.0, 50.0, 50.0).is_fully_contained_within(&area));
}

#[test]
fn partial_overlap_is_not_contained() {
    let area = area_at(100.0, 100.0, 200.0, 200.0);
    let rect = rect_at(80.0, 80.0, 50.0, 50.0);
    assert!(!rect.is_fully_contained_within(&area));
    assert!(!area.is_fully_contained_within(&rect));
}

#[test]
fn zero_size_shape_contained_when_point_inside() {
    let area = area_at(100.0, 100.0, 200.0, 200.0);
    assert!(rect_at(300.0, 300.0, 0.0, 0.0).is_fully_contained_within(&area));
    assert!(rect_at(150.0, 150.0, 0.0, 0.0).is_fully_contained_within(&area));
    assert!(!rect_at(300.5, 150.0, 0.0, 0.0).is_fully_contained_within(&area));
}

// =============================================================
// Highlight and style
// =============================================================

#[test]
fn setters_do_not_touch_highlight() {
    let mut r = rect_at(0.0, 0.0, 10.0, 10.0);
    r.set_highlighted(true);
    r.set_position(Point::new(500.0, 500.0));
    r.set_size(Size::new(1.0, 1.0));
    assert!(r.is_highlighted());
}

#[test]
fn rectangle_highlight_changes_fill_only() {
    let mut r = rect_at(0.0, 0.0, 10.0, 10.0);
    let idle = r.style();
    r.set_highlighted(true);
    let lit = r.style();
    assert_eq!(idle.fill, RECT_IDLE_FILL);
    assert_eq!(lit.fill, RECT_HIGHLIGHTED_FILL);
    assert_eq!(idle.stroke, lit.stroke);
    assert_eq!(idle.stroke_width, lit.stroke_width);
}

#[test]
fn area_highlight_changes_stroke_only() {
    let mut a = area_at(0.0, 0.0, 10.0, 10.0);
    let idle = a.style();
    a.set_highlighted(true);
    let lit = a.style();
    assert_eq!(idle.fill, lit.fill);
    assert_eq!(idle.stroke, AREA_IDLE_STROKE);
    assert_eq!(lit.stroke, AREA_HIGHLIGHTED_STROKE);
    assert_eq!(idle.stroke_width, 1.0);
    assert_eq!(lit.stroke_width, 3.0);
}

#[test]
fn unhighlight_restores_idle_preset() {
    let mut a = area_at(0.0, 0.0, 10.0, 10.0);
    a.set_highlighted(true);
    a.set_highlighted(false);
    assert_eq!(a.style(), ShapeKind::Area.style(false));
}

// =============================================================
// Serde
// =============================================================

#[test]
fn kind_serde_lowercase() {
    assert_eq!(serde_json::to_string(&ShapeKind::Rectangle).unwrap(), "\"rectangle\"");
    assert_eq!(serde_json::to_string(&ShapeKind::Area).unwrap(), "\"area\"");
    let back: ShapeKind = serde_json::from_str("\"area\"").unwrap();
    assert_eq!(back, ShapeKind::Area);
}

#[test]
fn shape_deserialize_defaults_highlight_off() {
    let json = r#"{
        "id": "a",
        "kind": "area",
        "position": { "x": 1, "y": 2 },
        "size": { "width": 3, "height": 4 },
        "z_index": 7
    }"#;
    let s: Shape = serde_json::from_str(json).unwrap();
    assert_eq!(s.id(), "a");
    assert_eq!(s.z_index(), 7);
    assert!(!s.is_highlighted());
}
