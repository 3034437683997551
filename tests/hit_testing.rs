use eframe_sketch::element::{DrawingElement, ElementId, ElementKind, factory};
use eframe_sketch::geometry::hit_testing::{PICK_RADIUS, pick};
use egui::{Pos2, pos2};

fn shape(id: &str, kind: ElementKind, start: Pos2, end: Pos2) -> DrawingElement {
    factory::create_shape(id, kind, start, end, "#000000", 2.0)
}

fn id(value: &str) -> Option<ElementId> {
    Some(ElementId::from(value))
}

#[test]
fn test_pick_empty_scene() {
    for p in [pos2(0.0, 0.0), pos2(30.0, 30.0), pos2(-100.0, 1e4)] {
        assert_eq!(pick(&[], p), None);
    }
}

#[test]
fn test_pick_rectangle() {
    let elements = vec![shape("a", ElementKind::Rectangle, pos2(10.0, 10.0), pos2(50.0, 50.0))];
    assert_eq!(pick(&elements, pos2(30.0, 30.0)), id("a"));
    assert_eq!(pick(&elements, pos2(5.0, 5.0)), None);
}

#[test]
fn test_top_most_element_wins() {
    let elements = vec![
        shape("a", ElementKind::Rectangle, pos2(0.0, 0.0), pos2(100.0, 100.0)),
        shape("b", ElementKind::Rectangle, pos2(20.0, 20.0), pos2(80.0, 80.0)),
    ];
    assert_eq!(pick(&elements, pos2(50.0, 50.0)), id("b"));
    // Only A covers this point
    assert_eq!(pick(&elements, pos2(10.0, 10.0)), id("a"));
}

#[test]
fn test_pick_pencil_only_near_recorded_points() {
    let elements = vec![factory::create_pencil(
        "p",
        pos2(0.0, 0.0),
        &[pos2(100.0, 0.0)],
        "#000000",
        2.0,
    )];
    assert_eq!(pick(&elements, pos2(3.0, 3.0)), id("p"));
    assert_eq!(pick(&elements, pos2(100.0, PICK_RADIUS)), id("p"));
    // Midway between two sparse samples is a gap
    assert_eq!(pick(&elements, pos2(50.0, 0.0)), None);
}

#[test]
fn test_single_point_pencil_is_pickable() {
    let elements = vec![factory::create_pencil("p", pos2(10.0, 10.0), &[], "#000000", 2.0)];
    assert_eq!(pick(&elements, pos2(12.0, 12.0)), id("p"));
}

#[test]
fn test_pick_line_uses_infinite_line_distance() {
    let elements = vec![shape("l", ElementKind::Line, pos2(0.0, 0.0), pos2(10.0, 10.0))];
    assert_eq!(pick(&elements, pos2(5.0, 6.0)), id("l"));
    assert_eq!(pick(&elements, pos2(5.0, 20.0)), None);
    // Far beyond the segment's end, still on the extended line
    assert_eq!(pick(&elements, pos2(200.0, 201.0)), id("l"));
}

#[test]
fn test_line_pick_radius_is_exclusive() {
    let elements = vec![shape("l", ElementKind::Line, pos2(0.0, 0.0), pos2(100.0, 0.0))];
    assert_eq!(pick(&elements, pos2(50.0, PICK_RADIUS - 0.01)), id("l"));
    assert_eq!(pick(&elements, pos2(50.0, PICK_RADIUS)), None);
}

#[test]
fn test_pick_circle() {
    let elements = vec![shape("c", ElementKind::Circle, pos2(100.0, 100.0), pos2(0.0, 0.0))];
    assert_eq!(pick(&elements, pos2(50.0, 50.0)), id("c"));
    assert_eq!(pick(&elements, pos2(50.0, 1.0)), id("c"));
    assert_eq!(pick(&elements, pos2(5.0, 5.0)), None);
}

#[test]
fn test_degenerate_circle_is_not_hit() {
    let elements = vec![
        shape("flat", ElementKind::Circle, pos2(10.0, 10.0), pos2(10.0, 90.0)),
        shape("thin", ElementKind::Circle, pos2(10.0, 50.0), pos2(90.0, 50.0)),
    ];
    assert_eq!(pick(&elements, pos2(10.0, 50.0)), None);
    assert_eq!(pick(&elements, pos2(50.0, 50.0)), None);
}

#[test]
fn test_pick_falls_through_to_lower_elements() {
    let elements = vec![
        shape("rect", ElementKind::Rectangle, pos2(0.0, 0.0), pos2(40.0, 40.0)),
        shape("circle", ElementKind::Circle, pos2(200.0, 200.0), pos2(300.0, 300.0)),
    ];
    assert_eq!(pick(&elements, pos2(20.0, 20.0)), id("rect"));
}
