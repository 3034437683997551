use eframe_sketch::element::{DrawingElement, ElementGeometry, ElementId, ElementKind, factory};
use eframe_sketch::error::ElementError;
use egui::{Pos2, Vec2, pos2, vec2};

fn create_test_pencil() -> DrawingElement {
    factory::create_pencil(
        "pencil-1",
        pos2(10.0, 10.0),
        &[pos2(20.0, 20.0), pos2(30.0, 15.0)],
        "#000000",
        2.0,
    )
}

fn create_test_rectangle() -> DrawingElement {
    factory::create_shape(
        "rect-1",
        ElementKind::Rectangle,
        pos2(50.0, 50.0),
        pos2(10.0, 10.0),
        "#c92a2a",
        4.0,
    )
}

#[test]
fn test_element_creation() {
    let origin = pos2(12.0, 34.0);

    let pencil = DrawingElement::create(ElementId::from("p"), ElementKind::Pencil, origin, "#000000", 2.0);
    assert_eq!(pencil.kind(), ElementKind::Pencil);
    assert_eq!(pencil.points(), Some(&[origin][..]));
    assert_eq!(pencil.corners(), None);

    for kind in [ElementKind::Line, ElementKind::Rectangle, ElementKind::Circle] {
        let element = DrawingElement::create(ElementId::from("s"), kind, origin, "#343a40", 3.0);
        assert_eq!(element.kind(), kind);
        assert_eq!(element.corners(), Some((origin, origin)));
        assert_eq!(element.points(), None);
        assert_eq!(element.color(), "#343a40");
        assert_eq!(element.stroke_width(), 3.0);
    }
}

#[test]
fn test_non_positive_stroke_width_is_clamped() {
    let element = DrawingElement::create(ElementId::from("w"), ElementKind::Line, Pos2::ZERO, "#000000", 0.0);
    assert!(element.stroke_width() > 0.0);
}

#[test]
fn test_append_point_preserves_previous_points() {
    let pencil = create_test_pencil();
    let extended = pencil.append_point(pos2(40.0, 40.0)).unwrap();

    assert_eq!(
        extended.points().unwrap(),
        &[pos2(10.0, 10.0), pos2(20.0, 20.0), pos2(30.0, 15.0), pos2(40.0, 40.0)]
    );
    // The original is untouched
    assert_eq!(pencil.points().unwrap().len(), 3);
    assert_eq!(extended.id(), pencil.id());
}

#[test]
fn test_append_point_rejected_for_rectangle() {
    let rect = create_test_rectangle();
    let err = rect.append_point(pos2(1.0, 1.0)).unwrap_err();
    assert_eq!(
        err,
        ElementError::KindMismatch {
            operation: "append a point to",
            kind: ElementKind::Rectangle,
        }
    );
}

#[test]
fn test_extend_to_moves_second_corner_only() {
    let line = DrawingElement::create(ElementId::from("l"), ElementKind::Line, pos2(5.0, 5.0), "#000000", 2.0);
    let extended = line.extend_to(pos2(100.0, 80.0)).unwrap();

    assert_eq!(
        extended.geometry(),
        &ElementGeometry::Line {
            start: pos2(5.0, 5.0),
            end: pos2(100.0, 80.0),
        }
    );
    assert!(create_test_pencil().extend_to(pos2(0.0, 0.0)).is_err());
}

#[test]
fn test_element_translate() {
    let delta = vec2(5.0, -10.0);

    let pencil = create_test_pencil().translate_by(delta);
    assert_eq!(
        pencil.points().unwrap(),
        &[pos2(15.0, 0.0), pos2(25.0, 10.0), pos2(35.0, 5.0)]
    );

    let rect = create_test_rectangle().translate_by(delta);
    assert_eq!(rect.corners(), Some((pos2(55.0, 40.0), pos2(15.0, 0.0))));
}

#[test]
fn test_translate_round_trip() {
    let delta = vec2(17.5, -3.25);
    for element in [create_test_pencil(), create_test_rectangle()] {
        let back = element.translate_by(delta).translate_by(-delta);
        assert_eq!(back, element);
    }

    let circle = factory::create_shape(
        "c",
        ElementKind::Circle,
        pos2(0.0, 0.0),
        pos2(64.0, 32.0),
        "#000000",
        2.0,
    );
    assert_eq!(circle.translate_by(Vec2::new(8.0, 8.0)).translate_by(vec2(-8.0, -8.0)), circle);
}

#[test]
fn test_bounds_are_normalized() {
    let rect = create_test_rectangle().bounds();
    assert_eq!(rect.min, pos2(10.0, 10.0));
    assert_eq!(rect.max, pos2(50.0, 50.0));

    let pencil = create_test_pencil().bounds();
    assert_eq!(pencil.min, pos2(10.0, 10.0));
    assert_eq!(pencil.max, pos2(30.0, 20.0));
}

#[test]
fn test_create_pencil_starts_at_origin() {
    let lone = factory::create_pencil("p", pos2(7.0, 8.0), &[], "#000000", 2.0);
    assert_eq!(lone.points().unwrap(), &[pos2(7.0, 8.0)]);

    let stroke = create_test_pencil();
    assert_eq!(stroke.points().unwrap()[0], pos2(10.0, 10.0));
    assert_eq!(stroke.points().unwrap().len(), 3);
}
