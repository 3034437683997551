//! Scalar geometry shared by the element model, the hit-tester and the renderer.
//!
//! Points are `egui::Pos2` in surface-local logical coordinates, deltas are
//! `egui::Vec2` and normalized bounding boxes are `egui::Rect`.

use egui::{Pos2, Rect};

pub mod hit_testing;

/// Logical-coordinate point on the drawing surface.
pub type Point = Pos2;

/// Euclidean distance between two points
pub fn distance(a: Pos2, b: Pos2) -> f32 {
    a.distance(b)
}

/// Perpendicular distance from `point` to the infinite line through `a` and `b`.
///
/// The line is not clamped to the segment, so a point far past either end is
/// still scored by its distance to the extended line. When `a == b` the line
/// is undefined and the distance to `a` is returned instead.
pub fn point_to_line_distance(point: Pos2, a: Pos2, b: Pos2) -> f32 {
    let line_vec = b - a;
    let line_len = line_vec.length();
    if line_len <= f32::EPSILON {
        return distance(point, a);
    }

    let point_vec = point - a;
    // |cross(line, point)| / |line|
    (line_vec.x * point_vec.y - line_vec.y * point_vec.x).abs() / line_len
}

/// Resolve two free-form corners into a box with ordered min/max corners.
pub fn normalized_rect(a: Pos2, b: Pos2) -> Rect {
    Rect::from_min_max(
        Pos2::new(a.x.min(b.x), a.y.min(b.y)),
        Pos2::new(a.x.max(b.x), a.y.max(b.y)),
    )
}

/// Bounding box of a set of points, `Rect::NOTHING` when empty.
pub fn bounds_of(points: &[Pos2]) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Rect::from_min_max(Pos2::new(min_x, min_y), Pos2::new(max_x, max_y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_distance() {
        assert_eq!(distance(pos2(0.0, 0.0), pos2(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_line_distance_is_perpendicular() {
        let d = point_to_line_distance(pos2(5.0, 3.0), pos2(0.0, 0.0), pos2(10.0, 0.0));
        assert!((d - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_line_distance_is_not_clamped() {
        // Far beyond the end of the segment, but right on the extended line
        let d = point_to_line_distance(pos2(500.0, 0.0), pos2(0.0, 0.0), pos2(10.0, 0.0));
        assert!(d.abs() < 1e-5);
    }

    #[test]
    fn test_line_distance_degenerate_line() {
        let d = point_to_line_distance(pos2(3.0, 4.0), pos2(0.0, 0.0), pos2(0.0, 0.0));
        assert!((d - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_normalized_rect_any_drag_direction() {
        let rect = normalized_rect(pos2(50.0, 10.0), pos2(10.0, 50.0));
        assert_eq!(rect.min, pos2(10.0, 10.0));
        assert_eq!(rect.max, pos2(50.0, 50.0));
    }

    #[test]
    fn test_bounds_of_points() {
        assert_eq!(bounds_of(&[]), Rect::NOTHING);

        let rect = bounds_of(&[pos2(4.0, 8.0), pos2(-2.0, 3.0), pos2(1.0, 10.0)]);
        assert_eq!(rect.min, pos2(-2.0, 3.0));
        assert_eq!(rect.max, pos2(4.0, 10.0));
    }
}
