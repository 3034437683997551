use egui::Pos2;

use super::{distance, normalized_rect, point_to_line_distance};
use crate::element::{DrawingElement, ElementGeometry, ElementId};

/// Pick radius around pencil points and lines, in logical units
pub const PICK_RADIUS: f32 = 5.0;

/// Find the top-most element under `pos`.
///
/// Elements are scanned from last to first, so the most recently inserted
/// element wins when shapes overlap. The first hit stops the scan.
pub fn pick(elements: &[DrawingElement], pos: Pos2) -> Option<ElementId> {
    elements
        .iter()
        .rev()
        .find(|element| hit_test(element, pos))
        .map(|element| element.id().clone())
}

/// Shape-specific containment test for a single element.
pub fn hit_test(element: &DrawingElement, pos: Pos2) -> bool {
    match element.geometry() {
        // Only the recorded samples are pickable, not the segments between them
        ElementGeometry::Pencil(points) => points
            .iter()
            .any(|point| distance(pos, *point) <= PICK_RADIUS),
        ElementGeometry::Line { start, end } => {
            point_to_line_distance(pos, *start, *end) < PICK_RADIUS
        }
        ElementGeometry::Rectangle { start, end } => normalized_rect(*start, *end).contains(pos),
        ElementGeometry::Circle { start, end } => {
            let rect = normalized_rect(*start, *end);
            let rx = rect.width() / 2.0;
            let ry = rect.height() / 2.0;
            if rx <= f32::EPSILON || ry <= f32::EPSILON {
                return false;
            }

            let center = rect.center();
            let nx = (pos.x - center.x) / rx;
            let ny = (pos.y - center.y) / ry;
            nx * nx + ny * ny <= 1.0
        }
    }
}
