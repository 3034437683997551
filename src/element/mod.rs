use egui::{Pos2, Rect, Vec2};
use std::fmt;

use crate::error::ElementError;
use crate::geometry;

mod common;

pub use common::{DEFAULT_COLOR, DEFAULT_STROKE_WIDTH, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
pub(crate) use common::clamp_stroke_width;

/// Opaque, never-reused element identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementId(String);

impl ElementId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ElementId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The kinds of shape that can live in the scene.
///
/// Eraser and selection are interaction modes, not element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Pencil,
    Line,
    Rectangle,
    Circle,
}

impl ElementKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pencil => "pencil",
            Self::Line => "line",
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind-specific geometry of an element.
///
/// Corner pairs carry no ordering guarantee; consumers normalize them with
/// [`geometry::normalized_rect`].
#[derive(Debug, Clone, PartialEq)]
pub enum ElementGeometry {
    Pencil(Vec<Pos2>),
    Line { start: Pos2, end: Pos2 },
    Rectangle { start: Pos2, end: Pos2 },
    Circle { start: Pos2, end: Pos2 },
}

impl ElementGeometry {
    fn kind(&self) -> ElementKind {
        match self {
            Self::Pencil(_) => ElementKind::Pencil,
            Self::Line { .. } => ElementKind::Line,
            Self::Rectangle { .. } => ElementKind::Rectangle,
            Self::Circle { .. } => ElementKind::Circle,
        }
    }
}

/// One drawn shape.
///
/// All mutation operations are pure: they return a new element carrying the
/// same identifier and kind, and leave `self` untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingElement {
    id: ElementId,
    color: String,
    stroke_width: f32,
    geometry: ElementGeometry,
}

impl DrawingElement {
    /// Create an element whose corners (or single pencil point) sit at `origin`.
    pub fn create(
        id: ElementId,
        kind: ElementKind,
        origin: Pos2,
        color: impl Into<String>,
        stroke_width: f32,
    ) -> Self {
        let geometry = match kind {
            ElementKind::Pencil => ElementGeometry::Pencil(vec![origin]),
            ElementKind::Line => ElementGeometry::Line {
                start: origin,
                end: origin,
            },
            ElementKind::Rectangle => ElementGeometry::Rectangle {
                start: origin,
                end: origin,
            },
            ElementKind::Circle => ElementGeometry::Circle {
                start: origin,
                end: origin,
            },
        };

        Self {
            id,
            color: color.into(),
            stroke_width: clamp_stroke_width(stroke_width),
            geometry,
        }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.geometry.kind()
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn geometry(&self) -> &ElementGeometry {
        &self.geometry
    }

    /// Recorded points of a pencil stroke, `None` for corner-based kinds
    pub fn points(&self) -> Option<&[Pos2]> {
        match &self.geometry {
            ElementGeometry::Pencil(points) => Some(points),
            _ => None,
        }
    }

    /// The two free-form corners of a line, rectangle or circle
    pub fn corners(&self) -> Option<(Pos2, Pos2)> {
        match &self.geometry {
            ElementGeometry::Pencil(_) => None,
            ElementGeometry::Line { start, end }
            | ElementGeometry::Rectangle { start, end }
            | ElementGeometry::Circle { start, end } => Some((*start, *end)),
        }
    }

    /// Normalized bounding box of the element's geometry (stroke width excluded)
    pub fn bounds(&self) -> Rect {
        match &self.geometry {
            ElementGeometry::Pencil(points) => geometry::bounds_of(points),
            ElementGeometry::Line { start, end }
            | ElementGeometry::Rectangle { start, end }
            | ElementGeometry::Circle { start, end } => geometry::normalized_rect(*start, *end),
        }
    }

    /// Append a sample to a pencil stroke.
    pub fn append_point(&self, point: Pos2) -> Result<Self, ElementError> {
        match &self.geometry {
            ElementGeometry::Pencil(points) => {
                let mut points = points.clone();
                points.push(point);
                Ok(self.with_geometry(ElementGeometry::Pencil(points)))
            }
            _ => Err(ElementError::KindMismatch {
                operation: "append a point to",
                kind: self.kind(),
            }),
        }
    }

    /// Move the second corner of a line, rectangle or circle to `point`.
    pub fn extend_to(&self, point: Pos2) -> Result<Self, ElementError> {
        let geometry = match &self.geometry {
            ElementGeometry::Pencil(_) => {
                return Err(ElementError::KindMismatch {
                    operation: "extend",
                    kind: self.kind(),
                });
            }
            ElementGeometry::Line { start, .. } => ElementGeometry::Line {
                start: *start,
                end: point,
            },
            ElementGeometry::Rectangle { start, .. } => ElementGeometry::Rectangle {
                start: *start,
                end: point,
            },
            ElementGeometry::Circle { start, .. } => ElementGeometry::Circle {
                start: *start,
                end: point,
            },
        };
        Ok(self.with_geometry(geometry))
    }

    /// Offset every coordinate of the element by `delta`.
    pub fn translate_by(&self, delta: Vec2) -> Self {
        let geometry = match &self.geometry {
            ElementGeometry::Pencil(points) => {
                ElementGeometry::Pencil(points.iter().map(|point| *point + delta).collect())
            }
            ElementGeometry::Line { start, end } => ElementGeometry::Line {
                start: *start + delta,
                end: *end + delta,
            },
            ElementGeometry::Rectangle { start, end } => ElementGeometry::Rectangle {
                start: *start + delta,
                end: *end + delta,
            },
            ElementGeometry::Circle { start, end } => ElementGeometry::Circle {
                start: *start + delta,
                end: *end + delta,
            },
        };
        self.with_geometry(geometry)
    }

    fn with_geometry(&self, geometry: ElementGeometry) -> Self {
        debug_assert_eq!(self.geometry.kind(), geometry.kind());
        Self {
            id: self.id.clone(),
            color: self.color.clone(),
            stroke_width: self.stroke_width,
            geometry,
        }
    }
}

/// Factory functions for creating elements
pub mod factory {
    use super::*;

    /// A pencil stroke starting at `origin` and continuing through `rest`.
    pub fn create_pencil(
        id: impl Into<ElementId>,
        origin: Pos2,
        rest: &[Pos2],
        color: &str,
        width: f32,
    ) -> DrawingElement {
        let mut element = DrawingElement::create(id.into(), ElementKind::Pencil, origin, color, width);
        if let ElementGeometry::Pencil(samples) = &mut element.geometry {
            samples.extend_from_slice(rest);
        }
        element
    }

    pub fn create_shape(
        id: impl Into<ElementId>,
        kind: ElementKind,
        start: Pos2,
        end: Pos2,
        color: &str,
        width: f32,
    ) -> DrawingElement {
        let element = DrawingElement::create(id.into(), kind, start, color, width);
        // Pencil has no second corner; keep it as a single-point stroke
        element.extend_to(end).unwrap_or(element)
    }
}
