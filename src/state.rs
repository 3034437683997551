use serde::{Deserialize, Serialize};

use crate::element::{
    DEFAULT_COLOR, DEFAULT_STROKE_WIDTH, DrawingElement, ElementId, ElementKind, clamp_stroke_width,
};

/// The tools offered by the palette, in palette order
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Selection,
    #[default]
    Pencil,
    Line,
    Rectangle,
    Circle,
    Eraser,
}

impl Tool {
    pub const ALL: [Tool; 6] = [
        Tool::Selection,
        Tool::Pencil,
        Tool::Line,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Eraser,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Selection => "Selection",
            Self::Pencil => "Pencil",
            Self::Line => "Line",
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Eraser => "Eraser",
        }
    }

    /// Element kind created by a drawing tool, `None` for interaction modes
    pub fn element_kind(&self) -> Option<ElementKind> {
        match self {
            Self::Pencil => Some(ElementKind::Pencil),
            Self::Line => Some(ElementKind::Line),
            Self::Rectangle => Some(ElementKind::Rectangle),
            Self::Circle => Some(ElementKind::Circle),
            Self::Selection | Self::Eraser => None,
        }
    }
}

/// Read-only `{tool, color, stroke width}` triple handed to the engine on every event
#[derive(Debug, Clone, PartialEq)]
pub struct ToolPalette {
    pub tool: Tool,
    pub color: String,
    pub stroke_width: f32,
}

impl Default for ToolPalette {
    fn default() -> Self {
        Self {
            tool: Tool::default(),
            color: DEFAULT_COLOR.to_owned(),
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl ToolPalette {
    pub fn new(tool: Tool, color: impl Into<String>, stroke_width: f32) -> Self {
        Self {
            tool,
            color: color.into(),
            stroke_width: clamp_stroke_width(stroke_width),
        }
    }
}

/// Snapshot of the scene owned by the surrounding application.
///
/// The element order is the paint order and the reverse pick order.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub elements: Vec<DrawingElement>,
    pub color: String,
    pub stroke_width: f32,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            color: DEFAULT_COLOR.to_owned(),
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Palette for `tool` using this state's color and stroke width
    pub fn palette(&self, tool: Tool) -> ToolPalette {
        ToolPalette::new(tool, self.color.clone(), self.stroke_width)
    }

    pub fn find_element(&self, id: &ElementId) -> Option<&DrawingElement> {
        self.elements.iter().find(|element| element.id() == id)
    }

    fn position_of(&self, id: &ElementId) -> Option<usize> {
        self.elements.iter().position(|element| element.id() == id)
    }

    /// Swap in a new version of an element, keeping its slot in the paint order.
    ///
    /// Returns false (and leaves the scene alone) when the id is unknown.
    pub fn replace_element(&mut self, element: DrawingElement) -> bool {
        match self.position_of(element.id()) {
            Some(index) => {
                self.elements[index] = element;
                true
            }
            None => false,
        }
    }

    pub fn remove_element(&mut self, id: &ElementId) -> Option<DrawingElement> {
        self.position_of(id).map(|index| self.elements.remove(index))
    }
}
