// src/renderer.rs
use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use crate::config::Ambient;
use crate::element::{DrawingElement, ElementGeometry};
use crate::geometry::normalized_rect;
use crate::state::AppState;

/// Segments used when an ellipse has to be flattened into a polyline
const ELLIPSE_SEGMENTS: usize = 64;

const GRID_LINE_WIDTH: f32 = 1.0;

/// Upper bound on grid lines per axis
const MAX_GRID_LINES: usize = 4096;

/// How open path ends and path corners are finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineStyle {
    pub cap: LineCap,
    pub join: LineJoin,
}

impl LineStyle {
    pub const ROUND: Self = Self {
        cap: LineCap::Round,
        join: LineJoin::Round,
    };
}

/// A target the scene can be painted onto.
///
/// Coordinates passed to the stroke methods are logical units; the surface
/// maps them to its backing pixels using the scale set by [`Surface::set_scale`].
pub trait Surface {
    /// Resize the backing store to the given size in device pixels
    fn resize(&mut self, width_px: u32, height_px: u32);

    /// Set the logical-to-device scale factor
    fn set_scale(&mut self, scale: f32);

    /// Fill the whole surface
    fn fill(&mut self, color: Color32);

    fn set_line_style(&mut self, style: LineStyle);

    /// Connect consecutive points with straight segments
    fn stroke_polyline(&mut self, points: &[Pos2], stroke: Stroke);

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke);

    fn stroke_ellipse(&mut self, center: Pos2, radius: Vec2, stroke: Stroke);
}

/// Repaints a whole scene from scratch.
///
/// Stateless: the output depends only on the elements, viewport size, pixel
/// density and ambient colors passed in.
pub struct Renderer;

impl Renderer {
    /// Render the full scene for `state` onto `surface`.
    pub fn render(
        surface: &mut dyn Surface,
        state: &AppState,
        viewport: Vec2,
        pixel_density: f32,
        ambient: &Ambient,
    ) {
        Self::render_elements(surface, &state.elements, viewport, pixel_density, ambient);
    }

    pub fn render_elements(
        surface: &mut dyn Surface,
        elements: &[DrawingElement],
        viewport: Vec2,
        pixel_density: f32,
        ambient: &Ambient,
    ) {
        let density = if pixel_density > 0.0 { pixel_density } else { 1.0 };
        let viewport = viewport.max(Vec2::ZERO);

        // 1. Backing store in device pixels, drawing in logical units
        let physical = viewport * density;
        surface.resize(physical.x.round() as u32, physical.y.round() as u32);
        surface.set_scale(density);

        // 2. Background
        surface.fill(ambient.background_color);

        // 3. Reference grid
        surface.set_line_style(LineStyle::default());
        Self::draw_grid(surface, viewport, ambient);

        // 4. Elements, oldest first
        surface.set_line_style(LineStyle::ROUND);
        for element in elements {
            Self::draw_element(surface, element);
        }
    }

    fn draw_grid(surface: &mut dyn Surface, viewport: Vec2, ambient: &Ambient) {
        let spacing = ambient.grid_spacing;
        if !(spacing > 0.0) {
            return;
        }

        let stroke = Stroke::new(GRID_LINE_WIDTH, ambient.grid_line_color);

        for x in grid_offsets(spacing, viewport.x) {
            surface.stroke_polyline(&[Pos2::new(x, 0.0), Pos2::new(x, viewport.y)], stroke);
        }
        for y in grid_offsets(spacing, viewport.y) {
            surface.stroke_polyline(&[Pos2::new(0.0, y), Pos2::new(viewport.x, y)], stroke);
        }
    }

    fn draw_element(surface: &mut dyn Surface, element: &DrawingElement) {
        let stroke = Stroke::new(element.stroke_width(), parse_color(element.color()));

        match element.geometry() {
            ElementGeometry::Pencil(points) => {
                // A lone sample produces no visible stroke
                if points.len() >= 2 {
                    surface.stroke_polyline(points, stroke);
                }
            }
            ElementGeometry::Line { start, end } => {
                surface.stroke_polyline(&[*start, *end], stroke);
            }
            ElementGeometry::Rectangle { start, end } => {
                surface.stroke_rect(normalized_rect(*start, *end), stroke);
            }
            ElementGeometry::Circle { start, end } => {
                let rect = normalized_rect(*start, *end);
                surface.stroke_ellipse(rect.center(), rect.size() / 2.0, stroke);
            }
        }
    }
}

/// Offsets of the interior grid lines along one axis: multiples of `spacing`
/// strictly inside `0..extent`.
fn grid_offsets(spacing: f32, extent: f32) -> impl Iterator<Item = f32> {
    let count = ((extent / spacing).ceil() as usize).min(MAX_GRID_LINES);
    (1..count)
        .map(move |i| i as f32 * spacing)
        .filter(move |offset| *offset < extent)
}

/// Parse an element color string, falling back to black.
pub fn parse_color(color: &str) -> Color32 {
    Color32::from_hex(color).unwrap_or_else(|_| {
        log::debug!("Unparsable element color {:?}, drawing in black", color);
        Color32::BLACK
    })
}

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Resize { width_px: u32, height_px: u32 },
    SetScale(f32),
    Fill(Color32),
    SetLineStyle(LineStyle),
    Polyline { points: Vec<Pos2>, stroke: Stroke },
    Rect { rect: Rect, stroke: Stroke },
    Ellipse { center: Pos2, radius: Vec2, stroke: Stroke },
}

/// A surface that records every call as a display list.
///
/// Two renders produce identical output exactly when their display lists
/// compare equal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width_px: u32, height_px: u32) {
        // A resize discards whatever was on the backing store
        self.commands.clear();
        self.commands.push(DrawCommand::Resize { width_px, height_px });
    }

    fn set_scale(&mut self, scale: f32) {
        self.commands.push(DrawCommand::SetScale(scale));
    }

    fn fill(&mut self, color: Color32) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn set_line_style(&mut self, style: LineStyle) {
        self.commands.push(DrawCommand::SetLineStyle(style));
    }

    fn stroke_polyline(&mut self, points: &[Pos2], stroke: Stroke) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            stroke,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        self.commands.push(DrawCommand::Rect { rect, stroke });
    }

    fn stroke_ellipse(&mut self, center: Pos2, radius: Vec2, stroke: Stroke) {
        self.commands.push(DrawCommand::Ellipse {
            center,
            radius,
            stroke,
        });
    }
}

/// Paints into an egui `Painter`.
///
/// egui owns the backing buffer and applies pixels-per-point itself, so
/// `resize` and `set_scale` only need to keep logical coordinates logical.
/// Logical coordinates are offset by the canvas origin.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
    line_style: LineStyle,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, canvas_rect: Rect) -> Self {
        Self {
            painter,
            origin: canvas_rect.min,
            line_style: LineStyle::default(),
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        pos + self.origin.to_vec2()
    }

    fn round_cap(&self, pos: Pos2, stroke: Stroke) {
        if self.line_style.cap == LineCap::Round {
            self.painter.circle_filled(pos, stroke.width / 2.0, stroke.color);
        }
    }
}

impl Surface for PainterSurface<'_> {
    fn resize(&mut self, width_px: u32, height_px: u32) {
        log::trace!("Canvas backing size {}x{} px", width_px, height_px);
    }

    fn set_scale(&mut self, _scale: f32) {}

    fn fill(&mut self, color: Color32) {
        self.painter.rect_filled(self.painter.clip_rect(), 0.0, color);
    }

    fn set_line_style(&mut self, style: LineStyle) {
        self.line_style = style;
    }

    fn stroke_polyline(&mut self, points: &[Pos2], stroke: Stroke) {
        let screen: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        let (Some(first), Some(last)) = (screen.first().copied(), screen.last().copied()) else {
            return;
        };

        if self.line_style.join == LineJoin::Round && screen.len() > 2 {
            // egui mitres its joins; discs on the inner vertices round them off
            for vertex in &screen[1..screen.len() - 1] {
                self.painter.circle_filled(*vertex, stroke.width / 2.0, stroke.color);
            }
        }
        self.painter.add(Shape::line(screen, stroke));
        self.round_cap(first, stroke);
        self.round_cap(last, stroke);
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        let rect = rect.translate(self.origin.to_vec2());
        self.painter.rect_stroke(rect, 0.0, stroke);
    }

    fn stroke_ellipse(&mut self, center: Pos2, radius: Vec2, stroke: Stroke) {
        let center = self.to_screen(center);
        let points: Vec<Pos2> = (0..ELLIPSE_SEGMENTS)
            .map(|i| {
                let angle = i as f32 / ELLIPSE_SEGMENTS as f32 * std::f32::consts::TAU;
                Pos2::new(
                    center.x + radius.x * angle.cos(),
                    center.y + radius.y * angle.sin(),
                )
            })
            .collect();
        self.painter.add(Shape::closed_line(points, stroke));
    }
}
