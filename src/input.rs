use egui::{Context, Pos2, Rect};

/// Pointer events consumed by the interaction engine.
///
/// Positions are surface-local logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed inside the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved over the canvas (with or without buttons pressed)
    PointerMove { position: Pos2 },
    /// Primary button was released
    PointerUp,
    /// Pointer left the canvas
    PointerLeave,
}

/// Convert a device-pixel position into logical surface coordinates.
///
/// Non-positive densities are treated as 1.
pub fn to_logical(device_position: Pos2, surface_origin: Pos2, pixel_density: f32) -> Pos2 {
    let density = if pixel_density > 0.0 { pixel_density } else { 1.0 };
    ((device_position - surface_origin) / density).to_pos2()
}

/// Handles converting raw egui pointer input into our canvas `InputEvent`s
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    was_inside: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process this frame's pointer state for a canvas occupying `canvas_rect`.
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        let pixels_per_point = ctx.pixels_per_point();
        ctx.input(|input| {
            let pointer = &input.pointer;
            self.translate(
                pointer.latest_pos(),
                pointer.primary_pressed(),
                pointer.primary_released(),
                canvas_rect,
                pixels_per_point,
            )
        })
    }

    fn translate(
        &mut self,
        pointer_pos: Option<Pos2>,
        pressed: bool,
        released: bool,
        canvas_rect: Rect,
        pixels_per_point: f32,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();

        // egui reports points; scale back to device pixels and run the
        // same conversion a raw pointer source would use
        let to_surface = |pos: Pos2| {
            to_logical(
                (pos.to_vec2() * pixels_per_point).to_pos2(),
                (canvas_rect.min.to_vec2() * pixels_per_point).to_pos2(),
                pixels_per_point,
            )
        };

        let inside = pointer_pos.is_some_and(|pos| canvas_rect.contains(pos));

        if let Some(pos) = pointer_pos.filter(|_| inside) {
            // A press already carries its position
            if pressed {
                events.push(InputEvent::PointerDown {
                    position: to_surface(pos),
                });
            } else if self.last_pointer_pos != Some(pos) {
                events.push(InputEvent::PointerMove {
                    position: to_surface(pos),
                });
            }
        }

        if released {
            events.push(InputEvent::PointerUp);
        } else if self.was_inside && !inside {
            events.push(InputEvent::PointerLeave);
        }

        if !events.is_empty() {
            log::trace!("Canvas input events: {:?}", events);
        }

        self.was_inside = inside;
        self.last_pointer_pos = pointer_pos;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn canvas() -> Rect {
        Rect::from_min_max(pos2(100.0, 50.0), pos2(500.0, 450.0))
    }

    #[test]
    fn test_to_logical() {
        let p = to_logical(pos2(260.0, 140.0), pos2(200.0, 100.0), 2.0);
        assert_eq!(p, pos2(30.0, 20.0));
        assert_eq!(to_logical(pos2(5.0, 5.0), pos2(0.0, 0.0), 0.0), pos2(5.0, 5.0));
    }

    #[test]
    fn test_press_inside_canvas() {
        let mut handler = InputHandler::new();
        let events = handler.translate(Some(pos2(110.0, 60.0)), true, false, canvas(), 2.0);
        assert_eq!(
            events,
            vec![
                InputEvent::PointerDown {
                    position: pos2(10.0, 10.0)
                },
            ]
        );
    }

    #[test]
    fn test_tap_leaves_invisible_pencil_stroke() {
        use crate::config::SketchConfig;
        use crate::id_generator::SequentialIdGenerator;
        use crate::interaction::Interaction;
        use crate::renderer::{DrawCommand, RecordingSurface, Renderer};
        use crate::state::{AppState, Tool, ToolPalette};

        let mut handler = InputHandler::new();
        let mut events = handler.translate(Some(pos2(150.0, 100.0)), true, false, canvas(), 1.0);
        events.extend(handler.translate(Some(pos2(150.0, 100.0)), false, true, canvas(), 1.0));
        assert_eq!(
            events,
            vec![
                InputEvent::PointerDown {
                    position: pos2(50.0, 50.0)
                },
                InputEvent::PointerUp,
            ]
        );

        let mut interaction = Interaction::new(Box::new(SequentialIdGenerator::new()));
        let palette = ToolPalette::new(Tool::Pencil, "#000000", 2.0);
        let mut state = AppState::new();
        for event in events {
            state = interaction.draw(state, &palette, event).state;
        }
        assert_eq!(state.elements[0].points(), Some(&[pos2(50.0, 50.0)][..]));

        let mut ambient = SketchConfig::default().ambient(false);
        ambient.grid_spacing = 0.0;
        let mut surface = RecordingSurface::new();
        Renderer::render(&mut surface, &state, egui::vec2(400.0, 400.0), 1.0, &ambient);
        assert!(
            !surface
                .commands()
                .iter()
                .any(|cmd| matches!(cmd, DrawCommand::Polyline { .. }))
        );
    }

    #[test]
    fn test_move_after_press_is_reported() {
        let mut handler = InputHandler::new();
        handler.translate(Some(pos2(110.0, 60.0)), true, false, canvas(), 1.0);
        let events = handler.translate(Some(pos2(120.0, 70.0)), false, false, canvas(), 1.0);
        assert_eq!(
            events,
            vec![InputEvent::PointerMove {
                position: pos2(20.0, 20.0)
            }]
        );
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut handler = InputHandler::new();
        let events = handler.translate(Some(pos2(10.0, 10.0)), true, false, canvas(), 1.0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_leaving_canvas() {
        let mut handler = InputHandler::new();
        handler.translate(Some(pos2(110.0, 60.0)), false, false, canvas(), 1.0);
        let events = handler.translate(Some(pos2(20.0, 60.0)), false, false, canvas(), 1.0);
        assert_eq!(events, vec![InputEvent::PointerLeave]);

        let events = handler.translate(None, false, false, canvas(), 1.0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_release_emits_pointer_up() {
        let mut handler = InputHandler::new();
        handler.translate(Some(pos2(110.0, 60.0)), true, false, canvas(), 1.0);
        let events = handler.translate(Some(pos2(110.0, 60.0)), false, true, canvas(), 1.0);
        assert_eq!(events, vec![InputEvent::PointerUp]);
    }
}
