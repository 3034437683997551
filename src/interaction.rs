//! Gesture state machine that turns pointer events into scene mutations.

use egui::Pos2;
use log::{debug, info, trace, warn};

use crate::element::{DrawingElement, ElementId, ElementKind};
use crate::geometry::hit_testing;
use crate::id_generator::{IdGenerator, TimestampIdGenerator};
use crate::input::InputEvent;
use crate::state::{AppState, Tool, ToolPalette};

/// The gesture currently in progress
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    Drawing {
        active: ElementId,
    },
    Dragging {
        selected: ElementId,
        last_position: Pos2,
    },
}

impl GestureState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Drawing { .. } => "Drawing",
            Self::Dragging { .. } => "Dragging",
        }
    }
}

/// Result of feeding one event through [`Interaction::draw`]
#[derive(Debug, Clone, PartialEq)]
pub struct DrawStep {
    pub state: AppState,
    /// True when the element list changed and the scene must be repainted
    pub changed: bool,
}

impl DrawStep {
    fn unchanged(state: AppState) -> Self {
        Self {
            state,
            changed: false,
        }
    }

    fn changed(state: AppState) -> Self {
        Self {
            state,
            changed: true,
        }
    }
}

/// The interaction engine.
///
/// Holds only gesture-local state; the element list is passed in and handed
/// back on every call.
pub struct Interaction {
    gesture: GestureState,
    ids: Box<dyn IdGenerator>,
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new(Box::new(TimestampIdGenerator))
    }
}

impl std::fmt::Debug for Interaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interaction")
            .field("gesture", &self.gesture)
            .finish_non_exhaustive()
    }
}

impl Interaction {
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            gesture: GestureState::Idle,
            ids,
        }
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.gesture, GestureState::Idle)
    }

    /// Advance the state machine by one pointer event.
    pub fn draw(&mut self, state: AppState, palette: &ToolPalette, event: InputEvent) -> DrawStep {
        match event {
            InputEvent::PointerDown { position } => {
                if !self.is_idle() {
                    debug!("Pointer down during {}, dropping stale gesture", self.gesture.name());
                    self.reset();
                }
                self.on_pointer_down(state, palette, position)
            }
            InputEvent::PointerMove { position } => self.on_pointer_move(state, position),
            InputEvent::PointerUp | InputEvent::PointerLeave => {
                if !self.is_idle() {
                    debug!("{} gesture ended by {:?}", self.gesture.name(), event);
                }
                self.reset();
                DrawStep::unchanged(state)
            }
        }
    }

    fn reset(&mut self) {
        self.gesture = GestureState::Idle;
    }

    fn on_pointer_down(&mut self, mut state: AppState, palette: &ToolPalette, position: Pos2) -> DrawStep {
        match palette.tool {
            Tool::Eraser => match hit_testing::pick(&state.elements, position) {
                Some(id) => {
                    state.remove_element(&id);
                    info!("Erased element {}", id);
                    DrawStep::changed(state)
                }
                None => DrawStep::unchanged(state),
            },
            Tool::Selection => {
                if let Some(id) = hit_testing::pick(&state.elements, position) {
                    debug!("Selected element {} for dragging", id);
                    self.gesture = GestureState::Dragging {
                        selected: id,
                        last_position: position,
                    };
                }
                DrawStep::unchanged(state)
            }
            Tool::Pencil | Tool::Line | Tool::Rectangle | Tool::Circle => {
                let Some(kind) = palette.tool.element_kind() else {
                    return DrawStep::unchanged(state);
                };
                let element = DrawingElement::create(
                    self.ids.next_id(),
                    kind,
                    position,
                    palette.color.clone(),
                    palette.stroke_width,
                );
                info!("Started {} element {}", kind, element.id());
                self.gesture = GestureState::Drawing {
                    active: element.id().clone(),
                };
                state.elements.push(element);
                DrawStep::changed(state)
            }
        }
    }

    fn on_pointer_move(&mut self, mut state: AppState, position: Pos2) -> DrawStep {
        match &mut self.gesture {
            GestureState::Idle => DrawStep::unchanged(state),
            GestureState::Drawing { active } => {
                let Some(element) = state.find_element(active) else {
                    trace!("Active element {} is no longer in the scene", active);
                    return DrawStep::unchanged(state);
                };

                // Dispatch on the element itself; the tool may have changed mid-gesture
                let updated = match element.kind() {
                    ElementKind::Pencil => element.append_point(position),
                    ElementKind::Line | ElementKind::Rectangle | ElementKind::Circle => {
                        element.extend_to(position)
                    }
                };

                match updated {
                    Ok(element) => {
                        state.replace_element(element);
                        DrawStep::changed(state)
                    }
                    Err(err) => {
                        warn!("Ignoring pointer move for {}: {}", active, err);
                        DrawStep::unchanged(state)
                    }
                }
            }
            GestureState::Dragging {
                selected,
                last_position,
            } => {
                let delta = position - *last_position;
                *last_position = position;

                let Some(element) = state.find_element(selected) else {
                    trace!("Dragged element {} is no longer in the scene", selected);
                    return DrawStep::unchanged(state);
                };
                let moved = element.translate_by(delta);
                state.replace_element(moved);
                DrawStep::changed(state)
            }
        }
    }
}
