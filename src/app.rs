use serde::{Deserialize, Serialize};

use crate::config::{Ambient, SketchConfig, Theme};
use crate::element::clamp_stroke_width;
use crate::input::{InputEvent, InputHandler};
use crate::interaction::Interaction;
use crate::panels::{central_panel, tools_panel};
use crate::state::{AppState, Tool, ToolPalette};

/// Storage key for the tool palette preferences
pub const PREFERENCES_KEY: &str = "eframe_sketch_preferences";

/// Palette settings remembered between runs. The drawing itself is not persisted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Preferences {
    pub tool: Tool,
    pub color: String,
    pub stroke_width: f32,
    pub theme: Theme,
}

impl Default for Preferences {
    fn default() -> Self {
        Self::from_config(&SketchConfig::default())
    }
}

impl Preferences {
    pub fn from_config(config: &SketchConfig) -> Self {
        Self {
            tool: Tool::default(),
            color: config.default_color.clone(),
            stroke_width: clamp_stroke_width(config.default_stroke_width),
            theme: config.theme,
        }
    }
}

#[derive(Debug)]
pub struct SketchApp {
    pub(crate) config: SketchConfig,
    pub(crate) tool: Tool,
    pub(crate) theme: Theme,
    applied_theme: Option<Theme>,
    pub(crate) state: AppState,
    pub(crate) interaction: Interaction,
    pub(crate) input: InputHandler,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_preferences(SketchConfig::default(), Preferences::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SketchConfig) -> Self {
        let preferences = cc
            .storage
            .and_then(|storage| eframe::get_value::<Preferences>(storage, PREFERENCES_KEY))
            .unwrap_or_else(|| Preferences::from_config(&config));
        log::info!("Starting sketch with {:?}", preferences);

        Self::with_preferences(config, preferences)
    }

    pub fn with_preferences(config: SketchConfig, preferences: Preferences) -> Self {
        let state = AppState {
            color: preferences.color,
            stroke_width: clamp_stroke_width(preferences.stroke_width),
            ..AppState::default()
        };

        Self {
            config,
            tool: preferences.tool,
            theme: preferences.theme,
            applied_theme: None,
            state,
            interaction: Interaction::default(),
            input: InputHandler::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            tool: self.tool,
            color: self.state.color.clone(),
            stroke_width: self.state.stroke_width,
            theme: self.theme,
        }
    }

    pub fn palette(&self) -> ToolPalette {
        self.state.palette(self.tool)
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            log::info!("Tool selected: {}", tool.label());
            self.tool = tool;
        }
    }

    /// Feed pointer events through the interaction engine in arrival order.
    ///
    /// Returns true when the scene changed.
    pub fn apply_input(&mut self, events: Vec<InputEvent>) -> bool {
        let palette = self.palette();
        let mut changed = false;
        for event in events {
            let step = self
                .interaction
                .draw(std::mem::take(&mut self.state), &palette, event);
            self.state = step.state;
            changed |= step.changed;
        }
        changed
    }

    pub(crate) fn ambient(&self, ctx: &egui::Context) -> Ambient {
        let dark = self.theme.is_dark(ctx.style().visuals.dark_mode);
        self.config.ambient(dark)
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.theme) {
            return;
        }
        let preference = match self.theme {
            Theme::System => egui::ThemePreference::System,
            Theme::Light => egui::ThemePreference::Light,
            Theme::Dark => egui::ThemePreference::Dark,
        };
        log::debug!("Applying {} theme", self.theme.label());
        ctx.set_theme(preference);
        self.applied_theme = Some(self.theme);
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, PREFERENCES_KEY, &self.preferences());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
