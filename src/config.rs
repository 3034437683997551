use egui::Color32;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::element::{DEFAULT_COLOR, DEFAULT_STROKE_WIDTH};
use crate::error::{ConfigError, ConfigResult};

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "EFRAME_SKETCH_CONFIG";

pub const DEFAULT_GRID_SPACING: f32 = 20.0;

/// Smallest grid spacing a config may request, in logical units
pub const MIN_GRID_SPACING: f32 = 1.0;

/// Preset colors offered by the tool palette
pub const PRESET_COLORS: [&str; 15] = [
    "#000000", "#343a40", "#495057", "#c92a2a", "#a61e4d", "#862e9c", "#5f3dc4", "#364fc7",
    "#1864ab", "#0b7285", "#087f5b", "#2b8a3e", "#5c940d", "#e67700", "#d9480f",
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow the platform's dark/light preference
    #[default]
    System,
    Light,
    Dark,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Resolve to dark or light, using `system_dark` when following the platform
    pub fn is_dark(&self, system_dark: bool) -> bool {
        match self {
            Self::System => system_dark,
            Self::Light => false,
            Self::Dark => true,
        }
    }
}

/// Everything the renderer needs from the surrounding theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ambient {
    pub background_color: Color32,
    pub grid_line_color: Color32,
    /// Grid spacing in logical units; non-positive disables the grid
    pub grid_spacing: f32,
}

impl Default for Ambient {
    fn default() -> Self {
        Self {
            background_color: Color32::WHITE,
            grid_line_color: Color32::from_black_alpha(20),
            grid_spacing: DEFAULT_GRID_SPACING,
        }
    }
}

/// Background and grid colors for one theme, as hex strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub background: String,
    pub grid_line: String,
}

impl ThemeColors {
    fn light() -> Self {
        Self {
            background: "#ffffff".to_owned(),
            grid_line: "#00000014".to_owned(),
        }
    }

    fn dark() -> Self {
        Self {
            background: "#18181b".to_owned(),
            grid_line: "#ffffff14".to_owned(),
        }
    }
}

/// Sketch configuration, loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing keys keep their defaults
pub struct SketchConfig {
    pub theme: Theme,
    pub grid_spacing: f32,
    pub default_color: String,
    pub default_stroke_width: f32,
    pub light: ThemeColors,
    pub dark: ThemeColors,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            grid_spacing: DEFAULT_GRID_SPACING,
            default_color: DEFAULT_COLOR.to_owned(),
            default_stroke_width: DEFAULT_STROKE_WIDTH,
            light: ThemeColors::light(),
            dark: ThemeColors::dark(),
        }
    }
}

fn parse_hex(color: &str) -> ConfigResult<Color32> {
    Color32::from_hex(color).map_err(|_| ConfigError::InvalidColor(color.to_owned()))
}

impl SketchConfig {
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], or defaults when unset.
    pub fn from_env() -> ConfigResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                log::info!("Loading sketch config from {:?}", path);
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.grid_spacing >= MIN_GRID_SPACING) {
            return Err(ConfigError::InvalidGridSpacing(self.grid_spacing));
        }
        for color in [
            &self.default_color,
            &self.light.background,
            &self.light.grid_line,
            &self.dark.background,
            &self.dark.grid_line,
        ] {
            parse_hex(color)?;
        }
        Ok(())
    }

    /// Ambient colors for the light or dark variant.
    ///
    /// Colors that fail to parse fall back to the built-in defaults.
    pub fn ambient(&self, dark_mode: bool) -> Ambient {
        let (colors, fallback) = if dark_mode {
            (&self.dark, ThemeColors::dark())
        } else {
            (&self.light, ThemeColors::light())
        };
        let resolve = |value: &str, fallback: &str| {
            parse_hex(value).or_else(|_| parse_hex(fallback)).unwrap_or(Color32::GRAY)
        };

        Ambient {
            background_color: resolve(&colors.background, &fallback.background),
            grid_line_color: resolve(&colors.grid_line, &fallback.grid_line),
            grid_spacing: self.grid_spacing,
        }
    }
}
