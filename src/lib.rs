#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod element;
pub mod error;
pub mod geometry;
pub mod id_generator;
pub mod input;
pub mod interaction;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod util;

pub use app::SketchApp;
pub use config::{Ambient, SketchConfig, Theme};
pub use element::{DrawingElement, ElementGeometry, ElementId, ElementKind};
pub use error::{ConfigError, ElementError};
pub use geometry::hit_testing::pick;
pub use id_generator::{IdGenerator, SequentialIdGenerator, TimestampIdGenerator};
pub use input::{InputEvent, InputHandler};
pub use interaction::{DrawStep, GestureState, Interaction};
pub use renderer::{RecordingSurface, Renderer, Surface};
pub use state::{AppState, Tool, ToolPalette};
