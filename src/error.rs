use thiserror::Error;

use crate::element::ElementKind;

/// Errors raised by the element mutation operations.
///
/// These never reach the user: the interaction engine treats them as a
/// no-op and leaves the scene untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ElementError {
    #[error("cannot {operation} a {kind} element")]
    KindMismatch {
        operation: &'static str,
        kind: ElementKind,
    },
}

/// Errors that can occur while loading the sketch configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid color {0:?}, expected #rgb, #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    #[error("Grid spacing must be at least 1, got {0}")]
    InvalidGridSpacing(f32),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
