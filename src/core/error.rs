//! Error types for engine construction and configuration.
//!
//! Runtime conditions (palette exhaustion, store growth, failed placement,
//! boundary bounces) are normal control flow and never surface here.

use std::fmt;

/// Errors that abort engine construction.
#[derive(Debug)]
pub enum EngineError {
    /// Cube mode needs a 3x2 arrangement of square panels.
    InvalidTopology {
        width: u32,
        height: u32,
        panel_size: u32,
    },
    /// Width or height is zero.
    EmptyGrid { width: u32, height: u32 },
    /// A settings value is outside its usable range.
    InvalidSettings(String),
    /// Settings JSON could not be parsed.
    Config(serde_json::Error),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidTopology { width, height, panel_size } => write!(
                f,
                "cube layout needs a {}x{} grid for panel size {}, got {}x{}",
                panel_size * 3,
                panel_size * 2,
                panel_size,
                width,
                height
            ),
            EngineError::EmptyGrid { width, height } => {
                write!(f, "grid must have non-zero size, got {}x{}", width, height)
            }
            EngineError::InvalidSettings(msg) => write!(f, "invalid settings: {}", msg),
            EngineError::Config(e) => write!(f, "failed to parse settings: {}", e),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::Config(e)
    }
}
