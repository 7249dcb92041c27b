//! Core - configuration and errors shared by every layer

pub mod config;
pub mod error;

pub use config::{EdgeMode, EngineSettings, TopologyKind};
pub use error::EngineError;
