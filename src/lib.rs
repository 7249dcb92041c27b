//! Ledsand Engine - sand-like particles on LED matrix panels and LED cubes
//!
//! Architecture:
//! - core/          - Settings and errors
//! - domain/        - Colours, palette, particle record
//! - spatial/       - Pixel grid, particle space, cube seams, particle store
//! - systems/       - Motion rules (forces, edges, collisions)
//! - render/        - Renderer trait and the in-memory frame buffer
//! - simulation/    - Orchestration and the wasm facade
//! - animations/    - Standalone renderer effects

pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod render;
pub mod simulation;
pub mod animations;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&"Ledsand engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{EdgeMode, EngineError, EngineSettings, TopologyKind};
pub use animations::Crawler;
pub use domain::{ColourId, ColourPalette, Particle, Rgb, EMPTY_ID};
pub use render::{FrameBuffer, Renderer};
pub use simulation::{ParticleEngine, SandWorld, StepStats};
pub use spatial::{CoordinateSpace, CubeTopology, ParticleStore, PixelGrid};
