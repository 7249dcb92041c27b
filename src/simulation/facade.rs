use wasm_bindgen::prelude::*;

use crate::core::EngineSettings;
use crate::domain::{Particle, Rgb};
use crate::render::FrameBuffer;

use super::step_stats::StepStats;
use super::ParticleEngine;

/// Browser-facing engine drawing into an in-memory frame.
///
/// JS reads the presented frame straight out of wasm memory through
/// `frame_ptr` / `frame_len` (ABGR, top row first).
#[wasm_bindgen]
pub struct SandWorld {
    core: ParticleEngine<FrameBuffer>,
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn index_or_minus_one(index: Option<usize>) -> i32 {
    index.map(|i| i as i32).unwrap_or(-1)
}

#[wasm_bindgen]
impl SandWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<SandWorld, JsValue> {
        Self::build(width, height, EngineSettings::default())
    }

    /// Build from a JSON settings document (every field optional)
    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(width: u32, height: u32, settings_json: String) -> Result<SandWorld, JsValue> {
        let settings = EngineSettings::from_json(&settings_json).map_err(to_js)?;
        Self::build(width, height, settings)
    }

    fn build(width: u32, height: u32, settings: EngineSettings) -> Result<SandWorld, JsValue> {
        let renderer = FrameBuffer::new(width, height, settings.seed);
        let core = ParticleEngine::new(renderer, settings).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn get_step_stats(&self) -> StepStats {
        self.core.last_stats()
    }

    pub fn set_acceleration(&mut self, x: i16, y: i16) {
        self.core.set_acceleration(x, y);
    }

    pub fn set_acceleration_3d(&mut self, x: i16, y: i16, z: i16) {
        self.core.set_acceleration_3d(x, y, z);
    }

    pub fn set_velocity_cap(&mut self, cap: u16) {
        self.core.set_velocity_cap(cap);
    }

    pub fn set_shake(&mut self, shake: u16) {
        self.core.set_shake(shake);
    }

    pub fn set_bounce_energy(&mut self, energy: u8) {
        self.core.set_bounce_energy(energy);
    }

    /// Returns the new particle's index, or -1 when no cell was free
    pub fn add_particle(&mut self, r: u8, g: u8, b: u8, vx: i16, vy: i16) -> i32 {
        index_or_minus_one(self.core.add_particle(Rgb::new(r, g, b), vx, vy))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_particle_at(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, vx: i16, vy: i16) -> i32 {
        index_or_minus_one(self.core.add_particle_at(x, y, Rgb::new(r, g, b), vx, vy))
    }

    pub fn delete_particle(&mut self, index: u32) -> bool {
        self.core.delete_particle(index as usize).is_some()
    }

    /// `[x, y, vx, vy]` in particle space, empty when out of range
    pub fn get_particle(&self, index: u32) -> Vec<i32> {
        match self.core.particle(index as usize) {
            Some(Particle { x, y, vx, vy }) => vec![x, y, vx as i32, vy as i32],
            None => Vec::new(),
        }
    }

    pub fn clear_particles(&mut self) {
        self.core.clear_particles();
    }

    pub fn clear_image(&mut self) {
        self.core.clear_image();
    }

    pub fn img_to_particles(&mut self) -> u32 {
        self.core.img_to_particles() as u32
    }

    pub fn set_static_pixel(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        self.core.set_static_pixel(x, y, Rgb::new(r, g, b));
    }

    pub fn update_display(&mut self) {
        self.core.update_display();
    }

    pub fn step(&mut self) {
        self.core.step();
    }

    pub fn run_cycle(&mut self) {
        self.core.run_cycle();
    }

    /// Pointer to the presented ABGR frame (for JS `Uint32Array` views)
    pub fn frame_ptr(&self) -> *const u32 {
        self.core.renderer().frame_ptr()
    }

    pub fn frame_len(&self) -> usize {
        self.core.renderer().frame().len()
    }

    pub fn frame_byte_len(&self) -> usize {
        self.frame_len() * std::mem::size_of::<u32>()
    }

    /// Diagnostics since the last call (they are also sent to the console)
    pub fn take_messages(&mut self) -> Vec<String> {
        self.core.renderer_mut().take_messages()
    }
}
