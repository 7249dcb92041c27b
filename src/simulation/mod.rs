//! Particle Engine - grains moving over an LED grid
//!
//! The engine only orchestrates. Motion rules live in systems/physics,
//! unit conversion and cube seams in spatial/, and every pixel, random
//! number and message goes through the `Renderer` it owns.
//!
//! Each step runs two passes over the grains:
//! - velocity: acceleration, jitter, speed cap
//! - position: edges or seams, collision against the pixel grid, grid update

use crate::core::{EngineError, EngineSettings};
use crate::domain::{ColourId, Particle, Rgb};
use crate::render::Renderer;
use crate::spatial::{CoordinateSpace, ParticleStore, PixelGrid};

#[path = "perf/step_stats.rs"]
mod step_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "commands/image.rs"]
mod image;
#[path = "step/velocity.rs"]
mod velocity;
#[path = "step/position.rs"]
mod position;
#[path = "step/step.rs"]
mod step;
mod facade;

pub use facade::SandWorld;
pub use step_stats::StepStats;

/// Acceleration applied to every grain each step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Acceleration {
    /// Same X/Y push on the whole display
    Planar(i32, i32),
    /// Gravity vector in cube space; each panel takes its own projection
    Spatial([i32; 3]),
}

pub struct ParticleEngine<R: Renderer> {
    renderer: R,
    grid: PixelGrid,
    space: CoordinateSpace,
    store: ParticleStore,

    // Settings
    acceleration: Acceleration,
    shake: u16,
    bounce_energy: u8,
    velocity_cap: u16,
    placement_attempts: u16,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    stats: StepStats,
}

impl<R: Renderer> ParticleEngine<R> {
    /// Build an engine sized to the renderer's grid
    pub fn new(renderer: R, settings: EngineSettings) -> Result<Self, EngineError> {
        init::create_engine(renderer, settings)
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn space(&self) -> &CoordinateSpace {
        &self.space
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn frame(&self) -> u64 { self.frame }

    // === Settings ===

    pub fn set_acceleration(&mut self, x: i16, y: i16) {
        settings::set_acceleration(self, x, y);
    }

    /// 3-D gravity for cube displays; flat displays use only x and y
    pub fn set_acceleration_3d(&mut self, x: i16, y: i16, z: i16) {
        settings::set_acceleration_3d(self, x, y, z);
    }

    pub fn set_velocity_cap(&mut self, cap: u16) {
        settings::set_velocity_cap(self, cap);
    }

    pub fn velocity_cap(&self) -> u16 { self.velocity_cap }

    pub fn set_shake(&mut self, shake: u16) {
        settings::set_shake(self, shake);
    }

    pub fn set_bounce_energy(&mut self, energy: u8) {
        settings::set_bounce_energy(self, energy);
    }

    /// Enable or disable step timing (counters are always collected)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    pub fn last_stats(&self) -> StepStats {
        settings::last_stats(self)
    }

    // === Particles ===

    /// Add a grain at a random free cell. Returns its index.
    pub fn add_particle(&mut self, colour: Rgb, vx: i16, vy: i16) -> Option<usize> {
        commands::add_particle(self, colour, vx, vy)
    }

    /// Add a grain at a given display cell
    pub fn add_particle_at(&mut self, x: u32, y: u32, colour: Rgb, vx: i16, vy: i16) -> Option<usize> {
        commands::add_particle_at(self, x, y, colour, vx, vy)
    }

    /// Add a grain at an exact particle-space position
    pub fn insert_particle(&mut self, particle: Particle, colour: Rgb) -> Option<usize> {
        commands::insert_particle(self, particle, colour)
    }

    /// Remove grain `index`; later grains shift down by one
    pub fn delete_particle(&mut self, index: usize) -> Option<Particle> {
        commands::delete_particle(self, index)
    }

    pub fn particle(&self, index: usize) -> Option<Particle> {
        self.store.get(index).copied()
    }

    pub fn particle_count(&self) -> usize {
        self.store.len()
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> + '_ {
        self.store.iter()
    }

    /// Forget every grain. Their pixels stay in the image as static pixels.
    pub fn clear_particles(&mut self) {
        commands::clear_particles(self);
    }

    // === Image ===

    /// Blank the image and the display. Grains keep their cells.
    pub fn clear_image(&mut self) {
        image::clear_image(self);
    }

    /// Turn every lit pixel not already owned by a grain into a grain
    pub fn img_to_particles(&mut self) -> usize {
        image::img_to_particles(self)
    }

    /// Paint a pixel that blocks grains but never moves. Black clears it.
    /// Cells held by a grain are left alone.
    pub fn set_static_pixel(&mut self, x: u32, y: u32, colour: Rgb) {
        image::set_static_pixel(self, x, y, colour);
    }

    /// Push the whole grid to the renderer
    pub fn update_display(&mut self) {
        image::update_display(self);
    }

    pub fn pixel_value(&self, x: u32, y: u32) -> ColourId {
        image::pixel_value(self, x, y)
    }

    pub fn set_pixel_value(&mut self, x: u32, y: u32, id: ColourId) {
        image::set_pixel_value(self, x, y, id);
    }

    /// Palette index for a colour, adding it when there is room
    pub fn colour_id(&mut self, colour: Rgb) -> ColourId {
        commands::resolve_colour(self, colour)
    }

    pub fn colour(&self, id: ColourId) -> Rgb {
        self.grid.colour(id)
    }

    // === Stepping ===

    /// Advance one step without presenting
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Advance one step and present the frame
    pub fn run_cycle(&mut self) {
        step::run_cycle(self);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
