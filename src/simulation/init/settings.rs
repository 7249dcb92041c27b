use crate::render::Renderer;

use super::step_stats::StepStats;
use super::{Acceleration, ParticleEngine};

pub(super) fn set_acceleration<R: Renderer>(engine: &mut ParticleEngine<R>, x: i16, y: i16) {
    engine.acceleration = Acceleration::Planar(x as i32, y as i32);
    tracing::debug!(x, y, cap = engine.velocity_cap, "acceleration set");
    let msg = format!("Acceleration set: {},{} cap: {}", x, y, engine.velocity_cap);
    engine.renderer.output_message(&msg);
}

pub(super) fn set_acceleration_3d<R: Renderer>(engine: &mut ParticleEngine<R>, x: i16, y: i16, z: i16) {
    engine.acceleration = Acceleration::Spatial([x as i32, y as i32, z as i32]);
    tracing::debug!(x, y, z, cap = engine.velocity_cap, "acceleration set");
    let msg = format!("Acceleration set: {},{},{} cap: {}", x, y, z, engine.velocity_cap);
    engine.renderer.output_message(&msg);
}

pub(super) fn set_velocity_cap<R: Renderer>(engine: &mut ParticleEngine<R>, cap: u16) {
    engine.velocity_cap = cap;
}

pub(super) fn set_shake<R: Renderer>(engine: &mut ParticleEngine<R>, shake: u16) {
    engine.shake = shake;
}

pub(super) fn set_bounce_energy<R: Renderer>(engine: &mut ParticleEngine<R>, energy: u8) {
    engine.bounce_energy = energy;
}

pub(super) fn enable_perf_metrics<R: Renderer>(engine: &mut ParticleEngine<R>, enabled: bool) {
    engine.perf_enabled = enabled;
}

pub(super) fn last_stats<R: Renderer>(engine: &ParticleEngine<R>) -> StepStats {
    engine.stats
}
