use crate::render::Renderer;

use super::position::apply_positions;
use super::velocity::apply_velocity;
use super::ParticleEngine;

/// Milliseconds since an arbitrary origin; only differences matter
#[cfg(target_arch = "wasm32")]
fn clock_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

pub(super) fn step<R: Renderer>(engine: &mut ParticleEngine<R>) {
    engine.stats.reset();
    engine.stats.particles = engine.store.len() as u32;
    let started = engine.perf_enabled.then(clock_ms);

    apply_velocity(engine);
    apply_positions(engine);

    if let Some(t0) = started {
        // Wall clock on wasm can step back
        engine.stats.step_ms = (clock_ms() - t0).max(0.0);
    }
    engine.frame += 1;

    let s = &engine.stats;
    tracing::trace!(
        frame = engine.frame,
        particles = s.particles,
        moved = s.moved,
        collisions = s.collisions,
        wall_hits = s.wall_hits,
        seam_crossings = s.seam_crossings,
        corner_stops = s.corner_stops,
        "step"
    );
}

pub(super) fn run_cycle<R: Renderer>(engine: &mut ParticleEngine<R>) {
    step(engine);
    engine.renderer.show_pixels();
}
