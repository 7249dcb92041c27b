use crate::domain::{ColourId, PaletteMatch, Particle, Rgb, EMPTY_ID};
use crate::render::Renderer;
use crate::spatial::PushOutcome;

use super::ParticleEngine;

/// Palette lookup that reports when a full palette substitutes a colour
pub(super) fn resolve_colour<R: Renderer>(engine: &mut ParticleEngine<R>, colour: Rgb) -> ColourId {
    match engine.grid.resolve_colour(colour) {
        PaletteMatch::Nearest { id, requested, used } => {
            tracing::warn!(?requested, ?used, id, "palette full, using nearest colour");
            let msg = format!(
                "Palette full: colour ({},{},{}) replaced by ({},{},{})",
                requested.r, requested.g, requested.b, used.r, used.g, used.b
            );
            engine.renderer.output_message(&msg);
            id
        }
        found => found.id(),
    }
}

pub(super) fn add_particle<R: Renderer>(
    engine: &mut ParticleEngine<R>,
    colour: Rgb,
    vx: i16,
    vy: i16,
) -> Option<usize> {
    let max_x = engine.grid.width().min(i16::MAX as u32) as i16 - 1;
    let max_y = engine.grid.height().min(i16::MAX as u32) as i16 - 1;

    if engine.grid.occupied_count() < engine.grid.size() {
        for _ in 0..engine.placement_attempts {
            let x = engine.renderer.random_int16(0, max_x) as u32;
            let y = engine.renderer.random_int16(0, max_y) as u32;
            if engine.grid.is_occupied(x as i32, y as i32) {
                continue;
            }

            let (px, py) = spot_in_cell(engine, x, y);
            return Some(place(engine, Particle::new(px, py, vx, vy), colour));
        }
    }

    tracing::warn!(attempts = engine.placement_attempts, "no free cell for new particle");
    engine
        .renderer
        .output_message("Failed to find free position for new particle");
    None
}

pub(super) fn add_particle_at<R: Renderer>(
    engine: &mut ParticleEngine<R>,
    x: u32,
    y: u32,
    colour: Rgb,
    vx: i16,
    vy: i16,
) -> Option<usize> {
    if engine.grid.is_occupied(x as i32, y as i32) {
        tracing::warn!(x, y, "cell unavailable for new particle");
        let msg = format!("Cannot place particle at {},{}: cell occupied or off grid", x, y);
        engine.renderer.output_message(&msg);
        return None;
    }

    let (px, py) = spot_in_cell(engine, x, y);
    Some(place(engine, Particle::new(px, py, vx, vy), colour))
}

/// Random particle-space position inside display cell (x, y)
pub(super) fn spot_in_cell<R: Renderer>(engine: &mut ParticleEngine<R>, x: u32, y: u32) -> (i32, i32) {
    let last = (engine.space.multiplier() - 1).min(i16::MAX as i32) as i16;
    let ox = engine.renderer.random_int16(0, last) as i32;
    let oy = engine.renderer.random_int16(0, last) as i32;
    (engine.space.to_space(x) + ox, engine.space.to_space(y) + oy)
}

/// Index of the grain whose cell is (x, y)
pub(super) fn grain_in_cell<R: Renderer>(engine: &ParticleEngine<R>, x: u32, y: u32) -> Option<usize> {
    engine
        .store
        .iter()
        .position(|p| engine.space.cell_of(p.x, p.y) == (x, y))
}

pub(super) fn insert_particle<R: Renderer>(
    engine: &mut ParticleEngine<R>,
    particle: Particle,
    colour: Rgb,
) -> Option<usize> {
    if !engine.space.contains(particle.x, particle.y) {
        tracing::warn!(x = particle.x, y = particle.y, "particle position outside space");
        let msg = format!("Cannot insert particle at {},{}: outside grid", particle.x, particle.y);
        engine.renderer.output_message(&msg);
        return None;
    }

    let (cx, cy) = engine.space.cell_of(particle.x, particle.y);
    if engine.grid.is_occupied(cx as i32, cy as i32) {
        tracing::warn!(x = cx, y = cy, "cell unavailable for new particle");
        let msg = format!("Cannot place particle at {},{}: cell occupied or off grid", cx, cy);
        engine.renderer.output_message(&msg);
        return None;
    }

    Some(place(engine, particle, colour))
}

/// Mark the grain's cell, show it and store it. The cell must be free.
fn place<R: Renderer>(engine: &mut ParticleEngine<R>, particle: Particle, colour: Rgb) -> usize {
    let id = resolve_colour(engine, colour);
    let (cx, cy) = engine.space.cell_of(particle.x, particle.y);
    engine.grid.set_xy(cx, cy, id);
    let shown = engine.grid.colour(id);
    engine.renderer.set_pixel_instant(cx, cy, shown);

    match engine.store.push(particle) {
        PushOutcome::Stored(index) => index,
        PushOutcome::Grew { index, capacity } => {
            tracing::info!(capacity, "particle store expanded");
            let msg = format!("Particle store expanded to capacity {}", capacity);
            engine.renderer.output_message(&msg);
            index
        }
    }
}

pub(super) fn delete_particle<R: Renderer>(engine: &mut ParticleEngine<R>, index: usize) -> Option<Particle> {
    let particle = engine.store.remove(index)?;
    let (cx, cy) = engine.space.cell_of(particle.x, particle.y);
    engine.grid.set_xy(cx, cy, EMPTY_ID);
    engine.renderer.set_pixel_instant(cx, cy, Rgb::BLACK);
    Some(particle)
}

pub(super) fn clear_particles<R: Renderer>(engine: &mut ParticleEngine<R>) {
    engine.store.clear();
}
