use crate::domain::{ColourId, Particle, Rgb, EMPTY_ID};
use crate::render::Renderer;

use super::commands;
use super::ParticleEngine;

/// Blank the image. Grains keep their cells and stay lit.
pub(super) fn clear_image<R: Renderer>(engine: &mut ParticleEngine<R>) {
    let held: Vec<(u32, u32, ColourId)> = engine
        .store
        .iter()
        .map(|p| {
            let (cx, cy) = engine.space.cell_of(p.x, p.y);
            (cx, cy, engine.grid.get_xy(cx, cy))
        })
        .collect();

    engine.grid.clear();
    for y in 0..engine.grid.height() {
        for x in 0..engine.grid.width() {
            engine.renderer.set_pixel_instant(x, y, Rgb::BLACK);
        }
    }

    for (cx, cy, id) in held {
        engine.grid.set_xy(cx, cy, id);
        let shown = engine.grid.colour(id);
        engine.renderer.set_pixel_instant(cx, cy, shown);
    }
}

pub(super) fn set_static_pixel<R: Renderer>(engine: &mut ParticleEngine<R>, x: u32, y: u32, colour: Rgb) {
    if !engine.grid.in_bounds(x as i32, y as i32) {
        return;
    }
    if engine.grid.is_occupied(x as i32, y as i32) {
        if let Some(index) = commands::grain_in_cell(engine, x, y) {
            tracing::warn!(x, y, index, "static pixel would overwrite a grain");
            let msg = format!("Cannot set static pixel at {},{}: cell holds a particle", x, y);
            engine.renderer.output_message(&msg);
            return;
        }
    }

    let id = if colour == Rgb::BLACK {
        EMPTY_ID
    } else {
        commands::resolve_colour(engine, colour)
    };
    engine.grid.set_xy(x, y, id);
    let shown = engine.grid.colour(id);
    engine.renderer.set_pixel_instant(x, y, shown);
}

pub(super) fn update_display<R: Renderer>(engine: &mut ParticleEngine<R>) {
    for y in 0..engine.grid.height() {
        for x in 0..engine.grid.width() {
            let colour = engine.grid.colour_at(x, y);
            engine.renderer.set_pixel_instant(x, y, colour);
        }
    }
}

pub(super) fn pixel_value<R: Renderer>(engine: &ParticleEngine<R>, x: u32, y: u32) -> ColourId {
    if !engine.grid.in_bounds(x as i32, y as i32) {
        return EMPTY_ID;
    }
    engine.grid.get_xy(x, y)
}

/// Raw write of a palette index; the caller keeps grains and pixels in step
pub(super) fn set_pixel_value<R: Renderer>(engine: &mut ParticleEngine<R>, x: u32, y: u32, id: ColourId) {
    if !engine.grid.in_bounds(x as i32, y as i32) {
        return;
    }
    engine.grid.set_xy(x, y, id);
}

/// Seed grains from the current image. Cells that already hold a grain are
/// skipped so no cell ends up with two.
pub(super) fn img_to_particles<R: Renderer>(engine: &mut ParticleEngine<R>) -> usize {
    let mut owned = vec![false; engine.grid.size()];
    for p in engine.store.iter() {
        let (cx, cy) = engine.space.cell_of(p.x, p.y);
        owned[engine.grid.index(cx, cy)] = true;
    }

    let before = engine.store.len();
    for idx in 0..engine.grid.size() {
        if owned[idx] || !engine.grid.is_occupied_idx(idx) {
            continue;
        }
        let (x, y) = engine.grid.coords(idx);
        let (px, py) = commands::spot_in_cell(engine, x, y);
        let particle = Particle::new(px, py, 0, 0);
        let colour = engine.grid.colour(engine.grid.get(idx));
        // Free the cell so insertion can claim it with the same colour
        engine.grid.set(idx, EMPTY_ID);
        commands::insert_particle(engine, particle, colour);
    }

    let added = engine.store.len() - before;
    tracing::debug!(added, "image converted to particles");
    added
}
