use crate::domain::{Particle, Rgb};
use crate::render::Renderer;
use crate::systems::physics::{resolve_collision, resolve_edges};

use super::ParticleEngine;

/// Pass B: move each grain in turn against the grid as it stands.
///
/// The grid is updated before the grain's position is stored, so later
/// grains in the same pass see the cell it moved into.
pub(super) fn apply_positions<R: Renderer>(engine: &mut ParticleEngine<R>) {
    let energy = engine.bounce_energy;

    for i in 0..engine.store.len() {
        let Some(&p) = engine.store.get(i) else {
            break;
        };

        let cand = resolve_edges(&engine.space, &p, energy);
        engine.stats.wall_hits += cand.wall_hits as u32;
        if cand.corner_stop {
            engine.stats.corner_stops += 1;
        }

        let result = resolve_collision(&engine.grid, &engine.space, &p, cand, energy);
        if result.collided {
            engine.stats.collisions += 1;
        }
        if result.crossed_seam {
            engine.stats.seam_crossings += 1;
        }

        let (ocx, ocy) = engine.space.cell_of(p.x, p.y);
        let (ncx, ncy) = engine.space.cell_of(result.x, result.y);
        if (ocx, ocy) != (ncx, ncy) {
            let from = engine.grid.index(ocx, ocy);
            let to = engine.grid.index(ncx, ncy);
            let id = engine.grid.move_cell(from, to);
            let colour = engine.grid.colour(id);
            engine.renderer.set_pixel_instant(ocx, ocy, Rgb::BLACK);
            engine.renderer.set_pixel_instant(ncx, ncy, colour);
            engine.stats.moved += 1;
        }

        if let Some(slot) = engine.store.get_mut(i) {
            *slot = Particle::new(result.x, result.y, result.vx, result.vy);
        }
    }
}
