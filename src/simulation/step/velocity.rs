use crate::render::Renderer;
use crate::spatial::Topology;
use crate::systems::physics::{accelerate, cap_velocity};

use super::{Acceleration, ParticleEngine};

/// Pass A: acceleration, jitter and the speed cap for every grain
pub(super) fn apply_velocity<R: Renderer>(engine: &mut ParticleEngine<R>) {
    let half_shake = (engine.shake / 2).min(i16::MAX as u16) as i16;
    let cap = engine.velocity_cap as i32;

    for i in 0..engine.store.len() {
        let Some(p) = engine.store.get_mut(i) else {
            break;
        };

        let (ax, ay) = match engine.acceleration {
            Acceleration::Planar(x, y) => (x, y),
            Acceleration::Spatial(g) => match engine.space.topology() {
                Topology::Cube(cube) => cube.project(cube.panel_of(p.x, p.y), g),
                Topology::Flat => (g[0], g[1]),
            },
        };

        let (jx, jy) = if half_shake > 0 {
            (
                engine.renderer.random_int16(-half_shake, half_shake) as i32,
                engine.renderer.random_int16(-half_shake, half_shake) as i32,
            )
        } else {
            (0, 0)
        };

        let vx = accelerate(p.vx, ax, jx);
        let vy = accelerate(p.vy, ay, jy);
        (p.vx, p.vy) = cap_velocity(vx, vy, cap);
    }
}
