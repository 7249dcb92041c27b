use crate::core::config::bounce_loss;
use crate::domain::Particle;
use crate::spatial::{advance, CoordinateSpace, Crossing, VELOCITY_DIVISOR};

use super::types::Candidate;

/// Velocity after hitting a wall or another grain.
///
/// Zero bounce energy stops the axis dead; otherwise the component reverses
/// and is divided by the loss factor.
#[inline]
pub fn rebound(v: i16, bounce_energy: u8) -> i16 {
    if bounce_energy == 0 {
        return 0;
    }
    (-(v as f32) / bounce_loss(bounce_energy)) as i16
}

#[inline]
fn clamp_axis(pos: i32, min: i32, max: i32, v: i16, bounce_energy: u8) -> (i32, i16, bool) {
    if pos < min {
        (min, rebound(v, bounce_energy), true)
    } else if pos > max {
        (max, rebound(v, bounce_energy), true)
    } else {
        (pos, v, false)
    }
}

/// Candidate position for one grain after edges, wrap and cube seams.
pub fn resolve_edges(space: &CoordinateSpace, p: &Particle, bounce_energy: u8) -> Candidate {
    let step_x = p.vx as i32 / VELOCITY_DIVISOR;
    let step_y = p.vy as i32 / VELOCITY_DIVISOR;
    let nx = p.x + step_x;
    let ny = p.y + step_y;

    if let Some(cube) = space.seams() {
        return match cube.cross(p.x, p.y, nx, ny, p.vx, p.vy) {
            Crossing::Inside => Candidate::at(nx, ny, p.vx, p.vy),
            Crossing::Seam(m) => Candidate {
                seam: Some(m),
                unfolded_x: nx,
                unfolded_y: ny,
                ..Candidate::at(m.x, m.y, m.vx, m.vy)
            },
            Crossing::Corner => {
                let (ox, oy) = cube.panel_origin(cube.panel_of(p.x, p.y));
                let last = cube.side() - 1;
                let (x, vx, _) = clamp_axis(nx, ox, ox + last, p.vx, bounce_energy);
                let (y, vy, _) = clamp_axis(ny, oy, oy + last, p.vy, bounce_energy);
                Candidate { corner_stop: true, ..Candidate::at(x, y, vx, vy) }
            }
        };
    }

    if space.wraps() {
        let x = advance(p.x, step_x, space.span_x(), true);
        let y = advance(p.y, step_y, space.span_y(), true);
        return Candidate::at(x, y, p.vx, p.vy);
    }

    let (x, vx, hit_x) = clamp_axis(nx, 0, space.max_x(), p.vx, bounce_energy);
    let (y, vy, hit_y) = clamp_axis(ny, 0, space.max_y(), p.vy, bounce_energy);
    Candidate {
        wall_hits: hit_x as u8 + hit_y as u8,
        ..Candidate::at(x, y, vx, vy)
    }
}

/// Undo a seam crossing whose landing cell is taken: the crossed edge acts
/// as a wall in the source panel's frame.
pub fn hold_at_seam(space: &CoordinateSpace, p: &Particle, cand: &Candidate, bounce_energy: u8) -> Candidate {
    let Some(cube) = space.seams() else {
        return *cand;
    };
    let (ox, oy) = cube.panel_origin(cube.panel_of(p.x, p.y));
    let last = cube.side() - 1;
    let (x, vx, _) = clamp_axis(cand.unfolded_x, ox, ox + last, p.vx, bounce_energy);
    let (y, vy, _) = clamp_axis(cand.unfolded_y, oy, oy + last, p.vy, bounce_energy);
    Candidate::at(x, y, vx, vy)
}
