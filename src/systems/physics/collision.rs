use crate::domain::Particle;
use crate::spatial::{CoordinateSpace, PixelGrid};

use super::boundary::{hold_at_seam, rebound};
use super::types::{Candidate, MoveResult};

/// Settle a candidate against the occupancy grid.
///
/// Only runs the slide rules when the target cell differs from the grain's
/// own cell and is taken:
/// 1. a one-cell move along one axis cancels that axis and keeps the other
/// 2. otherwise the faster axis is tried alone, then the slower one; the axis
///    not taken is cancelled
/// 3. if neither works the grain stays put and both axes rebound
pub fn resolve_collision(
    grid: &PixelGrid,
    space: &CoordinateSpace,
    p: &Particle,
    cand: Candidate,
    bounce_energy: u8,
) -> MoveResult {
    let (ocx, ocy) = space.cell_of(p.x, p.y);
    let free = |cx: u32, cy: u32| (cx == ocx && cy == ocy) || !grid.is_occupied(cx as i32, cy as i32);

    let mut cand = cand;
    let (mut ncx, mut ncy) = space.cell_of(cand.x, cand.y);

    if free(ncx, ncy) {
        return MoveResult {
            x: cand.x,
            y: cand.y,
            vx: cand.vx,
            vy: cand.vy,
            collided: false,
            crossed_seam: cand.seam.is_some(),
        };
    }

    if cand.seam.is_some() {
        cand = hold_at_seam(space, p, &cand, bounce_energy);
        (ncx, ncy) = space.cell_of(cand.x, cand.y);
        if free(ncx, ncy) {
            return MoveResult {
                x: cand.x,
                y: cand.y,
                vx: cand.vx,
                vy: cand.vy,
                collided: true,
                crossed_seam: false,
            };
        }
    }

    let dx = space.cell_delta(ocx, ncx, space.width());
    let dy = space.cell_delta(ocy, ncy, space.height());

    let blocked = |x: i32, y: i32, vx: i16, vy: i16| MoveResult {
        x,
        y,
        vx,
        vy,
        collided: true,
        crossed_seam: false,
    };

    // One cell along one axis: cancel that axis only
    if dy == 0 && dx.abs() == 1 {
        return blocked(p.x, cand.y, rebound(cand.vx, bounce_energy), cand.vy);
    }
    if dx == 0 && dy.abs() == 1 {
        return blocked(cand.x, p.y, cand.vx, rebound(cand.vy, bounce_energy));
    }

    let x_only = free(ncx, ocy);
    let y_only = free(ocx, ncy);
    let x_first = cand.vx.unsigned_abs() >= cand.vy.unsigned_abs();

    let take_x = || blocked(cand.x, p.y, cand.vx, rebound(cand.vy, bounce_energy));
    let take_y = || blocked(p.x, cand.y, rebound(cand.vx, bounce_energy), cand.vy);

    match (x_first, x_only, y_only) {
        (true, true, _) => take_x(),
        (true, false, true) => take_y(),
        (false, _, true) => take_y(),
        (false, true, false) => take_x(),
        _ => blocked(
            p.x,
            p.y,
            rebound(cand.vx, bounce_energy),
            rebound(cand.vy, bounce_energy),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EdgeMode, TopologyKind};

    const M: i32 = 10;

    fn setup(edges: EdgeMode) -> (PixelGrid, CoordinateSpace) {
        let grid = PixelGrid::new(16, 16, 8);
        let space = CoordinateSpace::new(16, 16, M as u16, TopologyKind::Flat, edges).unwrap();
        (grid, space)
    }

    #[test]
    fn free_target_passes_through() {
        let (grid, space) = setup(EdgeMode::Clamp);
        let p = Particle::new(55, 55, 64, 0);
        let r = resolve_collision(&grid, &space, &p, Candidate::at(61, 55, 64, 0), 204);
        assert_eq!((r.x, r.y, r.vx, r.vy), (61, 55, 64, 0));
        assert!(!r.collided);
    }

    #[test]
    fn one_axis_one_cell_rebounds_that_axis() {
        let (mut grid, space) = setup(EdgeMode::Clamp);
        grid.set_xy(6, 5, 1);
        let p = Particle::new(59, 55, 64, 12);
        let r = resolve_collision(&grid, &space, &p, Candidate::at(61, 55, 64, 12), 204);
        assert!(r.collided);
        assert_eq!((r.x, r.y), (59, 55));
        assert_eq!((r.vx, r.vy), (-32, 12));
    }

    #[test]
    fn diagonal_slides_along_faster_axis() {
        let (mut grid, space) = setup(EdgeMode::Clamp);
        grid.set_xy(6, 6, 1);
        // Moving right and up, X faster: target (6,6) blocked, (6,5) free
        let p = Particle::new(59, 59, 64, 40);
        let r = resolve_collision(&grid, &space, &p, Candidate::at(61, 60, 64, 40), 204);
        assert_eq!((r.x, r.y), (61, 59));
        assert_eq!((r.vx, r.vy), (64, -20));
    }

    #[test]
    fn y_faster_cancels_x() {
        let (mut grid, space) = setup(EdgeMode::Clamp);
        grid.set_xy(6, 6, 1);
        let p = Particle::new(59, 59, 40, 64);
        let r = resolve_collision(&grid, &space, &p, Candidate::at(60, 61, 40, 64), 204);
        // (5,6) is free so Y is taken and X rebounds
        assert_eq!((r.x, r.y), (59, 61));
        assert_eq!((r.vx, r.vy), (-20, 64));
    }

    #[test]
    fn boxed_in_rebounds_both() {
        let (mut grid, space) = setup(EdgeMode::Clamp);
        grid.set_xy(6, 6, 1);
        grid.set_xy(6, 5, 1);
        grid.set_xy(5, 6, 1);
        let p = Particle::new(59, 59, 64, 64);
        let r = resolve_collision(&grid, &space, &p, Candidate::at(61, 61, 64, 64), 0);
        assert_eq!((r.x, r.y), (59, 59));
        assert_eq!((r.vx, r.vy), (0, 0));
    }

    #[test]
    fn wrapped_hop_counts_as_single_cell() {
        let (mut grid, space) = setup(EdgeMode::Wrap);
        grid.set_xy(0, 5, 1);
        let p = Particle::new(159, 55, 64, 0);
        let r = resolve_collision(&grid, &space, &p, Candidate::at(1, 55, 64, 0), 204);
        assert_eq!((r.x, r.y), (159, 55));
        assert_eq!(r.vx, -32);
    }
}
