//! Coordinate Space - display pixels vs. particle space
//!
//! Particles live in an integer space `space_multiplier` times finer than
//! the pixel grid so they can move by fractions of a pixel. All unit
//! conversion goes through `CoordinateSpace`; nothing else multiplies or
//! divides by the multiplier.

use crate::core::{EdgeMode, EngineError, TopologyKind};

use super::cube::CubeTopology;

/// Velocity units per particle-space unit of movement per step
pub const VELOCITY_DIVISOR: i32 = 32;

/// Keep a coordinate on an axis of `axis_length` cells.
///
/// With `wrap` the result is folded back into `[0, axis_length)` however far
/// the increment overshoots; without it the result is clamped to
/// `[0, axis_length - 1]`.
pub fn advance(position: i32, increment: i32, axis_length: i32, wrap: bool) -> i32 {
    let mut pos = position + increment;
    if axis_length <= 0 {
        return 0;
    }

    if wrap {
        while pos < 0 {
            pos += axis_length;
        }
        while pos >= axis_length {
            pos -= axis_length;
        }
        pos
    } else {
        pos.clamp(0, axis_length - 1)
    }
}

/// Size-based multiplier: 256 for small grids, smaller for big ones so the
/// finest coordinates stay inside a 16-bit range.
pub fn default_space_multiplier(width: u32, height: u32) -> u16 {
    let max_dim = width.max(height).max(1);
    let multiplier = 5900 / max_dim;
    if multiplier > 25 {
        256
    } else {
        (10 * multiplier.max(1)) as u16
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    Flat,
    Cube(CubeTopology),
}

#[derive(Clone, Copy, Debug)]
pub struct CoordinateSpace {
    width: u32,
    height: u32,
    multiplier: i32,
    topology: Topology,
    wrap: bool,
}

impl CoordinateSpace {
    pub fn new(
        width: u32,
        height: u32,
        multiplier: u16,
        topology: TopologyKind,
        edges: EdgeMode,
    ) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::EmptyGrid { width, height });
        }
        if multiplier == 0 {
            return Err(EngineError::InvalidSettings(
                "space multiplier must be at least 1".to_string(),
            ));
        }

        let topology = match topology {
            TopologyKind::Flat => Topology::Flat,
            TopologyKind::Cube { panel_size } => {
                if panel_size == 0 || width != panel_size * 3 || height != panel_size * 2 {
                    return Err(EngineError::InvalidTopology { width, height, panel_size });
                }
                Topology::Cube(CubeTopology::new(panel_size as i32 * multiplier as i32))
            }
        };

        Ok(Self {
            width,
            height,
            multiplier: multiplier as i32,
            topology,
            wrap: edges == EdgeMode::Wrap,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn multiplier(&self) -> i32 { self.multiplier }

    #[inline]
    pub fn wraps(&self) -> bool { self.wrap }

    #[inline]
    pub fn topology(&self) -> Topology { self.topology }

    /// Cube transform, only when seams are live (cube layout with wrap on)
    #[inline]
    pub fn seams(&self) -> Option<&CubeTopology> {
        match &self.topology {
            Topology::Cube(cube) if self.wrap => Some(cube),
            _ => None,
        }
    }

    /// Particle-space extent of the X axis
    #[inline]
    pub fn span_x(&self) -> i32 { self.width as i32 * self.multiplier }

    #[inline]
    pub fn span_y(&self) -> i32 { self.height as i32 * self.multiplier }

    #[inline]
    pub fn max_x(&self) -> i32 { self.span_x() - 1 }

    #[inline]
    pub fn max_y(&self) -> i32 { self.span_y() - 1 }

    /// Lower-left corner of a pixel in particle space
    #[inline]
    pub fn to_space(&self, cell: u32) -> i32 {
        cell as i32 * self.multiplier
    }

    #[inline]
    pub fn to_cell(&self, pos: i32) -> u32 {
        debug_assert!(pos >= 0, "to_cell: negative particle coordinate {}", pos);
        (pos / self.multiplier) as u32
    }

    #[inline]
    pub fn cell_of(&self, x: i32, y: i32) -> (u32, u32) {
        (self.to_cell(x), self.to_cell(y))
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.span_x() && y < self.span_y()
    }

    /// Signed cell step between two cells on one axis.
    ///
    /// On a flat wrapping grid the shorter way round is reported, so a hop
    /// from the last column to the first is a step of +1.
    pub fn cell_delta(&self, old: u32, new: u32, axis_cells: u32) -> i32 {
        let mut d = new as i32 - old as i32;
        if self.wrap && self.topology == Topology::Flat {
            let len = axis_cells as i32;
            if d > len / 2 {
                d -= len;
            } else if d < -(len / 2) {
                d += len;
            }
        }
        d
    }
}

/// Integer cell position with a signed sub-cell remainder.
///
/// `fraction` stays within `(-scale, scale)`; whole cells are carried into
/// `cell` each update so slow velocities accumulate and fast ones skip cells
/// without losing the remainder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MovingPixel {
    pub cell: i32,
    pub fraction: i32,
    pub velocity: i32,
}

impl MovingPixel {
    pub fn new(cell: i32, velocity: i32) -> Self {
        Self { cell, fraction: 0, velocity }
    }

    /// Apply one step of velocity. Returns true when the cell changed.
    pub fn update(&mut self, scale: i32, axis_length: i32, wrap: bool) -> bool {
        let scale = scale.max(1);
        self.fraction += self.velocity;
        let cells = self.fraction / scale;
        self.fraction -= cells * scale;

        if cells == 0 {
            return false;
        }

        let old = self.cell;
        self.cell = advance(self.cell, cells, axis_length, wrap);
        if !wrap && self.cell != old + cells {
            // Pinned against an edge: drop the remainder pushing outwards
            self.fraction = 0;
        }
        self.cell != old
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_multiple_lengths() {
        assert_eq!(advance(3, 1, 5, true), 4);
        assert_eq!(advance(4, 1, 5, true), 0);
        assert_eq!(advance(0, -1, 5, true), 4);
        assert_eq!(advance(2, 13, 5, true), 0);
        assert_eq!(advance(2, -13, 5, true), 4);
    }

    #[test]
    fn advance_clamps_without_wrap() {
        assert_eq!(advance(4, 3, 5, false), 4);
        assert_eq!(advance(1, -3, 5, false), 0);
        assert_eq!(advance(1, 2, 5, false), 3);
    }

    #[test]
    fn multiplier_heuristic() {
        assert_eq!(default_space_multiplier(16, 16), 256);
        assert_eq!(default_space_multiplier(64, 32), 256);
        // 5900 / 256 = 23 -> 230
        assert_eq!(default_space_multiplier(256, 64), 230);
        assert!(default_space_multiplier(4000, 10) >= 10);
    }

    #[test]
    fn cube_requires_three_by_two_panels() {
        let cube = TopologyKind::Cube { panel_size: 8 };
        assert!(CoordinateSpace::new(24, 16, 10, cube, EdgeMode::Wrap).is_ok());
        let err = CoordinateSpace::new(16, 16, 10, cube, EdgeMode::Wrap).unwrap_err();
        assert!(matches!(err, EngineError::InvalidTopology { width: 16, height: 16, panel_size: 8 }));
    }

    #[test]
    fn empty_grid_rejected() {
        let err = CoordinateSpace::new(0, 4, 10, TopologyKind::Flat, EdgeMode::Clamp).unwrap_err();
        assert!(matches!(err, EngineError::EmptyGrid { .. }));
    }

    #[test]
    fn conversions() {
        let space = CoordinateSpace::new(16, 8, 10, TopologyKind::Flat, EdgeMode::Clamp).unwrap();
        assert_eq!(space.span_x(), 160);
        assert_eq!(space.max_y(), 79);
        assert_eq!(space.to_space(3), 30);
        assert_eq!(space.cell_of(39, 40), (3, 4));
        assert!(space.contains(159, 79));
        assert!(!space.contains(160, 0));
    }

    #[test]
    fn wrapped_cell_delta_takes_short_way() {
        let flat_wrap = CoordinateSpace::new(16, 8, 10, TopologyKind::Flat, EdgeMode::Wrap).unwrap();
        assert_eq!(flat_wrap.cell_delta(15, 0, 16), 1);
        assert_eq!(flat_wrap.cell_delta(0, 15, 16), -1);
        let flat = CoordinateSpace::new(16, 8, 10, TopologyKind::Flat, EdgeMode::Clamp).unwrap();
        assert_eq!(flat.cell_delta(15, 0, 16), -15);
    }

    #[test]
    fn moving_pixel_accumulates_slow_velocity() {
        let mut p = MovingPixel::new(0, 3);
        let moved: Vec<bool> = (0..4).map(|_| p.update(10, 8, true)).collect();
        // 3, 6, 9, 12 -> first carry on the fourth step
        assert_eq!(moved, vec![false, false, false, true]);
        assert_eq!(p.cell, 1);
        assert_eq!(p.fraction, 2);
    }

    #[test]
    fn moving_pixel_fast_velocity_skips_cells() {
        let mut p = MovingPixel::new(2, -25);
        assert!(p.update(10, 8, true));
        assert_eq!(p.cell, 0);
        assert_eq!(p.fraction, -5);
        assert!(p.update(10, 8, true));
        // -30 -> -3 cells from 0 wraps to 5
        assert_eq!(p.cell, 5);
        assert_eq!(p.fraction, 0);
    }

    #[test]
    fn moving_pixel_pins_at_edge_without_wrap() {
        let mut p = MovingPixel::new(7, 15);
        assert!(!p.update(10, 8, false));
        assert_eq!(p.cell, 7);
        assert_eq!(p.fraction, 0);
    }
}
