//! Cube Topology - six square panels folded into a cube
//!
//! The flat buffer holds two rows of three panels (panel = row * 3 + col,
//! row 0 at the bottom):
//!
//! ```text
//!   row 1:  top   | back  | bottom
//!   row 0:  left  | front | right
//! ```
//!
//! Each row is a belt of three faces, so in-row neighbours join without any
//! remapping. Every other edge folds onto a face whose axes point a different
//! way, and the transform below rotates position and velocity onto it:
//! - front/left/right -> top (up), and back -> right/left: X/Y transposed
//!   with one axis negated
//! - top/back/bottom -> right (down): shifted across the buffer with Y
//!   wrapping from the bottom of row 1 to the top of row 0
//!
//! The mapping is computed from each face's placement in 3-D rather than
//! tabulated, so every seam is continuous by construction.
//!
//! Cube axes: x to the right and y into the screen when looking at the front
//! panel, z up.

type V3 = [i32; 3];

#[derive(Clone, Copy, Debug)]
struct Face {
    /// Corner of the unit cube at panel-local (0, 0)
    origin: V3,
    /// 3-D direction of panel-local +X
    u: V3,
    /// 3-D direction of panel-local +Y
    v: V3,
    /// Outward normal (u x v)
    normal: V3,
}

const FACES: [Face; 6] = [
    // 0: left (-x)
    Face { origin: [0, 1, 0], u: [0, -1, 0], v: [0, 0, 1], normal: [-1, 0, 0] },
    // 1: front (-y)
    Face { origin: [0, 0, 0], u: [1, 0, 0], v: [0, 0, 1], normal: [0, -1, 0] },
    // 2: right (+x)
    Face { origin: [1, 0, 0], u: [0, 1, 0], v: [0, 0, 1], normal: [1, 0, 0] },
    // 3: top (+z)
    Face { origin: [1, 0, 1], u: [0, 1, 0], v: [-1, 0, 0], normal: [0, 0, 1] },
    // 4: back (+y)
    Face { origin: [1, 1, 1], u: [0, 0, -1], v: [-1, 0, 0], normal: [0, 1, 0] },
    // 5: bottom (-z)
    Face { origin: [1, 1, 0], u: [0, -1, 0], v: [-1, 0, 0], normal: [0, 0, -1] },
];

pub const PANEL_COUNT: usize = 6;
pub const PANEL_NAMES: [&str; PANEL_COUNT] = ["left", "front", "right", "top", "back", "bottom"];

#[inline]
fn dot(a: V3, b: V3) -> i32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
fn scale(a: V3, s: i32) -> V3 {
    [a[0] * s, a[1] * s, a[2] * s]
}

#[inline]
fn add(a: V3, b: V3) -> V3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
fn sub(a: V3, b: V3) -> V3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
fn face_with_normal(n: V3) -> usize {
    FACES.iter().position(|f| f.normal == n).unwrap_or(0)
}

#[inline]
fn clamp_velocity(v: i32) -> i16 {
    v.clamp(-(i16::MAX as i32), i16::MAX as i32) as i16
}

/// Result of carrying a particle across a panel seam (global particle space)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeamMove {
    pub from_panel: usize,
    pub to_panel: usize,
    pub x: i32,
    pub y: i32,
    pub vx: i16,
    pub vy: i16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crossing {
    /// Candidate stays on the source panel
    Inside,
    /// Crossed one edge and was folded onto the neighbouring face
    Seam(SeamMove),
    /// Left through a panel corner; not supported, caller holds it in place
    Corner,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubeTopology {
    /// Panel side length in particle-space units
    side: i32,
}

impl CubeTopology {
    pub fn new(side: i32) -> Self {
        Self { side: side.max(1) }
    }

    #[inline]
    pub fn side(&self) -> i32 {
        self.side
    }

    /// Panel containing an in-range particle-space position
    #[inline]
    pub fn panel_of(&self, x: i32, y: i32) -> usize {
        let col = (x / self.side).clamp(0, 2);
        let row = (y / self.side).clamp(0, 1);
        (row * 3 + col) as usize
    }

    /// Lower-left corner of a panel in particle space
    #[inline]
    pub fn panel_origin(&self, panel: usize) -> (i32, i32) {
        let col = (panel % 3) as i32;
        let row = (panel / 3) as i32;
        (col * self.side, row * self.side)
    }

    /// Project a 3-D acceleration onto a panel's own X/Y axes
    pub fn project(&self, panel: usize, accel: [i32; 3]) -> (i32, i32) {
        let face = &FACES[panel % PANEL_COUNT];
        (dot(accel, face.u), dot(accel, face.v))
    }

    /// Decide whether a move from `(x, y)` to `(cand_x, cand_y)` leaves the
    /// source panel and, if it crosses one edge, fold it onto the neighbour.
    pub fn cross(&self, x: i32, y: i32, cand_x: i32, cand_y: i32, vx: i16, vy: i16) -> Crossing {
        let from_panel = self.panel_of(x, y);
        let (ox, oy) = self.panel_origin(from_panel);
        let lx = cand_x - ox;
        let ly = cand_y - oy;

        let out_x = lx < 0 || lx >= self.side;
        let out_y = ly < 0 || ly >= self.side;

        match (out_x, out_y) {
            (false, false) => Crossing::Inside,
            (true, true) => Crossing::Corner,
            _ => Crossing::Seam(self.fold(from_panel, lx, ly, out_x, vx, vy)),
        }
    }

    /// Work in doubled units so cell centres are odd integers and every
    /// reflection of an axis stays exact: local `a` sits at `2a + 1` on a
    /// face of side `2 * side`.
    fn fold(&self, from_panel: usize, lx: i32, ly: i32, across_x: bool, vx: i16, vy: i16) -> SeamMove {
        let face = &FACES[from_panel];
        let l = 2 * self.side;
        let (along, across) = if across_x { (face.u, face.v) } else { (face.v, face.u) };
        let (pos_along, pos_across) = if across_x { (lx, ly) } else { (ly, lx) };

        // Direction of travel through the edge and distance past it
        let (exit, past, edge_offset) = if pos_along >= self.side {
            (along, 2 * (pos_along - self.side) + 1, l)
        } else {
            (scale(along, -1), -2 * pos_along - 1, 0)
        };

        let edge_point = add(
            add(scale(face.origin, l), scale(along, edge_offset)),
            scale(across, 2 * pos_across + 1),
        );
        // Past the edge the particle continues down the neighbouring face
        let point = sub(edge_point, scale(face.normal, past));

        let to_panel = face_with_normal(exit);
        let dest = &FACES[to_panel];
        let rel = sub(point, scale(dest.origin, l));
        let nx = ((dot(rel, dest.u) - 1) / 2).clamp(0, self.side - 1);
        let ny = ((dot(rel, dest.v) - 1) / 2).clamp(0, self.side - 1);

        let vel = add(scale(face.u, vx as i32), scale(face.v, vy as i32));
        let through = dot(vel, exit);
        let vel = sub(sub(vel, scale(exit, through)), scale(face.normal, through));

        let (dx, dy) = self.panel_origin(to_panel);
        SeamMove {
            from_panel,
            to_panel,
            x: dx + nx,
            y: dy + ny,
            vx: clamp_velocity(dot(vel, dest.u)),
            vy: clamp_velocity(dot(vel, dest.v)),
        }
    }
}
