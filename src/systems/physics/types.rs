use crate::spatial::SeamMove;

/// Where a grain wants to go this step, after edges and seams
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub x: i32,
    pub y: i32,
    pub vx: i16,
    pub vy: i16,
    /// Axis clamps against the outer edge (0..=2)
    pub wall_hits: u8,
    /// Set when the move was folded onto another cube face
    pub seam: Option<SeamMove>,
    /// Diagonal panel exit held back on the source panel
    pub corner_stop: bool,
    /// Candidate in the source panel's frame before any fold
    pub unfolded_x: i32,
    pub unfolded_y: i32,
}

impl Candidate {
    #[inline]
    pub fn at(x: i32, y: i32, vx: i16, vy: i16) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            wall_hits: 0,
            seam: None,
            corner_stop: false,
            unfolded_x: x,
            unfolded_y: y,
        }
    }
}

/// Final position and velocity of one grain for this step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveResult {
    pub x: i32,
    pub y: i32,
    pub vx: i16,
    pub vy: i16,
    /// Ran into another occupied cell
    pub collided: bool,
    /// Seam crossing survived collision handling
    pub crossed_seam: bool,
}
