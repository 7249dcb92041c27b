/// A single grain: position in particle space, velocity in fixed-point units
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Particle {
    pub x: i32,
    pub y: i32,
    pub vx: i16,
    pub vy: i16,
}

impl Particle {
    #[inline]
    pub const fn new(x: i32, y: i32, vx: i16, vy: i16) -> Self {
        Self { x, y, vx, vy }
    }

    /// Squared speed, computed wide so it never overflows
    #[inline]
    pub fn speed_squared(&self) -> i64 {
        let vx = self.vx as i64;
        let vy = self.vy as i64;
        vx * vx + vy * vy
    }
}
