use super::*;

impl PixelGrid {
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    /// Row-major index; row 0 is the bottom row of the display
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "index: ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let w = self.width as usize;
        ((idx % w) as u32, (idx / w) as u32)
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_coords_agree() {
        let grid = PixelGrid::new(7, 5, 8);
        for y in 0..5 {
            for x in 0..7 {
                let idx = grid.index(x, y);
                assert_eq!(grid.coords(idx), (x, y));
            }
        }
        assert_eq!(grid.index(6, 4), grid.size() - 1);
    }

    #[test]
    fn bounds() {
        let grid = PixelGrid::new(4, 3, 8);
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(3, 2));
        assert!(!grid.in_bounds(4, 0));
        assert!(!grid.in_bounds(0, -1));
    }
}
