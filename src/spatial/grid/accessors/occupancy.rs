use super::super::*;

impl PixelGrid {
    /// Out-of-range cells count as occupied so nothing can move into them
    #[inline]
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        if !self.in_bounds(x, y) { return true; }
        self.cells[self.index(x as u32, y as u32)] != EMPTY_ID
    }

    #[inline]
    pub fn is_occupied_idx(&self, idx: usize) -> bool {
        self.cells[idx] != EMPTY_ID
    }

    // === Raw colour-index access ===
    #[inline]
    pub fn get(&self, idx: usize) -> ColourId {
        self.cells[idx]
    }

    #[inline]
    pub fn get_xy(&self, x: u32, y: u32) -> ColourId {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, idx: usize, id: ColourId) {
        let prev = self.cells[idx];
        self.cells[idx] = id;

        if prev == EMPTY_ID && id != EMPTY_ID {
            self.occupied += 1;
        } else if prev != EMPTY_ID && id == EMPTY_ID {
            self.occupied -= 1;
        }
    }

    #[inline]
    pub fn set_xy(&mut self, x: u32, y: u32, id: ColourId) {
        let idx = self.index(x, y);
        self.set(idx, id);
    }
}
