use super::*;

impl PixelGrid {
    /// Move a cell's colour index to another cell, clearing the source.
    ///
    /// The destination is written after the source is cleared, so moving a
    /// cell onto itself is a no-op. Returns the colour index carried.
    pub fn move_cell(&mut self, from: usize, to: usize) -> ColourId {
        let id = self.cells[from];
        if from == to {
            return id;
        }
        self.set(from, EMPTY_ID);
        self.set(to, id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_cell_keeps_occupied_count() {
        let mut grid = PixelGrid::new(4, 4, 8);
        let idx = grid.index(1, 1);
        grid.set(idx, 3);
        assert_eq!(grid.occupied_count(), 1);

        let to = grid.index(2, 1);
        assert_eq!(grid.move_cell(idx, to), 3);
        assert_eq!(grid.get(idx), EMPTY_ID);
        assert_eq!(grid.get(to), 3);
        assert_eq!(grid.occupied_count(), 1);

        assert_eq!(grid.move_cell(to, to), 3);
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn out_of_range_reads_as_occupied() {
        let grid = PixelGrid::new(4, 4, 8);
        assert!(grid.is_occupied(-1, 0));
        assert!(grid.is_occupied(0, 4));
        assert!(!grid.is_occupied(0, 0));
    }
}
