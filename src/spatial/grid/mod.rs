//! Pixel Grid - colour-index occupancy map
//!
//! One `ColourId` per display pixel; 0 means empty. The same array is the
//! collision map for the particle engine and the source of truth for what
//! the display shows.
//!
//! Instead of: Vec<Option<Rgb>>   // 3-4 bytes per cell plus a tag
//! We have:    cells: Vec<u16>    // palette index, non-zero = occupied

use crate::domain::{ColourId, ColourPalette, EMPTY_ID};

mod indexing;
mod accessors;
mod moves;

pub struct PixelGrid {
    width: u32,
    height: u32,
    size: usize,

    cells: Vec<ColourId>,
    palette: ColourPalette,

    // Non-empty cell count, kept in step with every write
    occupied: usize,
}

impl PixelGrid {
    pub fn new(width: u32, height: u32, palette_capacity: ColourId) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            size,
            cells: vec![EMPTY_ID; size],
            palette: ColourPalette::new(palette_capacity),
            occupied: 0,
        }
    }

    /// Number of non-empty cells (particles and static pixels)
    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// Empty every cell; the palette keeps its colours
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY_ID);
        self.occupied = 0;
    }
}
