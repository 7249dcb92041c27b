use super::super::*;
use crate::domain::{PaletteMatch, Rgb};

impl PixelGrid {
    #[inline]
    pub fn resolve_colour(&mut self, colour: Rgb) -> PaletteMatch {
        self.palette.resolve(colour)
    }

    #[inline]
    pub fn colour(&self, id: ColourId) -> Rgb {
        self.palette.colour(id)
    }

    /// Displayed colour of a cell
    #[inline]
    pub fn colour_at(&self, x: u32, y: u32) -> Rgb {
        self.palette.colour(self.get_xy(x, y))
    }
}
