//! Colour Palette - bounded colour table indexed by small integers
//!
//! The occupancy grid stores one `u16` per cell instead of a full colour,
//! so every colour drawn into the grid goes through this table first.
//! Index 0 is reserved for black / empty and is never handed out.

use super::colour::Rgb;

pub type ColourId = u16;

pub const EMPTY_ID: ColourId = 0;

/// How a colour lookup was satisfied
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteMatch {
    Exact(ColourId),
    Added(ColourId),
    /// Table full - closest existing entry substituted
    Nearest { id: ColourId, requested: Rgb, used: Rgb },
}

impl PaletteMatch {
    #[inline]
    pub fn id(&self) -> ColourId {
        match *self {
            PaletteMatch::Exact(id) | PaletteMatch::Added(id) => id,
            PaletteMatch::Nearest { id, .. } => id,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ColourPalette {
    entries: Vec<Rgb>,
    capacity: ColourId,
}

impl ColourPalette {
    /// `capacity` is the number of non-black entries the table can hold
    pub fn new(capacity: ColourId) -> Self {
        let mut entries = Vec::with_capacity(capacity as usize + 1);
        entries.push(Rgb::BLACK);
        Self { entries, capacity }
    }

    /// Highest index in use (0 when only the reserved entry exists)
    #[inline]
    pub fn colours_defined(&self) -> ColourId {
        (self.entries.len() - 1) as ColourId
    }

    #[inline]
    pub fn capacity(&self) -> ColourId {
        self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.colours_defined() >= self.capacity
    }

    /// Look up (or add) a colour and report how it was matched
    pub fn resolve(&mut self, colour: Rgb) -> PaletteMatch {
        if let Some(pos) = self.entries[1..].iter().position(|c| *c == colour) {
            return PaletteMatch::Exact((pos + 1) as ColourId);
        }

        if !self.is_full() {
            self.entries.push(colour);
            return PaletteMatch::Added(self.colours_defined());
        }

        // Full: first entry with the smallest summed channel difference wins
        let (pos, used) = self.entries[1..]
            .iter()
            .enumerate()
            .min_by_key(|(_, c)| c.distance(colour))
            .map(|(i, c)| (i + 1, *c))
            .unwrap_or((EMPTY_ID as usize, Rgb::BLACK));

        PaletteMatch::Nearest {
            id: pos as ColourId,
            requested: colour,
            used,
        }
    }

    #[inline]
    pub fn colour_id(&mut self, colour: Rgb) -> ColourId {
        self.resolve(colour).id()
    }

    /// Black for the empty index or anything not yet defined
    #[inline]
    pub fn colour(&self, id: ColourId) -> Rgb {
        if id == EMPTY_ID {
            return Rgb::BLACK;
        }
        self.entries.get(id as usize).copied().unwrap_or(Rgb::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one_and_deduplicate() {
        let mut p = ColourPalette::new(10);
        let red = Rgb::new(255, 0, 0);
        let green = Rgb::new(0, 255, 0);
        assert_eq!(p.resolve(red), PaletteMatch::Added(1));
        assert_eq!(p.resolve(green), PaletteMatch::Added(2));
        assert_eq!(p.resolve(red), PaletteMatch::Exact(1));
        assert_eq!(p.colours_defined(), 2);
    }

    #[test]
    fn round_trip_while_room_remains() {
        let mut p = ColourPalette::new(64);
        for i in 0..64u8 {
            let c = Rgb::new(i, 255 - i, i / 2);
            let id = p.colour_id(c);
            assert_eq!(p.colour(id), c);
        }
    }

    #[test]
    fn black_gets_its_own_visible_entry() {
        let mut p = ColourPalette::new(4);
        let id = p.colour_id(Rgb::BLACK);
        assert_ne!(id, EMPTY_ID);
        assert_eq!(p.colour(id), Rgb::BLACK);
    }

    #[test]
    fn full_palette_substitutes_nearest_and_stops_growing() {
        let mut p = ColourPalette::new(2);
        p.colour_id(Rgb::new(200, 0, 0));
        p.colour_id(Rgb::new(0, 0, 200));
        assert!(p.is_full());

        let m = p.resolve(Rgb::new(10, 0, 180));
        assert_eq!(
            m,
            PaletteMatch::Nearest {
                id: 2,
                requested: Rgb::new(10, 0, 180),
                used: Rgb::new(0, 0, 200),
            }
        );
        assert_eq!(p.colours_defined(), 2);
    }

    #[test]
    fn unknown_ids_read_as_black() {
        let p = ColourPalette::new(4);
        assert_eq!(p.colour(0), Rgb::BLACK);
        assert_eq!(p.colour(3), Rgb::BLACK);
    }
}
