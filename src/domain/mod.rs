//! Domain - colours, palette and the particle record

pub mod colour;
pub mod palette;
pub mod particle;

pub use colour::Rgb;
pub use palette::{ColourId, ColourPalette, PaletteMatch, EMPTY_ID};
pub use particle::Particle;
