//! Renderer - the display, random source and message sink the engine drives
//!
//! The engine never talks to hardware. Everything it needs from the outside
//! world goes through this trait: pixel pushes, frame presentation, random
//! numbers for jitter and placement, diagnostics and pacing.

use crate::domain::Rgb;

mod frame_buffer;

pub use frame_buffer::FrameBuffer;

pub trait Renderer {
    fn grid_width(&self) -> u32;

    fn grid_height(&self) -> u32;

    /// Update one pixel of the pending frame (row 0 is the bottom row)
    fn set_pixel_instant(&mut self, x: u32, y: u32, colour: Rgb);

    /// Present the pending frame
    fn show_pixels(&mut self);

    /// Uniform random value in `low..=high`
    fn random_int16(&mut self, low: i16, high: i16) -> i16;

    fn output_message(&mut self, message: &str);

    fn ms_sleep(&mut self, ms: u32);
}
