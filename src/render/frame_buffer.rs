use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::domain::Rgb;

use super::Renderer;

/// In-memory renderer.
///
/// Pixels are written into a pending RGB frame; `show_pixels` packs it into
/// an ABGR front buffer laid out top row first, ready for a canvas
/// `ImageData` or a terminal dump.
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pending: Vec<Rgb>,
    front: Vec<u32>,
    frames_shown: u64,
    rng: SmallRng,
    messages: Vec<String>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32, seed: u64) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pending: vec![Rgb::BLACK; size],
            front: vec![Rgb::BLACK.to_abgr(); size],
            frames_shown: 0,
            rng: SmallRng::seed_from_u64(seed),
            messages: Vec::new(),
        }
    }

    /// Pending colour of a pixel (row 0 at the bottom)
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        if x >= self.width || y >= self.height {
            return Rgb::BLACK;
        }
        self.pending[(y * self.width + x) as usize]
    }

    /// Presented frame, ABGR, top row first
    #[inline]
    pub fn frame(&self) -> &[u32] {
        &self.front
    }

    #[inline]
    pub fn frame_ptr(&self) -> *const u32 {
        self.front.as_ptr()
    }

    #[inline]
    pub fn frames_shown(&self) -> u64 {
        self.frames_shown
    }

    #[inline]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

impl Renderer for FrameBuffer {
    fn grid_width(&self) -> u32 {
        self.width
    }

    fn grid_height(&self) -> u32 {
        self.height
    }

    fn set_pixel_instant(&mut self, x: u32, y: u32, colour: Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.pending[(y * self.width + x) as usize] = colour;
    }

    fn show_pixels(&mut self) {
        let w = self.width as usize;
        let h = self.height as usize;
        if w == 0 {
            return;
        }
        for (row, src) in self.pending.chunks_exact(w).enumerate() {
            let dst_row = h - 1 - row;
            let dst = &mut self.front[dst_row * w..(dst_row + 1) * w];
            for (d, c) in dst.iter_mut().zip(src) {
                *d = c.to_abgr();
            }
        }
        self.frames_shown += 1;
    }

    fn random_int16(&mut self, low: i16, high: i16) -> i16 {
        let (lo, hi) = if low <= high { (low, high) } else { (high, low) };
        self.rng.gen_range(lo..=hi)
    }

    fn output_message(&mut self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&message.into());
        self.messages.push(message.to_string());
    }

    fn ms_sleep(&mut self, ms: u32) {
        #[cfg(not(target_arch = "wasm32"))]
        std::thread::sleep(std::time::Duration::from_millis(ms as u64));
        // The browser drives frames itself; blocking here would stall it
        #[cfg(target_arch = "wasm32")]
        let _ = ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_flips_rows_for_top_down_display() {
        let mut fb = FrameBuffer::new(2, 2, 1);
        fb.set_pixel_instant(0, 0, Rgb::new(255, 0, 0));
        fb.show_pixels();
        // Bottom-left pixel lands at the start of the last row
        assert_eq!(fb.frame()[2], Rgb::new(255, 0, 0).to_abgr());
        assert_eq!(fb.frame()[0], Rgb::BLACK.to_abgr());
        assert_eq!(fb.frames_shown(), 1);
    }

    #[test]
    fn random_is_inclusive_and_seeded() {
        let mut a = FrameBuffer::new(1, 1, 42);
        let mut b = FrameBuffer::new(1, 1, 42);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let v = a.random_int16(-1, 1);
            assert_eq!(v, b.random_int16(-1, 1));
            seen[(v + 1) as usize] = true;
        }
        assert_eq!(seen, [true, true, true]);
        assert_eq!(a.random_int16(5, 5), 5);
    }

    #[test]
    fn messages_are_kept() {
        let mut fb = FrameBuffer::new(1, 1, 0);
        fb.output_message("hello");
        assert_eq!(fb.take_messages(), vec!["hello".to_string()]);
        assert!(fb.messages().is_empty());
    }

    #[test]
    fn out_of_range_pixels_are_ignored() {
        let mut fb = FrameBuffer::new(2, 2, 0);
        fb.set_pixel_instant(5, 0, Rgb::new(1, 2, 3));
        assert_eq!(fb.pixel(5, 0), Rgb::BLACK);
    }
}
