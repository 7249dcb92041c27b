use serde::{Deserialize, Serialize};

/// 24-bit colour as sent to the LEDs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Summed per-channel absolute difference
    #[inline]
    pub fn distance(&self, other: Rgb) -> u32 {
        (self.r as i32 - other.r as i32).unsigned_abs()
            + (self.g as i32 - other.g as i32).unsigned_abs()
            + (self.b as i32 - other.b as i32).unsigned_abs()
    }

    /// ABGR packed (little-endian bytes come out as R,G,B,A for canvas ImageData)
    #[inline]
    pub fn to_abgr(&self) -> u32 {
        0xFF00_0000 | ((self.b as u32) << 16) | ((self.g as u32) << 8) | self.r as u32
    }

    /// Random colour that is never too dim to see on an LED panel.
    ///
    /// `rand(low, high)` must return an inclusive random value.
    pub fn random_bright(max_brightness: u8, mut rand: impl FnMut(i16, i16) -> i16) -> Rgb {
        let max = max_brightness as i16;
        let mut r = rand(0, max) as u8;
        let mut g = rand(0, max) as u8;
        let mut b = rand(0, max) as u8;
        let min_brightness = (max_brightness as u16 * 3 / 4) as u8;

        if r < min_brightness && g < min_brightness && b < min_brightness {
            match rand(0, 2) {
                0 => r = 200,
                1 => g = 200,
                _ => b = 200,
            }
        }
        Rgb::new(r, g, b)
    }
}
