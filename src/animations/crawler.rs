//! Crawler - a single lit head wandering the grid, leaving a coloured trail
//!
//! Each cycle the head is drawn, the cells just ahead of it are blanked so it
//! cuts through its old trail, and it may turn 90 degrees. Positions wrap at
//! every edge. With `any_angle` the head starts on a random heading and its
//! sub-cell remainder carries between steps.

use crate::domain::Rgb;
use crate::render::Renderer;
use crate::spatial::{advance, MovingPixel};

/// Sub-cell units per cell for the head position
const SCALE: i32 = 16;

pub struct Crawler {
    width: i32,
    height: i32,
    head_x: MovingPixel,
    head_y: MovingPixel,
    colour: Rgb,
    max_brightness: u8,
    colour_steps: u16,
    since_colour: u16,
    since_turn: u16,
}

impl Crawler {
    /// Start at a random cell with a random heading and colour.
    ///
    /// The colour changes every `colour_steps` cycles.
    pub fn new<R: Renderer + ?Sized>(renderer: &mut R, colour_steps: u16, any_angle: bool, max_brightness: u8) -> Self {
        let width = renderer.grid_width().max(1) as i32;
        let height = renderer.grid_height().max(1) as i32;
        let x = renderer.random_int16(0, (width - 1).min(i16::MAX as i32) as i16) as i32;
        let y = renderer.random_int16(0, (height - 1).min(i16::MAX as i32) as i16) as i32;

        let (vx, vy) = if any_angle {
            let s = SCALE as i16;
            match (renderer.random_int16(-s, s) as i32, renderer.random_int16(-s, s) as i32) {
                (0, 0) => (SCALE, 0),
                v => v,
            }
        } else {
            match renderer.random_int16(0, 3) {
                0 => (0, SCALE),
                1 => (SCALE, 0),
                2 => (0, -SCALE),
                _ => (-SCALE, 0),
            }
        };

        let colour = Rgb::random_bright(max_brightness, |lo, hi| renderer.random_int16(lo, hi));

        Self {
            width,
            height,
            head_x: MovingPixel::new(x, vx),
            head_y: MovingPixel::new(y, vy),
            colour,
            max_brightness,
            colour_steps: colour_steps.max(1),
            since_colour: 0,
            since_turn: 0,
        }
    }

    #[inline]
    pub fn position(&self) -> (u32, u32) {
        (self.head_x.cell as u32, self.head_y.cell as u32)
    }

    #[inline]
    pub fn velocity(&self) -> (i32, i32) {
        (self.head_x.velocity, self.head_y.velocity)
    }

    #[inline]
    pub fn colour(&self) -> Rgb {
        self.colour
    }

    pub fn run_cycle<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        let (x, y) = (self.head_x.cell, self.head_y.cell);
        renderer.set_pixel_instant(x as u32, y as u32, self.colour);
        self.clear_ahead(renderer, x, y);
        renderer.show_pixels();

        self.since_turn += 1;
        if self.since_turn > 1 {
            match renderer.random_int16(0, 7) {
                0 => self.turn(true),
                1 => self.turn(false),
                _ => {}
            }
        }

        self.head_x.update(SCALE, self.width, true);
        self.head_y.update(SCALE, self.height, true);

        self.since_colour += 1;
        if self.since_colour >= self.colour_steps {
            self.since_colour = 0;
            self.colour = Rgb::random_bright(self.max_brightness, |lo, hi| renderer.random_int16(lo, hi));
        }
    }

    /// Rotate the heading a quarter turn
    fn turn(&mut self, left: bool) {
        let (vx, vy) = self.velocity();
        let (vx, vy) = if left { (-vy, vx) } else { (vy, -vx) };
        self.head_x.velocity = vx;
        self.head_y.velocity = vy;
        self.since_turn = 0;
    }

    /// Blank the three cells in front of the head and the two beside it
    fn clear_ahead<R: Renderer + ?Sized>(&self, renderer: &mut R, x: i32, y: i32) {
        let (vx, vy) = self.velocity();
        let (fx, fy) = if vx.abs() >= vy.abs() { (vx.signum(), 0) } else { (0, vy.signum()) };
        // Sideways is the heading turned a quarter
        let (sx, sy) = (-fy, fx);

        let cells = [
            (sx, sy),
            (-sx, -sy),
            (fx, fy),
            (fx + sx, fy + sy),
            (fx - sx, fy - sy),
        ];
        for (dx, dy) in cells {
            let cx = advance(x, dx, self.width, true);
            let cy = advance(y, dy, self.height, true);
            renderer.set_pixel_instant(cx as u32, cy as u32, Rgb::BLACK);
        }
    }
}
