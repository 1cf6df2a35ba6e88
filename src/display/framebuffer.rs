//! In-memory monochrome framebuffer
//!
//! Reference implementation of the display capabilities, used by the tests
//! and the native demo. Double-buffered: drawing mutates the working frame,
//! `flush` publishes it, and readers of the presented frame never observe a
//! half-drawn tick.

use glam::IVec2;

use super::surface::{PixelSurface, TextOverlay};
use crate::consts::{DISPLAY_HEIGHT, DISPLAY_WIDTH, GLYPH_SIZE};

/// Buffer width in pixels
pub const WIDTH: usize = DISPLAY_WIDTH as usize;
/// Buffer height in pixels
pub const HEIGHT: usize = DISPLAY_HEIGHT as usize;

/// A 128x64 pixel buffer with deferred presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: [[bool; WIDTH]; HEIGHT],
    presented: [[bool; WIDTH]; HEIGHT],
}

impl Framebuffer {
    pub fn new() -> Self {
        Self {
            pixels: [[false; WIDTH]; HEIGHT],
            presented: [[false; WIDTH]; HEIGHT],
        }
    }

    /// Read one pixel of the working frame. Out-of-range reads are dark.
    pub fn pixel(&self, pos: IVec2) -> bool {
        if !Self::in_range(pos) {
            return false;
        }
        self.pixels[pos.y as usize][pos.x as usize]
    }

    /// The last flushed frame, rows top to bottom.
    pub fn presented(&self) -> &[[bool; WIDTH]; HEIGHT] {
        &self.presented
    }

    #[inline]
    fn in_range(pos: IVec2) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < DISPLAY_WIDTH && pos.y < DISPLAY_HEIGHT
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelSurface for Framebuffer {
    fn clear(&mut self) {
        self.pixels = [[false; WIDTH]; HEIGHT];
    }

    fn set_pixel(&mut self, pos: IVec2) {
        if Self::in_range(pos) {
            self.pixels[pos.y as usize][pos.x as usize] = true;
        }
    }

    fn flush(&mut self) {
        self.presented = self.pixels;
    }
}

impl TextOverlay for Framebuffer {
    fn write_at(&mut self, col: i32, row: i32, text: &str) {
        let mut cx = col * GLYPH_SIZE;
        let cy = row * GLYPH_SIZE;
        for ch in text.chars() {
            let rows = glyph(ch);
            for (dy, &bits) in rows.iter().enumerate() {
                for dx in 0..GLYPH_SIZE {
                    if (bits >> (GLYPH_SIZE - 1 - dx)) & 1 == 1 {
                        self.set_pixel(IVec2::new(cx + dx, cy + dy as i32));
                    }
                }
            }
            cx += GLYPH_SIZE;
        }
    }
}

/// 8x8 glyph rows, high bit leftmost. Covers exactly the characters the
/// game prints; anything else renders blank.
fn glyph(ch: char) -> [u8; 8] {
    match ch {
        '0' => [0x3C, 0x66, 0x6E, 0x76, 0x66, 0x66, 0x3C, 0x00],
        '1' => [0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00],
        '2' => [0x3C, 0x66, 0x06, 0x0C, 0x18, 0x30, 0x7E, 0x00],
        '3' => [0x3C, 0x66, 0x06, 0x1C, 0x06, 0x66, 0x3C, 0x00],
        '4' => [0x0C, 0x1C, 0x3C, 0x6C, 0x7E, 0x0C, 0x0C, 0x00],
        '5' => [0x7E, 0x60, 0x7C, 0x06, 0x06, 0x66, 0x3C, 0x00],
        '6' => [0x3C, 0x60, 0x7C, 0x66, 0x66, 0x66, 0x3C, 0x00],
        '7' => [0x7E, 0x06, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x00],
        '8' => [0x3C, 0x66, 0x66, 0x3C, 0x66, 0x66, 0x3C, 0x00],
        '9' => [0x3C, 0x66, 0x66, 0x3E, 0x06, 0x0C, 0x38, 0x00],
        '-' => [0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00],
        '!' => [0x18, 0x18, 0x18, 0x18, 0x18, 0x00, 0x18, 0x00],
        'P' => [0x7C, 0x66, 0x66, 0x7C, 0x60, 0x60, 0x60, 0x00],
        'W' => [0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00],
        'I' => [0x3C, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00],
        'N' => [0x66, 0x76, 0x7E, 0x7E, 0x6E, 0x66, 0x66, 0x00],
        'S' => [0x3C, 0x66, 0x60, 0x3C, 0x06, 0x66, 0x3C, 0x00],
        _ => [0x00; 8],
    }
}
