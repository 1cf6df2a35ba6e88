//! Display capability traits
//!
//! The game draws through these, never against concrete device types. One
//! device usually implements both: pixels for the playfield, text cells for
//! the score banner.

use glam::IVec2;

/// A monochrome pixel surface with deferred presentation.
pub trait PixelSurface {
    /// Blank the working frame.
    fn clear(&mut self);

    /// Light one pixel of the working frame. Out-of-range positions are
    /// clipped, not errors.
    fn set_pixel(&mut self, pos: IVec2);

    /// Present the working frame.
    fn flush(&mut self);

    /// Light the straight line from `a` to `b`, endpoints included.
    fn draw_line(&mut self, a: IVec2, b: IVec2) {
        // Bresenham over all octants
        let d = (b - a).abs();
        let sx = if a.x < b.x { 1 } else { -1 };
        let sy = if a.y < b.y { 1 } else { -1 };
        let mut err = d.x - d.y;
        let mut pos = a;
        loop {
            self.set_pixel(pos);
            if pos == b {
                break;
            }
            let e2 = 2 * err;
            if e2 > -d.y {
                err -= d.y;
                pos.x += sx;
            }
            if e2 < d.x {
                err += d.x;
                pos.y += sy;
            }
        }
    }
}

/// Cursor-addressed text cells layered over the same device.
///
/// Cells are `GLYPH_SIZE` pixels square, so column 5 starts at pixel x 40.
/// Presentation still goes through the pixel surface's `flush`.
pub trait TextOverlay {
    /// Write `text` into the working frame, starting at the given cell.
    fn write_at(&mut self, col: i32, row: i32, text: &str);
}
