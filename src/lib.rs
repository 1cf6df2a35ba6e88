//! OLED Pong - two-player Pong on a 128x64 monochrome display
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `display`: Pixel surface and text overlay capabilities, plus an
//!   in-memory framebuffer for tests and the native demo
//! - `platform`: Clock and digital input abstraction
//! - `config`: Host-tunable timing loaded from JSON

pub mod config;
pub mod display;
pub mod platform;
pub mod sim;

pub use config::Config;

/// Game configuration constants
pub mod consts {
    /// Display width in pixels
    pub const DISPLAY_WIDTH: i32 = 128;
    /// Display height in pixels
    pub const DISPLAY_HEIGHT: i32 = 64;

    /// Fixed tick period in milliseconds (5 Hz refresh)
    pub const TICK_MS: u64 = 200;
    /// How long the score banner is held after a point
    pub const SCORE_PAUSE_MS: u64 = 1000;

    /// Points needed to win a round
    pub const WIN_SCORE: u8 = 4;

    /// Ball half-extent in pixels
    pub const BALL_RADIUS: i32 = 3;
    /// Paddle travel per tick while a button is held
    pub const PADDLE_STEP: i32 = 3;

    /// Edge length of one text cell in the overlay font
    pub const GLYPH_SIZE: i32 = 8;
}

/// Inclusive double-sided interval test
#[inline]
pub fn within(x: i32, low: i32, high: i32) -> bool {
    low <= x && x <= high
}
