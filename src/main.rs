//! Native demo entry point
//!
//! Runs the simulation against the in-memory framebuffer and paints every
//! presented frame to the terminal with half-block characters, two pixel
//! rows per text row. Both paddles are driven by a simple ball-tracking
//! controller, so the demo plays itself.

use std::io::{self, Write};

use glam::IVec2;

use oled_pong::Config;
use oled_pong::display::{Framebuffer, PixelSurface, TextOverlay};
use oled_pong::platform::StdClock;
use oled_pong::sim::{GameState, Player, run};

/// Framebuffer that paints itself to stdout on every flush.
struct TerminalDisplay {
    fb: Framebuffer,
}

impl TerminalDisplay {
    fn new() -> Self {
        // Clear the terminal once; every frame repaints from the top
        print!("\x1b[2J");
        Self {
            fb: Framebuffer::new(),
        }
    }

    fn paint(&self) {
        let frame = self.fb.presented();
        let mut out = String::with_capacity((frame[0].len() + 1) * frame.len() / 2 + 8);
        out.push_str("\x1b[H");
        for rows in frame.chunks_exact(2) {
            for x in 0..rows[0].len() {
                out.push(match (rows[0][x], rows[1][x]) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                });
            }
            out.push('\n');
        }
        print!("{out}");
        let _ = io::stdout().flush();
    }
}

impl PixelSurface for TerminalDisplay {
    fn clear(&mut self) {
        self.fb.clear();
    }

    fn set_pixel(&mut self, pos: IVec2) {
        self.fb.set_pixel(pos);
    }

    fn flush(&mut self) {
        self.fb.flush();
        self.paint();
    }
}

impl TextOverlay for TerminalDisplay {
    fn write_at(&mut self, col: i32, row: i32, text: &str) {
        self.fb.write_at(col, row, text);
    }
}

/// Nudge a paddle toward the ball's vertical midpoint, stopping inside a
/// one-step dead zone so it does not jitter.
fn track_ball(state: &mut GameState, player: Player, step: i32) {
    let Some(ball) = state.ball() else { return };
    let target = ball.pos.y + ball.size.y / 2;

    if let Some(paddle) = state.paddle_mut(player) {
        let mid = (paddle.top.y + paddle.bottom.y) / 2;
        let speed = if target < mid - step {
            -step
        } else if target > mid + step {
            step
        } else {
            0
        };
        paddle.set_speed(speed);
    }
}

fn main() {
    env_logger::init();

    let config = Config::load();
    log::info!(
        "OLED Pong starting: tick {} ms, score pause {} ms",
        config.tick_ms,
        config.score_pause_ms
    );

    let mut state = GameState::new();
    state.tick_ms = config.tick_ms;
    state.score_pause_ms = config.score_pause_ms;

    let mut display = TerminalDisplay::new();
    let mut clock = StdClock;

    let step = config.paddle_step;
    run(&mut state, &mut display, &mut clock, move |state| {
        track_ball(state, Player::One, step);
        track_ball(state, Player::Two, step);
    })
}
