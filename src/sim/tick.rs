//! The fixed-tick game loop
//!
//! One tick is a strict sequence: present the frame, hold it for the tick
//! period, then move everything and resolve what touched what. The wait
//! sits between flush and update so every drawn frame stays on screen for a
//! full period before the state it rendered is disturbed.

use super::collision::{GameEvent, interaction_pass};
use super::entity::Player;
use super::state::GameState;
use crate::display::{PixelSurface, TextOverlay};
use crate::platform::Clock;

/// Text cell where the running score is written.
const SCORE_CELL: (i32, i32) = (5, 3);
/// Text cell of the win banner.
const WIN_CELL: (i32, i32) = (3, 3);

/// Advance the game by exactly one tick against the injected display and
/// clock, and report what happened.
///
/// Phase order per tick:
/// 1. clear the working frame
/// 2. draw every entity in construction order
/// 3. flush
/// 4. block for the tick period
/// 5. update every entity in construction order
/// 6. all-pairs interaction pass
/// 7. for each scoring event, hold the score or win banner
pub fn tick<D, C>(state: &mut GameState, display: &mut D, clock: &mut C) -> Vec<GameEvent>
where
    D: PixelSurface + TextOverlay,
    C: Clock,
{
    display.clear();
    for entity in &state.entities {
        entity.draw(display);
    }
    display.flush();
    clock.wait_ms(state.tick_ms);

    for entity in &mut state.entities {
        entity.update();
    }

    let events = interaction_pass(state);
    for event in &events {
        match *event {
            GameEvent::Bounce { .. } => {}
            GameEvent::Point { scores, .. } => {
                let text = format!("{} - {}", scores[0], scores[1]);
                show_banner(display, clock, state.score_pause_ms, SCORE_CELL, &text);
            }
            GameEvent::Win { winner } => {
                let text = match winner {
                    Player::One => " P1 WINS!!",
                    Player::Two => " P2 WINS!!",
                };
                show_banner(display, clock, state.score_pause_ms, WIN_CELL, text);
            }
        }
    }

    state.ticks += 1;
    events
}

/// Replace the frame with a text banner and hold it for the scoring pause.
fn show_banner<D, C>(display: &mut D, clock: &mut C, pause_ms: u64, cell: (i32, i32), text: &str)
where
    D: PixelSurface + TextOverlay,
    C: Clock,
{
    display.clear();
    display.write_at(cell.0, cell.1, text);
    display.flush();
    clock.wait_ms(pause_ms);
}

/// Drive the loop forever. `control` runs before every tick so the host can
/// feed paddle input; the process is expected to be terminated externally.
pub fn run<D, C, F>(state: &mut GameState, display: &mut D, clock: &mut C, mut control: F) -> !
where
    D: PixelSurface + TextOverlay,
    C: Clock,
    F: FnMut(&mut GameState),
{
    loop {
        control(state);
        for event in tick(state, display, clock) {
            match event {
                GameEvent::Bounce { multiplier } => {
                    log::debug!("bounce x{} at tick {}", multiplier, state.ticks);
                }
                GameEvent::Point { scorer, scores } => {
                    log::info!("point for {:?}, board {} - {}", scorer, scores[0], scores[1]);
                }
                GameEvent::Win { winner } => {
                    log::info!("{:?} wins the round", winner);
                }
            }
        }
    }
}
