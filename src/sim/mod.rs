//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed tick only
//! - Integer pixel coordinates only
//! - Stable iteration order (construction order)
//! - No concrete display or platform code; rendering and timing go through
//!   the injected capability traits

pub mod collision;
pub mod entity;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{GameEvent, deflect, interaction_pass};
pub use entity::{Ball, Deflection, Entity, Paddle, Player, Wall};
pub use rect::Rect;
pub use state::{GameState, Serve};
pub use tick::{run, tick};
