//! Game state and arena construction
//!
//! The entity set is built once and lives for the whole process; only
//! positions, velocities and scores change after that.

use glam::IVec2;

use super::entity::{Ball, Deflection, Entity, Paddle, Player, Wall};
use crate::consts::*;

/// Where and how the ball re-enters play after a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Serve {
    /// Top-left anchor the ball is reset to.
    pub pos: IVec2,
    pub vel: IVec2,
}

impl Serve {
    /// The serve awarded when `scorer` takes a point: the ball re-enters on
    /// the conceding side, heading back toward the scorer.
    pub fn after_point(scorer: Player) -> Self {
        match scorer {
            Player::Two => Serve {
                pos: IVec2::new(20, 27),
                vel: IVec2::new(5, 2),
            },
            Player::One => Serve {
                pos: IVec2::new(107, 27),
                vel: IVec2::new(-5, -2),
            },
        }
    }
}

/// Complete simulation state: the entity set in construction order plus the
/// loop timing captured at startup.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Entities in construction order. Drawing and the interaction pass walk
    /// this order every tick; it is never reordered.
    pub entities: Vec<Entity>,
    /// Blocking delay between flush and update, in milliseconds.
    pub tick_ms: u64,
    /// How long a scoring banner is held, in milliseconds.
    pub score_pause_ms: u64,
    /// Ticks completed since construction.
    pub ticks: u64,
    paddle_idx: [Option<usize>; 2],
}

impl GameState {
    /// The standard two-player arena: four boundary walls, two paddles and
    /// the ball, on a 128x64 grid. Side walls bounce, end walls score for
    /// the defender of the opposite edge.
    pub fn new() -> Self {
        let w = DISPLAY_WIDTH - 1;
        let h = DISPLAY_HEIGHT - 1;
        let bounce = Deflection::Reflect(IVec2::new(1, -1));
        let repel = Deflection::Reflect(IVec2::new(-1, 1));

        Self::with_entities(vec![
            Entity::Ball(Ball::new(IVec2::new(50, 20), BALL_RADIUS, IVec2::new(5, 2))),
            Entity::Wall(Wall::new(IVec2::new(0, 0), IVec2::new(w, 0), bounce)),
            Entity::Wall(Wall::new(
                IVec2::new(0, 0),
                IVec2::new(0, h),
                Deflection::Score(Player::Two),
            )),
            Entity::Wall(Wall::new(
                IVec2::new(w, 0),
                IVec2::new(w, h),
                Deflection::Score(Player::One),
            )),
            Entity::Wall(Wall::new(IVec2::new(0, h), IVec2::new(w, h), bounce)),
            Entity::Paddle(Paddle::new(IVec2::new(10, 24), IVec2::new(10, 37), repel)),
            Entity::Paddle(Paddle::new(IVec2::new(117, 24), IVec2::new(117, 37), repel)),
        ])
    }

    /// Build a state over an explicit entity set. Paddles belong to players
    /// in construction order; the first one is player one's.
    pub fn with_entities(entities: Vec<Entity>) -> Self {
        let mut paddle_idx = [None; 2];
        let mut next = 0;
        for (i, entity) in entities.iter().enumerate() {
            if matches!(entity, Entity::Paddle(_)) && next < 2 {
                paddle_idx[next] = Some(i);
                next += 1;
            }
        }
        Self {
            entities,
            tick_ms: TICK_MS,
            score_pause_ms: SCORE_PAUSE_MS,
            ticks: 0,
            paddle_idx,
        }
    }

    /// The ball, if the arena has one.
    pub fn ball(&self) -> Option<&Ball> {
        self.entities.iter().find_map(|e| match e {
            Entity::Ball(b) => Some(b),
            _ => None,
        })
    }

    /// A player's paddle.
    pub fn paddle_mut(&mut self, player: Player) -> Option<&mut Paddle> {
        let idx = self.paddle_idx[player.index()]?;
        match &mut self.entities[idx] {
            Entity::Paddle(p) => Some(p),
            _ => None,
        }
    }

    /// Current score board, read off the ball.
    pub fn scores(&self) -> [u8; 2] {
        self.ball().map(|b| b.scores).unwrap_or([0, 0])
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_arena_layout() {
        let state = GameState::new();
        assert_eq!(state.entities.len(), 7);

        // Ball leads the construction order
        let ball = state.ball().unwrap();
        assert_eq!(ball.pos, IVec2::new(47, 17));
        assert_eq!(ball.vel, IVec2::new(5, 2));
        assert_eq!(state.scores(), [0, 0]);
        assert!(matches!(state.entities[0], Entity::Ball(_)));

        // End walls credit the opposite defender
        assert_eq!(
            state.entities[2].deflection(),
            Deflection::Score(Player::Two)
        );
        assert_eq!(
            state.entities[3].deflection(),
            Deflection::Score(Player::One)
        );
    }

    #[test]
    fn test_paddles_assigned_in_order() {
        let mut state = GameState::new();
        let left = state.paddle_mut(Player::One).unwrap();
        assert_eq!(left.top.x, 10);
        let right = state.paddle_mut(Player::Two).unwrap();
        assert_eq!(right.top.x, 117);
    }

    #[test]
    fn test_paddle_lookup_without_paddles() {
        let mut state = GameState::with_entities(vec![Entity::Ball(Ball::new(
            IVec2::new(50, 20),
            3,
            IVec2::new(5, 2),
        ))]);
        assert!(state.paddle_mut(Player::One).is_none());
        assert!(state.paddle_mut(Player::Two).is_none());
    }

    #[test]
    fn test_serve_configurations() {
        let s2 = Serve::after_point(Player::Two);
        assert_eq!(s2.pos, IVec2::new(20, 27));
        assert_eq!(s2.vel, IVec2::new(5, 2));

        let s1 = Serve::after_point(Player::One);
        assert_eq!(s1.pos, IVec2::new(107, 27));
        assert_eq!(s1.vel, IVec2::new(-5, -2));
    }
}
