//! The all-pairs interaction pass and the ball's bounce/score policy
//!
//! Interaction is a protocol, not an object: after the movement phase every
//! entity gets to react to every other entity, in construction order. In
//! practice only the ball reacts to anything; walls and paddles just stand
//! there being tags.

use glam::IVec2;

use super::entity::{Ball, Deflection, Entity, Player};
use super::rect::Rect;
use super::state::{GameState, Serve};
use crate::consts::WIN_SCORE;

/// Something observable that happened during an interaction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The ball reflected off an obstacle.
    Bounce { multiplier: IVec2 },
    /// A point was scored; `scores` is the board after the increment.
    Point { scorer: Player, scores: [u8; 2] },
    /// `winner` reached the winning score; the board has been reset.
    Win { winner: Player },
}

/// Apply a partner's tag to the ball.
///
/// Reflection flips velocity signs and nothing else, so per-axis speed is
/// preserved. A scoring boundary advances the board and drops the ball at
/// the scorer's serve; reaching the winning score instead resets the whole
/// board. A counter can therefore never exceed `WIN_SCORE`.
pub fn deflect(ball: &mut Ball, deflection: Deflection) -> GameEvent {
    match deflection {
        Deflection::Reflect(multiplier) => {
            ball.vel *= multiplier;
            GameEvent::Bounce { multiplier }
        }
        Deflection::Score(scorer) => {
            ball.scores[scorer.index()] += 1;
            let serve = Serve::after_point(scorer);
            ball.pos = serve.pos;
            ball.vel = serve.vel;

            if ball.scores[scorer.index()] < WIN_SCORE {
                GameEvent::Point {
                    scorer,
                    scores: ball.scores,
                }
            } else {
                ball.scores = [0, 0];
                GameEvent::Win { winner: scorer }
            }
        }
    }
}

/// Run the all-pairs interaction protocol over the entity set.
///
/// Partner boxes and tags are snapshotted first; they are static during the
/// pass, while the ball re-reads its own box before every pairing (scoring
/// teleports it mid-pass). The `i == j` pairing is skipped, so an entity
/// overlapping itself is never an event.
pub fn interaction_pass(state: &mut GameState) -> Vec<GameEvent> {
    let snapshot: Vec<(Rect, Deflection)> = state
        .entities
        .iter()
        .map(|e| (e.bounds(), e.deflection()))
        .collect();

    let mut events = Vec::new();
    for i in 0..state.entities.len() {
        for (j, &(bounds, deflection)) in snapshot.iter().enumerate() {
            if i == j {
                continue;
            }
            if let Entity::Ball(ball) = &mut state.entities[i] {
                if ball.bounds().overlaps(&bounds) {
                    events.push(deflect(ball, deflection));
                }
            }
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Wall;
    use proptest::prelude::*;

    fn ball_at(pos: IVec2, vel: IVec2) -> Ball {
        let mut ball = Ball::new(IVec2::ZERO, 3, vel);
        ball.pos = pos;
        ball
    }

    #[test]
    fn test_reflect_flips_signs_only() {
        let mut ball = ball_at(IVec2::new(60, 30), IVec2::new(5, 2));
        let event = deflect(&mut ball, Deflection::Reflect(IVec2::new(1, -1)));
        assert_eq!(ball.vel, IVec2::new(5, -2));
        assert_eq!(
            event,
            GameEvent::Bounce {
                multiplier: IVec2::new(1, -1)
            }
        );
    }

    #[test]
    fn test_neutral_reflect_is_identity() {
        let mut ball = ball_at(IVec2::new(60, 30), IVec2::new(-5, 2));
        deflect(&mut ball, Deflection::NEUTRAL);
        assert_eq!(ball.vel, IVec2::new(-5, 2));
    }

    #[test]
    fn test_score_increments_and_serves() {
        let mut ball = ball_at(IVec2::new(-3, 30), IVec2::new(-5, 2));
        let event = deflect(&mut ball, Deflection::Score(Player::Two));

        assert_eq!(ball.scores, [0, 1]);
        assert_eq!(ball.pos, IVec2::new(20, 27));
        assert_eq!(ball.vel, IVec2::new(5, 2));
        assert_eq!(
            event,
            GameEvent::Point {
                scorer: Player::Two,
                scores: [0, 1]
            }
        );
    }

    #[test]
    fn test_win_resets_board_at_threshold() {
        let mut ball = ball_at(IVec2::new(126, 30), IVec2::new(5, 2));
        ball.scores = [3, 3];
        let event = deflect(&mut ball, Deflection::Score(Player::One));

        assert_eq!(event, GameEvent::Win { winner: Player::One });
        assert_eq!(ball.scores, [0, 0]);
        assert_eq!(ball.pos, IVec2::new(107, 27));
        assert_eq!(ball.vel, IVec2::new(-5, -2));
    }

    #[test]
    fn test_score_never_exceeds_threshold() {
        let mut ball = ball_at(IVec2::new(60, 30), IVec2::new(5, 2));
        for _ in 0..10 {
            deflect(&mut ball, Deflection::Score(Player::One));
            assert!(ball.scores[0] < WIN_SCORE);
            assert!(ball.scores[1] < WIN_SCORE);
        }
    }

    #[test]
    fn test_lone_ball_never_interacts_with_itself() {
        let ball = ball_at(IVec2::new(60, 30), IVec2::new(5, 2));
        let mut state = GameState::with_entities(vec![Entity::Ball(ball)]);

        let events = interaction_pass(&mut state);
        assert!(events.is_empty());
        assert_eq!(state.ball().unwrap().vel, IVec2::new(5, 2));
        assert_eq!(state.ball().unwrap().pos, IVec2::new(60, 30));
    }

    #[test]
    fn test_pass_resolves_wall_bounce() {
        let ball = ball_at(IVec2::new(50, -1), IVec2::new(5, -2));
        let top = Wall::new(
            IVec2::new(0, 0),
            IVec2::new(127, 0),
            Deflection::Reflect(IVec2::new(1, -1)),
        );
        let mut state = GameState::with_entities(vec![Entity::Ball(ball), Entity::Wall(top)]);

        let events = interaction_pass(&mut state);
        assert_eq!(
            events,
            vec![GameEvent::Bounce {
                multiplier: IVec2::new(1, -1)
            }]
        );
        assert_eq!(state.ball().unwrap().vel, IVec2::new(5, 2));
    }

    #[test]
    fn test_non_overlapping_pass_is_quiet() {
        let ball = ball_at(IVec2::new(50, 30), IVec2::new(5, 2));
        let top = Wall::new(
            IVec2::new(0, 0),
            IVec2::new(127, 0),
            Deflection::Reflect(IVec2::new(1, -1)),
        );
        let mut state = GameState::with_entities(vec![Entity::Ball(ball), Entity::Wall(top)]);

        assert!(interaction_pass(&mut state).is_empty());
    }

    proptest! {
        #[test]
        fn test_reflection_preserves_per_axis_speed(
            vx in -9..9i32, vy in -9..9i32,
            fx in any::<bool>(), fy in any::<bool>(),
        ) {
            let multiplier = IVec2::new(if fx { -1 } else { 1 }, if fy { -1 } else { 1 });
            let mut ball = ball_at(IVec2::new(60, 30), IVec2::new(vx, vy));
            deflect(&mut ball, Deflection::Reflect(multiplier));
            prop_assert_eq!(ball.vel.abs(), IVec2::new(vx, vy).abs());
            prop_assert_eq!(ball.vel, IVec2::new(vx * multiplier.x, vy * multiplier.y));
        }
    }
}
