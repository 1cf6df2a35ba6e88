//! Arena entities and their interaction tags
//!
//! Everything that lives on the board is one of three shapes. Each carries
//! a `Deflection` tag that tells the ball what touching it means; the shapes
//! themselves never react to anything.

use glam::IVec2;

use super::rect::Rect;
use crate::display::PixelSurface;

/// The two competitors. `One` defends the left edge, `Two` the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Index into the score board
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// What touching an entity does to the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deflection {
    /// Componentwise velocity multiplier; components are strictly ±1.
    Reflect(IVec2),
    /// Crossing this boundary scores a point for the player.
    Score(Player),
}

impl Deflection {
    /// The multiplier that leaves velocity unchanged.
    pub const NEUTRAL: Deflection = Deflection::Reflect(IVec2::ONE);
}

/// An immovable line segment obstacle.
#[derive(Debug, Clone, Copy)]
pub struct Wall {
    pub a: IVec2,
    pub b: IVec2,
    pub deflection: Deflection,
}

impl Wall {
    pub fn new(a: IVec2, b: IVec2, deflection: Deflection) -> Self {
        Self { a, b, deflection }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_corners(self.a, self.b)
    }
}

/// A vertical line segment the input collaborator moves up and down.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub top: IVec2,
    pub bottom: IVec2,
    pub deflection: Deflection,
    speed: i32,
}

impl Paddle {
    pub fn new(top: IVec2, bottom: IVec2, deflection: Deflection) -> Self {
        Self {
            top,
            bottom,
            deflection,
            speed: 0,
        }
    }

    /// Set between ticks by whoever reads the buttons. Negative moves the
    /// paddle up the screen.
    pub fn set_speed(&mut self, speed: i32) {
        self.speed = speed;
    }

    /// Advance both endpoints, so the segment keeps its length.
    pub fn update(&mut self) {
        self.top.y += self.speed;
        self.bottom.y += self.speed;
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_corners(self.top, self.bottom)
    }
}

/// The moving square. Carries both players' scores.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    /// Top-left anchor of the filled square.
    pub pos: IVec2,
    /// Extent; always `(2r, 2r)`.
    pub size: IVec2,
    pub vel: IVec2,
    /// Points per player, indexed by `Player::index`.
    pub scores: [u8; 2],
}

impl Ball {
    /// Build from the square's midpoint and half-extent.
    pub fn new(midpoint: IVec2, radius: i32, vel: IVec2) -> Self {
        Self {
            pos: midpoint - IVec2::splat(radius),
            size: IVec2::splat(radius * 2),
            vel,
            scores: [0, 0],
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_anchor_size(self.pos, self.size)
    }
}

/// Closed set of everything that can stand on the board.
#[derive(Debug, Clone, Copy)]
pub enum Entity {
    Wall(Wall),
    Paddle(Paddle),
    Ball(Ball),
}

impl Entity {
    /// Advance one tick of motion. Walls hold still.
    pub fn update(&mut self) {
        match self {
            Entity::Wall(_) => {}
            Entity::Paddle(p) => p.update(),
            Entity::Ball(b) => b.update(),
        }
    }

    /// Normalized bounding box for the overlap test.
    pub fn bounds(&self) -> Rect {
        match self {
            Entity::Wall(w) => w.bounds(),
            Entity::Paddle(p) => p.bounds(),
            Entity::Ball(b) => b.bounds(),
        }
    }

    /// The tag a partner reads when it overlaps this entity. The ball's own
    /// tag is neutral; nothing ever acts on it.
    pub fn deflection(&self) -> Deflection {
        match self {
            Entity::Wall(w) => w.deflection,
            Entity::Paddle(p) => p.deflection,
            Entity::Ball(_) => Deflection::NEUTRAL,
        }
    }

    pub fn overlaps(&self, other: &Entity) -> bool {
        self.bounds().overlaps(&other.bounds())
    }

    /// Render into the working frame. Pure; drawing twice without an
    /// intervening update lights the same pixels.
    pub fn draw<S: PixelSurface>(&self, surface: &mut S) {
        match self {
            Entity::Wall(w) => surface.draw_line(w.a, w.b),
            Entity::Paddle(p) => surface.draw_line(p.top, p.bottom),
            Entity::Ball(b) => {
                for y in b.pos.y..b.pos.y + b.size.y {
                    for x in b.pos.x..b.pos.x + b.size.x {
                        surface.set_pixel(IVec2::new(x, y));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Framebuffer;

    #[test]
    fn test_ball_from_midpoint() {
        let b = Ball::new(IVec2::new(50, 20), 3, IVec2::new(5, 2));
        assert_eq!(b.pos, IVec2::new(47, 17));
        assert_eq!(b.size, IVec2::new(6, 6));
        assert_eq!(b.scores, [0, 0]);
    }

    #[test]
    fn test_ball_bounds_include_far_edge() {
        let b = Ball::new(IVec2::new(50, 20), 3, IVec2::ZERO);
        let r = b.bounds();
        assert_eq!(r.min, IVec2::new(47, 17));
        assert_eq!(r.max, IVec2::new(53, 23));
    }

    #[test]
    fn test_paddle_update_moves_both_endpoints() {
        let mut p = Paddle::new(
            IVec2::new(10, 24),
            IVec2::new(10, 37),
            Deflection::Reflect(IVec2::new(-1, 1)),
        );
        p.set_speed(-3);
        p.update();
        assert_eq!(p.top, IVec2::new(10, 21));
        assert_eq!(p.bottom, IVec2::new(10, 34));

        p.set_speed(0);
        p.update();
        assert_eq!(p.top, IVec2::new(10, 21));
    }

    #[test]
    fn test_wall_never_moves() {
        let mut w = Entity::Wall(Wall::new(
            IVec2::new(0, 0),
            IVec2::new(127, 0),
            Deflection::Reflect(IVec2::new(1, -1)),
        ));
        let before = w.bounds();
        w.update();
        assert_eq!(w.bounds(), before);
    }

    #[test]
    fn test_entity_overlap_is_symmetric() {
        let wall = Entity::Wall(Wall::new(
            IVec2::new(0, 0),
            IVec2::new(0, 63),
            Deflection::NEUTRAL,
        ));
        let touching = Entity::Ball(Ball::new(IVec2::new(3, 30), 3, IVec2::ZERO));
        let clear = Entity::Ball(Ball::new(IVec2::new(20, 30), 3, IVec2::ZERO));

        assert!(touching.overlaps(&wall));
        assert!(wall.overlaps(&touching));
        assert!(!clear.overlaps(&wall));
    }

    #[test]
    fn test_draw_is_idempotent() {
        let ball = Entity::Ball(Ball::new(IVec2::new(50, 20), 3, IVec2::new(5, 2)));

        let mut once = Framebuffer::new();
        ball.draw(&mut once);

        let mut twice = Framebuffer::new();
        ball.draw(&mut twice);
        ball.draw(&mut twice);

        once.flush();
        twice.flush();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_ball_draws_filled_square() {
        let ball = Entity::Ball(Ball::new(IVec2::new(50, 20), 3, IVec2::ZERO));
        let mut fb = Framebuffer::new();
        ball.draw(&mut fb);

        for y in 17..23 {
            for x in 47..53 {
                assert!(fb.pixel(IVec2::new(x, y)), "missing pixel at ({x}, {y})");
            }
        }
        assert!(!fb.pixel(IVec2::new(46, 20)));
        assert!(!fb.pixel(IVec2::new(53, 20)));
    }
}
