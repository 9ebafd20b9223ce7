//! Ball motion, paddle contact and scoring detection
//!
//! Each tick the ball:
//! 1. Probes the four 1px strips just outside its edges against every paddle
//!    (left, right, top, bottom) and applies the first hit only
//! 2. Checks whether it escaped past the left or right wall (round over)
//! 3. Reflects off the top/bottom walls
//! 4. Moves by its velocity

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::object::{GameObject, Playfield};
use super::paddle::{Paddle, Side};
use super::rect::Rect;
use super::state::Player;
use crate::settings::Settings;

/// A side of the ball, in probe order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// Probe order; the first edge touching a paddle wins
    pub const PROBE_ORDER: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];
}

/// Horizontal walls the ball reflects off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Top,
    Bottom,
}

/// The bounce applied during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contact {
    /// `edge` of the ball touched the paddle defending `side`
    Paddle { side: Side, edge: Edge },
    Wall(Wall),
}

/// Result of advancing the ball one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum BallOutcome {
    /// Still in play. Carries the bounce applied this tick, if any; a paddle
    /// hit is reported over a wall bounce in the same tick.
    Continued { contact: Option<Contact> },
    /// Ball escaped; the round is over and the ball did not move this tick
    Scored(Player),
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    body: GameObject,
    /// Pixels per tick; neither component is ever zero
    vel: IVec2,
}

impl Ball {
    pub fn new(position: IVec2, size: i32, vel: IVec2) -> Self {
        debug_assert!(vel.x != 0 && vel.y != 0, "ball must move diagonally");
        Self {
            body: GameObject::new(position, size, size),
            vel,
        }
    }

    /// Serve a new ball: horizontally centered, at a random height, heading
    /// in a random diagonal direction
    pub fn spawn<R: Rng + ?Sized>(field: &Playfield, settings: &Settings, rng: &mut R) -> Self {
        let size = settings.ball_size;
        let x = field.width() / 2 - size / 2;
        let y = rng.random_range(0..=(field.height() - size).max(0));

        let speed = settings.ball_speed;
        let vx = if rng.random_bool(0.5) { speed } else { -speed };
        let vy = if rng.random_bool(0.5) { speed } else { -speed };

        Self::new(IVec2::new(x, y), size, IVec2::new(vx, vy))
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.body.rect()
    }

    #[inline]
    pub fn position(&self) -> IVec2 {
        self.body.position()
    }

    #[inline]
    pub fn velocity(&self) -> IVec2 {
        self.vel
    }

    /// One-pixel strip lying just outside `edge`, spanning that edge
    pub fn probe(&self, edge: Edge) -> Rect {
        let r = self.rect();
        match edge {
            Edge::Left => Rect::new(r.left() - 1, r.top(), 1, r.height),
            Edge::Right => Rect::new(r.right(), r.top(), 1, r.height),
            Edge::Top => Rect::new(r.left(), r.top() - 1, r.width, 1),
            Edge::Bottom => Rect::new(r.left(), r.bottom(), r.width, 1),
        }
    }

    /// All four probes in [`Edge::PROBE_ORDER`]
    pub fn probes(&self) -> [(Edge, Rect); 4] {
        Edge::PROBE_ORDER.map(|edge| (edge, self.probe(edge)))
    }

    /// First paddle/edge pair in contact, scanning paddles in order and
    /// edges in [`Edge::PROBE_ORDER`]
    fn paddle_contact(&self, paddles: &[Paddle]) -> Option<(Side, Edge)> {
        let probes = self.probes();
        paddles.iter().find_map(|paddle| {
            let target = paddle.rect();
            probes
                .iter()
                .find(|(_, probe)| probe.overlaps(&target))
                .map(|(edge, _)| (paddle.side, *edge))
        })
    }

    /// Advance one tick against `paddles`.
    ///
    /// At most one paddle bounce is applied per tick, even when the ball
    /// clips a paddle corner and several probes touch it.
    pub fn advance(&mut self, paddles: &[Paddle], field: &Playfield) -> BallOutcome {
        let mut contact = None;

        if let Some((side, edge)) = self.paddle_contact(paddles) {
            match edge {
                Edge::Left | Edge::Right => self.vel.x = -self.vel.x,
                Edge::Top | Edge::Bottom => self.vel.y = -self.vel.y,
            }
            log::trace!("Ball hit {:?} paddle with its {:?} edge", side, edge);
            contact = Some(Contact::Paddle { side, edge });
        }

        let r = self.rect();

        // Escaping right scores for the left player, escaping left for the right
        if r.right() >= field.width() && self.vel.x > 0 {
            return BallOutcome::Scored(Player::One);
        }
        if r.left() <= 0 && self.vel.x < 0 {
            return BallOutcome::Scored(Player::Two);
        }

        if r.bottom() >= field.height() && self.vel.y > 0 {
            self.vel.y = -self.vel.y;
            contact = contact.or(Some(Contact::Wall(Wall::Bottom)));
        }
        if r.top() <= 0 && self.vel.y < 0 {
            self.vel.y = -self.vel.y;
            contact = contact.or(Some(Contact::Wall(Wall::Top)));
        }

        self.body.translate(self.vel);
        BallOutcome::Continued { contact }
    }
}
