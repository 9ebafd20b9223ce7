//! Player-controlled paddles

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::object::{GameObject, MoveOutcome, Playfield};
use super::rect::Rect;
use crate::settings::Settings;

/// Which wall a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Vertical movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Held-key state for one player, read once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleIntent {
    pub moving_up: bool,
    pub moving_down: bool,
}

impl PaddleIntent {
    pub const IDLE: Self = Self {
        moving_up: false,
        moving_down: false,
    };
    pub const UP: Self = Self {
        moving_up: true,
        moving_down: false,
    };
    pub const DOWN: Self = Self {
        moving_up: false,
        moving_down: true,
    };

    /// Resolved direction; both or neither flag set means stay put
    pub fn direction(&self) -> Option<Direction> {
        match (self.moving_up, self.moving_down) {
            (true, false) => Some(Direction::Up),
            (false, true) => Some(Direction::Down),
            _ => None,
        }
    }
}

/// A paddle: a bounds-checked rectangle that only moves vertically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    body: GameObject,
    /// Pixels per tick
    pub speed: i32,
}

impl Paddle {
    pub fn new(side: Side, position: IVec2, width: i32, height: i32, speed: i32) -> Self {
        Self {
            side,
            body: GameObject::new(position, width, height),
            speed,
        }
    }

    /// Paddle at its serve position: vertically centered, `paddle_offset`
    /// pixels in from the wall it defends
    pub fn spawn(side: Side, field: &Playfield, settings: &Settings) -> Self {
        let y = field.height() / 2 - settings.paddle_height / 2;
        let x = match side {
            Side::Left => settings.paddle_offset,
            Side::Right => field.width() - (settings.paddle_width + settings.paddle_offset),
        };
        Self::new(
            side,
            IVec2::new(x, y),
            settings.paddle_width,
            settings.paddle_height,
            settings.paddle_speed,
        )
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.body.rect()
    }

    #[inline]
    pub fn position(&self) -> IVec2 {
        self.body.position()
    }

    /// Step one tick in the intended direction.
    ///
    /// Returns `None` when the intent resolves to no movement.
    pub fn apply(&mut self, intent: PaddleIntent, field: &Playfield) -> Option<MoveOutcome> {
        // Screen y grows downward, so "up" is a negative step
        let dy = match intent.direction()? {
            Direction::Up => -self.speed,
            Direction::Down => self.speed,
        };
        Some(self.body.move_by(0, dy, field))
    }
}
