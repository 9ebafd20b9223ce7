//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per frame
//! - Seeded RNG only
//! - Stable iteration order (left paddle before right paddle)
//! - No rendering or platform dependencies

pub mod ball;
pub mod object;
pub mod paddle;
pub mod rect;
pub mod state;
pub mod tick;

pub use ball::{Ball, BallOutcome, Contact, Edge, Wall};
pub use object::{GameObject, MoveMode, MoveOutcome, Playfield};
pub use paddle::{Direction, Paddle, PaddleIntent, Side};
pub use rect::Rect;
pub use state::{Match, MatchPhase, Player, Round, Score};
pub use tick::{TickInput, TickOutcome, tick};
