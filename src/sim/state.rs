//! Match state and core simulation types
//!
//! Score survives round resets; everything in a [`Round`] is rebuilt.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::object::Playfield;
use super::paddle::{Paddle, Side};
use crate::settings::Settings;

/// A player. Player one defends the left wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Wall this player's paddle defends
    pub fn side(self) -> Side {
        match self {
            Player::One => Side::Left,
            Player::Two => Side::Right,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Points per player. Only grows, except through [`Match::new_match`].
///
/// Read-only outside the simulation; the tick is the only writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    player_one: u32,
    player_two: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }

    /// Award one point
    pub(crate) fn credit(&mut self, player: Player) {
        match player {
            Player::One => self.player_one += 1,
            Player::Two => self.player_two += 1,
        }
    }

    /// First player at or past `win_score`
    pub fn winner(&self, win_score: u32) -> Option<Player> {
        if self.player_one >= win_score {
            Some(Player::One)
        } else if self.player_two >= win_score {
            Some(Player::Two)
        } else {
            None
        }
    }
}

/// Objects in play for one round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Left paddle first; the ball probes them in this order
    pub paddles: [Paddle; 2],
    pub ball: Ball,
}

impl Round {
    /// Fresh serve: paddles at their offsets, ball re-rolled
    pub fn serve(field: &Playfield, settings: &Settings, rng: &mut Pcg32) -> Self {
        Self {
            paddles: [
                Paddle::spawn(Side::Left, field, settings),
                Paddle::spawn(Side::Right, field, settings),
            ],
            ball: Ball::spawn(field, settings, rng),
        }
    }

    pub fn paddle(&self, player: Player) -> &Paddle {
        match player {
            Player::One => &self.paddles[0],
            Player::Two => &self.paddles[1],
        }
    }

    pub fn paddle_mut(&mut self, player: Player) -> &mut Paddle {
        match player {
            Player::One => &mut self.paddles[0],
            Player::Two => &mut self.paddles[1],
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    Playing,
    /// A player reached the configured win score; ticks do nothing
    Finished { winner: Player },
}

/// Complete match state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct Match {
    pub settings: Settings,
    pub playfield: Playfield,
    /// Seed the match was started with
    pub seed: u64,
    pub(crate) rng: Pcg32,
    score: Score,
    pub round: Round,
    /// 1-based round counter
    pub round_number: u32,
    /// Ticks simulated since the match started
    pub time_ticks: u64,
    pub phase: MatchPhase,
}

impl Match {
    /// Start a match with the given seed
    pub fn new(settings: Settings, seed: u64) -> Self {
        let playfield = settings.playfield();
        let mut rng = Pcg32::seed_from_u64(seed);
        let round = Round::serve(&playfield, &settings, &mut rng);
        log::info!(
            "Match started ({}x{}, seed {})",
            playfield.width(),
            playfield.height(),
            seed
        );

        Self {
            settings,
            playfield,
            seed,
            rng,
            score: Score::new(),
            round,
            round_number: 1,
            time_ticks: 0,
            phase: MatchPhase::Playing,
        }
    }

    /// Zero the score and serve a fresh round. The RNG keeps running so
    /// consecutive matches do not replay the same serves.
    pub fn new_match(&mut self) {
        self.score = Score::new();
        self.round_number = 0;
        self.phase = MatchPhase::Playing;
        log::info!("New match");
        self.reset_round();
    }

    /// Rebuild paddles and ball; score is kept
    pub fn reset_round(&mut self) {
        self.round = Round::serve(&self.playfield, &self.settings, &mut self.rng);
        self.round_number += 1;
        log::debug!(
            "Round {} served at ({}, {}) heading ({}, {})",
            self.round_number,
            self.round.ball.position().x,
            self.round.ball.position().y,
            self.round.ball.velocity().x,
            self.round.ball.velocity().y
        );
    }

    /// Points so far; never decreases until [`Match::new_match`]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Award a point to `player` and return the updated score
    pub(crate) fn credit(&mut self, player: Player) -> Score {
        self.score.credit(player);
        self.score
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, MatchPhase::Finished { .. })
    }
}
