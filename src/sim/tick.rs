//! Per-frame simulation tick
//!
//! Core game loop step: apply paddle intents, advance the ball, settle any
//! point that was scored.

use serde::{Deserialize, Serialize};

use super::ball::{BallOutcome, Contact};
use super::paddle::PaddleIntent;
use super::state::{Match, MatchPhase, Player, Score};

/// Input snapshot for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub player_one: PaddleIntent,
    pub player_two: PaddleIntent,
}

impl TickInput {
    pub fn intent(&self, player: Player) -> PaddleIntent {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Match already over; nothing moved
    Idle,
    /// Ball still in play, with the bounce applied this tick if any
    Continued(Option<Contact>),
    /// `player` won the point; a new round has been served
    Scored { player: Player, score: Score },
    /// `player` won the point and reached the win score
    MatchWon { player: Player, score: Score },
}

/// Advance the match by one frame
pub fn tick(state: &mut Match, input: &TickInput) -> TickOutcome {
    if let MatchPhase::Finished { .. } = state.phase {
        return TickOutcome::Idle;
    }

    state.time_ticks += 1;

    for player in [Player::One, Player::Two] {
        let field = state.playfield;
        let _ = state.round.paddle_mut(player).apply(input.intent(player), &field);
    }

    let round = &mut state.round;
    let player = match round.ball.advance(&round.paddles, &state.playfield) {
        BallOutcome::Continued { contact } => return TickOutcome::Continued(contact),
        BallOutcome::Scored(player) => player,
    };

    let score = state.credit(player);
    log::info!(
        "Point to player {:?} after {} ticks: {} - {}",
        player,
        state.time_ticks,
        score.get(Player::One),
        score.get(Player::Two)
    );

    if let Some(winner) = state.settings.win_score.and_then(|target| score.winner(target)) {
        state.phase = MatchPhase::Finished { winner };
        log::info!("Player {:?} wins the match", winner);
        return TickOutcome::MatchWon {
            player: winner,
            score,
        };
    }

    state.reset_round();
    TickOutcome::Scored { player, score }
}
