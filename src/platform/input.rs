//! Key events to paddle intents
//!
//! Pressing a direction key overrides the other direction for that player;
//! releasing either of a player's keys stops their paddle.

use crate::sim::{PaddleIntent, Player, TickInput};

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up(Player),
    Down(Player),
    Quit,
}

impl Key {
    /// Default bindings: Q/A for player one, arrow keys for player two,
    /// Escape to quit
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "q" => Some(Key::Up(Player::One)),
            "a" => Some(Key::Down(Player::One)),
            "up" | "arrowup" => Some(Key::Up(Player::Two)),
            "down" | "arrowdown" => Some(Key::Down(Player::Two)),
            "escape" | "esc" => Some(Key::Quit),
            _ => None,
        }
    }

    /// Player a direction key belongs to
    pub fn player(self) -> Option<Player> {
        match self {
            Key::Up(player) | Key::Down(player) => Some(player),
            Key::Quit => None,
        }
    }
}

/// A raw input event from the windowing layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
    /// Window closed or the session was interrupted
    CloseRequested,
}

/// Held-key state for both players
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    player_one: PaddleIntent,
    player_two: PaddleIntent,
    quit_requested: bool,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    fn intent_mut(&mut self, player: Player) -> &mut PaddleIntent {
        match player {
            Player::One => &mut self.player_one,
            Player::Two => &mut self.player_two,
        }
    }

    /// Apply one event, in arrival order
    pub fn handle(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::Pressed(Key::Up(player)) => *self.intent_mut(player) = PaddleIntent::UP,
            KeyEvent::Pressed(Key::Down(player)) => *self.intent_mut(player) = PaddleIntent::DOWN,
            KeyEvent::Released(Key::Up(player) | Key::Down(player)) => {
                *self.intent_mut(player) = PaddleIntent::IDLE
            }
            KeyEvent::Pressed(Key::Quit) | KeyEvent::CloseRequested => {
                if !self.quit_requested {
                    log::info!("Quit requested");
                }
                self.quit_requested = true;
            }
            KeyEvent::Released(Key::Quit) => {}
        }
    }

    pub fn handle_all<I: IntoIterator<Item = KeyEvent>>(&mut self, events: I) {
        for event in events {
            self.handle(event);
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Immutable input for the next tick
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            player_one: self.player_one,
            player_two: self.player_two,
        }
    }
}
