//! Game settings: playfield geometry and tuning
//!
//! Read from a JSON file next to the binary; anything missing falls back to
//! the defaults in [`crate::consts`].

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Playfield;

/// Why settings could not be loaded or used
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// Geometry that cannot be played on
    InvalidGeometry(&'static str),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(err) => write!(f, "failed to read settings: {err}"),
            SettingsError::Parse(err) => write!(f, "malformed settings: {err}"),
            SettingsError::InvalidGeometry(why) => write!(f, "invalid geometry: {why}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(err) => Some(err),
            SettingsError::Parse(err) => Some(err),
            SettingsError::InvalidGeometry(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub screen_width: i32,
    pub screen_height: i32,

    // === Paddles ===
    pub paddle_width: i32,
    pub paddle_height: i32,
    /// Gap between a side wall and its paddle
    pub paddle_offset: i32,
    /// Pixels per tick
    pub paddle_speed: i32,

    // === Ball ===
    pub ball_size: i32,
    /// Per-axis pixels per tick
    pub ball_speed: i32,

    // === Match ===
    /// Fixed RNG seed; a fresh one is picked per run when absent
    pub seed: Option<u64>,
    /// Points needed to win; endless play when absent
    pub win_score: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_offset: PADDLE_OFFSET,
            paddle_speed: PADDLE_SPEED,

            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,

            seed: None,
            win_score: None,
        }
    }
}

impl Settings {
    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.screen_width, self.screen_height)
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from `path`
    pub fn read(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from `path`, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Using default settings ({}: {})", path.display(), err);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Reject geometry the simulation cannot run on
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = SettingsError::InvalidGeometry;

        if self.screen_width <= 0 || self.screen_height <= 0 {
            return Err(invalid("screen size must be positive"));
        }
        if self.paddle_width <= 0 || self.paddle_height <= 0 || self.ball_size <= 0 {
            return Err(invalid("object sizes must be positive"));
        }
        if self.paddle_speed <= 0 || self.ball_speed <= 0 {
            return Err(invalid("speeds must be positive"));
        }
        if self.paddle_offset < 0 {
            return Err(invalid("paddle offset must not be negative"));
        }
        if self.paddle_height > self.screen_height
            || 2 * (self.paddle_width + self.paddle_offset) > self.screen_width
        {
            return Err(invalid("paddles do not fit the screen"));
        }
        if self.ball_size > self.screen_height || self.ball_size > self.screen_width {
            return Err(invalid("ball does not fit the screen"));
        }
        if self.win_score == Some(0) {
            return Err(invalid("win score must be at least 1"));
        }
        Ok(())
    }
}
