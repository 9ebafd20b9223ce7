//! Rect Pong - two-player Pong on a rectangular playfield
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, bounds, collisions, scoring)
//! - `renderer`: Rendering sink (`Canvas`) and a text canvas
//! - `platform`: Input mapping, frame pacing and the terminal backend
//! - `settings`: Data-driven geometry and tuning

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Frame rate the simulation is stepped at (one tick per frame)
    pub const TICK_RATE: u32 = 60;
    /// Maximum ticks run in one frame when catching up after a stall
    pub const MAX_CATCHUP_TICKS: u32 = 4;

    /// Default playfield size (pixels)
    pub const SCREEN_WIDTH: i32 = 960;
    pub const SCREEN_HEIGHT: i32 = 540;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 32;
    pub const PADDLE_HEIGHT: i32 = 145;
    /// Gap between a side wall and the paddle defending it
    pub const PADDLE_OFFSET: i32 = 32;
    /// Pixels moved per tick while a direction is held
    pub const PADDLE_SPEED: i32 = 6;

    /// Ball defaults
    pub const BALL_SIZE: i32 = 16;
    /// Per-axis speed; the sign on each axis is rolled on every serve
    pub const BALL_SPEED: i32 = 5;
}
