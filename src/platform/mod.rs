//! Platform glue kept outside the simulation
//!
//! Handles:
//! - Input events (key presses mapped to per-player intents)
//! - Frame pacing (fixed-rate tick clock)
//! - Terminal keys and drawing for the native binary

pub mod clock;
pub mod input;
#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;

pub use clock::FrameClock;
pub use input::{Controls, Key, KeyEvent};
