//! Touch Pong - a single-player Pong for touch screens
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, bat, collisions, session state)
//! - `renderer`: Frame draw-command lists and the renderer adapter
//! - `audio`: Sound cues, asset loading and the audio adapter
//! - `platform`: Game loop thread, lifecycle and touch input
//! - `settings` / `tuning`: JSON configuration and game balance

pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{Error, Result};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Lives at the start of every session
    pub const STARTING_LIVES: u32 = 3;

    /// Ball edge is screen width / this
    pub const BALL_SIZE_DIVISOR: u32 = 100;
    /// Ball base speed per axis is screen height / this (pixels/s)
    pub const BALL_SPEED_DIVISOR: u32 = 3;
    /// Speed multiplier applied on every bat hit
    pub const VELOCITY_INCREASE: f32 = 1.1;
    /// Ball speed never exceeds base speed times this
    pub const MAX_SPEED_MULTIPLIER: f32 = 3.0;
    /// Deflection at the very edge of the bat (degrees from vertical)
    pub const BOUNCE_MAX_ANGLE_DEG: f32 = 60.0;

    /// Bat length is screen width / this
    pub const BAT_LENGTH_DIVISOR: u32 = 8;
    /// Bat height is screen height / this
    pub const BAT_HEIGHT_DIVISOR: u32 = 40;
    /// Bat crosses this many screen widths per second
    pub const BAT_SPEED_FACTOR: f32 = 1.0;

    /// FPS assumed before the first frame has been timed
    pub const INITIAL_FPS: u64 = 60;

    /// HUD font size is screen width / this
    pub const FONT_SIZE_DIVISOR: u32 = 20;
    /// HUD margin is screen width / this
    pub const MARGIN_DIVISOR: u32 = 75;
}
