//! Deterministic simulation module
//!
//! All gameplay logic lives here. Given the same state, touches and FPS
//! sequence, a frame always produces the same result:
//! - No clocks: elapsed time arrives as the previous frame's FPS
//! - Fixed collision order
//! - No rendering, audio or threading dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::detect_collisions;
pub use rect::Rect;
pub use state::{
    Ball, Bat, GameEvent, GamePhase, GameSession, GameState, MovementState, ScreenSize,
};
pub use tick::{TouchEvent, handle_touch, tick};
