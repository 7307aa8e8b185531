//! Platform abstraction layer
//!
//! Handles what the host environment drives:
//! - Lifecycle (start/stop of the frame loop thread)
//! - Input events (touches from the UI thread)
//! - Frame timing

pub mod controls;
pub mod runner;

pub use controls::Controls;
pub use runner::{Game, GameThread};
