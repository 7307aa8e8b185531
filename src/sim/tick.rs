//! Per-frame simulation step and touch handling
//!
//! Advances the game by one frame at the FPS measured over the previous one.

use super::collision::detect_collisions;
use super::state::{GameEvent, GameState, MovementState, ScreenSize};

/// A touch from the host's input layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    /// Finger put down at screen coordinates
    Down { x: f32, y: f32 },
    /// Finger lifted, anywhere on screen
    Up,
}

impl TouchEvent {
    /// Movement the bat should take in response to this touch
    pub fn movement_state(&self, screen: ScreenSize) -> MovementState {
        match *self {
            TouchEvent::Down { x, .. } if x < screen.width_f() / 2.0 => MovementState::Left,
            TouchEvent::Down { .. } => MovementState::Right,
            TouchEvent::Up => MovementState::Stopped,
        }
    }
}

/// Apply a touch: any finger-down unpauses and steers, finger-up stops the bat
pub fn handle_touch(state: &mut GameState, touch: TouchEvent) {
    if matches!(touch, TouchEvent::Down { .. }) {
        state.set_paused(false);
    }
    state.bat.set_movement_state(touch.movement_state(state.screen));
}

/// Advance one frame. Nothing moves while paused.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.is_paused() {
        return events;
    }

    state.ball.update(state.fps);
    state.bat.update(state.fps);

    detect_collisions(state, &mut events);
    events
}
