//! State shared between the host's threads and the loop thread
//!
//! Single-field atomics only. The UI thread writes `paused` and `movement`,
//! the host writes `playing`, the loop thread reads all three once per frame.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::sim::{MovementState, ScreenSize, TouchEvent};

const STOPPED: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;

fn encode(state: MovementState) -> u8 {
    match state {
        MovementState::Stopped => STOPPED,
        MovementState::Left => LEFT,
        MovementState::Right => RIGHT,
    }
}

fn decode(raw: u8) -> MovementState {
    match raw {
        LEFT => MovementState::Left,
        RIGHT => MovementState::Right,
        _ => MovementState::Stopped,
    }
}

#[derive(Debug)]
pub struct Controls {
    playing: AtomicBool,
    paused: AtomicBool,
    movement: AtomicU8,
}

impl Controls {
    pub fn new(paused: bool) -> Self {
        Self {
            playing: AtomicBool::new(false),
            paused: AtomicBool::new(paused),
            movement: AtomicU8::new(STOPPED),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    pub fn set_playing(&self, playing: bool) {
        self.playing.store(playing, Ordering::SeqCst);
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    pub fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::SeqCst);
    }

    pub fn movement(&self) -> MovementState {
        decode(self.movement.load(Ordering::SeqCst))
    }

    pub fn set_movement(&self, state: MovementState) {
        self.movement.store(encode(state), Ordering::SeqCst);
    }

    /// Record a touch: finger-down unpauses and steers, finger-up stops
    pub fn handle_touch(&self, touch: TouchEvent, screen: ScreenSize) {
        if matches!(touch, TouchEvent::Down { .. }) {
            self.set_paused(false);
        }
        self.set_movement(touch.movement_state(screen));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_encoding() {
        let controls = Controls::new(true);
        assert_eq!(controls.movement(), MovementState::Stopped);
        for state in [
            MovementState::Left,
            MovementState::Right,
            MovementState::Stopped,
        ] {
            controls.set_movement(state);
            assert_eq!(controls.movement(), state);
        }
        assert_eq!(decode(200), MovementState::Stopped);
    }

    #[test]
    fn test_touch_updates_flags() {
        let screen = ScreenSize::new(1000, 2000);
        let controls = Controls::new(true);
        assert!(!controls.is_playing());

        controls.handle_touch(TouchEvent::Up, screen);
        assert!(controls.is_paused());

        controls.handle_touch(TouchEvent::Down { x: 800.0, y: 10.0 }, screen);
        assert!(!controls.is_paused());
        assert_eq!(controls.movement(), MovementState::Right);

        controls.handle_touch(TouchEvent::Up, screen);
        assert_eq!(controls.movement(), MovementState::Stopped);
        assert!(!controls.is_paused());
    }
}
