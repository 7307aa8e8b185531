//! Renderer that draws nowhere
//!
//! Keeps the last frame for inspection and traces the HUD line. Used by the
//! headless binary and by tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{DrawCommand, Frame, Renderer};

#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames: Arc<AtomicU64>,
    last_frame: Option<Frame>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter shared with other threads, bumped once per drawn frame
    pub fn frame_counter(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.frames)
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames.load(Ordering::SeqCst)
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }
}

impl Renderer for HeadlessRenderer {
    fn draw_frame(&mut self, frame: &Frame) {
        let n = self.frames.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(DrawCommand::Text { text, .. }) = frame
            .commands
            .iter()
            .find(|cmd| matches!(cmd, DrawCommand::Text { .. }))
        {
            log::trace!("frame {n}: {text}");
        }
        self.last_frame = Some(frame.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::build_frame;
    use crate::settings::Settings;
    use crate::sim::{GameState, ScreenSize};
    use crate::tuning::Tuning;

    #[test]
    fn test_counts_and_keeps_last_frame() {
        let mut renderer = HeadlessRenderer::new();
        let counter = renderer.frame_counter();
        let state = GameState::new(ScreenSize::new(800, 1600), Tuning::default());
        let frame = build_frame(&state, &Settings::default());

        assert!(renderer.last_frame().is_none());
        renderer.draw_frame(&frame);
        renderer.draw_frame(&frame);

        assert_eq!(renderer.frames_drawn(), 2);
        assert_eq!(counter.load(Ordering::SeqCst), 2);
        assert_eq!(renderer.last_frame(), Some(&frame));
    }
}
