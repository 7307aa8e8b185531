//! Frame command lists
//!
//! A frame is the full list of draw primitives for one loop iteration, in the
//! order they must be drawn. Building it touches no graphics API.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::{GameState, Rect};

/// 8-bit ARGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Packed as 0xAARRGGBB
    pub fn to_u32(self) -> u32 {
        u32::from_be_bytes([self.a, self.r, self.g, self.b])
    }
}

/// Play-field blue
pub const BACKGROUND: Color = Color::argb(255, 26, 128, 182);
/// Ball, bat and HUD text
pub const FOREGROUND: Color = Color::argb(255, 255, 255, 255);

/// One draw primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface
    Clear(Color),
    /// Filled axis-aligned rectangle
    FillRect { rect: Rect, color: Color },
    /// Text with its baseline starting at `pos`
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
    },
}

/// Ordered draw commands for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// Text of every `Text` command, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// HUD line with score and lives
pub fn hud_text(state: &GameState) -> String {
    format!(
        "Score: {}   Lives: {}",
        state.session.score, state.session.lives
    )
}

/// Build the frame for the current state: background, ball, bat, HUD,
/// caption, then the FPS overlay when enabled
pub fn build_frame(state: &GameState, settings: &Settings) -> Frame {
    let font_size = state.screen.font_size() as f32;
    let margin = state.screen.margin() as f32;
    let debug_size = (state.screen.font_size() / 2) as f32;

    let mut commands = vec![
        DrawCommand::Clear(BACKGROUND),
        DrawCommand::FillRect {
            rect: state.ball.rect(),
            color: FOREGROUND,
        },
        DrawCommand::FillRect {
            rect: state.bat.rect(),
            color: FOREGROUND,
        },
        DrawCommand::Text {
            text: hud_text(state),
            pos: Vec2::new(margin, font_size),
            size: font_size,
            color: FOREGROUND,
        },
        DrawCommand::Text {
            text: settings.caption.clone(),
            pos: Vec2::new(margin, font_size * 2.0 + margin),
            size: debug_size,
            color: FOREGROUND,
        },
    ];

    if settings.show_fps {
        commands.push(DrawCommand::Text {
            text: format!("FPS: {}", state.fps),
            pos: Vec2::new(10.0, 150.0 + debug_size),
            size: debug_size,
            color: FOREGROUND,
        });
    }

    Frame { commands }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ScreenSize;
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(ScreenSize::new(1000, 2000), Tuning::default())
    }

    #[test]
    fn test_frame_command_order() {
        let state = state();
        let frame = build_frame(&state, &Settings::default());

        assert_eq!(frame.commands.len(), 6);
        assert_eq!(frame.commands[0], DrawCommand::Clear(BACKGROUND));
        assert_eq!(
            frame.commands[1],
            DrawCommand::FillRect {
                rect: state.ball.rect(),
                color: FOREGROUND
            }
        );
        assert_eq!(
            frame.commands[2],
            DrawCommand::FillRect {
                rect: state.bat.rect(),
                color: FOREGROUND
            }
        );
        let texts: Vec<&str> = frame.texts().collect();
        assert_eq!(texts, vec!["Score: 0   Lives: 3", "Touch Pong", "FPS: 60"]);
    }

    #[test]
    fn test_hud_layout_from_screen_size() {
        let frame = build_frame(&state(), &Settings::default());
        match &frame.commands[3] {
            DrawCommand::Text { pos, size, .. } => {
                assert_eq!(*pos, Vec2::new(13.0, 50.0));
                assert_eq!(*size, 50.0);
            }
            other => panic!("expected HUD text, got {other:?}"),
        }
        match &frame.commands[5] {
            DrawCommand::Text { pos, size, .. } => {
                assert_eq!(*pos, Vec2::new(10.0, 175.0));
                assert_eq!(*size, 25.0);
            }
            other => panic!("expected FPS text, got {other:?}"),
        }
    }

    #[test]
    fn test_fps_overlay_can_be_hidden() {
        let settings = Settings {
            show_fps: false,
            ..Default::default()
        };
        let frame = build_frame(&state(), &settings);
        assert_eq!(frame.commands.len(), 5);
        assert!(frame.texts().all(|t| !t.starts_with("FPS")));
    }

    #[test]
    fn test_color_packing() {
        assert_eq!(BACKGROUND.to_u32(), 0xFF1A80B6);
        assert_eq!(FOREGROUND.to_u32(), 0xFFFFFFFF);
    }
}
