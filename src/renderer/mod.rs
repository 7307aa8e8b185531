//! Rendering module
//!
//! The simulation never touches a graphics API. Each frame is turned into a
//! [`Frame`] of draw commands and handed to whatever [`Renderer`] the host
//! provides.

pub mod frame;
pub mod headless;

pub use frame::{BACKGROUND, Color, DrawCommand, FOREGROUND, Frame, build_frame, hud_text};
pub use headless::HeadlessRenderer;

/// Host drawing surface. `draw_frame` must finish before the next frame is
/// built.
pub trait Renderer: Send {
    fn draw_frame(&mut self, frame: &Frame);
}
