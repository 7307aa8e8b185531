//! Game state and core simulation types
//!
//! Screen coordinates throughout: origin top-left, y grows downward, the bat
//! sits on the bottom edge.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::{FONT_SIZE_DIVISOR, MARGIN_DIVISOR};
use crate::tuning::Tuning;

/// Screen resolution, fixed for the lifetime of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// HUD font size: 1/20th of the screen width
    pub fn font_size(&self) -> u32 {
        self.width / FONT_SIZE_DIVISOR
    }

    /// HUD margin: 1/75th of the screen width
    pub fn margin(&self) -> u32 {
        self.width / MARGIN_DIVISOR
    }

    #[inline]
    pub fn width_f(&self) -> f32 {
        self.width as f32
    }

    #[inline]
    pub fn height_f(&self) -> f32 {
        self.height as f32
    }
}

/// Which way the player wants the bat to go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MovementState {
    Left,
    Right,
    #[default]
    Stopped,
}

/// Whether the simulation advances this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a touch; the frame is still drawn
    Paused,
    /// Ball and bat move, collisions are checked
    Running,
}

/// Something that happened during a frame, in the order it happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off the bat
    BatHit,
    /// Ball crossed the bottom edge, a life was lost
    Missed,
    /// Ball bounced off the top edge
    WallTop,
    /// Ball bounced off the left or right edge
    WallSide,
    /// Last life lost; the session has been reset
    GameOver { final_score: u32 },
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Pixels per second
    pub vel: Vec2,
    pub size: Vec2,
    /// Speed magnitude right after a reset
    base_speed: f32,
    speed_divisor: u32,
    velocity_increase: f32,
    max_speed_multiplier: f32,
    bounce_max_angle: f32,
}

impl Ball {
    /// Create a ball already placed at its reset position
    pub fn new(screen: ScreenSize, tuning: &Tuning) -> Self {
        let tuning = tuning.clone().sanitized();
        let edge = (screen.width / tuning.ball_size_divisor) as f32;
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: Vec2::splat(edge),
            base_speed: 0.0,
            speed_divisor: tuning.ball_speed_divisor,
            velocity_increase: tuning.velocity_increase,
            max_speed_multiplier: tuning.max_speed_multiplier,
            bounce_max_angle: tuning.bounce_max_angle(),
        };
        ball.reset(screen);
        ball
    }

    /// Canonical start: touching the top edge with its left edge at
    /// mid-screen
    pub fn reset_position(screen: ScreenSize) -> Vec2 {
        Vec2::new((screen.width / 2) as f32, 0.0)
    }

    /// Back to the canonical start, heading up and to the right at base speed
    pub fn reset(&mut self, screen: ScreenSize) {
        self.pos = Self::reset_position(screen);
        let axis_speed = (screen.height / self.speed_divisor) as f32;
        self.vel = Vec2::new(axis_speed, -axis_speed);
        self.base_speed = self.vel.length();
    }

    /// Advance one frame; `fps` below 1 is treated as 1
    pub fn update(&mut self, fps: u64) {
        let fps = fps.max(1) as f32;
        self.pos += self.vel / fps;
    }

    pub fn reverse_x_velocity(&mut self) {
        self.vel.x = -self.vel.x;
    }

    pub fn reverse_y_velocity(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Send the ball back up, deflected by where it struck the bat.
    ///
    /// Contact offset from the bat centre, normalised to [-1, 1], maps
    /// linearly to an angle from vertical of at most `bounce_max_angle`.
    /// Speed is preserved.
    pub fn bat_bounce(&mut self, bat: &Rect) {
        let half_width = bat.width() / 2.0;
        let offset = if half_width > 0.0 {
            ((self.rect().center_x() - bat.center_x()) / half_width).clamp(-1.0, 1.0)
        } else {
            0.0
        };
        let angle = offset * self.bounce_max_angle;
        let speed = self.vel.length();
        self.vel = Vec2::new(speed * angle.sin(), -speed * angle.cos());
    }

    /// Speed up after a bat hit, never beyond the cap
    pub fn increase_velocity(&mut self) {
        self.vel *= self.velocity_increase;
        self.vel = self.vel.clamp_length_max(self.max_speed());
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn base_speed(&self) -> f32 {
        self.base_speed
    }

    pub fn max_speed(&self) -> f32 {
        self.base_speed * self.max_speed_multiplier
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// The player's bat, running along the bottom edge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bat {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per second
    pub speed: f32,
    screen_width: f32,
    movement: MovementState,
}

impl Bat {
    pub fn new(screen: ScreenSize, tuning: &Tuning) -> Self {
        let tuning = tuning.clone().sanitized();
        let length = (screen.width / tuning.bat_length_divisor) as f32;
        let height = (screen.height / tuning.bat_height_divisor) as f32;
        let mut bat = Self {
            pos: Vec2::new(Self::start_x(screen), screen.height_f() - height),
            size: Vec2::new(length, height),
            speed: screen.width_f() * tuning.bat_speed_factor,
            screen_width: screen.width_f(),
            movement: MovementState::Stopped,
        };
        bat.pos.x = bat.pos.x.clamp(0.0, bat.max_x());
        bat
    }

    /// Left edge of a fresh bat
    pub fn start_x(screen: ScreenSize) -> f32 {
        (screen.width / 2) as f32
    }

    pub fn set_movement_state(&mut self, state: MovementState) {
        self.movement = state;
    }

    pub fn movement_state(&self) -> MovementState {
        self.movement
    }

    /// Move according to the movement state and keep the bat on screen
    pub fn update(&mut self, fps: u64) {
        let step = self.speed / fps.max(1) as f32;
        match self.movement {
            MovementState::Left => self.pos.x -= step,
            MovementState::Right => self.pos.x += step,
            MovementState::Stopped => {}
        }
        self.pos.x = self.pos.x.clamp(0.0, self.max_x());
    }

    /// Largest x that keeps the whole bat on screen
    pub fn max_x(&self) -> f32 {
        (self.screen_width - self.size.x).max(0.0)
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// Score, lives and pause state of one playthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub score: u32,
    pub lives: u32,
    pub phase: GamePhase,
}

impl GameSession {
    pub fn new(lives: u32) -> Self {
        Self {
            score: 0,
            lives,
            phase: GamePhase::Paused,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    /// Take a life; true when none are left
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }
}

/// Complete game state, owned by the loop thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub screen: ScreenSize,
    pub tuning: Tuning,
    pub ball: Ball,
    pub bat: Bat,
    pub session: GameSession,
    /// Frame rate measured over the previous frame
    pub fps: u64,
}

impl GameState {
    pub fn new(screen: ScreenSize, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        let mut state = Self {
            screen,
            ball: Ball::new(screen, &tuning),
            bat: Bat::new(screen, &tuning),
            session: GameSession::new(tuning.starting_lives),
            fps: tuning.initial_fps,
            tuning,
        };
        state.start_new_game();
        state
    }

    /// Fresh session: ball and bat back to the start, score cleared, full
    /// lives, waiting for a touch
    pub fn start_new_game(&mut self) {
        self.ball.reset(self.screen);
        self.bat = Bat::new(self.screen, &self.tuning);
        self.session = GameSession::new(self.tuning.starting_lives);
    }

    pub fn is_paused(&self) -> bool {
        self.session.is_paused()
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.session.phase = if paused {
            GamePhase::Paused
        } else {
            GamePhase::Running
        };
    }

    /// Derive next frame's FPS from this frame's duration (at least 1 ms)
    pub fn record_frame_time(&mut self, elapsed: Duration) {
        let millis = (elapsed.as_millis() as u64).max(1);
        self.fps = 1000 / millis;
    }
}
