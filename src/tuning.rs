//! Data-driven game balance
//!
//! Every number that shapes how the game plays. Defaults come from
//! [`crate::consts`]; a settings file can override any subset.

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Lives at the start of a session
    pub starting_lives: u32,
    /// Ball edge = screen width / divisor
    pub ball_size_divisor: u32,
    /// Ball base speed per axis = screen height / divisor
    pub ball_speed_divisor: u32,
    /// Speed multiplier per bat hit
    pub velocity_increase: f32,
    /// Cap on ball speed as a multiple of base speed
    pub max_speed_multiplier: f32,
    /// Deflection at the bat edge, degrees from vertical
    pub bounce_max_angle_deg: f32,
    /// Bat length = screen width / divisor
    pub bat_length_divisor: u32,
    /// Bat height = screen height / divisor
    pub bat_height_divisor: u32,
    /// Bat speed in screen widths per second
    pub bat_speed_factor: f32,
    /// FPS assumed before the first frame has been timed
    pub initial_fps: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            ball_size_divisor: BALL_SIZE_DIVISOR,
            ball_speed_divisor: BALL_SPEED_DIVISOR,
            velocity_increase: VELOCITY_INCREASE,
            max_speed_multiplier: MAX_SPEED_MULTIPLIER,
            bounce_max_angle_deg: BOUNCE_MAX_ANGLE_DEG,
            bat_length_divisor: BAT_LENGTH_DIVISOR,
            bat_height_divisor: BAT_HEIGHT_DIVISOR,
            bat_speed_factor: BAT_SPEED_FACTOR,
            initial_fps: INITIAL_FPS,
        }
    }
}

impl Tuning {
    /// Repair values that would divide by zero or make the game degenerate
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.starting_lives == 0 {
            self.starting_lives = defaults.starting_lives;
        }
        if self.ball_size_divisor == 0 {
            self.ball_size_divisor = defaults.ball_size_divisor;
        }
        if self.ball_speed_divisor == 0 {
            self.ball_speed_divisor = defaults.ball_speed_divisor;
        }
        if self.bat_length_divisor == 0 {
            self.bat_length_divisor = defaults.bat_length_divisor;
        }
        if self.bat_height_divisor == 0 {
            self.bat_height_divisor = defaults.bat_height_divisor;
        }
        // The speed-up can never shrink the ball's speed
        self.velocity_increase = self.velocity_increase.max(1.0);
        self.max_speed_multiplier = self.max_speed_multiplier.max(1.0);
        self.bounce_max_angle_deg = self.bounce_max_angle_deg.clamp(0.0, 85.0);
        self.bat_speed_factor = self.bat_speed_factor.max(0.0);
        self.initial_fps = self.initial_fps.max(1);
        self
    }

    /// Maximum bounce deflection in radians
    pub fn bounce_max_angle(&self) -> f32 {
        self.bounce_max_angle_deg.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitized_repairs_zero_divisors() {
        let tuning = Tuning {
            ball_size_divisor: 0,
            bat_length_divisor: 0,
            starting_lives: 0,
            velocity_increase: 0.5,
            initial_fps: 0,
            ..Default::default()
        }
        .sanitized();

        assert_eq!(tuning.ball_size_divisor, BALL_SIZE_DIVISOR);
        assert_eq!(tuning.bat_length_divisor, BAT_LENGTH_DIVISOR);
        assert_eq!(tuning.starting_lives, STARTING_LIVES);
        assert_eq!(tuning.velocity_increase, 1.0);
        assert_eq!(tuning.initial_fps, 1);
    }

    #[test]
    fn test_default_is_already_sane() {
        assert_eq!(Tuning::default().sanitized(), Tuning::default());
    }
}
