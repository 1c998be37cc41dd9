use serde::{Deserialize, Serialize};

use crate::error::{invalid, Result};
use crate::params::Params;

/// Game configuration
///
/// Every field falls back to its [`Params`] value, so a partial config file
/// only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f64,
    pub field_height: f64,
    pub paddle_width: f64,
    pub paddle_height: f64,
    pub paddle_margin: f64,
    pub player_speed: f64,
    pub cpu_speed: f64,
    pub ball_radius: f64,
    pub ball_speed: f64,
    pub tick_rate: f64,
    pub countdown_seconds: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            player_speed: Params::PLAYER_SPEED,
            cpu_speed: Params::CPU_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            tick_rate: Params::TICK_RATE,
            countdown_seconds: Params::COUNTDOWN_SECONDS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject configurations the simulation cannot hold its invariants under.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }

        let non_negative = [
            ("paddle_margin", self.paddle_margin),
            ("player_speed", self.player_speed),
            ("cpu_speed", self.cpu_speed),
            ("ball_speed", self.ball_speed),
            ("countdown_seconds", self.countdown_seconds),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(format!(
                    "{name} must be zero or positive, got {value}"
                )));
            }
        }

        if !(Params::MIN_TICK_RATE..=Params::MAX_TICK_RATE).contains(&self.tick_rate) {
            return Err(invalid(format!(
                "tick_rate must be between {} and {}, got {}",
                Params::MIN_TICK_RATE,
                Params::MAX_TICK_RATE,
                self.tick_rate
            )));
        }
        if self.countdown_seconds > Params::MAX_COUNTDOWN_SECONDS {
            return Err(invalid(format!(
                "countdown_seconds must be at most {}, got {}",
                Params::MAX_COUNTDOWN_SECONDS,
                self.countdown_seconds
            )));
        }

        if self.paddle_height > self.field_height {
            return Err(invalid("paddle is taller than the field"));
        }
        if 2.0 * (self.paddle_margin + self.paddle_width) > self.field_width {
            return Err(invalid("paddles do not fit side by side in the field"));
        }
        let diameter = 2.0 * self.ball_radius;
        if diameter > self.field_width || diameter > self.field_height {
            return Err(invalid("ball does not fit in the field"));
        }
        Ok(())
    }

    /// Left edge of a paddle
    pub fn paddle_x(&self, side: crate::Side) -> f64 {
        match side {
            crate::Side::Left => self.paddle_margin,
            crate::Side::Right => self.field_width - self.paddle_margin - self.paddle_width,
        }
    }

    pub fn paddle_speed(&self, side: crate::Side) -> f64 {
        match side {
            crate::Side::Left => self.player_speed,
            crate::Side::Right => self.cpu_speed,
        }
    }

    /// Countdown length in ticks at the target tick rate
    pub fn countdown_ticks(&self) -> i64 {
        (self.countdown_seconds * self.tick_rate).round() as i64
    }
}
