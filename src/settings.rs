//! Court and physics tuning
//!
//! Every field has a default matching the classic game, so a partial JSON
//! blob only needs to name what it changes. Settings are read once at startup
//! and never written back.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Error raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The blob was not valid JSON for `Settings`
    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field parsed but describes an unplayable court
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl SettingsError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SettingsError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Court ===
    pub court_width: f32,
    pub court_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_max_speed: f32,
    /// Speed gained per tick while a key is held
    pub paddle_acceleration: f32,
    /// Horizontal speed added to the ball on every hit
    pub paddle_hit_boost: f32,

    // === Ball ===
    pub ball_size: f32,
    pub ball_min_y_velocity: f32,
    pub ball_max_y_velocity: f32,

    // === Clock ===
    pub ticks_per_second: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            court_width: COURT_WIDTH,
            court_height: COURT_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_max_speed: PADDLE_MAX_SPEED,
            paddle_acceleration: PADDLE_ACCELERATION,
            paddle_hit_boost: BALL_SPEED_UP,

            ball_size: BALL_SIZE,
            ball_min_y_velocity: BALL_MIN_Y_VELOCITY,
            ball_max_y_velocity: BALL_MAX_Y_VELOCITY,

            ticks_per_second: TICKS_PER_SECOND,
        }
    }
}

impl Settings {
    /// Parse and validate a JSON settings blob
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse a blob, falling back to defaults (with a warning) when it is unusable
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded custom settings");
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Reject settings that would break the paddle bounds or ball physics
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("court_width", self.court_width),
            ("court_height", self.court_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_max_speed", self.paddle_max_speed),
            ("paddle_acceleration", self.paddle_acceleration),
            ("ball_size", self.ball_size),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::invalid(field, format!("must be > 0, got {value}")));
            }
        }

        if !(self.paddle_hit_boost.is_finite() && self.paddle_hit_boost >= 0.0) {
            return Err(SettingsError::invalid(
                "paddle_hit_boost",
                format!("must be >= 0, got {}", self.paddle_hit_boost),
            ));
        }
        if self.paddle_height >= self.court_height {
            return Err(SettingsError::invalid(
                "paddle_height",
                "paddle must be shorter than the court",
            ));
        }
        // Both paddles sit two paddle-widths in from their edge
        if self.paddle_width * 5.0 > self.court_width {
            return Err(SettingsError::invalid(
                "paddle_width",
                "court too narrow for two paddles",
            ));
        }
        if !(self.ball_min_y_velocity.is_finite() && self.ball_min_y_velocity >= 0.0) {
            return Err(SettingsError::invalid(
                "ball_min_y_velocity",
                format!("must be >= 0, got {}", self.ball_min_y_velocity),
            ));
        }
        if !(self.ball_max_y_velocity.is_finite()
            && self.ball_max_y_velocity >= self.ball_min_y_velocity)
        {
            return Err(SettingsError::invalid(
                "ball_max_y_velocity",
                "must be >= ball_min_y_velocity",
            ));
        }
        if self.ticks_per_second == 0 {
            return Err(SettingsError::invalid("ticks_per_second", "must be > 0"));
        }

        Ok(())
    }

    /// Clock interval between ticks, in milliseconds
    pub fn tick_interval_ms(&self) -> f64 {
        1000.0 / self.ticks_per_second as f64
    }

    /// Whole-millisecond interval for timers that only take integers.
    ///
    /// Rounds down so the clock never runs slower than `ticks_per_second`;
    /// 60 ticks per second gives 16 ms.
    pub fn clock_interval_ms(&self) -> i32 {
        (self.tick_interval_ms().floor() as i32).max(1)
    }
}
