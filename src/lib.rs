//! Bounce Ball - two-player keyboard Pong on a 2D canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, scoring)
//! - `renderer`: Renderer port plus canvas and text implementations
//! - `input`: Key code to player action mapping
//! - `settings`: Data-driven court and physics tuning

pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use input::Action;
pub use settings::{Settings, SettingsError};
pub use sim::Game;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation rate driven by the external clock
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Court dimensions
    pub const COURT_WIDTH: f32 = 500.0;
    pub const COURT_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 40.0;
    pub const PADDLE_MAX_SPEED: f32 = 12.0;
    /// Speed gained per tick while a direction key is held
    pub const PADDLE_ACCELERATION: f32 = 2.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_MIN_Y_VELOCITY: f32 = 2.0;
    pub const BALL_MAX_Y_VELOCITY: f32 = 10.0;
    /// Horizontal speed added on every paddle hit (never capped)
    pub const BALL_SPEED_UP: f32 = 0.5;
    /// Velocity at spawn and after every goal
    pub const BALL_START_VELOCITY: Vec2 = Vec2::new(-2.0, 5.0);
    /// Where the ball reappears after a goal. Deliberately not the court center.
    pub const BALL_RESET_POS: Vec2 = Vec2::new(245.0, 245.0);

    /// Score HUD
    pub const SCORE_FONT: &str = "40px Inconsolata";
    pub const SCORE_BASELINE: f32 = 40.0;
}

/// Center point of a `width` x `height` area anchored at the origin
#[inline]
pub fn center_of(width: f32, height: f32) -> Vec2 {
    Vec2::new(width / 2.0, height / 2.0)
}
