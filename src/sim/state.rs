//! Match state and core simulation types
//!
//! The `Game` owns the court, both paddles and the ball outright; nothing in
//! here outlives a match.

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::paddle::{Intent, Paddle};
use super::tick::InputLatch;
use crate::input::Action;
use crate::settings::Settings;

/// The rectangular play area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub width: f32,
    pub height: f32,
}

impl Court {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Which edge of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Slot in `Game::paddles`
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// The side across the court; crossing your own goal line scores for it
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Something notable that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball was returned by the paddle on this side
    PaddleHit(Side),
    /// Ball crossed a goal line; `scorer` gets the point
    Goal { scorer: Side },
}

/// A running match
#[derive(Debug, Clone)]
pub struct Game {
    pub court: Court,
    /// Indexed by `Side::index`
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(super) input: InputLatch,
    pub(super) events: Vec<GameEvent>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl Game {
    /// Set up a fresh match: paddles at rest on their edges, ball at center
    pub fn new(settings: &Settings) -> Self {
        let court = Court::new(settings.court_width, settings.court_height);
        Self {
            court,
            paddles: [
                Paddle::new(Side::Left, &court, settings),
                Paddle::new(Side::Right, &court, settings),
            ],
            ball: Ball::new(&court, settings),
            time_ticks: 0,
            input: InputLatch::default(),
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    #[inline]
    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }

    /// Current score as (left, right)
    pub fn score(&self) -> (u32, u32) {
        (self.paddle(Side::Left).score, self.paddle(Side::Right).score)
    }

    /// Award a point and put the ball back in play. Paddles stay where they are.
    pub fn on_goal(&mut self, scorer: Side) {
        self.paddles[scorer.index()].score();
        self.ball.reset();
    }

    /// Full match reset: ball, paddle positions and scores
    pub fn reset(&mut self) {
        self.ball.reset();
        for paddle in &mut self.paddles {
            paddle.reset(&self.court);
        }
        log::info!("Match reset");
    }

    /// Latch a key press; applied at the start of the next update
    pub fn handle_key_down(&mut self, action: Action) {
        self.input.latch(action.side(), action.intent());
    }

    /// Latch a key release. Either of a player's keys stops that player.
    pub fn handle_key_up(&mut self, action: Action) {
        self.input.latch(action.side(), Intent::Idle);
    }

    /// Events produced by the most recent update
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}
