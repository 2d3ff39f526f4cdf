//! The ball
//!
//! Collisions are checked against last tick's position before the ball
//! moves, so responses always lag one frame behind. Scores and reset
//! coordinates depend on that ordering.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, overlaps};
use super::paddle::Paddle;
use super::state::{Court, GameEvent, Side};
use crate::consts::{BALL_RESET_POS, BALL_START_VELOCITY};
use crate::settings::Settings;
use crate::center_of;

/// The ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Floor for |vel.y| after a paddle hit
    pub min_y_velocity: f32,
    /// Ceiling for |vel.y| after a paddle hit
    pub max_y_velocity: f32,
}

impl Ball {
    /// Spawn at the court center
    pub fn new(court: &Court, settings: &Settings) -> Self {
        Self {
            pos: center_of(court.width, court.height),
            vel: BALL_START_VELOCITY,
            size: Vec2::splat(settings.ball_size),
            min_y_velocity: settings.ball_min_y_velocity,
            max_y_velocity: settings.ball_max_y_velocity,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Back to the fixed serve state. Nothing carries over from the last rally.
    pub fn reset(&mut self) {
        self.pos = BALL_RESET_POS;
        self.vel = BALL_START_VELOCITY;
    }

    /// Reflect off the top or bottom wall. Returns true on a bounce.
    pub fn check_wall_collision(&mut self, court: &Court) -> bool {
        if self.pos.y <= 0.0 || self.pos.y > court.height {
            self.vel.y = -self.vel.y;
            true
        } else {
            false
        }
    }

    /// Which side scores if the ball is past a goal line
    pub fn check_goal(&self, court: &Court) -> Option<Side> {
        let crossed = if self.pos.x <= 0.0 {
            Side::Left
        } else if self.pos.x >= court.width {
            Side::Right
        } else {
            return None;
        };
        Some(crossed.opponent())
    }

    /// Bounce off every paddle overlapping the ball, left then right
    pub fn collide_paddles(
        &mut self,
        court: &Court,
        paddles: &[Paddle; 2],
        events: &mut Vec<GameEvent>,
    ) {
        for paddle in paddles {
            if overlaps(paddle.rect(), self.rect()) {
                paddle.resolve_collision(self, court);
                events.push(GameEvent::PaddleHit(paddle.side));
            }
        }
    }

    /// Move by one tick of velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}
