//! Player paddles
//!
//! A paddle only ever moves vertically. Holding a direction key ramps its
//! speed up linearly; releasing the key stops it dead.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::Rect;
use super::state::{Court, Side};
use crate::settings::Settings;

/// Commanded direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Intent {
    Up,
    Down,
    #[default]
    Idle,
}

/// A player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Top-left corner. `x` never changes after creation.
    pub pos: Vec2,
    pub size: Vec2,
    /// Current speed magnitude (0..=max_speed)
    pub speed: f32,
    pub max_speed: f32,
    /// Speed gained per tick of held input
    pub acceleration: f32,
    /// Horizontal speed added to the ball on each hit
    pub hit_boost: f32,
    pub intent: Intent,
    pub score: u32,
}

impl Paddle {
    /// Create a paddle at rest, two paddle-widths in from its edge
    pub fn new(side: Side, court: &Court, settings: &Settings) -> Self {
        let size = Vec2::new(settings.paddle_width, settings.paddle_height);
        let x = match side {
            Side::Left => size.x * 2.0,
            Side::Right => court.width - size.x * 2.0,
        };
        Self {
            side,
            pos: Vec2::new(x, rest_y(court, size.y)),
            size,
            speed: 0.0,
            max_speed: settings.paddle_max_speed,
            acceleration: settings.paddle_acceleration,
            hit_boost: settings.paddle_hit_boost,
            intent: Intent::Idle,
            score: 0,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Change direction. `Idle` also kills any built-up speed.
    pub fn set_intent(&mut self, intent: Intent) {
        match intent {
            Intent::Idle => self.stop(),
            _ => self.intent = intent,
        }
    }

    pub fn stop(&mut self) {
        self.intent = Intent::Idle;
        self.speed = 0.0;
    }

    /// Ramp speed by one step, never past `max_speed`
    pub fn accelerate(&mut self) {
        self.speed = (self.speed + self.acceleration).min(self.max_speed);
    }

    /// Advance one tick of movement.
    ///
    /// A move that would carry the paddle past a wall is skipped outright
    /// rather than clamped, so the paddle can come to rest up to `speed`
    /// pixels short of the wall.
    pub fn tick(&mut self, court: &Court) {
        let floor = court.height - self.size.y;
        match self.intent {
            Intent::Up if self.pos.y > 0.0 => {
                self.accelerate();
                let next = self.pos.y - self.speed;
                if next >= 0.0 {
                    self.pos.y = next;
                }
            }
            Intent::Down if self.pos.y < floor => {
                self.accelerate();
                let next = self.pos.y + self.speed;
                if next <= floor {
                    self.pos.y = next;
                }
            }
            _ => {}
        }
    }

    /// Send the ball back after an overlap was detected.
    ///
    /// Horizontal speed always grows by `hit_boost`. Vertical speed follows
    /// how fast the paddle is moving, floored at the ball's minimum.
    pub fn resolve_collision(&self, ball: &mut Ball, court: &Court) {
        ball.vel.x = if ball.vel.x > 0.0 {
            -(ball.vel.x + self.hit_boost)
        } else {
            -(ball.vel.x - self.hit_boost)
        };

        // Push the ball clear of the paddle so it can't collide again next tick
        if ball.pos.x < court.width / 2.0 {
            ball.pos.x = self.pos.x + self.size.x;
        } else {
            ball.pos.x = self.pos.x - ball.size.x;
        }

        self.affect_ball_y_velocity(ball);
    }

    fn affect_ball_y_velocity(&self, ball: &mut Ball) {
        let speed_ratio = self.speed / self.max_speed;
        let magnitude = (ball.max_y_velocity * speed_ratio).max(ball.min_y_velocity);

        // An idle paddle sends the ball downward
        ball.vel.y = match self.intent {
            Intent::Up => -magnitude,
            Intent::Down | Intent::Idle => magnitude,
        };
    }

    pub fn score(&mut self) {
        self.score += 1;
    }

    /// Recenter and clear the score
    pub fn reset(&mut self, court: &Court) {
        self.pos.y = rest_y(court, self.size.y);
        self.score = 0;
    }
}

/// Vertical position that centers a paddle of `height` on the court
fn rest_y(court: &Court, height: f32) -> f32 {
    court.height / 2.0 - height / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn court() -> Court {
        Court::new(500.0, 500.0)
    }

    fn left_paddle() -> Paddle {
        Paddle::new(Side::Left, &court(), &Settings::default())
    }

    fn right_paddle() -> Paddle {
        Paddle::new(Side::Right, &court(), &Settings::default())
    }

    fn ball() -> Ball {
        Ball::new(&court(), &Settings::default())
    }

    #[test]
    fn test_speed_ramps_linearly_then_clamps() {
        let court = court();
        let mut paddle = left_paddle();
        paddle.set_intent(Intent::Down);

        for k in 1..=5 {
            paddle.tick(&court);
            assert_eq!(paddle.speed, 2.0 * k as f32);
        }
        for _ in 0..10 {
            paddle.tick(&court);
            assert_eq!(paddle.speed, 12.0);
        }
    }

    #[test]
    fn test_accelerate_clamps_uneven_max() {
        let mut paddle = left_paddle();
        paddle.max_speed = 5.0;
        for _ in 0..3 {
            paddle.accelerate();
        }
        assert_eq!(paddle.speed, 5.0);
    }

    #[test]
    fn test_release_stops_dead() {
        let court = court();
        let mut paddle = left_paddle();
        paddle.set_intent(Intent::Up);
        paddle.tick(&court);
        paddle.tick(&court);
        assert_eq!(paddle.speed, 4.0);

        paddle.set_intent(Intent::Idle);
        assert_eq!(paddle.speed, 0.0);
        let y = paddle.pos.y;
        paddle.tick(&court);
        assert_eq!(paddle.pos.y, y);
        assert_eq!(paddle.speed, 0.0);
    }

    #[test]
    fn test_direction_change_keeps_speed() {
        let court = court();
        let mut paddle = left_paddle();
        paddle.set_intent(Intent::Up);
        paddle.tick(&court);
        paddle.tick(&court);

        paddle.set_intent(Intent::Down);
        assert_eq!(paddle.speed, 4.0);
        paddle.tick(&court);
        assert_eq!(paddle.speed, 6.0);
    }

    #[test]
    fn test_move_skipped_short_of_top_wall() {
        let court = court();
        let mut paddle = left_paddle();
        paddle.set_intent(Intent::Up);

        // 230 - (2+4+6+8+10) = 200, then 12 per tick down to 8
        for _ in 0..40 {
            paddle.tick(&court);
        }
        assert_eq!(paddle.pos.y, 8.0);
        assert!(paddle.pos.y >= 0.0);
    }

    #[test]
    fn test_move_skipped_short_of_bottom_wall() {
        let court = court();
        let mut paddle = right_paddle();
        paddle.set_intent(Intent::Down);

        for _ in 0..40 {
            paddle.tick(&court);
        }
        // 230 + 30 = 260, then +12 per tick while <= 460: stops at 452
        assert_eq!(paddle.pos.y, 452.0);
    }

    #[test]
    fn test_collision_reflects_and_speeds_up_ball() {
        let court = court();
        let paddle = left_paddle();
        let mut ball = ball();
        ball.pos = Vec2::new(25.0, 240.0);
        ball.vel = Vec2::new(-3.0, 4.0);

        paddle.resolve_collision(&mut ball, &court);

        assert_eq!(ball.vel.x, 3.5);
        // Left half: placed against the paddle's right face
        assert_eq!(ball.pos.x, 30.0);
    }

    #[test]
    fn test_collision_right_half_places_ball_left_of_paddle() {
        let court = court();
        let paddle = right_paddle();
        let mut ball = ball();
        ball.pos = Vec2::new(475.0, 240.0);
        ball.vel = Vec2::new(4.5, -2.0);

        paddle.resolve_collision(&mut ball, &court);

        assert_eq!(ball.vel.x, -5.0);
        assert_eq!(ball.pos.x, 470.0);
    }

    #[test]
    fn test_stationary_paddle_gives_min_downward_spin() {
        let court = court();
        let paddle = left_paddle();
        assert_eq!(paddle.intent, Intent::Idle);
        assert_eq!(paddle.speed, 0.0);

        let mut ball = ball();
        ball.pos = Vec2::new(25.0, 240.0);
        ball.vel = Vec2::new(-2.0, -8.0);

        paddle.resolve_collision(&mut ball, &court);
        assert_eq!(ball.vel.y, 2.0);
    }

    #[test]
    fn test_moving_paddle_spin_follows_direction() {
        let court = court();
        let mut ball = ball();

        let mut paddle = left_paddle();
        paddle.set_intent(Intent::Up);
        paddle.speed = 12.0;
        ball.vel = Vec2::new(-2.0, 5.0);
        paddle.resolve_collision(&mut ball, &court);
        assert_eq!(ball.vel.y, -10.0);

        paddle.set_intent(Intent::Down);
        paddle.speed = 6.0;
        ball.vel = Vec2::new(-2.0, -5.0);
        paddle.resolve_collision(&mut ball, &court);
        assert_eq!(ball.vel.y, 5.0);

        // Slow paddle: scaled value under the floor
        paddle.speed = 2.0;
        paddle.resolve_collision(&mut ball, &court);
        assert_eq!(ball.vel.y, 2.0);
    }

    #[test]
    fn test_score_and_reset() {
        let court = court();
        let mut paddle = left_paddle();
        paddle.score();
        paddle.score();
        paddle.pos.y = 0.0;
        assert_eq!(paddle.score, 2);

        paddle.reset(&court);
        assert_eq!(paddle.score, 0);
        assert_eq!(paddle.pos.y, 230.0);
        assert_eq!(paddle.pos.x, 20.0);
    }

    fn intent_strategy() -> impl Strategy<Value = Intent> {
        prop_oneof![Just(Intent::Up), Just(Intent::Down), Just(Intent::Idle)]
    }

    proptest! {
        #[test]
        fn test_paddle_stays_on_court(
            intents in prop::collection::vec((intent_strategy(), 1usize..30), 1..20)
        ) {
            let court = court();
            let mut paddle = left_paddle();
            for (intent, ticks) in intents {
                paddle.set_intent(intent);
                for _ in 0..ticks {
                    paddle.tick(&court);
                    prop_assert!(paddle.pos.y >= 0.0);
                    prop_assert!(paddle.pos.y <= court.height - paddle.size.y);
                    prop_assert!(paddle.speed <= paddle.max_speed);
                }
            }
        }

        #[test]
        fn test_hit_spin_within_bounds(
            speed in 0.0f32..=12.0,
            intent in intent_strategy(),
            vx in 0.1f32..40.0,
            vy in -10.0f32..10.0,
            y in 200.0f32..260.0,
        ) {
            let court = court();
            let mut paddle = left_paddle();
            paddle.set_intent(intent);
            paddle.speed = speed;

            let mut ball = ball();
            ball.pos = Vec2::new(25.0, y);
            // Approaching the left paddle
            ball.vel = Vec2::new(-vx, vy);

            paddle.resolve_collision(&mut ball, &court);

            prop_assert!(ball.vel.x > 0.0);
            prop_assert!(ball.vel.x.abs() > vx);
            prop_assert!(ball.vel.y.abs() >= ball.min_y_velocity);
            prop_assert!(ball.vel.y.abs() <= ball.max_y_velocity);
        }
    }
}
