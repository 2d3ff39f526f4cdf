//! Fixed timestep simulation tick
//!
//! Core game loop that advances the match deterministically, one call per
//! clock tick.

use super::paddle::Intent;
use super::state::{Game, GameEvent, Side};

/// Latest intent per paddle, held until the next tick applies it.
///
/// Key events can land at any point between ticks; only the most recent
/// one for each paddle survives.
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    pending: [Option<Intent>; 2],
}

impl InputLatch {
    pub fn latch(&mut self, side: Side, intent: Intent) {
        self.pending[side.index()] = Some(intent);
    }

    pub fn take(&mut self, side: Side) -> Option<Intent> {
        self.pending[side.index()].take()
    }
}

impl Game {
    /// Advance the match by one fixed timestep.
    ///
    /// Paddles move before the ball so collision checks see where the
    /// paddles are this tick.
    pub fn update(&mut self) {
        self.events.clear();
        self.time_ticks += 1;

        for side in Side::BOTH {
            if let Some(intent) = self.input.take(side) {
                self.paddles[side.index()].set_intent(intent);
            }
        }

        for paddle in &mut self.paddles {
            paddle.tick(&self.court);
        }

        // Ball phases run against last tick's position: walls, goal lines,
        // paddles, then the move. A goal resets the ball before the move.
        if self.ball.check_wall_collision(&self.court) {
            self.events.push(GameEvent::WallBounce);
        }
        if let Some(scorer) = self.ball.check_goal(&self.court) {
            self.on_goal(scorer);
            self.events.push(GameEvent::Goal { scorer });
        }
        self.ball.collide_paddles(&self.court, &self.paddles, &mut self.events);
        self.ball.advance();

        for event in &self.events {
            match event {
                GameEvent::Goal { scorer } => {
                    let (left, right) = self.score();
                    log::info!("{scorer:?} scores ({left} - {right})");
                }
                GameEvent::PaddleHit(side) => {
                    log::debug!(
                        "{side:?} paddle hit, ball velocity now ({}, {})",
                        self.ball.vel.x,
                        self.ball.vel.y
                    );
                }
                GameEvent::WallBounce => log::debug!("Wall bounce at x={}", self.ball.pos.x),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::input::Action;

    #[test]
    fn test_rally_to_first_goal() {
        let mut game = Game::default();

        // Left paddle at rest; the ball drifts past it and into the left goal
        for _ in 0..125 {
            game.update();
            assert_eq!(game.score(), (0, 0));
        }
        assert_eq!(game.ball.pos.x, 0.0);

        game.update();
        assert_eq!(game.score(), (0, 1));
        assert_eq!(game.events(), &[GameEvent::Goal { scorer: Side::Right }]);
        // Reset to (245, 245) / (-2, 5) then stepped once
        assert_eq!(game.ball.vel, Vec2::new(-2.0, 5.0));
        assert_eq!(game.ball.pos, Vec2::new(243.0, 250.0));
        // Paddles were not moved
        assert_eq!(game.paddle(Side::Left).pos.y, 230.0);
    }

    #[test]
    fn test_goal_resets_before_move() {
        let mut game = Game::default();
        game.ball.pos = Vec2::new(500.0, 100.0);
        game.ball.vel = Vec2::new(9.0, 3.0);

        game.update();

        assert_eq!(game.score(), (1, 0));
        assert_eq!(game.events(), &[GameEvent::Goal { scorer: Side::Left }]);
        // Reset state, then one step of the fixed serve velocity
        assert_eq!(game.ball.vel, Vec2::new(-2.0, 5.0));
        assert_eq!(game.ball.pos, Vec2::new(243.0, 250.0));
    }

    #[test]
    fn test_goal_takes_priority_over_paddle() {
        let mut game = Game::default();
        // Past the goal line while still touching the left paddle's box
        game.paddle_mut(Side::Left).pos.x = -5.0;
        game.ball.pos = Vec2::new(0.0, 240.0);
        game.ball.vel = Vec2::new(-4.0, 0.0);

        game.update();

        assert_eq!(game.score(), (0, 1));
        assert_eq!(game.events(), &[GameEvent::Goal { scorer: Side::Right }]);
        assert_eq!(game.ball.vel, Vec2::new(-2.0, 5.0));
        assert_eq!(game.ball.pos, Vec2::new(243.0, 250.0));
    }

    #[test]
    fn test_input_latched_until_tick() {
        let mut game = Game::default();

        game.handle_key_down(Action::Player1Up);
        assert_eq!(game.paddle(Side::Left).intent, Intent::Idle);

        game.update();
        let left = game.paddle(Side::Left);
        assert_eq!(left.intent, Intent::Up);
        assert_eq!(left.speed, 2.0);
        assert_eq!(left.pos.y, 228.0);
    }

    #[test]
    fn test_latest_event_wins() {
        let mut game = Game::default();

        game.handle_key_down(Action::Player2Down);
        game.handle_key_up(Action::Player2Down);
        game.handle_key_down(Action::Player2Up);
        game.update();

        assert_eq!(game.paddle(Side::Right).intent, Intent::Up);
        assert_eq!(game.paddle(Side::Left).intent, Intent::Idle);
    }

    #[test]
    fn test_key_release_stops_on_next_tick() {
        let mut game = Game::default();

        game.handle_key_down(Action::Player1Down);
        for _ in 0..3 {
            game.update();
        }
        assert_eq!(game.paddle(Side::Left).speed, 6.0);

        // Either of the player's keys stops the paddle
        game.handle_key_up(Action::Player1Up);
        game.update();
        let left = game.paddle(Side::Left);
        assert_eq!(left.speed, 0.0);
        assert_eq!(left.intent, Intent::Idle);
    }

    #[test]
    fn test_held_key_repeats_keep_ramping() {
        let mut game = Game::default();

        for k in 1..=4 {
            // Browsers re-send keydown while a key is held
            game.handle_key_down(Action::Player2Up);
            game.update();
            assert_eq!(game.paddle(Side::Right).speed, 2.0 * k as f32);
        }
    }

    #[test]
    fn test_events_cleared_each_tick() {
        let mut game = Game::default();
        game.ball.pos = Vec2::new(250.0, 0.0);
        game.ball.vel = Vec2::new(-2.0, -5.0);
        game.update();
        assert_eq!(game.events(), &[GameEvent::WallBounce]);

        game.update();
        assert!(game.events().is_empty());
        assert_eq!(game.time_ticks, 2);
    }

    #[test]
    fn test_moving_paddle_puts_spin_on_ball() {
        let mut game = Game::default();

        // Ball right in front of the left paddle, paddle driving downward
        game.handle_key_down(Action::Player1Down);
        game.ball.pos = Vec2::new(28.0, 245.0);
        game.ball.vel = Vec2::new(-2.0, -3.0);
        game.update();

        // Paddle moved to 232 at speed 2 before the ball checked collisions
        assert_eq!(game.events(), &[GameEvent::PaddleHit(Side::Left)]);
        assert_eq!(game.ball.vel.x, 2.5);
        assert_eq!(game.ball.vel.y, 2.0);
    }

    #[test]
    fn test_rallies_keep_speeding_up() {
        let mut game = Game::default();
        let mut last_speed = game.ball.vel.x.abs();

        for _ in 0..5 {
            // Park the ball against the left paddle, then the right
            for side in Side::BOTH {
                let paddle_x = game.paddle(side).pos.x;
                game.ball.pos = Vec2::new(paddle_x + 1.0, 240.0);
                game.update();
                assert!(game.events().contains(&GameEvent::PaddleHit(side)));
                let speed = game.ball.vel.x.abs();
                assert!(speed > last_speed);
                last_speed = speed;
            }
        }
        assert_eq!(last_speed, 7.0);
    }
}
