//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, one `Game::update` per clock tick
//! - Input is latched between ticks, never applied mid-tick
//! - Stable update order (left paddle, right paddle, ball)
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use collision::{Rect, overlaps};
pub use paddle::{Intent, Paddle};
pub use state::{Court, Game, GameEvent, Side};
pub use tick::InputLatch;
