//! Rendering port
//!
//! The simulation never draws. Once per frame `Game::draw` pushes the paddles,
//! ball and scores through a `Renderer`, which is all a surface has to
//! implement.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod text;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use text::TextRenderer;

use crate::consts::SCORE_BASELINE;
use crate::sim::{Game, Rect, Side};

/// How a rectangle is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// CSS fill color
    pub fill: &'static str,
    /// Character used by text surfaces
    pub glyph: char,
}

/// Styles for game elements
pub mod styles {
    use super::Style;

    pub const PADDLE: Style = Style {
        fill: "#FF0000",
        glyph: '#',
    };
    pub const BALL: Style = Style {
        fill: "#FF0000",
        glyph: 'o',
    };
    /// Score digits share the paddle color
    pub const TEXT_FILL: &str = "#FF0000";
}

/// A 2D drawing surface in court coordinates (origin top-left, y down)
pub trait Renderer {
    /// Wipe the whole surface
    fn clear(&mut self);
    /// Fill an axis-aligned rectangle
    fn draw_rect(&mut self, rect: Rect, style: Style);
    /// Draw `value` with its baseline-left corner at (x, y)
    fn draw_text(&mut self, value: &str, x: f32, y: f32);
}

impl Game {
    /// Paint one frame: paddles, ball, then the score line
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.clear();

        for paddle in &self.paddles {
            renderer.draw_rect(paddle.rect(), styles::PADDLE);
        }
        renderer.draw_rect(self.ball.rect(), styles::BALL);

        for side in Side::BOTH {
            let x = score_x(self.court.width, side);
            renderer.draw_text(&self.paddle(side).score.to_string(), x, SCORE_BASELINE);
        }
    }
}

/// Horizontal anchor for a side's score (200 and 300 on a 500-wide court)
fn score_x(court_width: f32, side: Side) -> f32 {
    match side {
        Side::Left => court_width * 2.0 / 5.0,
        Side::Right => court_width * 3.0 / 5.0,
    }
}
