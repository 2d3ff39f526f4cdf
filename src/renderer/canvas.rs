//! HTML canvas renderer (browser only)

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Renderer, Style, styles};
use crate::consts::SCORE_FONT;
use crate::sim::Rect;

/// Draws onto a canvas 2D context, one court unit per canvas pixel
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    /// Grab the canvas' 2D context. `None` if the browser refuses one.
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        ctx.set_font(SCORE_FONT);

        Some(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }
}

impl Renderer for CanvasRenderer {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_rect(&mut self, rect: Rect, style: Style) {
        self.ctx.set_fill_style_str(style.fill);
        self.ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn draw_text(&mut self, value: &str, x: f32, y: f32) {
        self.ctx.set_fill_style_str(styles::TEXT_FILL);
        if let Err(e) = self.ctx.fill_text(value, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}
