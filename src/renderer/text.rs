//! Character-grid renderer
//!
//! Scales court coordinates down onto a fixed grid of cells. Used for the
//! headless native build.

use std::fmt;

use super::{Renderer, Style};
use crate::sim::{Court, Rect};

const EMPTY: char = ' ';

/// Renders a frame as rows of characters
#[derive(Debug, Clone)]
pub struct TextRenderer {
    cols: usize,
    rows: usize,
    /// Court units per cell
    cell_w: f32,
    cell_h: f32,
    cells: Vec<char>,
}

impl TextRenderer {
    pub fn new(court: &Court, cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            cell_w: court.width / cols as f32,
            cell_h: court.height / rows as f32,
            cells: vec![EMPTY; cols * rows],
        }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Character at a cell, `None` when out of the grid
    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        if col < self.cols && row < self.rows {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Rows of the current frame
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.chunks(self.cols).map(|row| row.iter().collect())
    }

    /// Map a court x coordinate to a column, clamped into `0..=cols`
    fn col_at(&self, x: f32) -> usize {
        ((x / self.cell_w).max(0.0) as usize).min(self.cols)
    }

    fn row_at(&self, y: f32) -> usize {
        ((y / self.cell_h).max(0.0) as usize).min(self.rows)
    }
}

impl Renderer for TextRenderer {
    fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    fn draw_rect(&mut self, rect: Rect, style: Style) {
        let col_start = self.col_at(rect.x);
        let row_start = self.row_at(rect.y);
        // Anything with area covers at least one cell
        let col_end = self.col_at(rect.right()).max(col_start + 1).min(self.cols);
        let row_end = self.row_at(rect.bottom()).max(row_start + 1).min(self.rows);

        for row in row_start..row_end {
            let line = row * self.cols;
            self.cells[line + col_start..line + col_end].fill(style.glyph);
        }
    }

    fn draw_text(&mut self, value: &str, x: f32, y: f32) {
        // The baseline sits below the glyphs; write on the row above it
        let row = self.row_at(y).saturating_sub(1);
        if row >= self.rows {
            return;
        }
        let start = self.col_at(x);
        for (col, ch) in (start..self.cols).zip(value.chars()) {
            self.cells[row * self.cols + col] = ch;
        }
    }
}

impl fmt::Display for TextRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
