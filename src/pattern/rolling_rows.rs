//! Rows lighting up one after another on every beat
//!
//! Each beat lights the next row (or diagonal) from the bottom, wrapping
//! back to the bottom after the top. Everything off the lit line fades.

use super::{FrameContext, Pattern, column_color};
use crate::{
    color::{add_hsv, fade_to_black_by},
    matrix::Canvas,
};

const FADE: u8 = 10;

#[derive(Debug, Clone, Default)]
pub struct RollingRowsPattern {
    /// Lit line, `None` until the first beat
    current: Option<usize>,
    /// Shift the lit row up by one per column
    diagonal: bool,
}

impl RollingRowsPattern {
    pub const fn new() -> Self {
        Self {
            current: None,
            diagonal: false,
        }
    }

    /// Light diagonals instead of rows
    #[must_use]
    pub const fn with_diagonal(mut self) -> Self {
        self.diagonal = true;
        self
    }

    /// Line currently lit
    pub const fn current(&self) -> Option<usize> {
        self.current
    }

    /// Line a cell belongs to
    const fn line_of<const ROWS: usize>(&self, row: usize, col: usize) -> usize {
        if self.diagonal {
            (row + ROWS - col % ROWS) % ROWS
        } else {
            row
        }
    }

    fn light_line<const ROWS: usize, const COLS: usize>(
        &self,
        line: usize,
        hue: u8,
        canvas: &mut Canvas<'_, ROWS, COLS>,
    ) {
        if self.diagonal {
            for col in 0..COLS {
                add_hsv(canvas.at((line + col) % ROWS, col), column_color(hue, col));
            }
        } else {
            for (col, cell) in canvas.row_mut(line).into_iter().enumerate() {
                add_hsv(cell, column_color(hue, col));
            }
        }
    }
}

impl Pattern for RollingRowsPattern {
    fn render<const ROWS: usize, const COLS: usize>(
        &mut self,
        frame: &FrameContext,
        canvas: &mut Canvas<'_, ROWS, COLS>,
    ) {
        if ROWS == 0 {
            return;
        }

        if frame.beat {
            let line = self.current.map_or(0, |line| (line + 1) % ROWS);
            self.current = Some(line);
            self.light_line(line, frame.hue, canvas);
        }

        for row in 0..ROWS {
            for col in 0..COLS {
                if self.current != Some(self.line_of::<ROWS>(row, col)) {
                    let cell = canvas.at(row, col);
                    *cell = fade_to_black_by(*cell, FADE);
                }
            }
        }
    }

    fn reset(&mut self) {
        self.current = None;
    }
}
