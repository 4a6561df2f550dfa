//! One dot per column sweeping up to the top row and back down
//!
//! A full sweep up takes `rows` beats.

use super::{FrameContext, Pattern, column_color};
use crate::{color::add_hsv, math8::beatsin16, matrix::Canvas};

const FADE: u8 = 20;

#[derive(Debug, Clone, Default)]
pub struct ScrollRowsPattern;

impl Pattern for ScrollRowsPattern {
    #[allow(clippy::cast_possible_truncation)]
    fn render<const ROWS: usize, const COLS: usize>(
        &mut self,
        frame: &FrameContext,
        canvas: &mut Canvas<'_, ROWS, COLS>,
    ) {
        canvas.fade_to_black_by(FADE);
        if ROWS == 0 {
            return;
        }

        let rows = ROWS.min(usize::from(u16::MAX)) as u16;
        let pos = usize::from(beatsin16(frame.bpm / rows, 0, rows, frame.now)).min(ROWS - 1);

        for col in 0..COLS {
            let mut column = canvas.column_mut(col);
            if let Some(cell) = column.get_mut(pos) {
                add_hsv(cell, column_color(frame.hue, col));
            }
        }
    }
}
