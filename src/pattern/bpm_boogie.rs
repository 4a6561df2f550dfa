//! Party palette pulsing at the tap tempo, no offset between columns

use super::{FrameContext, Pattern};
use crate::{
    color::{PARTY_COLORS, color_from_palette},
    math8::beatsin8,
    matrix::Canvas,
};

const PHASE: u8 = 90;

#[derive(Debug, Clone, Default)]
pub struct BpmBoogiePattern;

impl Pattern for BpmBoogiePattern {
    #[allow(clippy::cast_possible_truncation)]
    fn render<const ROWS: usize, const COLS: usize>(
        &mut self,
        frame: &FrameContext,
        canvas: &mut Canvas<'_, ROWS, COLS>,
    ) {
        let beat = beatsin8(frame.bpm, 64, 255, frame.now, PHASE);

        for (i, led) in canvas.leds_mut().iter_mut().enumerate() {
            let i = i as u8;
            *led = color_from_palette(
                &PARTY_COLORS,
                frame.hue.wrapping_add(i.wrapping_mul(2)),
                beat.wrapping_add(i.wrapping_mul(10)),
            );
        }
    }
}
