//! Rainbow pulsing to the beat
//!
//! Paints a rainbow starting at the base hue along the strip, then scales
//! the whole frame with a sine wave running at the tap tempo.

use super::{FrameContext, Pattern};
use crate::{
    color::{Hsv, hsv2rgb, scale_color},
    math8::beatsin8,
    matrix::Canvas,
};

const HUE_STEP: u8 = 7;
const PULSE_FLOOR: u8 = 255 / 6;

#[derive(Debug, Clone)]
pub struct RainbowPattern {
    /// Hue difference between neighbouring LEDs
    hue_step: u8,
    /// Whether brightness follows the beat
    pulse: bool,
}

impl Default for RainbowPattern {
    fn default() -> Self {
        Self {
            hue_step: HUE_STEP,
            pulse: true,
        }
    }
}

impl RainbowPattern {
    /// Set the hue difference between neighbouring LEDs
    #[must_use]
    pub fn with_hue_step(mut self, hue_step: u8) -> Self {
        self.hue_step = hue_step;
        self
    }

    /// Keep a steady brightness instead of pulsing
    #[must_use]
    pub fn without_pulse(mut self) -> Self {
        self.pulse = false;
        self
    }
}

impl Pattern for RainbowPattern {
    #[allow(clippy::cast_possible_truncation)]
    fn render<const ROWS: usize, const COLS: usize>(
        &mut self,
        frame: &FrameContext,
        canvas: &mut Canvas<'_, ROWS, COLS>,
    ) {
        let level = if self.pulse {
            beatsin8(frame.bpm, PULSE_FLOOR, 255, frame.now, 0)
        } else {
            255
        };

        for (i, led) in canvas.leds_mut().iter_mut().enumerate() {
            let color = hsv2rgb(Hsv {
                hue: frame.hue.wrapping_add((i as u8).wrapping_mul(self.hue_step)),
                sat: 255,
                val: 255,
            });
            *led = scale_color(color, level);
        }
    }
}
