//! Confetti
//!
//! Randomly placed speckles around the base hue that blink in and fade out.

use super::{FrameContext, Pattern};
use crate::{
    color::{Hsv, add_hsv},
    matrix::Canvas,
};

const FADE: u8 = 10;
const HUE_SPREAD: u8 = 64;
const INITIAL_SEED: u64 = 0x5eed_c0ff_ee00_0001;

#[derive(Debug, Clone)]
pub struct ConfettiPattern {
    seed: u64,
}

impl Default for ConfettiPattern {
    fn default() -> Self {
        Self { seed: INITIAL_SEED }
    }
}

impl ConfettiPattern {
    /// Start the speckle sequence from a different seed
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// SplitMix64 step
    fn next_random(&mut self) -> u64 {
        self.seed = self.seed.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.seed;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

impl Pattern for ConfettiPattern {
    #[allow(clippy::cast_possible_truncation)]
    fn render<const ROWS: usize, const COLS: usize>(
        &mut self,
        frame: &FrameContext,
        canvas: &mut Canvas<'_, ROWS, COLS>,
    ) {
        canvas.fade_to_black_by(FADE);

        let leds = canvas.leds_mut();
        if leds.is_empty() {
            return;
        }

        let random = self.next_random();
        let pos = (random % leds.len() as u64) as usize;
        let hue_offset = ((random >> 32) as u8) % HUE_SPREAD;
        add_hsv(
            &mut leds[pos],
            Hsv {
                hue: frame.hue.wrapping_add(hue_offset),
                sat: 200,
                val: 255,
            },
        );
    }

    fn reset(&mut self) {
        self.seed = INITIAL_SEED;
    }
}
