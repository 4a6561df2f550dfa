//! Fixed color correction
//!
//! Combines the LED package correction with a white-point color
//! temperature into one multiplicative factor per channel.

use super::Filter;
use crate::color::{Rgb, rgb_from_u32};
use crate::math8::scale8;

/// Leave colors untouched
pub const UNCORRECTED: Rgb = rgb_from_u32(0xFFFFFF);

/// Typical correction for 5050 SMD LEDs (`FastLED`'s `TypicalSMD5050`)
pub const TYPICAL_SMD5050: Rgb = rgb_from_u32(0xFFB0F0);

/// Cool 7000K white point (`FastLED`'s `OvercastSky`)
pub const OVERCAST_SKY: Rgb = rgb_from_u32(0xC9E2FF);

/// Color correction filter
///
/// Applies per-channel multiplicative scaling to correct color output.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColorCorrection {
    /// Correction factors for each channel (0-255 = 0%-100%)
    factors: Rgb,
}

impl ColorCorrection {
    /// Combine a strip correction with a color temperature
    pub(crate) const fn new(correction: Rgb, temperature: Rgb) -> Self {
        Self {
            factors: Rgb {
                r: scale8(correction.r, temperature.r),
                g: scale8(correction.g, temperature.g),
                b: scale8(correction.b, temperature.b),
            },
        }
    }

    pub(crate) const fn factors(self) -> Rgb {
        self.factors
    }

    /// Check if correction is active
    pub(crate) const fn is_active(self) -> bool {
        self.factors.r != 255 || self.factors.g != 255 || self.factors.b != 255
    }
}

impl Filter for ColorCorrection {
    fn apply(&mut self, frame: &mut [Rgb]) {
        if !self.is_active() {
            return;
        }

        for pixel in frame.iter_mut() {
            pixel.r = scale8(pixel.r, self.factors.r);
            pixel.g = scale8(pixel.g, self.factors.g);
            pixel.b = scale8(pixel.b, self.factors.b);
        }
    }
}
