//! Global brightness
//!
//! Scales the output frame by the user brightness. An optional adjuster
//! (usually a gamma curve) maps the stored brightness to the value that is
//! actually applied.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::Filter;
use crate::{
    color::{Rgb, scale_color},
    math8::U8Adjuster,
};

/// Configuration for the brightness filter
#[derive(Debug, Clone, Default)]
pub struct BrightnessFilterConfig {
    /// Adjustment function
    pub adjust: Option<U8Adjuster>,
}

/// Brightness scaling with optional adjustment curve
#[derive(Debug, Clone)]
pub(crate) struct BrightnessFilter {
    adjust: Option<U8Adjuster>,
    /// Current brightness value (0-255)
    brightness: u8,
}

impl BrightnessFilter {
    /// Create a new brightness filter
    pub(crate) const fn new(brightness: u8, config: &BrightnessFilterConfig) -> Self {
        Self {
            adjust: config.adjust,
            brightness,
        }
    }

    /// Set brightness
    pub(crate) fn set(&mut self, brightness: u8) {
        #[cfg(feature = "esp32-log")]
        println!("[BrightnessFilter.set] setting brightness to {:?}", brightness);
        self.brightness = brightness;
    }

    pub(crate) const fn current(&self) -> u8 {
        self.brightness
    }

    /// Value applied to the frame after adjustment
    pub(crate) fn effective(&self) -> u8 {
        match self.adjust {
            Some(adjust) => adjust(self.brightness),
            None => self.brightness,
        }
    }
}

impl Filter for BrightnessFilter {
    fn apply(&mut self, frame: &mut [Rgb]) {
        let current = self.effective();

        if current == 255 {
            return;
        }

        if current == 0 {
            for pixel in frame.iter_mut() {
                *pixel = Rgb { r: 0, g: 0, b: 0 };
            }
            return;
        }

        for pixel in frame.iter_mut() {
            *pixel = scale_color(*pixel, current);
        }
    }
}
