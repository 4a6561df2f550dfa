use crate::color::Rgb;

mod brightness;
mod color_correction;

pub(crate) trait Filter {
    /// Apply the filter to a frame
    fn apply(&mut self, frame: &mut [Rgb]);
}

pub(crate) use brightness::BrightnessFilter;
pub use brightness::BrightnessFilterConfig;
pub(crate) use color_correction::ColorCorrection;
pub use color_correction::{OVERCAST_SKY, TYPICAL_SMD5050, UNCORRECTED};

#[derive(Debug, Clone)]
pub struct FilterProcessorConfig {
    /// Brightness filter
    pub brightness: BrightnessFilterConfig,
    /// Strip color correction
    pub correction: Rgb,
    /// White point color temperature
    pub temperature: Rgb,
}

impl Default for FilterProcessorConfig {
    fn default() -> Self {
        Self {
            brightness: BrightnessFilterConfig::default(),
            correction: TYPICAL_SMD5050,
            temperature: OVERCAST_SKY,
        }
    }
}

/// Filter processor - applies post-processing to frames
///
/// This is the central hub for all output modifications. Color correction
/// runs before brightness, and neither is visible to patterns.
#[derive(Debug)]
pub(crate) struct FilterProcessor {
    /// Brightness filter
    pub(crate) brightness: BrightnessFilter,
    /// Color correction filter
    pub(crate) color_correction: ColorCorrection,
}

impl FilterProcessor {
    /// Create a new filter processor
    pub(crate) fn new(brightness: u8, config: &FilterProcessorConfig) -> Self {
        Self {
            brightness: BrightnessFilter::new(brightness, &config.brightness),
            color_correction: ColorCorrection::new(config.correction, config.temperature),
        }
    }

    /// Apply all filters in order
    pub(crate) fn apply(&mut self, frame: &mut [Rgb]) {
        self.color_correction.apply(frame);
        self.brightness.apply(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREY: Rgb = Rgb {
        r: 200,
        g: 200,
        b: 200,
    };

    fn uncorrected() -> FilterProcessorConfig {
        FilterProcessorConfig {
            brightness: BrightnessFilterConfig::default(),
            correction: UNCORRECTED,
            temperature: UNCORRECTED,
        }
    }

    #[test]
    fn test_full_brightness_uncorrected_is_identity() {
        let mut filters = FilterProcessor::new(255, &uncorrected());
        let mut frame = [GREY; 3];
        filters.apply(&mut frame);
        assert_eq!(frame, [GREY; 3]);
    }

    #[test]
    fn test_zero_brightness_blanks_frame() {
        let mut filters = FilterProcessor::new(0, &uncorrected());
        let mut frame = [GREY; 3];
        filters.apply(&mut frame);
        assert_eq!(frame, [Rgb::default(); 3]);
    }

    #[test]
    fn test_half_brightness_scales_channels() {
        let mut filters = FilterProcessor::new(128, &uncorrected());
        let mut frame = [GREY];
        filters.apply(&mut frame);
        assert_eq!(frame[0], Rgb { r: 100, g: 100, b: 100 });
    }

    fn always_off(_: u8) -> u8 {
        0
    }

    #[test]
    fn test_adjuster_applies_before_scaling() {
        let config = FilterProcessorConfig {
            brightness: BrightnessFilterConfig {
                adjust: Some(always_off),
            },
            ..uncorrected()
        };
        let mut filters = FilterProcessor::new(255, &config);
        assert_eq!(filters.brightness.current(), 255);
        assert_eq!(filters.brightness.effective(), 0);

        let mut frame = [GREY];
        filters.apply(&mut frame);
        assert_eq!(frame[0], Rgb::default());
    }

    #[test]
    fn test_correction_combines_with_temperature() {
        let correction = ColorCorrection::new(TYPICAL_SMD5050, OVERCAST_SKY);
        let factors = correction.factors();
        assert_eq!(factors.r, 201);
        assert!(factors.g < 0xB0);
        assert_eq!(factors.b, 0xF0);
        assert!(correction.is_active());
        assert!(!ColorCorrection::new(UNCORRECTED, UNCORRECTED).is_active());
    }
}
