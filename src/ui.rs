//! Four-button user interface
//!
//! Maps debounced button presses to controller commands. The toggle button
//! cycles what the increase/decrease buttons adjust; the function button is
//! the tap tempo input, and holding it switches tap tempo on or off.
//! Debouncing and long-press detection happen before
//! presses reach this module.

use embassy_time::Duration;

use crate::command::Command;

/// Brightness step for a short press
pub const SHORT_BRIGHTNESS_STEP: u8 = 3;

/// Brightness step for each long-press repeat
pub const LONG_BRIGHTNESS_STEP: u8 = 5;

/// Holding longer than this doubles the long-press step
pub const FAST_REPEAT_AFTER: Duration = Duration::from_millis(2000);

/// Holding the function button this long toggles tap tempo input
pub const TAP_MODE_HOLD: Duration = Duration::from_millis(4000);

/// Quantity the increase/decrease buttons act on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Pattern,
    Brightness,
    Speed,
}

impl UiMode {
    /// Mode selected by the next toggle press
    pub const fn next(self) -> Self {
        match self {
            Self::Pattern => Self::Brightness,
            Self::Brightness => Self::Speed,
            Self::Speed => Self::Pattern,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Toggle,
    Increase,
    Decrease,
    Function,
}

/// A debounced button event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Press {
    Short,
    /// Fired repeatedly while held, with the time held so far
    Long { held: Duration },
}

/// Button interface state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    mode: UiMode,
    /// Tap mode already toggled during the current function button hold
    tap_mode_toggled: bool,
}

impl UiState {
    pub const fn new() -> Self {
        Self {
            mode: UiMode::Pattern,
            tap_mode_toggled: false,
        }
    }

    /// Current mode, shown on the mode indicator LEDs
    pub const fn mode(&self) -> UiMode {
        self.mode
    }

    /// Translate a button press into a controller command
    pub fn handle(&mut self, button: Button, press: Press) -> Option<Command> {
        match (button, press) {
            (Button::Toggle, Press::Short) => {
                self.mode = self.mode.next();
                None
            }
            (Button::Increase, Press::Short) => Some(match self.mode {
                UiMode::Pattern => Command::NextPattern,
                UiMode::Brightness => Command::IncreaseBrightness(SHORT_BRIGHTNESS_STEP),
                UiMode::Speed => Command::IncreaseHueSpeed,
            }),
            (Button::Decrease, Press::Short) => Some(match self.mode {
                UiMode::Pattern => Command::PreviousPattern,
                UiMode::Brightness => Command::DecreaseBrightness(SHORT_BRIGHTNESS_STEP),
                UiMode::Speed => Command::DecreaseHueSpeed,
            }),
            (Button::Increase, Press::Long { held }) if self.mode == UiMode::Brightness => {
                Some(Command::IncreaseBrightness(long_step(held)))
            }
            (Button::Decrease, Press::Long { held }) if self.mode == UiMode::Brightness => {
                Some(Command::DecreaseBrightness(long_step(held)))
            }
            (Button::Function, Press::Short) => Some(Command::Tap),
            (Button::Function, Press::Long { held }) => self.hold_function(held),
            _ => None,
        }
    }

    /// Toggle tap mode once per hold, when the hold passes [`TAP_MODE_HOLD`]
    fn hold_function(&mut self, held: Duration) -> Option<Command> {
        if held < TAP_MODE_HOLD {
            self.tap_mode_toggled = false;
            return None;
        }
        if self.tap_mode_toggled {
            return None;
        }
        self.tap_mode_toggled = true;
        Some(Command::ToggleTapMode)
    }
}

fn long_step(held: Duration) -> u8 {
    if held > FAST_REPEAT_AFTER {
        LONG_BRIGHTNESS_STEP * 2
    } else {
        LONG_BRIGHTNESS_STEP
    }
}
