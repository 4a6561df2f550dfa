#![no_std]

pub mod color;
pub mod command;
pub mod controller;
pub mod filter;
pub mod frame_scheduler;
pub mod gamma;
pub mod interval;
pub mod math8;
pub mod matrix;
pub mod pattern;
pub mod tempo;
pub mod ui;

pub use command::{Command, CommandQueue, CommandReceiver, CommandSender, QueueFull};
pub use controller::{Controller, ControllerConfig};
pub use filter::{BrightnessFilterConfig, FilterProcessorConfig};
pub use frame_scheduler::{FrameScheduler, FrameStatus};
pub use gamma::ws2812_lut;
pub use matrix::{Canvas, MatrixLayout};
pub use pattern::{FrameContext, Pattern, PatternId, PatternSlot};
pub use tempo::TapTempo;
pub use ui::{Button, Press, UiMode, UiState};

pub use color::{Hsv, Rgb};
pub use math8::U8Adjuster;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
