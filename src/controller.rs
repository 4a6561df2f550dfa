//! Control facade
//!
//! Owns the LED buffer, the active pattern, the tap tempo engine and the
//! global brightness/hue settings, and exposes them to the user interface.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::command::{Command, CommandReceiver};
use crate::filter::{FilterProcessor, FilterProcessorConfig};
use crate::interval::Interval;
use crate::matrix::{Canvas, MatrixLayout};
use crate::pattern::{FrameContext, PatternId, PatternSlot};
use crate::tempo::TapTempo;

/// Brightness after power-up
pub const DEFAULT_BRIGHTNESS: u8 = 96;

/// Hue steps added per hue tick after power-up
pub const DEFAULT_HUE_SPEED: u8 = 1;

/// Fastest hue rotation
pub const MAX_HUE_SPEED: u8 = 16;

/// How often the base hue advances
pub const HUE_TICK: Duration = Duration::from_millis(20);

/// Configuration for the controller
#[derive(Debug, Clone)]
pub struct ControllerConfig<const ROWS: usize, const COLS: usize> {
    pub layout: MatrixLayout<ROWS, COLS>,
    pub pattern: PatternId,
    pub brightness: u8,
    pub hue_speed: u8,
    /// Accept tap tempo input
    pub tap_mode: bool,
    pub filters: FilterProcessorConfig,
}

impl<const ROWS: usize, const COLS: usize> Default for ControllerConfig<ROWS, COLS> {
    fn default() -> Self {
        Self {
            layout: MatrixLayout::serpentine(),
            pattern: PatternId::Rainbow,
            brightness: DEFAULT_BRIGHTNESS,
            hue_speed: DEFAULT_HUE_SPEED,
            tap_mode: true,
            filters: FilterProcessorConfig::default(),
        }
    }
}

/// Totem controller - the main orchestrator
pub struct Controller<'a, const ROWS: usize, const COLS: usize, const QUEUE: usize> {
    // External dependencies and configuration
    commands: CommandReceiver<'a, QUEUE>,
    layout: MatrixLayout<ROWS, COLS>,

    // Internal state
    pattern: PatternSlot,
    tempo: TapTempo,
    tap_mode: bool,
    hue: u8,
    hue_speed: u8,
    hue_clock: Interval,
    /// Pattern output, kept between frames so patterns can fade it
    leds: [[Rgb; ROWS]; COLS],
    /// Filtered copy sent to the strip
    frame: [[Rgb; ROWS]; COLS],

    // Internal dependencies
    filters: FilterProcessor,
}

impl<'a, const ROWS: usize, const COLS: usize, const QUEUE: usize>
    Controller<'a, ROWS, COLS, QUEUE>
{
    /// Create a new controller reading UI commands from `commands`
    pub fn new(commands: CommandReceiver<'a, QUEUE>, config: &ControllerConfig<ROWS, COLS>) -> Self {
        let mut pattern = config.pattern.to_slot();
        pattern.reset();
        Self {
            commands,
            layout: config.layout,
            pattern,
            tempo: TapTempo::new(),
            tap_mode: config.tap_mode,
            hue: 0,
            hue_speed: config.hue_speed.min(MAX_HUE_SPEED),
            hue_clock: Interval::new(HUE_TICK),
            leds: [[Rgb::default(); ROWS]; COLS],
            frame: [[Rgb::default(); ROWS]; COLS],
            filters: FilterProcessor::new(config.brightness, &config.filters),
        }
    }

    /// Advance time-driven state without rendering
    ///
    /// Drains queued commands first, so a queued tap is already registered
    /// when the tempo engine is polled.
    pub fn update(&mut self, now: Instant) {
        self.process_commands(now);
        self.tempo.poll(now);
        if self.hue_clock.ready(now) {
            self.hue = self.hue.wrapping_add(self.hue_speed);
        }
    }

    /// Render one frame
    ///
    /// Runs the active pattern once and returns the filtered output frame.
    pub fn render(&mut self, now: Instant) -> &[Rgb] {
        let frame = FrameContext {
            now,
            hue: self.hue,
            bpm: self.tempo.bpm(),
            beat: self.tempo.consume_tick(),
        };
        let mut canvas = Canvas::new(self.leds.as_flattened_mut(), self.layout);
        self.pattern.render(&frame, &mut canvas);

        self.frame = self.leds;
        let output = self.frame.as_flattened_mut();
        self.filters.apply(output);
        output
    }

    /// Apply a single UI command
    pub fn apply(&mut self, command: Command, now: Instant) {
        match command {
            Command::NextPattern => self.next_pattern(),
            Command::PreviousPattern => self.previous_pattern(),
            Command::SetPattern(id) => self.set_pattern(id),
            Command::IncreaseBrightness(step) => self.increase_brightness(step),
            Command::DecreaseBrightness(step) => self.decrease_brightness(step),
            Command::SetBrightness(brightness) => self.set_brightness(brightness),
            Command::IncreaseHueSpeed => self.increase_hue_speed(),
            Command::DecreaseHueSpeed => self.decrease_hue_speed(),
            Command::Tap => self.tap(now),
            Command::ToggleTapMode => self.toggle_tap_mode(),
        }
    }

    /// Process pending commands from the queue (non-blocking)
    fn process_commands(&mut self, now: Instant) {
        while let Some(command) = self.commands.try_receive() {
            self.apply(command, now);
        }
    }

    pub fn next_pattern(&mut self) {
        self.set_pattern(self.pattern.id().next());
    }

    pub fn previous_pattern(&mut self) {
        self.set_pattern(self.pattern.id().previous());
    }

    /// Switch to a pattern, starting it from a fresh state
    pub fn set_pattern(&mut self, id: PatternId) {
        #[cfg(feature = "esp32-log")]
        println!("[Controller.set_pattern] {}", id.as_str());
        self.pattern = id.to_slot();
        self.pattern.reset();
    }

    pub fn increase_brightness(&mut self, step: u8) {
        self.set_brightness(self.brightness().saturating_add(step));
    }

    pub fn decrease_brightness(&mut self, step: u8) {
        self.set_brightness(self.brightness().saturating_sub(step));
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.filters.brightness.set(brightness);
    }

    pub fn increase_hue_speed(&mut self) {
        self.hue_speed = self.hue_speed.saturating_add(1).min(MAX_HUE_SPEED);
    }

    pub fn decrease_hue_speed(&mut self) {
        self.hue_speed = self.hue_speed.saturating_sub(1);
    }

    /// Register a tap tempo tap, ignored while tap mode is off
    pub fn tap(&mut self, now: Instant) {
        if self.tap_mode {
            self.tempo.tap(now);
        }
    }

    pub fn toggle_tap_mode(&mut self) {
        self.tap_mode = !self.tap_mode;
        #[cfg(feature = "esp32-log")]
        println!("[Controller.toggle_tap_mode] tap mode {}", self.tap_mode);
    }

    pub fn pattern(&self) -> PatternId {
        self.pattern.id()
    }

    pub fn pattern_name(&self) -> &'static str {
        self.pattern.id().as_str()
    }

    pub const fn brightness(&self) -> u8 {
        self.filters.brightness.current()
    }

    /// Current base hue
    pub const fn hue(&self) -> u8 {
        self.hue
    }

    pub const fn hue_speed(&self) -> u8 {
        self.hue_speed
    }

    pub fn bpm(&self) -> u16 {
        self.tempo.bpm()
    }

    pub const fn tap_mode(&self) -> bool {
        self.tap_mode
    }

    /// Whether the tempo indicator LED should be lit
    pub const fn tempo_indicator(&self, now: Instant) -> bool {
        self.tempo.indicator_lit(now)
    }

    pub const fn tempo(&self) -> &TapTempo {
        &self.tempo
    }

    pub const fn layout(&self) -> MatrixLayout<ROWS, COLS> {
        self.layout
    }

    /// Unfiltered pattern buffer in wiring order
    pub fn leds(&self) -> &[Rgb] {
        self.leds.as_flattened()
    }
}
