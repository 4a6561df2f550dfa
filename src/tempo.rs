//! Tap tempo
//!
//! Derives a beat period from button taps and keeps a recurring beat tick
//! scheduled against it. A tap resynchronizes the phase: the next poll fires
//! a tick right away, and following ticks are rescheduled from the moment
//! they fire using the latest period, so rounding never accumulates.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::interval::{advance, elapsed, is_reached};

/// Beat period before any taps (120 BPM)
pub const DEFAULT_BEAT_PERIOD: Duration = Duration::from_millis(500);

/// Shortest usable beat period (300 BPM)
pub const MIN_BEAT_PERIOD: Duration = Duration::from_millis(200);

/// Longest usable beat period (30 BPM)
pub const MAX_BEAT_PERIOD: Duration = Duration::from_millis(2000);

/// How long the tempo indicator stays lit after each tick
pub const INDICATOR_BLINK: Duration = Duration::from_millis(30);

const MS_PER_MINUTE: u64 = 60_000;

/// Tap tempo engine
#[derive(Debug, Clone)]
pub struct TapTempo {
    /// Two most recent intervals between taps, newest first
    intervals: [Duration; 2],
    last_tap: Instant,
    /// `None` until the first poll, which fires right away
    next_tick: Option<Instant>,
    indicator_off: Option<Instant>,
    /// Set when a tick fires, cleared by `consume_tick`
    tick: bool,
}

impl Default for TapTempo {
    fn default() -> Self {
        Self::new()
    }
}

impl TapTempo {
    /// Create an engine seeded with [`DEFAULT_BEAT_PERIOD`]
    ///
    /// The first tick is due immediately.
    pub const fn new() -> Self {
        Self {
            intervals: [DEFAULT_BEAT_PERIOD; 2],
            last_tap: Instant::from_ticks(0),
            next_tick: None,
            indicator_off: None,
            tick: false,
        }
    }

    /// Register a tap
    ///
    /// The period becomes the mean of this interval and the previous one, and
    /// the next [`poll`](Self::poll) fires a tick in phase with the tap.
    pub fn tap(&mut self, now: Instant) {
        self.intervals[1] = self.intervals[0];
        self.intervals[0] = elapsed(self.last_tap, now);
        self.last_tap = now;
        self.next_tick = Some(now);

        #[cfg(feature = "esp32-log")]
        println!(
            "[TapTempo.tap] interval {} ms, period {} ms, {} BPM",
            self.intervals[0].as_millis(),
            self.clamped_period().as_millis(),
            self.bpm()
        );
    }

    /// Fire a tick if the deadline has been reached
    ///
    /// Returns whether a tick fired on this poll. The next deadline is
    /// counted from `now` with the current period.
    pub fn poll(&mut self, now: Instant) -> bool {
        if let Some(next_tick) = self.next_tick {
            if !is_reached(next_tick, now) {
                return false;
            }
        }
        self.tick = true;
        self.indicator_off = Some(advance(now, INDICATOR_BLINK));
        self.next_tick = Some(advance(now, self.clamped_period()));
        true
    }

    /// Take the pending tick, if any
    ///
    /// Ticks that fire between two calls collapse into one.
    pub fn consume_tick(&mut self) -> bool {
        core::mem::take(&mut self.tick)
    }

    /// Whether a tick is waiting to be consumed
    pub const fn tick_pending(&self) -> bool {
        self.tick
    }

    /// Mean of the two most recent tap intervals, unclamped
    pub const fn period(&self) -> Duration {
        let (a, b) = (self.intervals[0].as_ticks(), self.intervals[1].as_ticks());
        Duration::from_ticks(a / 2 + b / 2 + (a & b & 1))
    }

    /// [`period`](Self::period) limited to 30-300 BPM
    pub fn clamped_period(&self) -> Duration {
        self.period().clamp(MIN_BEAT_PERIOD, MAX_BEAT_PERIOD)
    }

    /// Current tempo in beats per minute
    #[allow(clippy::cast_possible_truncation)]
    pub fn bpm(&self) -> u16 {
        // Clamped period is at least 200 ms, so this never divides by zero.
        (MS_PER_MINUTE / self.clamped_period().as_millis()) as u16
    }

    /// Whether the tempo indicator LED should be lit
    pub const fn indicator_lit(&self, now: Instant) -> bool {
        match self.indicator_off {
            Some(off) => !is_reached(off, now),
            None => false,
        }
    }

    pub const fn last_tap(&self) -> Instant {
        self.last_tap
    }

    /// Deadline of the next tick, `None` before the first poll
    pub const fn next_tick(&self) -> Option<Instant> {
        self.next_tick
    }
}
