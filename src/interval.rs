//! Polled periodic timers
//!
//! Nothing here sleeps: the main loop keeps calling [`Interval::ready`] and
//! acts when it returns `true`. Elapsed time is always a wrapping difference
//! of two clock readings, so a rolled-over tick counter cannot stall a timer.

use embassy_time::{Duration, Instant};

/// Time from `since` to `now`, tolerant of tick counter rollover
#[inline]
pub const fn elapsed(since: Instant, now: Instant) -> Duration {
    Duration::from_ticks(now.as_ticks().wrapping_sub(since.as_ticks()))
}

/// `now` moved forward by `by`, wrapping at the end of the tick counter
#[inline]
pub const fn advance(now: Instant, by: Duration) -> Instant {
    Instant::from_ticks(now.as_ticks().wrapping_add(by.as_ticks()))
}

/// Whether `deadline` has been reached at `now`
///
/// Compares the wrapping difference as signed, so deadlines on either side
/// of a counter rollover still order correctly.
#[inline]
#[allow(clippy::cast_possible_wrap)]
pub const fn is_reached(deadline: Instant, now: Instant) -> bool {
    (now.as_ticks().wrapping_sub(deadline.as_ticks()) as i64) >= 0
}

/// Fires at most once per `period`
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    period: Duration,
    last: Instant,
}

impl Interval {
    /// Create an interval that last fired at time zero
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            last: Instant::from_ticks(0),
        }
    }

    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Last time the interval fired
    pub const fn last(&self) -> Instant {
        self.last
    }

    /// Returns `true` once `period` has passed since it last fired
    pub fn ready(&mut self, now: Instant) -> bool {
        if elapsed(self.last, now) < self.period {
            return false;
        }
        self.last = now;
        true
    }
}
