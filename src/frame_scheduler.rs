//! Frame scheduling
//!
//! Renders at a fixed frame rate however fast the surrounding loop spins.
//! The loop keeps calling [`FrameScheduler::poll`]; a frame is rendered and
//! flushed only once a full frame interval has passed since the last one.

use embassy_time::{Duration, Instant};

use crate::controller::Controller;
use crate::interval::Interval;
use crate::OutputDriver;

/// Default target frame rate (60 FPS).
pub const DEFAULT_FPS: u32 = 60;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Outcome of a scheduler poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// A frame was rendered and written to the output
    Rendered,
    /// Too early for the next frame; nothing was rendered
    Skipped,
}

/// Portable frame scheduler that manages timing without async.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(controller, driver);
///
/// loop {
///     let now = Instant::now();
///     poll_buttons(scheduler.controller_mut(), now);
///     scheduler.poll(now);
/// }
/// ```
pub struct FrameScheduler<
    'a,
    O: OutputDriver,
    const ROWS: usize,
    const COLS: usize,
    const QUEUE: usize,
> {
    output: O,
    controller: Controller<'a, ROWS, COLS, QUEUE>,
    frames: Interval,
}

impl<'a, O: OutputDriver, const ROWS: usize, const COLS: usize, const QUEUE: usize>
    FrameScheduler<'a, O, ROWS, COLS, QUEUE>
{
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (60 FPS) for frame timing.
    pub fn new(controller: Controller<'a, ROWS, COLS, QUEUE>, driver: O) -> Self {
        Self::with_frame_duration(controller, driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler targeting `fps` frames per second.
    pub fn with_fps(controller: Controller<'a, ROWS, COLS, QUEUE>, driver: O, fps: u32) -> Self {
        let frame_ms = 1000 / u64::from(fps.max(1));
        Self::with_frame_duration(controller, driver, Duration::from_millis(frame_ms))
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        controller: Controller<'a, ROWS, COLS, QUEUE>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            controller,
            frames: Interval::new(frame_duration),
        }
    }

    /// Poll the scheduler once.
    ///
    /// Always advances the controller's commands, tempo and hue. When a
    /// frame is due, renders it, writes it to the output driver and returns
    /// [`FrameStatus::Rendered`].
    pub fn poll(&mut self, now: Instant) -> FrameStatus {
        self.controller.update(now);

        if !self.frames.ready(now) {
            return FrameStatus::Skipped;
        }

        let frame = self.controller.render(now);
        self.output.write(frame);
        FrameStatus::Rendered
    }

    pub const fn frame_duration(&self) -> Duration {
        self.frames.period()
    }

    /// Time the last frame was rendered.
    pub const fn last_frame(&self) -> Instant {
        self.frames.last()
    }

    /// Get a reference to the controller.
    pub fn controller(&self) -> &Controller<'a, ROWS, COLS, QUEUE> {
        &self.controller
    }

    /// Get a mutable reference to the controller.
    pub fn controller_mut(&mut self) -> &mut Controller<'a, ROWS, COLS, QUEUE> {
        &mut self.controller
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }
}
