//! Pattern system with compile-time known pattern variants
//!
//! All patterns are stored in an enum to avoid heap allocations.
//! Each pattern implements the `Pattern` trait and keeps whatever state it
//! needs between frames in its own struct.

mod bpm_boogie;
mod confetti;
mod rainbow;
mod rolling_rows;
mod scroll_rows;

use embassy_time::Instant;

pub use bpm_boogie::BpmBoogiePattern;
pub use confetti::ConfettiPattern;
pub use rainbow::RainbowPattern;
pub use rolling_rows::RollingRowsPattern;
pub use scroll_rows::ScrollRowsPattern;

use crate::{color::Hsv, matrix::Canvas};

const PATTERN_NAME_RAINBOW: &str = "rainbow";
const PATTERN_NAME_CONFETTI: &str = "confetti";
const PATTERN_NAME_BPM_BOOGIE: &str = "bpm_boogie";
const PATTERN_NAME_SCROLL_ROWS: &str = "scroll_rows";
const PATTERN_NAME_ROLLING_ROWS: &str = "rolling_rows";
const PATTERN_NAME_ROLLING_ROWS_DIAGONAL: &str = "rolling_rows_diagonal";

const PATTERN_ID_RAINBOW: u8 = 0;
const PATTERN_ID_CONFETTI: u8 = 1;
const PATTERN_ID_BPM_BOOGIE: u8 = 2;
const PATTERN_ID_SCROLL_ROWS: u8 = 3;
const PATTERN_ID_ROLLING_ROWS: u8 = 4;
const PATTERN_ID_ROLLING_ROWS_DIAGONAL: u8 = 5;

/// Number of known patterns
pub const PATTERN_COUNT: u8 = 6;

/// Per-frame inputs shared by every pattern
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    /// Time of the frame
    pub now: Instant,
    /// Slowly rotating base hue
    pub hue: u8,
    /// Current tap tempo
    pub bpm: u16,
    /// A beat tick fired since the previous frame
    pub beat: bool,
}

pub trait Pattern {
    /// Render a single frame
    ///
    /// Runs once per rendered frame and must not block.
    fn render<const ROWS: usize, const COLS: usize>(
        &mut self,
        frame: &FrameContext,
        canvas: &mut Canvas<'_, ROWS, COLS>,
    );

    /// Reset pattern state
    fn reset(&mut self) {}
}

/// Pattern slot - enum containing all possible patterns
#[derive(Debug, Clone)]
pub enum PatternSlot {
    /// Rainbow pulsing to the beat
    Rainbow(RainbowPattern),
    /// Random fading speckles
    Confetti(ConfettiPattern),
    /// Party palette pulsing at the tempo
    BpmBoogie(BpmBoogiePattern),
    /// A dot per column sweeping up and down
    ScrollRows(ScrollRowsPattern),
    /// A lit row advancing on every beat
    RollingRows(RollingRowsPattern),
    /// A lit diagonal advancing on every beat
    RollingRowsDiagonal(RollingRowsPattern),
}

/// Known pattern ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PatternId {
    Rainbow = PATTERN_ID_RAINBOW,
    Confetti = PATTERN_ID_CONFETTI,
    BpmBoogie = PATTERN_ID_BPM_BOOGIE,
    ScrollRows = PATTERN_ID_SCROLL_ROWS,
    RollingRows = PATTERN_ID_ROLLING_ROWS,
    RollingRowsDiagonal = PATTERN_ID_ROLLING_ROWS_DIAGONAL,
}

impl Default for PatternSlot {
    fn default() -> Self {
        Self::Rainbow(RainbowPattern::default())
    }
}

impl PatternId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_RAINBOW => Self::Rainbow,
            PATTERN_ID_CONFETTI => Self::Confetti,
            PATTERN_ID_BPM_BOOGIE => Self::BpmBoogie,
            PATTERN_ID_SCROLL_ROWS => Self::ScrollRows,
            PATTERN_ID_ROLLING_ROWS => Self::RollingRows,
            PATTERN_ID_ROLLING_ROWS_DIAGONAL => Self::RollingRowsDiagonal,
            _ => return None,
        })
    }

    /// The pattern after this one, wrapping to the first
    pub fn next(self) -> Self {
        let raw = (self as u8 + 1) % PATTERN_COUNT;
        Self::from_raw(raw).unwrap_or(Self::Rainbow)
    }

    /// The pattern before this one, wrapping to the last
    pub fn previous(self) -> Self {
        let raw = (self as u8 + PATTERN_COUNT - 1) % PATTERN_COUNT;
        Self::from_raw(raw).unwrap_or(Self::Rainbow)
    }

    pub fn to_slot(self) -> PatternSlot {
        match self {
            Self::Rainbow => PatternSlot::Rainbow(RainbowPattern::default()),
            Self::Confetti => PatternSlot::Confetti(ConfettiPattern::default()),
            Self::BpmBoogie => PatternSlot::BpmBoogie(BpmBoogiePattern),
            Self::ScrollRows => PatternSlot::ScrollRows(ScrollRowsPattern),
            Self::RollingRows => PatternSlot::RollingRows(RollingRowsPattern::new()),
            Self::RollingRowsDiagonal => {
                PatternSlot::RollingRowsDiagonal(RollingRowsPattern::new().with_diagonal())
            }
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rainbow => PATTERN_NAME_RAINBOW,
            Self::Confetti => PATTERN_NAME_CONFETTI,
            Self::BpmBoogie => PATTERN_NAME_BPM_BOOGIE,
            Self::ScrollRows => PATTERN_NAME_SCROLL_ROWS,
            Self::RollingRows => PATTERN_NAME_ROLLING_ROWS,
            Self::RollingRowsDiagonal => PATTERN_NAME_ROLLING_ROWS_DIAGONAL,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_RAINBOW => Some(Self::Rainbow),
            PATTERN_NAME_CONFETTI => Some(Self::Confetti),
            PATTERN_NAME_BPM_BOOGIE => Some(Self::BpmBoogie),
            PATTERN_NAME_SCROLL_ROWS => Some(Self::ScrollRows),
            PATTERN_NAME_ROLLING_ROWS => Some(Self::RollingRows),
            PATTERN_NAME_ROLLING_ROWS_DIAGONAL => Some(Self::RollingRowsDiagonal),
            _ => None,
        }
    }
}

impl PatternSlot {
    /// Render the current pattern
    pub fn render<const ROWS: usize, const COLS: usize>(
        &mut self,
        frame: &FrameContext,
        canvas: &mut Canvas<'_, ROWS, COLS>,
    ) {
        match self {
            Self::Rainbow(pattern) => pattern.render(frame, canvas),
            Self::Confetti(pattern) => pattern.render(frame, canvas),
            Self::BpmBoogie(pattern) => pattern.render(frame, canvas),
            Self::ScrollRows(pattern) => pattern.render(frame, canvas),
            Self::RollingRows(pattern) => pattern.render(frame, canvas),
            Self::RollingRowsDiagonal(pattern) => pattern.render(frame, canvas),
        }
    }

    /// Reset the pattern state
    pub fn reset(&mut self) {
        match self {
            Self::Rainbow(pattern) => Pattern::reset(pattern),
            Self::Confetti(pattern) => Pattern::reset(pattern),
            Self::BpmBoogie(pattern) => Pattern::reset(pattern),
            Self::ScrollRows(pattern) => Pattern::reset(pattern),
            Self::RollingRows(pattern) => Pattern::reset(pattern),
            Self::RollingRowsDiagonal(pattern) => Pattern::reset(pattern),
        }
    }

    /// Get the pattern ID for external observation
    pub fn id(&self) -> PatternId {
        match self {
            Self::Rainbow(_) => PatternId::Rainbow,
            Self::Confetti(_) => PatternId::Confetti,
            Self::BpmBoogie(_) => PatternId::BpmBoogie,
            Self::ScrollRows(_) => PatternId::ScrollRows,
            Self::RollingRows(_) => PatternId::RollingRows,
            Self::RollingRowsDiagonal(_) => PatternId::RollingRowsDiagonal,
        }
    }
}

/// Color of the lit cell in column `col` for the row patterns
#[allow(clippy::cast_possible_truncation)]
pub(crate) const fn column_color(hue: u8, col: usize) -> Hsv {
    Hsv {
        hue: hue.wrapping_add((col as u8).wrapping_mul(15)),
        sat: 255,
        val: 192,
    }
}
