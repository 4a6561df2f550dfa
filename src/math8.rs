//! 8-bit fixed-point helpers
//!
//! Integer scaling and blending in the style of `FastLED`'s `lib8tion`,
//! plus the beat generators used by tempo-synced patterns.

use core::f32::consts::TAU;

use embassy_time::Instant;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Scale a 16-bit value by a 16-bit range, returning `0..range`
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale16(value: u16, range: u16) -> u16 {
    ((value as u32 * range as u32) >> 16) as u16
}

/// Sine of an 8-bit angle (0-255 is one full turn), mapped to 0-255
///
/// `sin8(0) == 128`, peaks at a quarter turn.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless
)]
pub fn sin8(theta: u8) -> u8 {
    let angle = theta as f32 * TAU / 256.0;
    (128.0 + 127.5 * libm::sinf(angle)).clamp(0.0, 255.0) as u8
}

/// Sine of a 16-bit angle (0-65535 is one full turn), mapped to `i16`
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub fn sin16(theta: u16) -> i16 {
    let angle = theta as f32 * TAU / 65536.0;
    (libm::sinf(angle) * 32767.0) as i16
}

/// Sawtooth that wraps `bpm` times per minute, 16-bit resolution
///
/// Same constants as `FastLED`'s `beat88`: 280/65536 turns a millisecond
/// count times BPM in Q8.8 into 1/65536ths of a beat.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn beat16(bpm: u16, now: Instant) -> u16 {
    let bpm88 = (bpm as u64) << 8;
    ((now.as_millis().wrapping_mul(bpm88).wrapping_mul(280)) >> 16) as u16
}

/// Sawtooth that wraps `bpm` times per minute, 8-bit resolution
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn beat8(bpm: u16, now: Instant) -> u8 {
    (beat16(bpm, now) >> 8) as u8
}

/// Sine wave oscillating between `low` and `high` at `bpm`
///
/// `phase` shifts the wave by 1/256ths of a beat.
pub fn beatsin8(bpm: u16, low: u8, high: u8, now: Instant, phase: u8) -> u8 {
    let beat = beat8(bpm, now);
    let wave = sin8(beat.wrapping_add(phase));
    let range = high.saturating_sub(low);
    low.saturating_add(scale8(wave, range))
}

/// Sine wave oscillating in `low..high` at `bpm`, 16-bit resolution
///
/// The upper bound is exclusive whenever `high > low`.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
pub fn beatsin16(bpm: u16, low: u16, high: u16, now: Instant) -> u16 {
    let beat = beat16(bpm, now);
    let wave = (sin16(beat) as u16).wrapping_add(32768);
    let range = high.saturating_sub(low);
    low.saturating_add(scale16(wave, range))
}

/// Type alias for a function that adjusts a u8 value
pub type U8Adjuster = fn(value: u8) -> u8;
