//! Encoders from text to raw tick weights.
//!
//! Both encoders emit weights on the same three-level scale, so their
//! output can be used as tick lengths directly or passed through the
//! normalizer.

mod binary;
mod morse;

pub use binary::binary_ticks;
pub use morse::{morse_symbols, morse_ticks, Symbol};

/// Weight of a `0` bit or a Morse dot.
pub const SHORT_WEIGHT: f32 = 0.5;

/// Weight of a `1` bit or a Morse dash.
pub const LONG_WEIGHT: f32 = 1.0;

/// Weight of the gap between two Morse characters.
pub const GAP_WEIGHT: f32 = 0.0;

/// Map a binary digit to its tick weight: `0.5 + 0.5 * bit`.
#[inline]
#[must_use]
pub fn bit_weight(bit: u32) -> f32 {
    SHORT_WEIGHT + (LONG_WEIGHT - SHORT_WEIGHT) * (bit & 1) as f32
}
