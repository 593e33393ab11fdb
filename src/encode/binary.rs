//! Binary encoder: one tick per bit of each character's code point.

use super::bit_weight;

/// Minimum number of digits per character (zero-padded, like `{:08b}`).
const MIN_DIGITS: u32 = 8;

/// Encode `text` as tick weights, most significant bit first.
///
/// Every character contributes its code point written in binary, padded to
/// at least 8 digits. Code points above 255 are not truncated: they add as
/// many digits as their binary form needs.
///
/// # Example
///
/// ```
/// use tally_viz::encode::binary_ticks;
///
/// // 'A' = 0b0100_0001
/// assert_eq!(
///     binary_ticks("A"),
///     vec![0.5, 1.0, 0.5, 0.5, 0.5, 0.5, 0.5, 1.0],
/// );
/// assert!(binary_ticks("").is_empty());
/// ```
#[must_use]
pub fn binary_ticks(text: &str) -> Vec<f32> {
    let mut weights = Vec::with_capacity(text.len() * MIN_DIGITS as usize);

    for c in text.chars() {
        let code = u32::from(c);
        let digits = (u32::BITS - code.leading_zeros()).max(MIN_DIGITS);
        weights.extend((0..digits).rev().map(|shift| bit_weight(code >> shift)));
    }

    tracing::debug!(chars = text.chars().count(), ticks = weights.len(), "binary encoded");
    weights
}
