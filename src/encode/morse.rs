//! Morse encoder: dots and dashes separated by zero-length gaps.

use super::{GAP_WEIGHT, LONG_WEIGHT, SHORT_WEIGHT};
use std::fmt;

use self::Symbol::{Dash, Dot};

/// A Morse code symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Short mark (bit 0).
    Dot,
    /// Long mark (bit 1).
    Dash,
}

impl Symbol {
    /// Tick weight for this symbol.
    #[must_use]
    pub const fn weight(self) -> f32 {
        match self {
            Dot => SHORT_WEIGHT,
            Dash => LONG_WEIGHT,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dot => ".",
            Dash => "-",
        })
    }
}

/// International Morse code for `a` through `z`.
const MORSE_TABLE: [&[Symbol]; 26] = [
    &[Dot, Dash],             // a
    &[Dash, Dot, Dot, Dot],   // b
    &[Dash, Dot, Dash, Dot],  // c
    &[Dash, Dot, Dot],        // d
    &[Dot],                   // e
    &[Dot, Dot, Dash, Dot],   // f
    &[Dash, Dash, Dot],       // g
    &[Dot, Dot, Dot, Dot],    // h
    &[Dot, Dot],              // i
    &[Dot, Dash, Dash, Dash], // j
    &[Dash, Dot, Dash],       // k
    &[Dot, Dash, Dot, Dot],   // l
    &[Dash, Dash],            // m
    &[Dash, Dot],             // n
    &[Dash, Dash, Dash],      // o
    &[Dot, Dash, Dash, Dot],  // p
    &[Dash, Dash, Dot, Dash], // q
    &[Dot, Dash, Dot],        // r
    &[Dot, Dot, Dot],         // s
    &[Dash],                  // t
    &[Dot, Dot, Dash],        // u
    &[Dot, Dot, Dot, Dash],   // v
    &[Dot, Dash, Dash],       // w
    &[Dash, Dot, Dot, Dash],  // x
    &[Dash, Dot, Dash, Dash], // y
    &[Dash, Dash, Dot, Dot],  // z
];

/// Look up the Morse symbols for a lowercase ASCII letter.
///
/// Lookup is exact: uppercase letters, digits and punctuation return `None`.
#[must_use]
pub fn morse_symbols(c: char) -> Option<&'static [Symbol]> {
    if c.is_ascii_lowercase() {
        Some(MORSE_TABLE[(c as u8 - b'a') as usize])
    } else {
        None
    }
}

/// Encode `text` as Morse tick weights.
///
/// Each character emits its symbols followed by one gap; the final gap is
/// dropped. Characters outside the table emit only their gap, so runs of
/// them show up as runs of zero-weight ticks.
///
/// # Example
///
/// ```
/// use tally_viz::encode::morse_ticks;
///
/// assert_eq!(
///     morse_ticks("sos"),
///     vec![0.5, 0.5, 0.5, 0.0, 1.0, 1.0, 1.0, 0.0, 0.5, 0.5, 0.5],
/// );
/// ```
#[must_use]
pub fn morse_ticks(text: &str) -> Vec<f32> {
    let mut weights = Vec::with_capacity(text.len() * 5);

    for c in text.chars() {
        let symbols = morse_symbols(c).unwrap_or_default();
        weights.extend(symbols.iter().map(|s| s.weight()));
        weights.push(GAP_WEIGHT);
    }
    weights.pop();

    tracing::debug!(chars = text.chars().count(), ticks = weights.len(), "morse encoded");
    weights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sos() {
        assert_eq!(
            morse_ticks("sos"),
            vec![0.5, 0.5, 0.5, 0.0, 1.0, 1.0, 1.0, 0.0, 0.5, 0.5, 0.5]
        );
    }

    #[test]
    fn test_empty() {
        assert!(morse_ticks("").is_empty());
    }

    #[test]
    fn test_single_letters() {
        assert_eq!(morse_ticks("e"), vec![0.5]);
        assert_eq!(morse_ticks("t"), vec![1.0]);
        assert_eq!(morse_ticks("et"), vec![0.5, 0.0, 1.0]);
    }

    #[test]
    fn test_theo() {
        // - .... . ---
        assert_eq!(
            morse_ticks("theo"),
            vec![1.0, 0.0, 0.5, 0.5, 0.5, 0.5, 0.0, 0.5, 0.0, 1.0, 1.0, 1.0]
        );
    }

    #[test]
    fn test_unknown_chars_keep_their_gap() {
        assert_eq!(morse_ticks("e!t"), vec![0.5, 0.0, 0.0, 1.0]);
        assert_eq!(morse_ticks("e??t"), vec![0.5, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_uppercase_is_unknown() {
        assert_eq!(morse_symbols('E'), None);
        assert_eq!(morse_ticks("E"), Vec::<f32>::new());
        assert_eq!(morse_ticks("Ee"), vec![0.0, 0.5]);
    }

    #[test]
    fn test_only_unknown_chars() {
        // Three gaps, last one dropped
        assert_eq!(morse_ticks("1 2"), vec![0.0, 0.0]);
    }

    #[test]
    fn test_table_covers_alphabet() {
        for c in 'a'..='z' {
            let symbols = morse_symbols(c).expect("every letter has a code");
            assert!((1..=4).contains(&symbols.len()), "{c}");
        }
    }

    #[test]
    fn test_symbol_display() {
        let pattern: String = morse_symbols('q').unwrap().iter().map(ToString::to_string).collect();
        assert_eq!(pattern, "--.-");
    }
}
