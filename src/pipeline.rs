//! Encode, transform and normalize an input into a tick chart.
//!
//! # Example
//!
//! ```rust,ignore
//! use tally_viz::prelude::*;
//!
//! let chart = Illustration::new(Source::Morse("sos".into())).chart()?;
//! chart.render_to_file("sos.svg")?;
//! ```

use crate::encode::{binary_ticks, morse_ticks};
use crate::error::Result;
use crate::normalize::{Normalizer, Transform};
use crate::plots::{Tick, TickChart};
use std::fmt;

/// What an illustration encodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// A word, one tick per bit of each character code.
    Binary(String),
    /// A word spelled in Morse code, zero-length gaps between letters.
    Morse(String),
    /// Raw magnitudes, rescaled onto the normalization bounds.
    Magnitudes(Vec<f32>),
    /// Tick lengths drawn as given.
    Lengths(Vec<f32>),
}

impl Source {
    /// Short name of the encoding.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Binary(_) => "binary",
            Self::Morse(_) => "morse",
            Self::Magnitudes(_) => "magnitudes",
            Self::Lengths(_) => "lengths",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary(word) | Self::Morse(word) => write!(f, "{} {word:?}", self.kind()),
            Self::Magnitudes(values) | Self::Lengths(values) => {
                write!(f, "{} {}", values.len(), self.kind())
            }
        }
    }
}

/// One illustration: a source plus how to turn it into ticks.
#[derive(Debug, Clone)]
pub struct Illustration {
    source: Source,
    transform: Transform,
    normalizer: Normalizer,
    positions: Option<Vec<f32>>,
    first_position: f32,
    baseline: Option<f32>,
}

impl Illustration {
    /// Create an illustration with a linear transform and default bounds.
    #[must_use]
    pub fn new(source: Source) -> Self {
        Self {
            source,
            transform: Transform::Linear,
            normalizer: Normalizer::default(),
            positions: None,
            first_position: 0.0,
            baseline: None,
        }
    }

    /// Transform applied to magnitudes before normalizing.
    ///
    /// Only magnitudes are transformed; other sources ignore it.
    #[must_use]
    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Normalizer for magnitudes.
    #[must_use]
    pub fn normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Explicit tick positions.
    #[must_use]
    pub fn positions(mut self, positions: &[f32]) -> Self {
        self.positions = Some(positions.to_vec());
        self
    }

    /// First implicit position.
    #[must_use]
    pub fn first_position(mut self, first: f32) -> Self {
        self.first_position = first;
        self
    }

    /// Explicit baseline length.
    #[must_use]
    pub fn baseline(mut self, length: f32) -> Self {
        self.baseline = Some(length);
        self
    }

    /// The encoded source.
    #[must_use]
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Tick lengths for the source.
    ///
    /// # Errors
    ///
    /// Returns an error if magnitudes are empty, non-finite, or outside the
    /// transform's domain.
    pub fn lengths(&self) -> Result<Vec<f32>> {
        let lengths = match &self.source {
            Source::Binary(word) => binary_ticks(word),
            Source::Morse(word) => morse_ticks(word),
            Source::Magnitudes(values) => self.normalizer.normalize_with(values, self.transform)?,
            Source::Lengths(values) => values.clone(),
        };
        tracing::debug!(
            source = %self.source,
            transform = %self.transform,
            ticks = lengths.len(),
            "encoded"
        );
        Ok(lengths)
    }

    /// Tick chart with default styling.
    ///
    /// # Errors
    ///
    /// See [`Illustration::chart_with`].
    pub fn chart(&self) -> Result<TickChart> {
        self.chart_with(TickChart::new())
    }

    /// Fill `style` with this illustration's ticks and build it.
    ///
    /// `style` carries colors, dimensions and margin; its lengths,
    /// positions and baseline are replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the chart does not validate
    /// (for example an empty word).
    pub fn chart_with(&self, style: TickChart) -> Result<TickChart> {
        let mut chart = style.lengths(&self.lengths()?).first_position(self.first_position);
        if let Some(positions) = &self.positions {
            chart = chart.positions(positions);
        }
        if let Some(baseline) = self.baseline {
            chart = chart.baseline(baseline);
        }
        chart.build()
    }

    /// The resolved ticks.
    ///
    /// # Errors
    ///
    /// See [`Illustration::chart_with`].
    pub fn ticks(&self) -> Result<Vec<Tick>> {
        Ok(self.chart()?.ticks())
    }
}
