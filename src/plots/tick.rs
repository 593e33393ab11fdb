//! Tick chart: a baseline crossed by centered perpendicular marks.
//!
//! Each tick at `position` with `length` is a vertical segment from
//! `-length / 2` to `+length / 2` around the baseline. The baseline runs
//! from 0 to the baseline length along the x axis.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::{Line, Point};
use crate::output::{OutputFormat, PngEncoder, SvgEncoder, TerminalEncoder};
use crate::render::draw_stroke;
use crate::scale::{LinearScale, Scale};
use std::path::Path;

/// A single perpendicular mark.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tick {
    /// Horizontal position along the baseline.
    pub position: f32,
    /// Total length, split evenly above and below the baseline.
    pub length: f32,
}

impl Tick {
    /// Create a new tick.
    #[must_use]
    pub const fn new(position: f32, length: f32) -> Self {
        Self { position, length }
    }

    /// The tick as a vertical segment in data coordinates.
    #[must_use]
    pub fn segment(&self) -> Line {
        let half = self.length / 2.0;
        Line::from_coords(self.position, -half, self.position, half)
    }
}

/// Builder for tick charts.
#[derive(Debug, Clone)]
pub struct TickChart {
    lengths: Vec<f32>,
    positions: Option<Vec<f32>>,
    first_position: f32,
    baseline: Option<f32>,
    color: Rgba,
    background: Option<Rgba>,
    stroke_width: f32,
    width: u32,
    height: u32,
    margin: u32,
}

impl Default for TickChart {
    fn default() -> Self {
        Self::new()
    }
}

impl TickChart {
    /// Create a new tick chart builder (800x200, black on white).
    #[must_use]
    pub fn new() -> Self {
        Self {
            lengths: Vec::new(),
            positions: None,
            first_position: 0.0,
            baseline: None,
            color: Rgba::BLACK,
            background: Some(Rgba::WHITE),
            stroke_width: 2.0,
            width: 800,
            height: 200,
            margin: 20,
        }
    }

    /// Set the tick lengths.
    #[must_use]
    pub fn lengths(mut self, lengths: &[f32]) -> Self {
        self.lengths = lengths.to_vec();
        self
    }

    /// Set explicit tick positions (one per length).
    #[must_use]
    pub fn positions(mut self, positions: &[f32]) -> Self {
        self.positions = Some(positions.to_vec());
        self
    }

    /// Position of the first tick when positions are not given explicitly.
    ///
    /// Implicit positions are consecutive integers from this value.
    #[must_use]
    pub fn first_position(mut self, first: f32) -> Self {
        self.first_position = first;
        self
    }

    /// Set the baseline length. Defaults to one unit past the last position.
    #[must_use]
    pub fn baseline(mut self, length: f32) -> Self {
        self.baseline = Some(length);
        self
    }

    /// Set the stroke color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Set the background color (None for transparent).
    #[must_use]
    pub fn background(mut self, color: Option<Rgba>) -> Self {
        self.background = color;
        self
    }

    /// Set the stroke width in pixels.
    #[must_use]
    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width.max(1.0);
        self
    }

    /// Set the output dimensions.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the margin around the illustration.
    #[must_use]
    pub fn margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Build and validate the tick chart.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no lengths, positions and lengths
    /// differ in count, a length is negative or non-finite, a position is
    /// non-finite, the baseline is not positive, or the margins leave no
    /// drawing area.
    pub fn build(self) -> Result<Self> {
        if self.lengths.is_empty() {
            return Err(Error::EmptyData);
        }

        if let Some(positions) = &self.positions {
            if positions.len() != self.lengths.len() {
                return Err(Error::DataLengthMismatch {
                    positions: positions.len(),
                    lengths: self.lengths.len(),
                });
            }
            if let Some(bad) = positions.iter().find(|p| !p.is_finite()) {
                return Err(Error::InvalidInput(format!("tick position {bad} is not finite")));
            }
        }

        if let Some(bad) = self.lengths.iter().find(|l| !l.is_finite() || **l < 0.0) {
            return Err(Error::InvalidInput(format!(
                "tick length {bad} must be finite and non-negative"
            )));
        }

        let baseline = self.baseline_length();
        if !baseline.is_finite() || baseline <= 0.0 {
            return Err(Error::InvalidInput(format!("baseline length {baseline} must be positive")));
        }

        self.check_dimensions()?;
        Ok(self)
    }

    /// The margins must leave a drawing area on both axes.
    fn check_dimensions(&self) -> Result<()> {
        let fits = |extent: u32| self.margin.checked_mul(2).is_some_and(|both| extent > both);
        if fits(self.width) && fits(self.height) {
            Ok(())
        } else {
            Err(Error::InvalidDimensions { width: self.width, height: self.height })
        }
    }

    /// Resolved tick positions.
    #[must_use]
    pub fn tick_positions(&self) -> Vec<f32> {
        match &self.positions {
            Some(positions) => positions.clone(),
            None => (0..self.lengths.len()).map(|i| self.first_position + i as f32).collect(),
        }
    }

    /// Resolved baseline length: explicit, or one past the largest position.
    #[must_use]
    pub fn baseline_length(&self) -> f32 {
        self.baseline.unwrap_or_else(|| {
            let max = self.tick_positions().into_iter().fold(f32::NEG_INFINITY, f32::max);
            max + 1.0
        })
    }

    /// The ticks in drawing order.
    #[must_use]
    pub fn ticks(&self) -> Vec<Tick> {
        self.tick_positions()
            .into_iter()
            .zip(&self.lengths)
            .map(|(position, &length)| Tick::new(position, length))
            .collect()
    }

    /// Number of ticks.
    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.lengths.len()
    }

    /// Baseline followed by every visible tick, in data coordinates.
    ///
    /// Zero-length ticks (Morse gaps) have no segment.
    #[must_use]
    pub fn segments(&self) -> Vec<Line> {
        let baseline = Line::from_coords(0.0, 0.0, self.baseline_length(), 0.0);
        std::iter::once(baseline)
            .chain(self.ticks().iter().filter(|t| t.length > 0.0).map(Tick::segment))
            .collect()
    }

    /// Data-to-pixel scales for the x and y axes.
    ///
    /// x spans the baseline and every position; y spans the longest tick,
    /// with pixel rows growing downward.
    fn pixel_scales(&self) -> Result<(LinearScale, LinearScale)> {
        // Dimensions can change after build() through WithDimensions
        self.check_dimensions()?;

        let positions = self.tick_positions();
        let x_min = positions.iter().copied().fold(0.0_f32, f32::min);
        let x_max = positions.iter().copied().fold(self.baseline_length(), f32::max);

        let longest = self.lengths.iter().copied().fold(0.0_f32, f32::max);
        let half = if longest > 0.0 { longest / 2.0 } else { 1.0 };

        let margin = self.margin as f32;
        let right = (self.width - self.margin) as f32;
        let bottom = (self.height - self.margin) as f32;
        let x_scale = LinearScale::new((x_min, x_max), (margin, right))?;
        let y_scale = LinearScale::new((-half, half), (bottom, margin))?;
        Ok((x_scale, y_scale))
    }

    /// [`TickChart::segments`] mapped to pixel coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the margins leave no drawing
    /// area, or an error if the data extent collapses to a point.
    pub fn pixel_segments(&self) -> Result<Vec<Line>> {
        let (x_scale, y_scale) = self.pixel_scales()?;
        Ok(self
            .segments()
            .into_iter()
            .map(|line| line.map(|p| Point::new(x_scale.scale(p.x), y_scale.scale(p.y))))
            .collect())
    }

    /// Render the tick chart to a framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render(&self, fb: &mut Framebuffer) -> Result<()> {
        for line in self.pixel_segments()? {
            draw_stroke(fb, line, self.stroke_width, self.color);
        }
        Ok(())
    }

    /// Render to a new framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn to_framebuffer(&self) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(self.width, self.height)?;
        fb.clear(self.background.unwrap_or(Rgba::TRANSPARENT));
        self.render(&mut fb)?;
        Ok(fb)
    }

    /// Render as vector SVG, one `<line>` per segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the data extent collapses to a point.
    pub fn to_svg(&self) -> Result<SvgEncoder> {
        let svg = SvgEncoder::new(self.width, self.height).background(self.background);
        Ok(self.pixel_segments()?.into_iter().fold(svg, |svg, line| {
            svg.line(line.start.x, line.start.y, line.end.x, line.end.y, self.color, self.stroke_width)
        }))
    }

    /// Render to a terminal-printable string.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn to_terminal(&self, encoder: &TerminalEncoder) -> Result<String> {
        Ok(encoder.render(&self.to_framebuffer()?))
    }

    /// Write to a PNG or SVG file, chosen by extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for other extensions, or an
    /// error if rendering or writing fails.
    pub fn render_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        match OutputFormat::from_path(path)? {
            OutputFormat::Png => PngEncoder::write_to_file(&self.to_framebuffer()?, path),
            OutputFormat::Svg => self.to_svg()?.write_to_file(path),
        }
    }
}

impl batuta_common::display::WithDimensions for TickChart {
    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}
