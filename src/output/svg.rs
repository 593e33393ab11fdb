//! SVG output encoder.
//!
//! Vector output keeps tick strokes crisp at any print size.

use crate::color::Rgba;
use crate::error::Result;
use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::Path;

/// SVG encoder for vector line art.
#[derive(Debug, Clone)]
pub struct SvgEncoder {
    /// SVG width
    width: u32,
    /// SVG height
    height: u32,
    /// Background color (None for transparent)
    background: Option<Rgba>,
    lines: Vec<SvgLine>,
}

/// One stroked `<line>`; fields match the SVG attribute names.
#[derive(Debug, Clone, Copy)]
struct SvgLine {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    stroke: Rgba,
    stroke_width: f32,
}

impl SvgLine {
    fn to_svg(self) -> String {
        let Self { x1, y1, x2, y2, stroke, stroke_width } = self;
        format!(
            r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{}" stroke-width="{stroke_width}" stroke-linecap="butt"/>"#,
            rgba_to_css(stroke)
        )
    }
}

impl Default for SvgEncoder {
    fn default() -> Self {
        Self::new(800, 200)
    }
}

impl SvgEncoder {
    /// Create a new SVG encoder with given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, background: Some(Rgba::WHITE), lines: Vec::new() }
    }

    /// Set background color (None for transparent).
    #[must_use]
    pub fn background(mut self, color: Option<Rgba>) -> Self {
        self.background = color;
        self
    }

    /// Add a line.
    #[must_use]
    pub fn line(
        mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Rgba,
        stroke_width: f32,
    ) -> Self {
        self.lines.push(SvgLine { x1, y1, x2, y2, stroke, stroke_width });
        self
    }

    /// Render to SVG string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(256 + self.lines.len() * 96);

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );

        if let Some(bg) = self.background {
            let _ = writeln!(
                svg,
                r#"  <rect width="100%" height="100%" fill="{}"/>"#,
                rgba_to_css(bg)
            );
        }

        for line in &self.lines {
            let _ = writeln!(svg, "  {}", line.to_svg());
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Write to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.render())?;
        tracing::info!(path = %path.display(), lines = self.lines.len(), "wrote SVG");
        Ok(())
    }
}

/// Convert RGBA to CSS color string.
fn rgba_to_css(color: Rgba) -> String {
    if color.a == 255 {
        format!("rgb({},{},{})", color.r, color.g, color.b)
    } else {
        format!("rgba({},{},{},{:.3})", color.r, color.g, color.b, f32::from(color.a) / 255.0)
    }
}
