//! Terminal output encoder (ASCII/Unicode).
//!
//! Renders framebuffers to terminal-compatible text so an illustration can
//! be previewed without writing a file.
//! - ASCII: characters like ` .:-=+*#%@` for grayscale
//! - Unicode: half-block characters (▀) with 24-bit ANSI color, 2x vertical resolution

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use std::fmt::Write as FmtWrite;
use std::io::{self, Write};

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// ASCII grayscale characters (widest compatibility)
    Ascii,
    /// Unicode half-block characters (2x vertical resolution)
    #[default]
    UnicodeHalfBlock,
}

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    width: Option<u32>,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    /// ASCII grayscale ramp from dark to light (10 levels).
    const ASCII_RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self { mode: TerminalMode::default(), width: None }
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the target width in characters.
    /// If not set, uses framebuffer width capped at 80. Height follows
    /// from the aspect ratio.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width.max(1));
        self
    }

    /// Render a framebuffer to a string.
    #[must_use]
    pub fn render(&self, fb: &Framebuffer) -> String {
        match self.mode {
            TerminalMode::Ascii => self.render_ascii(fb),
            TerminalMode::UnicodeHalfBlock => self.render_unicode_half_block(fb),
        }
    }

    fn render_ascii(&self, fb: &Framebuffer) -> String {
        let (target_w, target_h) = self.compute_dimensions(fb, 2.0);
        let mut output = String::with_capacity((target_w + 1) as usize * target_h as usize);

        let scale_x = fb.width() as f32 / target_w as f32;
        let scale_y = fb.height() as f32 / target_h as f32;

        for y in 0..target_h {
            for x in 0..target_w {
                let level = luma(darkest_in_cell(fb, x, y, scale_x, scale_y));
                output.push(Self::ASCII_RAMP[Self::luma_to_index(level)]);
            }
            output.push('\n');
        }

        output
    }

    /// Each character covers 2 vertical cells: foreground is the top, background the bottom.
    fn render_unicode_half_block(&self, fb: &Framebuffer) -> String {
        let (target_w, target_h) = self.compute_dimensions(fb, 1.0);
        let target_h = (target_h + 1) & !1;

        let mut output =
            String::with_capacity((target_w * 40 + 8) as usize * (target_h / 2) as usize);

        let scale_x = fb.width() as f32 / target_w as f32;
        let scale_y = fb.height() as f32 / target_h as f32;

        for y in (0..target_h).step_by(2) {
            for x in 0..target_w {
                let top = darkest_in_cell(fb, x, y, scale_x, scale_y);
                let bottom = darkest_in_cell(fb, x, y + 1, scale_x, scale_y);

                let _ = write!(
                    output,
                    "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m▀",
                    top.r, top.g, top.b, bottom.r, bottom.g, bottom.b
                );
            }
            output.push_str("\x1b[0m\n");
        }

        output
    }

    /// Compute target dimensions preserving aspect ratio.
    /// `char_aspect` is the approximate height/width ratio of a character cell.
    fn compute_dimensions(&self, fb: &Framebuffer, char_aspect: f32) -> (u32, u32) {
        let fb_aspect = fb.width() as f32 / fb.height() as f32;
        let w = self.width.unwrap_or_else(|| 80u32.min(fb.width()));
        let h = (w as f32 / fb_aspect / char_aspect).round() as u32;
        (w, h.max(1))
    }

    /// Convert luminance (0.0-1.0) to ASCII ramp index.
    fn luma_to_index(luma: f32) -> usize {
        let idx = (luma * (Self::ASCII_RAMP.len() - 1) as f32).round() as usize;
        idx.min(Self::ASCII_RAMP.len() - 1)
    }

    /// Write output directly to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout is closed.
    pub fn print(&self, fb: &Framebuffer) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(self.render(fb).as_bytes())?;
        stdout.flush()
    }
}

/// Darkest pixel covered by output cell `(x, y)`, so one-pixel strokes
/// survive downsampling.
fn darkest_in_cell(fb: &Framebuffer, x: u32, y: u32, scale_x: f32, scale_y: f32) -> Rgba {
    let x0 = ((x as f32 * scale_x) as u32).min(fb.width() - 1);
    let y0 = ((y as f32 * scale_y) as u32).min(fb.height() - 1);
    let x1 = (((x + 1) as f32 * scale_x).ceil() as u32).clamp(x0 + 1, fb.width());
    let y1 = (((y + 1) as f32 * scale_y).ceil() as u32).clamp(y0 + 1, fb.height());

    (y0..y1)
        .flat_map(|py| (x0..x1).filter_map(move |px| fb.get_pixel(px, py)))
        .min_by(|a, b| luma(*a).total_cmp(&luma(*b)))
        .unwrap_or(Rgba::WHITE)
}

/// Rec. 709 luminance in 0.0-1.0.
fn luma(pixel: Rgba) -> f32 {
    0.2126 * (f32::from(pixel.r) / 255.0)
        + 0.7152 * (f32::from(pixel.g) / 255.0)
        + 0.0722 * (f32::from(pixel.b) / 255.0)
}
