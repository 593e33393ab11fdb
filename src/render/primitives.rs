//! Primitive rendering functions.
//!
//! Implements rasterization algorithms for line segments.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::Line;

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive to a framebuffer.
    fn draw(&self, fb: &mut Framebuffer, color: Rgba);
}

// ============================================================================
// Line Drawing
// ============================================================================

/// Draw a line using Bresenham's algorithm (non-antialiased).
///
/// # Arguments
///
/// * `fb` - Target framebuffer
/// * `x0`, `y0` - Start coordinates
/// * `x1`, `y1` - End coordinates
/// * `color` - Line color
pub fn draw_line(fb: &mut Framebuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        if x >= 0 && y >= 0 {
            fb.set_pixel(x as u32, y as u32, color);
        }

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

/// Draw a segment with a stroke width in pixels.
///
/// Horizontal and vertical segments (the baseline and every tick) are filled
/// as rectangles centered on the ideal line. Any other segment falls back to
/// Bresenham.
pub fn draw_stroke(fb: &mut Framebuffer, line: Line, width: f32, color: Rgba) {
    let half = (width.max(1.0) / 2.0).floor() as i32;
    let thickness = (half * 2 + 1) as u32;
    let (start, end) = (line.start, line.end);

    if (start.x - end.x).abs() < 0.5 {
        let x = start.x.round() as i32 - half;
        let (y0, y1) = ordered(start.y.round() as i32, end.y.round() as i32);
        draw_rect(fb, x, y0, thickness, (y1 - y0 + 1) as u32, color);
    } else if (start.y - end.y).abs() < 0.5 {
        let y = start.y.round() as i32 - half;
        let (x0, x1) = ordered(start.x.round() as i32, end.x.round() as i32);
        draw_rect(fb, x0, y, (x1 - x0 + 1) as u32, thickness, color);
    } else {
        line.draw(fb, color);
    }
}

#[inline]
fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl Drawable for Line {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) {
        draw_line(
            fb,
            self.start.x as i32,
            self.start.y as i32,
            self.end.x as i32,
            self.end.y as i32,
            color,
        );
    }
}

// ============================================================================
// Rectangle Drawing
// ============================================================================

/// Draw a filled rectangle, clipping the part left of or above the origin.
pub fn draw_rect(fb: &mut Framebuffer, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
    let clip_x = x.min(0).unsigned_abs();
    let clip_y = y.min(0).unsigned_abs();
    fb.fill_rect(
        x.max(0) as u32,
        y.max(0) as u32,
        width.saturating_sub(clip_x),
        height.saturating_sub(clip_y),
        color,
    );
}

// ============================================================================
// Tests
// ============================================================================
