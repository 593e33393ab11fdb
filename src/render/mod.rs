//! Rasterization of chart geometry.
//!
//! Baselines and ticks are axis-aligned, so strokes are filled as pixel
//! rectangles; any other segment uses Bresenham's line.

mod primitives;

pub use primitives::{draw_line, draw_rect, draw_stroke, Drawable};
