//! Points and segments in data or pixel coordinates.

/// A position in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Point at `(x, y)`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A straight segment: the baseline or one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// First endpoint.
    pub start: Point,
    /// Second endpoint.
    pub end: Point,
}

impl Line {
    /// Segment from `start` to `end`.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Segment from `(x0, y0)` to `(x1, y1)`.
    #[must_use]
    pub const fn from_coords(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Same segment with both endpoints passed through `f`, e.g. a
    /// data-to-pixel projection.
    #[must_use]
    pub fn map(self, mut f: impl FnMut(Point) -> Point) -> Self {
        Self::new(f(self.start), f(self.end))
    }
}
