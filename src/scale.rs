//! Mappings from data coordinates onto pixels and tick lengths.

use crate::error::{Error, Result};

/// A mapping from a data interval onto an output interval.
pub trait Scale<D, R> {
    /// Map one data value.
    fn scale(&self, value: D) -> R;

    /// Data interval as `(from, to)`.
    fn domain(&self) -> (D, D);

    /// Output interval as `(from, to)`.
    fn range(&self) -> (R, R);
}

/// Affine map between two intervals. Either interval may run backwards,
/// which is how the y axis flips to pixel rows.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    from: (f32, f32),
    to: (f32, f32),
}

impl LinearScale {
    /// Scale sending `domain.0` to `range.0` and `domain.1` to `range.1`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ScaleDomain`] when the domain has no width.
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Result<Self> {
        if (domain.1 - domain.0).abs() < f32::EPSILON {
            return Err(Error::ScaleDomain(format!(
                "empty domain [{}, {}]",
                domain.0, domain.1
            )));
        }
        Ok(Self { from: domain, to: range })
    }
}

impl Scale<f32, f32> for LinearScale {
    fn scale(&self, value: f32) -> f32 {
        let t = (value - self.from.0) / (self.from.1 - self.from.0);
        self.to.0 + t * (self.to.1 - self.to.0)
    }

    fn domain(&self) -> (f32, f32) {
        self.from
    }

    fn range(&self) -> (f32, f32) {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_margin_to_margin() {
        // 0..11 tick slots across an 800 px image with 20 px margins
        let scale = LinearScale::new((0.0, 11.0), (20.0, 780.0)).unwrap();
        assert_relative_eq!(scale.scale(0.0), 20.0);
        assert_relative_eq!(scale.scale(11.0), 780.0);
        assert_relative_eq!(scale.scale(5.5), 400.0);
    }

    #[test]
    fn test_flipped_range_for_pixel_rows() {
        let scale = LinearScale::new((-1.0, 1.0), (200.0, 0.0)).unwrap();
        assert_relative_eq!(scale.scale(0.0), 100.0);
        assert_relative_eq!(scale.scale(1.0), 0.0);
        assert_relative_eq!(scale.scale(-0.5), 150.0);
    }

    #[test]
    fn test_reports_intervals() {
        let scale = LinearScale::new((10.0, 20.0), (100.0, 200.0)).unwrap();
        assert_eq!(scale.domain(), (10.0, 20.0));
        assert_eq!(scale.range(), (100.0, 200.0));
    }

    #[test]
    fn test_empty_domain_rejected() {
        let result = LinearScale::new((5.0, 5.0), (0.0, 1.0));
        assert!(matches!(result, Err(Error::ScaleDomain(_))));
    }
}
