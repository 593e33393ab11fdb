//! Rescaling raw tick weights into a visual length range.
//!
//! Raw values are optionally passed through a monotonic [`Transform`]
//! (square root, log10, natural log) and then mapped affinely onto
//! `[lower, upper]`:
//!
//! ```text
//! length = lower + (value - min) / span * (upper - lower)
//! span   = max - min   if max > min
//!          1.0         otherwise (constant input maps to `lower`)
//! ```
//!
//! `min` and `max` come from the data unless supplied with
//! [`Normalizer::with_domain`], which lets several datasets share one
//! scale.

use crate::error::{Error, Result};
use crate::scale::Scale;
use std::fmt;
use std::str::FromStr;
use trueno::Vector;

/// Shortest tick produced by the default normalizer.
pub const MIN_TICK_LENGTH: f32 = 0.5;

/// Longest tick produced by the default normalizer.
pub const MAX_TICK_LENGTH: f32 = 3.0;

/// Normalize `values` onto `[lower_bound, upper_bound]` using their own extent.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `values` is empty or contains a
/// non-finite value, or if the bounds are not finite with
/// `lower_bound < upper_bound`.
///
/// # Example
///
/// ```
/// use tally_viz::normalize::normalize;
///
/// let lengths = normalize(&[10.0, 20.0, 30.0], 0.5, 3.0).unwrap();
/// assert_eq!(lengths, vec![0.5, 1.75, 3.0]);
///
/// assert!(normalize(&[], 0.5, 3.0).is_err());
/// ```
pub fn normalize(values: &[f32], lower_bound: f32, upper_bound: f32) -> Result<Vec<f32>> {
    Normalizer::new(lower_bound, upper_bound)?.normalize(values)
}

// ============================================================================
// Transform
// ============================================================================

/// Monotonic pre-transform applied to raw values before normalizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transform {
    /// Identity.
    #[default]
    Linear,
    /// Square root; damps large values mildly.
    Sqrt,
    /// Base-10 logarithm; compresses wide dynamic ranges.
    Log10,
    /// Natural logarithm.
    Ln,
}

impl Transform {
    /// All transforms, in declaration order.
    pub const ALL: [Self; 4] = [Self::Linear, Self::Sqrt, Self::Log10, Self::Ln];

    /// Short lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Sqrt => "sqrt",
            Self::Log10 => "log10",
            Self::Ln => "ln",
        }
    }

    /// Apply the transform to every value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ScaleDomain`] for a negative value under `Sqrt` or a
    /// non-positive value under `Log10`/`Ln`.
    pub fn apply(self, values: &[f32]) -> Result<Vec<f32>> {
        values.iter().map(|&v| self.apply_one(v)).collect()
    }

    fn apply_one(self, value: f32) -> Result<f32> {
        match self {
            Self::Linear => Ok(value),
            Self::Sqrt if value < 0.0 => {
                Err(Error::ScaleDomain(format!("sqrt of negative value {value}")))
            }
            Self::Sqrt => Ok(value.sqrt()),
            Self::Log10 | Self::Ln if value <= 0.0 => {
                Err(Error::ScaleDomain(format!("{} of non-positive value {value}", self.name())))
            }
            Self::Log10 => Ok(value.log10()),
            Self::Ln => Ok(value.ln()),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "linear" | "identity" => Ok(Self::Linear),
            "sqrt" => Ok(Self::Sqrt),
            "log10" | "log" => Ok(Self::Log10),
            "ln" => Ok(Self::Ln),
            other => Err(Error::InvalidInput(format!("unknown transform '{other}'"))),
        }
    }
}

// ============================================================================
// Normalizer
// ============================================================================

/// Affine rescaler onto a fixed length interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalizer {
    lower: f32,
    upper: f32,
    domain_min: Option<f32>,
    domain_max: Option<f32>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self { lower: MIN_TICK_LENGTH, upper: MAX_TICK_LENGTH, domain_min: None, domain_max: None }
    }
}

impl Normalizer {
    /// Create a normalizer targeting `[lower, upper]`, with min/max taken from the data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] unless both bounds are finite and `lower < upper`.
    pub fn new(lower: f32, upper: f32) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(Error::InvalidInput(format!(
                "normalization bounds must satisfy lower < upper, got [{lower}, {upper}]"
            )));
        }
        Ok(Self { lower, upper, ..Self::default() })
    }

    /// Use a fixed source extent instead of the data's own min/max.
    #[must_use]
    pub fn with_domain(self, min: f32, max: f32) -> Self {
        self.with_domain_min(min).with_domain_max(max)
    }

    /// Fix only the source minimum; the maximum still comes from the data.
    #[must_use]
    pub fn with_domain_min(mut self, min: f32) -> Self {
        self.domain_min = Some(min);
        self
    }

    /// Fix only the source maximum; the minimum still comes from the data.
    #[must_use]
    pub fn with_domain_max(mut self, max: f32) -> Self {
        self.domain_max = Some(max);
        self
    }

    /// Target interval `(lower, upper)`.
    #[must_use]
    pub const fn bounds(&self) -> (f32, f32) {
        (self.lower, self.upper)
    }

    /// Resolve the source extent for `values` into a [`LengthScale`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for empty input or any non-finite
    /// value or domain bound.
    pub fn fit(&self, values: &[f32]) -> Result<LengthScale> {
        if values.is_empty() {
            return Err(Error::empty_sequence());
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(Error::InvalidInput(format!("cannot normalize non-finite value {bad}")));
        }

        let (data_min, data_max) = extent(values);
        let min = self.domain_min.unwrap_or(data_min);
        let max = self.domain_max.unwrap_or(data_max);
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::InvalidInput(format!("non-finite source domain [{min}, {max}]")));
        }

        let scale = LengthScale::new((min, max), (self.lower, self.upper));
        tracing::debug!(
            min,
            max,
            span = scale.span,
            lower = self.lower,
            upper = self.upper,
            "fitted length scale"
        );
        Ok(scale)
    }

    /// Rescale `values` onto the target interval.
    ///
    /// # Errors
    ///
    /// See [`Normalizer::fit`].
    pub fn normalize(&self, values: &[f32]) -> Result<Vec<f32>> {
        let scale = self.fit(values)?;
        Ok(values.iter().map(|&v| scale.scale(v)).collect())
    }

    /// Apply `transform` and then rescale.
    ///
    /// # Errors
    ///
    /// Propagates transform domain errors and [`Normalizer::fit`] errors.
    pub fn normalize_with(&self, values: &[f32], transform: Transform) -> Result<Vec<f32>> {
        self.normalize(&transform.apply(values)?)
    }
}

/// SIMD min/max over a non-empty slice.
fn extent(values: &[f32]) -> (f32, f32) {
    let vec = Vector::from_vec(values.to_vec());
    let min = vec.min().unwrap_or(f32::INFINITY);
    let max = vec.max().unwrap_or(f32::NEG_INFINITY);
    (min, max)
}

// ============================================================================
// LengthScale
// ============================================================================

/// A resolved normalization: source extent plus target interval.
///
/// Unlike [`crate::scale::LinearScale`], a collapsed domain is accepted and
/// maps every value to the lower bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthScale {
    min: f32,
    max: f32,
    span: f32,
    lower: f32,
    upper: f32,
}

impl LengthScale {
    fn new(domain: (f32, f32), range: (f32, f32)) -> Self {
        let (min, max) = domain;
        let span = if max > min { max - min } else { 1.0 };
        Self { min, max, span, lower: range.0, upper: range.1 }
    }

    /// Whether the source extent collapsed to a point (or was inverted).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.max <= self.min
    }
}

impl Scale<f32, f32> for LengthScale {
    fn scale(&self, value: f32) -> f32 {
        let t = (value - self.min) / self.span;
        self.lower + t * (self.upper - self.lower)
    }

    fn domain(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    fn range(&self) -> (f32, f32) {
        (self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const PLANET_RADII: [f32; 9] =
        [695_508.0, 2_440.0, 6_052.0, 6_371.0, 3_390.0, 69_911.0, 58_232.0, 25_362.0, 24_622.0];

    #[test]
    fn test_normalize_endpoints_exact() {
        let lengths = normalize(&PLANET_RADII, MIN_TICK_LENGTH, MAX_TICK_LENGTH).unwrap();

        assert_eq!(lengths[0], 3.0);
        assert_eq!(lengths[1], 0.5);
        assert!(lengths.iter().all(|&l| (0.5..=3.0).contains(&l)));
    }

    #[test]
    fn test_normalize_empty_is_invalid_input() {
        let err = normalize(&[], 0.5, 3.0).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(ref m) if m == "cannot normalize an empty sequence"));
    }

    #[test]
    fn test_constant_input_maps_to_lower() {
        assert_eq!(normalize(&[4.0, 4.0, 4.0], 1.0, 2.0).unwrap(), vec![1.0, 1.0, 1.0]);
        assert_eq!(normalize(&[7.0], 0.5, 3.0).unwrap(), vec![0.5]);
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(Normalizer::new(3.0, 0.5).is_err());
        assert!(Normalizer::new(1.0, 1.0).is_err());
        assert!(Normalizer::new(f32::NAN, 1.0).is_err());
    }

    #[test]
    fn test_non_finite_values_rejected() {
        assert!(normalize(&[1.0, f32::NAN], 0.5, 3.0).is_err());
        assert!(normalize(&[f32::INFINITY], 0.5, 3.0).is_err());
    }

    #[test]
    fn test_default_bounds() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.bounds(), (MIN_TICK_LENGTH, MAX_TICK_LENGTH));
        assert_eq!(normalizer.normalize(&[0.0, 1.0]).unwrap(), vec![0.5, 3.0]);
    }

    #[test]
    fn test_external_domain_shares_scale() {
        // Two datasets normalized against the same fixed extent
        let normalizer = Normalizer::default().with_domain(0.0, 100.0);

        let a = normalizer.normalize(&[0.0, 50.0]).unwrap();
        let b = normalizer.normalize(&[100.0]).unwrap();

        assert_eq!(a, vec![0.5, 1.75]);
        assert_eq!(b, vec![3.0]);
    }

    #[test]
    fn test_external_domain_allows_out_of_range_values() {
        let lengths = Normalizer::default().with_domain(0.0, 10.0).normalize(&[20.0]).unwrap();
        assert_relative_eq!(lengths[0], 5.5);
    }

    #[test]
    fn test_partial_domain() {
        let lengths = Normalizer::default().with_domain_min(0.0).normalize(&[5.0, 10.0]).unwrap();
        assert_relative_eq!(lengths[0], 1.75);
        assert_eq!(lengths[1], 3.0);
    }

    #[test]
    fn test_inverted_domain_is_degenerate() {
        let normalizer = Normalizer::default().with_domain(10.0, 0.0);
        let scale = normalizer.fit(&[10.0]).unwrap();
        assert!(scale.is_degenerate());
        assert_eq!(scale.scale(10.0), 0.5);
        assert_eq!(scale.domain(), (10.0, 0.0));
    }

    #[test]
    fn test_renormalize_is_stable() {
        let once = normalize(&PLANET_RADII, 0.5, 3.0).unwrap();
        let twice = Normalizer::default().with_domain(0.5, 3.0).normalize(&once).unwrap();
        for (a, b) in once.iter().zip(&twice) {
            assert_relative_eq!(a, b, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_log10_transform_compresses() {
        let lengths = Normalizer::default().normalize_with(&PLANET_RADII, Transform::Log10).unwrap();

        assert_eq!(lengths[0], 3.0);
        assert_eq!(lengths[1], 0.5);
        // Earth is lifted off the floor once the Sun no longer dominates
        let linear = Normalizer::default().normalize(&PLANET_RADII).unwrap();
        assert!(linear[3] < 0.52);
        assert!(lengths[3] > 0.9);
    }

    #[test]
    fn test_sqrt_transform() {
        assert_eq!(Transform::Sqrt.apply(&[4.0, 9.0]).unwrap(), vec![2.0, 3.0]);
        assert!(matches!(Transform::Sqrt.apply(&[-1.0]), Err(Error::ScaleDomain(_))));
    }

    #[test]
    fn test_log_transforms_reject_non_positive() {
        assert!(Transform::Log10.apply(&[0.0]).is_err());
        assert!(Transform::Ln.apply(&[-3.0]).is_err());
        assert_relative_eq!(Transform::Ln.apply(&[std::f32::consts::E]).unwrap()[0], 1.0);
    }

    #[test]
    fn test_transform_from_str() {
        for transform in Transform::ALL {
            assert_eq!(transform.name().parse::<Transform>().unwrap(), transform);
        }
        assert_eq!("LOG".parse::<Transform>().unwrap(), Transform::Log10);
        assert!("cube".parse::<Transform>().is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn values() -> impl Strategy<Value = Vec<f32>> {
        prop::collection::vec(-1.0e6_f32..1.0e6, 1..200)
    }

    fn bounds() -> impl Strategy<Value = (f32, f32)> {
        (-100.0_f32..100.0, 0.01_f32..100.0).prop_map(|(lo, width)| (lo, lo + width))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Output stays inside the target interval
        #[test]
        fn prop_within_bounds(values in values(), (lo, hi) in bounds()) {
            let out = normalize(&values, lo, hi).unwrap();
            let tol = 1e-4 * (hi.abs() + lo.abs() + 1.0);
            prop_assert_eq!(out.len(), values.len());
            for &v in &out {
                prop_assert!(v >= lo - tol && v <= hi + tol, "{} outside [{}, {}]", v, lo, hi);
            }
        }

        /// Ordering of inputs is preserved
        #[test]
        fn prop_order_preserving(values in values(), (lo, hi) in bounds()) {
            let out = normalize(&values, lo, hi).unwrap();
            for i in 0..values.len() {
                for j in 0..values.len() {
                    if values[i] < values[j] {
                        prop_assert!(out[i] <= out[j]);
                    }
                }
            }
        }

        /// Constant input maps everything to the lower bound
        #[test]
        fn prop_constant_maps_to_lower(v in -1.0e6_f32..1.0e6, n in 1usize..50, (lo, hi) in bounds()) {
            let out = normalize(&vec![v; n], lo, hi).unwrap();
            prop_assert!(out.iter().all(|&x| x == lo));
        }
    }
}
