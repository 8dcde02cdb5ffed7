//! # corrstat-core
//!
//! Least-squares regression and Pearson correlation for scatter views of
//! country indicators.

pub mod constants;
pub mod format;
pub mod point;
pub mod regression;

// Re-exports
pub use constants::{exit_codes, MIN_POINTS, R_DECIMALS};
pub use format::{format_fixed, format_r};
pub use point::Point;
pub use regression::{compute, Degeneracy, LinearFit, RegressionError, RegressionResult};

/// Fit a line through plain `(x, y)` pairs.
///
/// Convenience wrapper around [`compute`] for callers without labels.
///
/// # Example
/// ```
/// let result = corrstat_core::regress(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]).unwrap();
/// assert_eq!(result.r, "1.000");
/// assert!((result.fit.slope - 2.0).abs() < 1e-12);
/// ```
pub fn regress(pairs: &[(f64, f64)]) -> Result<RegressionResult, RegressionError> {
    let points: Vec<Point> = pairs.iter().copied().map(Point::from).collect();
    compute(&points)
}
