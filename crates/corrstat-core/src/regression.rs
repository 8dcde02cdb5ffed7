//! Ordinary least-squares line fit and Pearson correlation.
//!
//! [`compute`] fits `y = slope * x + intercept` in closed form and returns the
//! two endpoints of the fitted line over the observed x range, ready to be
//! drawn on top of a scatter plot. Inputs for which the line or the
//! correlation is undefined are rejected with a [`RegressionError`] instead of
//! producing NaN or infinity.

use std::fmt;

use serde::Serialize;

use crate::constants::MIN_POINTS;
use crate::format::format_r;
use crate::point::Point;

/// Error type for regression estimation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegressionError {
    /// Fewer samples than [`MIN_POINTS`].
    #[error("insufficient data: need at least {min} points, got {n}", min = MIN_POINTS)]
    InsufficientData { n: usize },

    /// The sample does not define a line or a correlation.
    #[error("degenerate input: {0}")]
    DegenerateInput(Degeneracy),

    /// A coordinate is NaN or infinite.
    #[error("non-finite coordinate in point {index}")]
    NonFinite { index: usize },
}

/// Why a sample is degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    /// Every x is identical: the slope denominator is zero.
    ConstantX,
    /// Every y is identical: the correlation denominator is zero.
    ConstantY,
    /// Intermediate sums exceeded the range of `f64`.
    Overflow,
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstantX => write!(f, "all x values are equal, slope is undefined"),
            Self::ConstantY => write!(f, "all y values are equal, correlation is undefined"),
            Self::Overflow => write!(f, "sums overflowed the floating-point range"),
        }
    }
}

/// Raw coefficients of a fitted line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Unrounded Pearson correlation coefficient.
    pub r: f64,
    /// Number of samples the fit was computed from.
    pub n: usize,
}

impl LinearFit {
    /// Evaluate the fitted line at `x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Outcome of [`compute`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegressionResult {
    /// Line endpoints at the minimum and maximum observed x.
    pub regression_points: [Point; 2],
    /// Correlation coefficient formatted with three decimals.
    pub r: String,
    pub fit: LinearFit,
}

/// Plain sums and extrema over the sample.
#[derive(Debug, Clone, Copy)]
struct Sums {
    x: f64,
    y: f64,
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Sums {
    fn accumulate(points: &[Point]) -> Result<Self, RegressionError> {
        let mut sums = Self {
            x: 0.0,
            y: 0.0,
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        };
        for (index, p) in points.iter().enumerate() {
            if !p.is_finite() {
                return Err(RegressionError::NonFinite { index });
            }
            sums.x += p.x;
            sums.y += p.y;
            sums.min_x = sums.min_x.min(p.x);
            sums.max_x = sums.max_x.max(p.x);
            sums.min_y = sums.min_y.min(p.y);
            sums.max_y = sums.max_y.max(p.y);
        }
        Ok(sums)
    }
}

/// Sums of products of deviations from the means.
#[derive(Debug, Clone, Copy)]
struct Deviations {
    cov: f64,
    ss_x: f64,
    ss_y: f64,
}

impl Deviations {
    fn around(points: &[Point], mean_x: f64, mean_y: f64) -> Self {
        points.iter().fold(
            Self {
                cov: 0.0,
                ss_x: 0.0,
                ss_y: 0.0,
            },
            |acc, p| {
                let dx = p.x - mean_x;
                let dy = p.y - mean_y;
                Self {
                    cov: acc.cov + dx * dy,
                    ss_x: acc.ss_x + dx * dx,
                    ss_y: acc.ss_y + dy * dy,
                }
            },
        )
    }

    fn is_finite(&self) -> bool {
        self.cov.is_finite() && self.ss_x.is_finite() && self.ss_y.is_finite()
    }
}

/// Fit a least-squares line through `points` and compute Pearson's r.
///
/// The slope is taken from sums of deviations about the means, which keeps
/// full precision when every x shares a large offset (years, GDP levels).
///
/// # Errors
///
/// - [`RegressionError::InsufficientData`] for fewer than two points.
/// - [`RegressionError::NonFinite`] if any coordinate is NaN or infinite.
/// - [`RegressionError::DegenerateInput`] if x or y has zero variance, or
///   the sums overflow.
///
/// # Example
/// ```
/// use corrstat_core::{compute, Point};
///
/// let points = [Point::new(1.0, 2.0), Point::new(2.0, 4.0), Point::new(3.0, 6.0)];
/// let result = compute(&points).unwrap();
/// assert_eq!(result.r, "1.000");
/// assert_eq!(result.regression_points[1].y, 6.0);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn compute(points: &[Point]) -> Result<RegressionResult, RegressionError> {
    let n = points.len();
    if n < MIN_POINTS {
        return Err(RegressionError::InsufficientData { n });
    }

    let sums = Sums::accumulate(points)?;
    if sums.min_x == sums.max_x {
        return Err(RegressionError::DegenerateInput(Degeneracy::ConstantX));
    }
    if sums.min_y == sums.max_y {
        return Err(RegressionError::DegenerateInput(Degeneracy::ConstantY));
    }

    let count = n as f64;
    let mean_x = sums.x / count;
    let mean_y = sums.y / count;
    let dev = Deviations::around(points, mean_x, mean_y);
    if !(mean_x.is_finite() && mean_y.is_finite() && dev.is_finite()) {
        return Err(RegressionError::DegenerateInput(Degeneracy::Overflow));
    }
    // Squares of a tiny spread can underflow to zero.
    if dev.ss_x == 0.0 {
        return Err(RegressionError::DegenerateInput(Degeneracy::ConstantX));
    }
    if dev.ss_y == 0.0 {
        return Err(RegressionError::DegenerateInput(Degeneracy::ConstantY));
    }

    let slope = dev.cov / dev.ss_x;
    let intercept = mean_y - slope * mean_x;
    let r = dev.cov / (dev.ss_x.sqrt() * dev.ss_y.sqrt());

    let fit = LinearFit {
        slope,
        intercept,
        r,
        n,
    };
    let start = Point::new(sums.min_x, fit.predict(sums.min_x));
    let end = Point::new(sums.max_x, fit.predict(sums.max_x));
    if ![slope, intercept, r, start.y, end.y]
        .iter()
        .all(|v| v.is_finite())
    {
        return Err(RegressionError::DegenerateInput(Degeneracy::Overflow));
    }

    tracing::debug!(n, slope, intercept, r, "fitted regression line");

    Ok(RegressionResult {
        regression_points: [start, end],
        r: format_r(r),
        fit,
    })
}
