//! Sample points.

use serde::{Deserialize, Serialize};

/// A single (x, y) sample with an optional display label.
///
/// The label (typically a country name) is carried through to output but
/// never takes part in any computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default, alias = "CountryName", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Point {
    /// Create an unlabelled point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, label: None }
    }

    /// Create a labelled point.
    #[must_use]
    pub fn labeled(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: Some(label.into()),
        }
    }

    /// Whether both coordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
