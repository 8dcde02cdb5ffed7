//! # corrstat-data
//!
//! Read-only country indicator snapshot: country list, map coordinates,
//! per-country values, and the scatter points fed to the regression
//! estimator.

pub mod dataset;
pub mod error;
pub mod indicator;
pub mod summary;
pub mod year;

pub use dataset::{Coordinates, Country, Dataset, IndicatorRecord, IndicatorValues};
pub use error::{DataError, Result};
pub use indicator::{AxisScale, Indicator};
pub use summary::CountrySummary;
pub use year::{YearRange, DEFAULT_YEAR, FIRST_YEAR, LAST_YEAR};
