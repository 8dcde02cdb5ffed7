//! Indicator columns and their display metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// One numeric column of the country/year table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Indicator {
    #[serde(rename = "GDP")]
    Gdp,
    Population,
    LifeExpectancy,
    HealthExpenditure,
}

/// Axis scale used when plotting an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    Linear,
    Logarithmic,
}

impl fmt::Display for AxisScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Logarithmic => write!(f, "logarithmic"),
        }
    }
}

impl Indicator {
    /// All indicators, in column order.
    pub const ALL: [Self; 4] = [
        Self::Gdp,
        Self::Population,
        Self::LifeExpectancy,
        Self::HealthExpenditure,
    ];

    /// Column name as it appears in the snapshot.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Gdp => "GDP",
            Self::Population => "Population",
            Self::LifeExpectancy => "LifeExpectancy",
            Self::HealthExpenditure => "HealthExpenditure",
        }
    }

    /// Display unit.
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::Gdp => "USD",
            Self::Population => "people",
            Self::LifeExpectancy => "yrs",
            Self::HealthExpenditure => "%",
        }
    }

    /// GDP and population span several orders of magnitude across countries
    /// and are plotted on a log axis.
    #[must_use]
    pub fn scale(self) -> AxisScale {
        match self {
            Self::Gdp | Self::Population => AxisScale::Logarithmic,
            Self::LifeExpectancy | Self::HealthExpenditure => AxisScale::Linear,
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Indicator {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|ind| ind.column().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DataError::UnknownIndicator(wanted.to_string()))
    }
}
