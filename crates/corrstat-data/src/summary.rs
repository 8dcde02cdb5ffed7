//! Per-country summary with derived GDP per capita.

use serde::Serialize;

use crate::dataset::{Dataset, IndicatorValues};
use crate::error::Result;

/// Indicator values of one country in one year plus GDP per capita.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountrySummary {
    pub country_code: String,
    pub country_name: Option<String>,
    pub year: i32,
    #[serde(flatten)]
    pub values: IndicatorValues,
    pub gdp_per_capita: f64,
}

impl CountrySummary {
    /// Build a summary; GDP per capita is 0 unless GDP and a non-zero
    /// population are both known.
    #[must_use]
    pub fn from_values(country_code: &str, year: i32, values: IndicatorValues) -> Self {
        Self {
            country_code: country_code.to_string(),
            country_name: None,
            year,
            values,
            gdp_per_capita: gdp_per_capita(&values),
        }
    }

    /// Look up a country's summary in the dataset.
    ///
    /// # Errors
    ///
    /// Propagates [`Dataset::indicators`] errors.
    pub fn lookup(dataset: &Dataset, country_code: &str, year: i32) -> Result<Option<Self>> {
        let Some(values) = dataset.indicators(country_code, year)? else {
            return Ok(None);
        };
        let code = country_code.trim();
        let mut summary = Self::from_values(code, year, values);
        summary.country_name = dataset.country(code).map(|c| c.country_name.clone());
        Ok(Some(summary))
    }
}

fn gdp_per_capita(values: &IndicatorValues) -> f64 {
    match (values.gdp, values.population) {
        (Some(gdp), Some(pop)) if gdp != 0.0 && pop != 0.0 => gdp / pop,
        _ => 0.0,
    }
}
