//! In-memory indicator snapshot and its queries.
//!
//! The snapshot is a JSON document with two tables, keyed by the original
//! column names:
//!
//! ```json
//! {
//!   "countries":  [{"CountryCode": "CHL", "CountryName": "Chile", "Latitude": -35.7, "Longitude": -71.5}],
//!   "indicators": [{"CountryCode": "CHL", "Year": 2015, "GDP": 2.4e11, "Population": 1.8e7,
//!                   "LifeExpectancy": 79.6, "HealthExpenditure": 8.1}]
//! }
//! ```
//!
//! Missing indicator values are `null` or absent. The dataset is read once
//! and never modified.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use corrstat_core::Point;

use crate::error::{DataError, Result};
use crate::indicator::Indicator;

/// A country row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Country {
    pub country_code: String,
    pub country_name: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Country {
    /// Coordinates, if both latitude and longitude are known.
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        Some(Coordinates {
            lat: self.latitude?,
            lon: self.longitude?,
        })
    }
}

/// Map position of a country.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// The four indicator values of one country and year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndicatorValues {
    #[serde(rename = "GDP", default)]
    pub gdp: Option<f64>,
    #[serde(default)]
    pub population: Option<f64>,
    #[serde(default)]
    pub life_expectancy: Option<f64>,
    #[serde(default)]
    pub health_expenditure: Option<f64>,
}

impl IndicatorValues {
    /// Value of a single indicator.
    #[must_use]
    pub fn get(&self, indicator: Indicator) -> Option<f64> {
        match indicator {
            Indicator::Gdp => self.gdp,
            Indicator::Population => self.population,
            Indicator::LifeExpectancy => self.life_expectancy,
            Indicator::HealthExpenditure => self.health_expenditure,
        }
    }
}

/// An indicator row: one country in one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndicatorRecord {
    pub country_code: String,
    pub year: i32,
    #[serde(flatten)]
    pub values: IndicatorValues,
}

#[derive(Debug, Deserialize)]
struct Snapshot {
    #[serde(default)]
    countries: Vec<Country>,
    #[serde(default)]
    indicators: Vec<IndicatorRecord>,
}

/// Read-only country indicator table.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    countries: BTreeMap<String, Country>,
    records: Vec<IndicatorRecord>,
}

impl Dataset {
    /// Load a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Io`] if the file cannot be read and
    /// [`DataError::Parse`] if its content is not a valid snapshot.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            countries = dataset.countries.len(),
            records = dataset.records.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Parse a snapshot from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Parse`] on malformed JSON.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(s)?;
        Ok(Self::from_parts(snapshot.countries, snapshot.indicators))
    }

    /// Build a dataset from already-decoded tables.
    ///
    /// Countries are distinct by code; the first row for a code wins.
    #[must_use]
    pub fn from_parts(countries: Vec<Country>, records: Vec<IndicatorRecord>) -> Self {
        let mut by_code = BTreeMap::new();
        for country in countries {
            if by_code.contains_key(&country.country_code) {
                tracing::warn!(code = %country.country_code, "duplicate country row ignored");
                continue;
            }
            by_code.insert(country.country_code.clone(), country);
        }
        Self {
            countries: by_code,
            records,
        }
    }

    /// Distinct countries ordered by name, then code.
    #[must_use]
    pub fn countries(&self) -> Vec<&Country> {
        let mut list: Vec<&Country> = self.countries.values().collect();
        list.sort_by(|a, b| {
            a.country_name
                .cmp(&b.country_name)
                .then_with(|| a.country_code.cmp(&b.country_code))
        });
        list
    }

    /// Look up a country by code.
    #[must_use]
    pub fn country(&self, code: &str) -> Option<&Country> {
        self.countries.get(code)
    }

    /// Map coordinates of a country.
    ///
    /// Unknown countries and countries without a position yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::MissingParameter`] for an empty code.
    pub fn coordinates(&self, code: &str) -> Result<Option<Coordinates>> {
        let code = require("country_code", code)?;
        Ok(self.country(code).and_then(Country::coordinates))
    }

    /// Indicator values of a country in a year; the first matching row wins.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::MissingParameter`] for an empty code.
    pub fn indicators(&self, code: &str, year: i32) -> Result<Option<IndicatorValues>> {
        let code = require("country_code", code)?;
        Ok(self
            .records
            .iter()
            .find(|r| r.country_code == code && r.year == year)
            .map(|r| r.values))
    }

    /// Scatter points of indicator `x` against `y` for one year.
    ///
    /// One point per record of that year whose country is known and whose
    /// `x` and `y` values are both present, labelled with the country name.
    #[must_use]
    pub fn correlation_points(&self, x: Indicator, y: Indicator, year: i32) -> Vec<Point> {
        let mut skipped = 0usize;
        let points: Vec<Point> = self
            .records
            .iter()
            .filter(|r| r.year == year)
            .filter_map(|r| {
                let country = self.countries.get(&r.country_code)?;
                match (r.values.get(x), r.values.get(y)) {
                    (Some(vx), Some(vy)) => {
                        Some(Point::labeled(vx, vy, country.country_name.clone()))
                    }
                    _ => {
                        skipped += 1;
                        None
                    }
                }
            })
            .collect();
        tracing::debug!(%x, %y, year, points = points.len(), skipped, "built correlation points");
        points
    }

    /// Years that have at least one indicator row, ascending.
    #[must_use]
    pub fn available_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.records.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Number of indicator rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn require<'a>(name: &'static str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        Err(DataError::MissingParameter(name))
    } else {
        Ok(value)
    }
}
