//! Selectable year range.

use serde::Serialize;

use crate::error::{DataError, Result};

/// First selectable year.
pub const FIRST_YEAR: i32 = 2000;

/// Last selectable year.
pub const LAST_YEAR: i32 = 2023;

/// Year preselected when none is given.
pub const DEFAULT_YEAR: i32 = 2015;

/// Inclusive range of years offered for selection, plus the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearRange {
    pub first: i32,
    pub last: i32,
    pub default: i32,
}

impl Default for YearRange {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl YearRange {
    /// 2000 through 2023, defaulting to 2015.
    pub const STANDARD: Self = Self {
        first: FIRST_YEAR,
        last: LAST_YEAR,
        default: DEFAULT_YEAR,
    };

    #[must_use]
    pub fn contains(&self, year: i32) -> bool {
        (self.first..=self.last).contains(&year)
    }

    /// Resolve an optional year: `None` selects the default.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::YearOutOfRange`] for years outside the range.
    pub fn resolve(&self, year: Option<i32>) -> Result<i32> {
        let year = year.unwrap_or(self.default);
        if self.contains(year) {
            Ok(year)
        } else {
            Err(DataError::YearOutOfRange {
                year,
                first: self.first,
                last: self.last,
            })
        }
    }

    /// Iterate over every selectable year in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i32> {
        self.first..=self.last
    }
}
