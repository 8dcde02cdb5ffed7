//! Result presenters: human-readable text and JSON.

use std::io::{self, Write};

use serde::Serialize;

use corrstat_core::{Point, RegressionResult};
use corrstat_data::{AxisScale, Coordinates, Country, CountrySummary, Indicator, YearRange};

use crate::output::{
    format_coefficient, format_count, format_indicator, format_number, format_point,
};
use crate::ui::{field, header};

/// A regression over one indicator pair and year, with the points it was
/// computed from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationReport {
    pub x: Indicator,
    pub y: Indicator,
    pub year: i32,
    pub x_scale: AxisScale,
    pub y_scale: AxisScale,
    pub points: Vec<Point>,
    #[serde(flatten)]
    pub regression: RegressionResult,
}

impl CorrelationReport {
    #[must_use]
    pub fn new(
        x: Indicator,
        y: Indicator,
        year: i32,
        points: Vec<Point>,
        regression: RegressionResult,
    ) -> Self {
        Self {
            x,
            y,
            year,
            x_scale: x.scale(),
            y_scale: y.scale(),
            points,
            regression,
        }
    }

    /// Scatter title, e.g. `GDP vs LifeExpectancy (2015)`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} vs {} ({})", self.x, self.y, self.year)
    }
}

/// Legend label of a fitted line.
#[must_use]
pub fn regression_label(result: &RegressionResult) -> String {
    format!("Regression Line (r = {})", result.r)
}

/// Trait for presenting query results to the user.
pub trait ResultPresenter {
    /// Present a regression over raw points.
    fn present_regression(
        &self,
        out: &mut dyn Write,
        result: &RegressionResult,
        points: &[Point],
    ) -> io::Result<()>;

    /// Present a regression over a dataset indicator pair.
    fn present_correlation(&self, out: &mut dyn Write, report: &CorrelationReport)
        -> io::Result<()>;

    /// Present the country list.
    fn present_countries(&self, out: &mut dyn Write, countries: &[&Country]) -> io::Result<()>;

    /// Present a country's map position.
    fn present_coordinates(
        &self,
        out: &mut dyn Write,
        code: &str,
        coords: Option<Coordinates>,
    ) -> io::Result<()>;

    /// Present a country summary, or the absence of data.
    fn present_summary(
        &self,
        out: &mut dyn Write,
        code: &str,
        year: i32,
        summary: Option<&CountrySummary>,
    ) -> io::Result<()>;

    /// Present the selectable years.
    fn present_years(
        &self,
        out: &mut dyn Write,
        range: YearRange,
        available: &[i32],
    ) -> io::Result<()>;
}

/// Plain-text presenter.
pub struct TextPresenter {
    verbose: bool,
    quiet: bool,
}

impl TextPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    fn write_fit(&self, out: &mut dyn Write, result: &RegressionResult) -> io::Result<()> {
        let [start, end] = &result.regression_points;
        writeln!(out, "{}", header(&regression_label(result)))?;
        writeln!(out, "  {} {}", field("Samples"), format_count(result.fit.n as u64))?;
        writeln!(out, "  {} {}", field("Slope"), format_coefficient(result.fit.slope))?;
        writeln!(
            out,
            "  {} {}",
            field("Intercept"),
            format_coefficient(result.fit.intercept)
        )?;
        writeln!(out, "  {} {}", field("r"), result.r)?;
        writeln!(out, "  {} {}", field("From"), format_point(start))?;
        writeln!(out, "  {} {}", field("To"), format_point(end))
    }

    fn write_points(&self, out: &mut dyn Write, points: &[Point]) -> io::Result<()> {
        if !self.verbose {
            return Ok(());
        }
        writeln!(out, "\n{}", header("Points"))?;
        for p in points {
            writeln!(out, "  {}", format_point(p))?;
        }
        Ok(())
    }
}

impl ResultPresenter for TextPresenter {
    fn present_regression(
        &self,
        out: &mut dyn Write,
        result: &RegressionResult,
        points: &[Point],
    ) -> io::Result<()> {
        if self.quiet {
            return writeln!(out, "{}", result.r);
        }
        self.write_fit(out, result)?;
        self.write_points(out, points)
    }

    fn present_correlation(
        &self,
        out: &mut dyn Write,
        report: &CorrelationReport,
    ) -> io::Result<()> {
        if self.quiet {
            return writeln!(out, "{}", report.regression.r);
        }
        writeln!(out, "{}", header(&report.title()))?;
        writeln!(
            out,
            "  {} {} [{}, {} axis]",
            field("x"),
            report.x,
            report.x.unit(),
            report.x_scale
        )?;
        writeln!(
            out,
            "  {} {} [{}, {} axis]",
            field("y"),
            report.y,
            report.y.unit(),
            report.y_scale
        )?;
        writeln!(out)?;
        self.write_fit(out, &report.regression)?;
        self.write_points(out, &report.points)
    }

    fn present_countries(&self, out: &mut dyn Write, countries: &[&Country]) -> io::Result<()> {
        for c in countries {
            if self.quiet {
                writeln!(out, "{}", c.country_code)?;
            } else {
                writeln!(out, "{:<5} {}", c.country_code, c.country_name)?;
            }
        }
        Ok(())
    }

    fn present_coordinates(
        &self,
        out: &mut dyn Write,
        code: &str,
        coords: Option<Coordinates>,
    ) -> io::Result<()> {
        match coords {
            Some(c) if self.quiet => writeln!(out, "{} {}", c.lat, c.lon),
            Some(c) => writeln!(out, "{code}: lat {}, lon {}", c.lat, c.lon),
            None => writeln!(out, "{code}: no coordinates"),
        }
    }

    fn present_summary(
        &self,
        out: &mut dyn Write,
        code: &str,
        year: i32,
        summary: Option<&CountrySummary>,
    ) -> io::Result<()> {
        let Some(s) = summary else {
            return writeln!(out, "{code}: no data for {year}");
        };
        let name = s.country_name.as_deref().unwrap_or(code);
        writeln!(out, "{}", header(&format!("{name} ({year})")))?;
        for indicator in Indicator::ALL {
            writeln!(
                out,
                "  {:<20} {}",
                format!("{indicator}:"),
                format_indicator(indicator, s.values.get(indicator))
            )?;
        }
        writeln!(
            out,
            "  {:<20} {} USD",
            "GDPPerCapita:",
            format_number(s.gdp_per_capita)
        )
    }

    fn present_years(
        &self,
        out: &mut dyn Write,
        range: YearRange,
        available: &[i32],
    ) -> io::Result<()> {
        for year in range.iter() {
            let mut line = year.to_string();
            if year == range.default {
                line.push_str(" (default)");
            }
            if !self.quiet && !available.is_empty() && !available.contains(&year) {
                line.push_str(" [no data]");
            }
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

/// JSON presenter; mirrors the serde representation of each result.
pub struct JsonPresenter;

impl JsonPresenter {
    fn write<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
        writeln!(out)
    }
}

#[derive(Serialize)]
struct CoordinatesJson {
    lat: Option<f64>,
    lon: Option<f64>,
}

#[derive(Serialize)]
struct YearsJson<'a> {
    #[serde(flatten)]
    range: YearRange,
    available: &'a [i32],
}

impl ResultPresenter for JsonPresenter {
    fn present_regression(
        &self,
        out: &mut dyn Write,
        result: &RegressionResult,
        _points: &[Point],
    ) -> io::Result<()> {
        Self::write(out, result)
    }

    fn present_correlation(
        &self,
        out: &mut dyn Write,
        report: &CorrelationReport,
    ) -> io::Result<()> {
        Self::write(out, report)
    }

    fn present_countries(&self, out: &mut dyn Write, countries: &[&Country]) -> io::Result<()> {
        Self::write(out, countries)
    }

    fn present_coordinates(
        &self,
        out: &mut dyn Write,
        _code: &str,
        coords: Option<Coordinates>,
    ) -> io::Result<()> {
        let json = CoordinatesJson {
            lat: coords.map(|c| c.lat),
            lon: coords.map(|c| c.lon),
        };
        Self::write(out, &json)
    }

    fn present_summary(
        &self,
        out: &mut dyn Write,
        _code: &str,
        _year: i32,
        summary: Option<&CountrySummary>,
    ) -> io::Result<()> {
        Self::write(out, &summary)
    }

    fn present_years(
        &self,
        out: &mut dyn Write,
        range: YearRange,
        available: &[i32],
    ) -> io::Result<()> {
        Self::write(out, &YearsJson { range, available })
    }
}
