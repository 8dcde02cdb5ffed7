//! Application entry point and dispatch.

use std::io::{self, Read, Write};

use anyhow::{Context, Result};

use corrstat_cli::completion::generate_completion;
use corrstat_cli::presenter::{CorrelationReport, JsonPresenter, ResultPresenter, TextPresenter};
use corrstat_core::{compute, Point};
use corrstat_data::{CountrySummary, Dataset, Indicator, YearRange};

use crate::config::{AppConfig, Command, OutputFormat};
use crate::errors::AppError;

/// Run the application, writing results to stdout.
pub fn run(config: &AppConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(config, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Run the application, writing results to `out`.
pub fn run_with_output(config: &AppConfig, out: &mut dyn Write) -> Result<()> {
    let presenter: Box<dyn ResultPresenter> = match config.format {
        OutputFormat::Text => Box::new(TextPresenter::new(config.verbose, config.quiet)),
        OutputFormat::Json => Box::new(JsonPresenter),
    };
    let presenter = presenter.as_ref();

    match &config.command {
        Command::Completion { shell } => {
            let mut cmd = <AppConfig as clap::CommandFactory>::command();
            generate_completion(&mut cmd, *shell, out);
            Ok(())
        }
        Command::Regress { input } => run_regress(input, presenter, out),
        Command::Correlate { x, y, year } => {
            let dataset = load_dataset(config)?;
            run_correlate(&dataset, x, y, *year, presenter, out)
        }
        Command::Countries => {
            let dataset = load_dataset(config)?;
            presenter.present_countries(out, &dataset.countries())?;
            Ok(())
        }
        Command::Coordinates { country } => {
            let dataset = load_dataset(config)?;
            let coords = dataset.coordinates(country)?;
            presenter.present_coordinates(out, country, coords)?;
            Ok(())
        }
        Command::Summary { country, year } => {
            let dataset = load_dataset(config)?;
            let year = YearRange::default().resolve(*year)?;
            let summary = CountrySummary::lookup(&dataset, country, year)?;
            presenter.present_summary(out, country, year, summary.as_ref())?;
            Ok(())
        }
        Command::Years => {
            let available = match &config.data {
                Some(_) => load_dataset(config)?.available_years(),
                None => Vec::new(),
            };
            presenter.present_years(out, YearRange::default(), &available)?;
            Ok(())
        }
    }
}

fn run_regress(input: &str, presenter: &dyn ResultPresenter, out: &mut dyn Write) -> Result<()> {
    let points = read_points(input)?;
    tracing::info!(points = points.len(), input, "regressing points");
    let result = compute(&points)?;
    presenter.present_regression(out, &result, &points)?;
    Ok(())
}

fn run_correlate(
    dataset: &Dataset,
    x: &str,
    y: &str,
    year: Option<i32>,
    presenter: &dyn ResultPresenter,
    out: &mut dyn Write,
) -> Result<()> {
    let x: Indicator = x.parse()?;
    let y: Indicator = y.parse()?;
    let year = YearRange::default().resolve(year)?;

    let points = dataset.correlation_points(x, y, year);
    tracing::info!(%x, %y, year, points = points.len(), "correlating indicators");
    let result = compute(&points).with_context(|| format!("cannot fit {x} vs {y} ({year})"))?;

    let report = CorrelationReport::new(x, y, year, points, result);
    presenter.present_correlation(out, &report)?;
    Ok(())
}

fn load_dataset(config: &AppConfig) -> Result<Dataset> {
    let path = config.data.as_deref().ok_or(AppError::MissingDataset)?;
    Ok(Dataset::load(path)?)
}

fn read_points(input: &str) -> Result<Vec<Point>> {
    let content = if input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read points from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read {input}"))?
    };
    let points = serde_json::from_str(&content).map_err(AppError::InvalidPoints)?;
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::errors::exit_code;

    const SNAPSHOT: &str = r#"{
        "countries": [
            {"CountryCode": "AAA", "CountryName": "Alpha", "Latitude": 10.0, "Longitude": 20.0},
            {"CountryCode": "BBB", "CountryName": "Beta"}
        ],
        "indicators": [
            {"CountryCode": "AAA", "Year": 2015, "GDP": 10, "Population": 5},
            {"CountryCode": "BBB", "Year": 2015, "GDP": 20, "Population": 7}
        ]
    }"#;

    fn config(command: Command, data: Option<PathBuf>, format: OutputFormat) -> AppConfig {
        AppConfig {
            format,
            quiet: false,
            verbose: false,
            data,
            command,
        }
    }

    fn snapshot_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();
        file
    }

    fn run_to_string(config: &AppConfig) -> Result<String> {
        let mut buf = Vec::new();
        run_with_output(config, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn correlate_json() {
        let file = snapshot_file();
        let cfg = config(
            Command::Correlate {
                x: "gdp".into(),
                y: "population".into(),
                year: None,
            },
            Some(file.path().to_path_buf()),
            OutputFormat::Json,
        );
        let json: serde_json::Value = serde_json::from_str(&run_to_string(&cfg).unwrap()).unwrap();
        assert_eq!(json["year"], 2015);
        assert_eq!(json["r"], "1.000");
        assert_eq!(json["regressionPoints"][0]["x"], 10.0);
    }

    #[test]
    fn correlate_needs_dataset() {
        let cfg = config(
            Command::Correlate {
                x: "GDP".into(),
                y: "Population".into(),
                year: None,
            },
            None,
            OutputFormat::Text,
        );
        let err = run_to_string(&cfg).unwrap_err();
        assert_eq!(exit_code(&err), 4);
    }

    #[test]
    fn correlate_with_too_few_points() {
        let file = snapshot_file();
        let cfg = config(
            Command::Correlate {
                x: "GDP".into(),
                y: "LifeExpectancy".into(),
                year: Some(2015),
            },
            Some(file.path().to_path_buf()),
            OutputFormat::Text,
        );
        let err = run_to_string(&cfg).unwrap_err();
        assert_eq!(exit_code(&err), 3);
        assert!(format!("{err:#}").contains("cannot fit GDP vs LifeExpectancy (2015)"));
    }

    #[test]
    fn coordinates_text() {
        let file = snapshot_file();
        let cfg = config(
            Command::Coordinates {
                country: "AAA".into(),
            },
            Some(file.path().to_path_buf()),
            OutputFormat::Text,
        );
        assert_eq!(run_to_string(&cfg).unwrap(), "AAA: lat 10, lon 20\n");
    }

    #[test]
    fn summary_rejects_bad_year() {
        let file = snapshot_file();
        let cfg = config(
            Command::Summary {
                country: "AAA".into(),
                year: Some(1990),
            },
            Some(file.path().to_path_buf()),
            OutputFormat::Text,
        );
        assert_eq!(exit_code(&run_to_string(&cfg).unwrap_err()), 4);
    }

    #[test]
    fn years_without_dataset() {
        let cfg = config(Command::Years, None, OutputFormat::Text);
        let text = run_to_string(&cfg).unwrap();
        assert_eq!(text.lines().count(), 24);
        assert!(text.contains("2015 (default)"));
    }

    #[test]
    fn regress_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{"x": 1, "y": 2}, {"x": 2, "y": 4}, {"x": 3, "y": 6}]"#)
            .unwrap();
        let mut cfg = config(
            Command::Regress {
                input: file.path().to_string_lossy().into_owned(),
            },
            None,
            OutputFormat::Text,
        );
        cfg.quiet = true;
        assert_eq!(run_to_string(&cfg).unwrap(), "1.000\n");
    }

    #[test]
    fn regress_rejects_malformed_points() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[{\"x\": 1}]").unwrap();
        let cfg = config(
            Command::Regress {
                input: file.path().to_string_lossy().into_owned(),
            },
            None,
            OutputFormat::Text,
        );
        let err = run_to_string(&cfg).unwrap_err();
        assert!(err.to_string().contains("invalid points input"));
    }
}
