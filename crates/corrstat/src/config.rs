//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// corrstat — correlate country indicators and fit regression lines.
#[derive(Parser, Debug)]
#[command(name = "corrstat", version, about)]
pub struct AppConfig {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Quiet mode (only the essential value).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (also list the sample points).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Indicator snapshot (JSON).
    #[arg(long, global = true, env = "CORRSTAT_DATA")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fit a regression line through a JSON array of {x, y, label} points.
    Regress {
        /// Points file, or "-" for stdin.
        #[arg(short, long, default_value = "-")]
        input: String,
    },

    /// Regress one indicator against another across countries for a year.
    Correlate {
        /// Indicator on the x axis: GDP, Population, LifeExpectancy, HealthExpenditure.
        #[arg(short = 'x', long)]
        x: String,

        /// Indicator on the y axis.
        #[arg(short = 'y', long)]
        y: String,

        /// Year (2000-2023, default 2015).
        #[arg(long)]
        year: Option<i32>,
    },

    /// List countries ordered by name.
    Countries,

    /// Show a country's map coordinates.
    Coordinates {
        /// Country code (e.g. "CHL").
        #[arg(short, long)]
        country: String,
    },

    /// Show a country's indicator values and GDP per capita.
    Summary {
        /// Country code (e.g. "CHL").
        #[arg(short, long)]
        country: String,

        /// Year (2000-2023, default 2015).
        #[arg(long)]
        year: Option<i32>,
    },

    /// List the selectable years.
    Years,

    /// Generate shell completion.
    Completion {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl AppConfig {
    /// Parse CLI arguments, returning clap's error instead of exiting.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("corrstat").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn regress_defaults_to_stdin() {
        let config = parse(&["regress"]);
        assert!(matches!(config.command, Command::Regress { ref input } if input == "-"));
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn correlate_with_global_flags_after_subcommand() {
        let config = parse(&[
            "correlate", "-x", "GDP", "-y", "LifeExpectancy", "--year", "2010", "--format",
            "json", "--data", "snap.json",
        ]);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.data, Some(PathBuf::from("snap.json")));
        match config.command {
            Command::Correlate { x, y, year } => {
                assert_eq!(x, "GDP");
                assert_eq!(y, "LifeExpectancy");
                assert_eq!(year, Some(2010));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn summary_year_is_optional() {
        let config = parse(&["summary", "--country", "NOR"]);
        assert!(matches!(config.command, Command::Summary { year: None, .. }));
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        assert!(AppConfig::try_parse_from(["corrstat"]).is_err());
    }

    #[test]
    fn command_definition_is_consistent() {
        <AppConfig as clap::CommandFactory>::command().debug_assert();
    }
}
