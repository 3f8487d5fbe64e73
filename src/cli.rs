//! Command-line interface for the launch tracker
//!
//! This module defines the clap surface: the `launches`, `stats`, `export`,
//! and `cache-clear` subcommands, the shared filter flags, and the
//! environment-variable fallbacks for connection settings.

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use thiserror::Error;

use crate::config::{NameMatch, Settings, DEFAULT_BASE_URL};
use crate::data::launches::{LaunchFilters, SortKey};

/// Error types for CLI argument parsing
#[derive(Debug, Clone, Error)]
pub enum CliError {
    /// The date argument could not be parsed
    #[error("Invalid date: '{0}' (expected RFC 3339 or YYYY-MM-DD)")]
    InvalidDate(String),
}

/// SpaceX launch tracker - explore launch data, statistics, and exports
#[derive(Parser, Debug)]
#[command(name = "launchtrack")]
#[command(about = "SpaceX launch data with filtering, statistics, and export")]
#[command(version)]
pub struct Cli {
    /// Remote API base URL
    #[arg(long, global = true, env = "LAUNCHTRACK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Cache directory (defaults to the platform cache path)
    #[arg(long, global = true, env = "LAUNCHTRACK_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Cache TTL in seconds
    #[arg(long, global = true, env = "LAUNCHTRACK_CACHE_TTL", default_value_t = 60)]
    pub cache_ttl: u64,

    /// Disable response caching entirely
    #[arg(long, global = true)]
    pub no_cache: bool,

    /// Rocket-name filter comparison policy
    #[arg(long, global = true, value_enum, default_value = "contains")]
    pub rocket_match: NameMatch,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List launches with filters and pagination
    Launches(LaunchesArgs),
    /// Derived launch statistics
    Stats {
        #[command(subcommand)]
        stat: StatCommand,
    },
    /// Export filtered launches to a file
    Export(ExportArgs),
    /// Remove all cached API responses
    CacheClear,
}

/// Statistics subcommands
#[derive(Subcommand, Debug)]
pub enum StatCommand {
    /// Launch totals and success rate per rocket
    SuccessRate,
    /// Launch counts per launch site
    LaunchSite,
    /// Launch counts by year and by month
    Frequency,
}

/// Filter flags shared by the listing and export subcommands
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Inclusive lower bound on launch date (RFC 3339 or YYYY-MM-DD, UTC)
    #[arg(long, value_parser = parse_date_arg)]
    pub start_date: Option<DateTime<Utc>>,

    /// Inclusive upper bound on launch date (RFC 3339 or YYYY-MM-DD, UTC)
    #[arg(long, value_parser = parse_date_arg)]
    pub end_date: Option<DateTime<Utc>>,

    /// Rocket name filter (case-insensitive)
    #[arg(long)]
    pub rocket: Option<String>,

    /// Success filter: true or false
    #[arg(long)]
    pub success: Option<bool>,

    /// Launchpad name filter (case-insensitive substring)
    #[arg(long)]
    pub launchpad: Option<String>,
}

/// Arguments for the `launches` subcommand
#[derive(Args, Debug)]
pub struct LaunchesArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Page number, 1-based
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Items per page
    #[arg(long, default_value_t = 10)]
    pub page_size: usize,

    /// Sort key; fetched order is kept when omitted
    #[arg(long, value_enum)]
    pub sort: Option<SortKey>,

    /// Sort in descending order
    #[arg(long, requires = "sort")]
    pub desc: bool,
}

/// Arguments for the `export` subcommand
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Export format: csv or json
    #[arg(long)]
    pub format: String,

    /// Output path (defaults to launches.csv / launches.json)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Resolves runtime settings from the parsed arguments
    pub fn settings(&self) -> Settings {
        Settings {
            base_url: self.base_url.clone(),
            cache_dir: self.cache_dir.clone(),
            cache_ttl_secs: self.cache_ttl,
            no_cache: self.no_cache,
            rocket_match: self.rocket_match,
        }
    }
}

impl FilterArgs {
    /// Builds launch filters under the given rocket-name match policy
    pub fn to_filters(&self, rocket_match: NameMatch) -> LaunchFilters {
        LaunchFilters {
            start_date: self.start_date,
            end_date: self.end_date,
            rocket: self.rocket.clone(),
            success: self.success,
            launchpad: self.launchpad.clone(),
            rocket_match,
        }
    }

    /// Returns the active filters as query pairs for pagination links
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(start) = self.start_date {
            pairs.push(("start_date".to_string(), start.to_rfc3339()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("end_date".to_string(), end.to_rfc3339()));
        }
        if let Some(ref rocket) = self.rocket {
            pairs.push(("rocket".to_string(), rocket.clone()));
        }
        if let Some(success) = self.success {
            pairs.push(("success".to_string(), success.to_string()));
        }
        if let Some(ref launchpad) = self.launchpad {
            pairs.push(("launchpad".to_string(), launchpad.clone()));
        }
        pairs
    }
}

/// Parses a date argument as RFC 3339 or a bare date
///
/// Bare dates are taken as midnight UTC. Offsets in RFC 3339 inputs are
/// normalized to UTC so all filter comparisons happen in one timezone.
pub fn parse_date_arg(s: &str) -> Result<DateTime<Utc>, CliError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt.and_utc());
        }
    }
    Err(CliError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_arg_rfc3339() {
        let dt = parse_date_arg("2020-06-01T12:30:00Z").unwrap();
        assert_eq!(dt, "2020-06-01T12:30:00Z".parse::<DateTime<Utc>>().unwrap());
    }

    #[test]
    fn test_parse_date_arg_normalizes_offset_to_utc() {
        let dt = parse_date_arg("2020-06-01T02:00:00+02:00").unwrap();
        assert_eq!(dt, "2020-06-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap());
    }

    #[test]
    fn test_parse_date_arg_bare_date_is_midnight_utc() {
        let dt = parse_date_arg("2020-06-01").unwrap();
        assert_eq!(dt, "2020-06-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap());
    }

    #[test]
    fn test_parse_date_arg_invalid() {
        let result = parse_date_arg("not a date");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("not a date"));
    }

    #[test]
    fn test_cli_parse_launches_defaults() {
        let cli = Cli::parse_from(["launchtrack", "launches"]);
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
        assert_eq!(cli.cache_ttl, 60);
        assert!(!cli.no_cache);
        assert_eq!(cli.rocket_match, NameMatch::Contains);

        match cli.command {
            Command::Launches(args) => {
                assert_eq!(args.page, 1);
                assert_eq!(args.page_size, 10);
                assert!(args.sort.is_none());
            }
            other => panic!("Expected launches subcommand, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_launches_with_filters() {
        let cli = Cli::parse_from([
            "launchtrack",
            "launches",
            "--rocket",
            "Falcon 9",
            "--success",
            "true",
            "--start-date",
            "2020-01-01",
            "--page",
            "2",
            "--page-size",
            "5",
        ]);

        match cli.command {
            Command::Launches(args) => {
                assert_eq!(args.filters.rocket.as_deref(), Some("Falcon 9"));
                assert_eq!(args.filters.success, Some(true));
                assert!(args.filters.start_date.is_some());
                assert_eq!(args.page, 2);
                assert_eq!(args.page_size, 5);
            }
            other => panic!("Expected launches subcommand, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_stats_subcommands() {
        let cli = Cli::parse_from(["launchtrack", "stats", "success-rate"]);
        assert!(matches!(
            cli.command,
            Command::Stats {
                stat: StatCommand::SuccessRate
            }
        ));

        let cli = Cli::parse_from(["launchtrack", "stats", "frequency"]);
        assert!(matches!(
            cli.command,
            Command::Stats {
                stat: StatCommand::Frequency
            }
        ));
    }

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from([
            "launchtrack",
            "export",
            "--format",
            "csv",
            "--launchpad",
            "canaveral",
        ]);

        match cli.command {
            Command::Export(args) => {
                assert_eq!(args.format, "csv");
                assert_eq!(args.filters.launchpad.as_deref(), Some("canaveral"));
                assert!(args.output.is_none());
            }
            other => panic!("Expected export subcommand, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_desc_requires_sort() {
        let result = Cli::try_parse_from(["launchtrack", "launches", "--desc"]);
        assert!(result.is_err(), "--desc without --sort must be rejected");

        let result = Cli::try_parse_from(["launchtrack", "launches", "--sort", "date", "--desc"]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_query_pairs_reflect_active_filters() {
        let filters = FilterArgs {
            rocket: Some("falcon".to_string()),
            success: Some(false),
            ..FilterArgs::default()
        };

        let pairs = filters.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("rocket".to_string(), "falcon".to_string()),
                ("success".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_settings_from_cli_flags() {
        let cli = Cli::parse_from([
            "launchtrack",
            "--base-url",
            "http://localhost:9000/v4",
            "--cache-ttl",
            "5",
            "--no-cache",
            "cache-clear",
        ]);

        let settings = cli.settings();
        assert_eq!(settings.base_url, "http://localhost:9000/v4");
        assert_eq!(settings.cache_ttl_secs, 5);
        assert!(settings.no_cache);
    }
}
