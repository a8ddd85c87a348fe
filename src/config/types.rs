//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_CSV_OUTPUT, DEFAULT_JSON_OUTPUT, DEFAULT_MAX_CONCURRENCY, DNS_TIMEOUT_SECS,
    SCAN_DEADLINE_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report format chosen for a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored lines on stdout
    Stdout,
    /// CSV file
    Csv,
    /// JSON file
    Json,
}

/// Library configuration, also parsed from the command line.
///
/// # Examples
///
/// ```bash
/// # Single domain, colored output
/// txtra -d example.com
///
/// # Domain list, CSV report
/// txtra -f domains.txt --csv -o report.csv
///
/// # From stdin, raw TXT values only
/// cat domains.txt | txtra --no-scan
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "txtra",
    about = "Identifies third-party services from a domain's TXT records."
)]
pub struct Config {
    /// Domain (or URL) to check
    #[arg(short = 'd', long)]
    pub domain: Option<String>,

    /// File containing one domain (or URL) per line
    #[arg(short = 'f', long, value_parser)]
    pub file: Option<PathBuf>,

    /// Skip the signature scan and only print TXT records
    #[arg(short = 's', long)]
    pub no_scan: bool,

    /// Write a CSV report. Cannot be combined with --json.
    #[arg(short = 'c', long, conflicts_with = "json")]
    pub csv: bool,

    /// Write a JSON report. Cannot be combined with --csv.
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Report path (default: ./output.csv or ./output.json)
    #[arg(short = 'o', long, value_parser)]
    pub output: Option<PathBuf>,

    /// Signature file or directory of *.yml templates (default: built-in bundle)
    #[arg(long, value_parser)]
    pub signatures: Option<PathBuf>,

    /// Keep signatures whose rule type is unknown instead of rejecting the catalog.
    /// Such signatures never match.
    #[arg(long)]
    pub allow_unsupported_rules: bool,

    /// Do not follow SPF include: directives
    #[arg(long)]
    pub no_follow_includes: bool,

    /// Maximum number of domains scanned concurrently
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub dns_timeout_secs: u64,

    /// Overall deadline in seconds for one domain, include chain included
    #[arg(long, default_value_t = SCAN_DEADLINE_SECS)]
    pub scan_deadline_secs: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Report format selected by the `--csv` / `--json` flags.
    pub fn output_format(&self) -> OutputFormat {
        if self.csv {
            OutputFormat::Csv
        } else if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Stdout
        }
    }

    /// Report path for file-based formats, `None` for stdout.
    pub fn output_path(&self) -> Option<PathBuf> {
        let default = match self.output_format() {
            OutputFormat::Stdout => return None,
            OutputFormat::Csv => DEFAULT_CSV_OUTPUT,
            OutputFormat::Json => DEFAULT_JSON_OUTPUT,
        };
        Some(
            self.output
                .clone()
                .unwrap_or_else(|| PathBuf::from(default)),
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: None,
            file: None,
            no_scan: false,
            csv: false,
            json: false,
            output: None,
            signatures: None,
            allow_unsupported_rules: false,
            no_follow_includes: false,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            dns_timeout_secs: DNS_TIMEOUT_SECS,
            scan_deadline_secs: SCAN_DEADLINE_SECS,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}
