//! CLI argument definitions for the catalog tool.

use std::path::PathBuf;

use celldex_model::{Attribute, RecordId};
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "celldex",
    version,
    about = "Phone catalog toolkit - ingest, normalize and query handset data",
    long_about = "Ingest a phone-catalog CSV file, normalize its twelve attribute\n\
                  columns into typed records, and run analytical queries over them.\n\
                  Results render as terminal tables or JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ingest a catalog file and print the analytical report.
    Report(ReportArgs),

    /// Show one record of a catalog file in full.
    Inspect(InspectArgs),

    /// List the attribute schema: names, target types, normalization rules.
    Schema,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to the catalog CSV file.
    #[arg(value_name = "CSV")]
    pub catalog: PathBuf,

    /// Emit the report as one JSON document instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Also report the release count for this specific year.
    #[arg(long = "year", value_name = "YEAR")]
    pub year: Option<i32>,

    /// Attribute for the most-frequent-value query (default: OEM).
    #[arg(long = "attribute", value_name = "NAME")]
    pub attribute: Option<Attribute>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the catalog CSV file.
    #[arg(value_name = "CSV")]
    pub catalog: PathBuf,

    /// Identifier of the record to show (ids start at 0 in ingest order).
    #[arg(value_name = "ID")]
    pub id: RecordId,

    /// Emit the record as JSON instead of the verbose listing.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
