//! Command-line arguments.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use edgarq_output::ExportFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "edgarq")]
#[command(about = "Look up SEC EDGAR companies and list their filings", long_about = None)]
#[command(version, propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Sets the level of tracing (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    pub trace: Option<TraceLevel>,

    /// JSON file with EDGAR connection settings.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Resolve a ticker symbol to its company and CIK
    Lookup {
        /// Ticker symbol (case-insensitive)
        ticker: String,

        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List a company's filings, newest first
    Filings {
        /// Ticker symbol (case-insensitive)
        ticker: String,

        /// Accepted form type, repeatable (e.g. --form 10-K --form 10-Q)
        #[arg(long = "form")]
        forms: Vec<String>,

        /// Earliest filing date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Latest filing date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Maximum number of filings to show
        #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
        limit: i64,

        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Where company and filing records come from.
#[derive(Args, Debug, Clone)]
pub(crate) struct SourceArgs {
    /// Record source
    #[arg(long, value_enum, default_value_t = SourceKind::Fixtures)]
    pub source: SourceKind,

    /// Ticker registry JSON (company_tickers.json shape)
    #[arg(long)]
    pub companies: Option<PathBuf>,

    /// Filing index JSON keyed by CIK
    #[arg(long)]
    pub filings: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct OutputArgs {
    /// Output format: table, csv, json or pretty-json
    #[arg(long, default_value = "table")]
    pub format: ExportFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum SourceKind {
    /// Local JSON fixtures
    Fixtures,

    /// Live SEC EDGAR endpoints
    Remote,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
#[clap(rename_all = "UPPERCASE")]
pub(crate) enum TraceLevel {
    Debug,
    Error,
    Info,
    Trace,
    Warn,
}

impl TraceLevel {
    pub(crate) const fn as_directive(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Error => "error",
            Self::Info => "info",
            Self::Trace => "trace",
            Self::Warn => "warn",
        }
    }
}
