//! CLI command definitions

use clap::{Parser, ValueEnum};
use factcount_domain::CountMode;
use std::path::PathBuf;

/// Output format for count results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Sentence with the count and the fact it was found in
    Text,
    /// Only the number
    Count,
    /// JSON output
    Json,
}

impl From<OutputFormat> for factcount_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Count => Self::Count,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for fact-counter
#[derive(Parser, Debug)]
#[command(name = "fact-counter")]
#[command(author, version, about = "Count a word in a number fact from numbersapi.com")]
#[command(long_about = r#"
fact-counter fetches one number fact (http://numbersapi.com/34 by default)
and counts how often a word occurs in it, ignoring case.

Counting modes:
  token       whitespace-delimited tokens equal to the word (default)
  substring   contiguous matches, so "ab" occurs 3 times in "ab abab"

Failures are reported as one of: "Time has been limit reached",
"Connection hang out", "Bad request", "Internal Server Error", and are
appended to the diagnostic log (./JustMyLogger.log by default).

Configuration files are loaded from (in priority order):
1. FACT_COUNTER_* environment variables
2. --config <path>              Explicit config file
3. ./fact-counter.toml          Project-level config
4. ~/.config/fact-counter/config.toml   Global config

Example:
  fact-counter just
  fact-counter --mode substring --number 42 the
  fact-counter -o json -v number
"#)]
pub struct Cli {
    /// The word to count (not required with --show-config)
    pub word: Option<String>,

    /// Counting mode: token or substring
    #[arg(long, value_name = "MODE")]
    pub mode: Option<CountMode>,

    /// Number whose fact is fetched
    #[arg(short, long, value_name = "N")]
    pub number: Option<u64>,

    /// Request timeout in seconds
    #[arg(short, long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Path of the diagnostic log
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Do not write the diagnostic log
    #[arg(long, conflicts_with = "log_file")]
    pub no_log: bool,

    /// Also write tracing output to this file
    #[arg(long, value_name = "PATH")]
    pub trace_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
