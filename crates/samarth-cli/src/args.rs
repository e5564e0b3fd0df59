//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Answers questions about Indian agriculture and rainfall.
///
/// With no QUESTION arguments, reads one question per line from stdin.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "samarth")]
#[command(version)]
pub struct CliArgs {
    /// TOML config file (default: ./samarth.toml if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print one JSON answer per line
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON on stderr
    #[arg(long)]
    pub log_json: bool,

    /// Questions to answer, in order
    #[arg(value_name = "QUESTION")]
    pub questions: Vec<String>,
}
