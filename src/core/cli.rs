use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::core::display::OutputFormat;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// All relative paths will be interpreted relative to this directory.
    #[arg(long, global = true)]
    pub cwd: Option<String>,

    /// Location of the sqlite database
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Logging level (overrides env/config). One of: trace, debug, info, warn, error
    #[arg(long = "log.level", global = true)]
    pub log_level: Option<String>,

    /// Logging color control: "on" to force colors, "off" to disable; omit for auto
    #[arg(long = "log.color", global = true)]
    pub log_color: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace (config + database)
    Init,

    /// Record a finished interview session
    Record(RecordArgs),

    /// Show the statistics dashboard (summary cards and position chart)
    Dashboard(DashboardArgs),

    /// Print the statistics record for a day
    Summary(SummaryArgs),

    /// List the days that have recorded statistics
    Days(DaysArgs),

    /// Delete statistics older than the retention window
    Cleanup(CleanupArgs),

    /// Print various information
    Print {
        #[command(subcommand)]
        command: PrintArgs,
    },
}

/// Arguments for the record command
#[derive(Parser, Debug)]
pub struct RecordArgs {
    /// Session document (JSON). Use '-' to read from stdin.
    #[arg(value_name = "SESSION")]
    pub session: String,

    /// Day to record against (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

/// Arguments for the dashboard command
#[derive(Parser, Debug)]
pub struct DashboardArgs {
    /// Day to show (YYYY-MM-DD). Defaults to today.
    #[arg(long, conflicts_with = "input")]
    pub date: Option<NaiveDate>,

    /// Render a statistics document (JSON) instead of stored data.
    /// Use '-' to read from stdin.
    #[arg(long)]
    pub input: Option<String>,

    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the summary command
#[derive(Parser, Debug)]
pub struct SummaryArgs {
    /// Day to summarize (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the days command
#[derive(Parser, Debug)]
pub struct DaysArgs {
    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the cleanup command
#[derive(Parser, Debug)]
pub struct CleanupArgs {
    /// Number of days to keep.
    /// Replaces config [stats].retention_days if provided.
    #[arg(long)]
    pub days: Option<u32>,
}

/// Arguments for the print command
#[derive(Subcommand, Debug)]
pub enum PrintArgs {
    /// Print the effective global configuration
    Config(PrintConfigArgs),
}

/// Arguments for the print config subcommand
#[derive(Parser, Debug)]
pub struct PrintConfigArgs {
    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: OutputFormat,
}
