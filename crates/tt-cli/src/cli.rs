//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::priority::PriorityArgs;
use crate::commands::query::QueryArgs;
use crate::commands::record::RecordArgs;
use crate::commands::report::ReportArgs;

/// Personal time tracker.
///
/// Records work intervals with a task and a tag, and answers questions about
/// where the time went.
#[derive(Debug, Parser)]
#[command(name = "tt", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record time spent on a task.
    Record(RecordArgs),

    /// Find records by date, tag (`:TAG`), or task text.
    Query(QueryArgs),

    /// List records between two dates, inclusive.
    Report(ReportArgs),

    /// Total minutes per tag, largest first.
    Priority(PriorityArgs),

    /// Delete every record.
    Clear,
}
