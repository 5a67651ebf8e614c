//! Report command for listing records in a date range.
//!
//! Both bounds are inclusive. Each bound may be a date in the configured format
//! or "today"; both are normalized before the range query runs.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;

use tt_core::{Query, date};
use tt_db::Database;

use super::util::write_records;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// First date of the range (YYYY/MM/DD or "today").
    pub start_date: String,
    /// Last date of the range (YYYY/MM/DD or "today").
    pub end_date: String,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run<W: Write>(writer: &mut W, db: &Database, args: &ReportArgs) -> Result<()> {
    run_at(writer, db, args, date::today())
}

/// Runs the report command with an explicit value for "today".
pub fn run_at<W: Write>(
    writer: &mut W,
    db: &Database,
    args: &ReportArgs,
    today: NaiveDate,
) -> Result<()> {
    let format = &db.config().date_format;
    let start = date::resolve_date(&args.start_date, format, today)
        .context("invalid start date")?;
    let end = date::resolve_date(&args.end_date, format, today).context("invalid end date")?;
    if end < start {
        tracing::warn!(%start, %end, "report range ends before it starts");
    }

    let query = Query::DateRange {
        start: date::format_date(start, format),
        end: date::format_date(end, format),
    };
    let records = db.query_at(&query, today)?;
    write_records(writer, &records, args.json)
}
