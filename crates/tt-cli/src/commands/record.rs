//! Record command for storing a work interval.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

use tt_core::{NewRecord, date};
use tt_db::Database;

#[derive(Debug, Args)]
pub struct RecordArgs {
    /// Date as YYYY/MM/DD, or "today".
    pub date: String,
    /// Start time, e.g. 09:30AM or 14:00.
    pub start_time: String,
    /// End time, e.g. 10:15AM or 16:30.
    pub end_time: String,
    /// Task description.
    pub task: String,
    /// Tag for the activity, conventionally starting with ':'.
    pub tag: String,
}

pub fn run<W: Write>(writer: &mut W, db: &mut Database, args: &RecordArgs) -> Result<()> {
    run_at(writer, db, args, date::today())
}

/// Runs the record command with an explicit value for "today".
pub fn run_at<W: Write>(
    writer: &mut W,
    db: &mut Database,
    args: &RecordArgs,
    today: NaiveDate,
) -> Result<()> {
    let date = date::resolve_date(&args.date, &db.config().date_format, today)?;
    let record = NewRecord::new(
        date,
        &args.start_time,
        &args.end_time,
        &args.task,
        &args.tag,
    );

    let stored = db.insert_record(&record)?;
    writeln!(writer, "Recorded successfully.")?;
    writeln!(writer, "{stored}")?;
    Ok(())
}
