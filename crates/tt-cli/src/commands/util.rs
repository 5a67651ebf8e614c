//! Shared utilities for CLI commands.

use std::io::Write;

use anyhow::Result;
use tt_core::TimeRecord;

/// Message printed when a read matches nothing.
pub const NO_RECORDS: &str = "No records found.";

/// Writes records one per line, or as a JSON array when `json` is set.
///
/// An empty human-readable listing prints [`NO_RECORDS`] instead of nothing.
pub fn write_records<W: Write>(writer: &mut W, records: &[TimeRecord], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *writer, records)?;
        writeln!(writer)?;
        return Ok(());
    }

    if records.is_empty() {
        writeln!(writer, "{NO_RECORDS}")?;
        return Ok(());
    }

    for record in records {
        writeln!(writer, "{record}")?;
    }
    Ok(())
}
