//! Priority command: total recorded minutes per tag.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use tt_core::aggregate_by_tag;
use tt_db::Database;

use super::util::NO_RECORDS;

#[derive(Debug, Args)]
pub struct PriorityArgs {
    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run<W: Write>(writer: &mut W, db: &Database, args: &PriorityArgs) -> Result<()> {
    let records = db.all_records()?;
    let totals = aggregate_by_tag(&records);
    tracing::debug!(records = records.len(), tags = totals.len(), "aggregated by tag");

    if args.json {
        serde_json::to_writer_pretty(&mut *writer, &totals)?;
        writeln!(writer)?;
        return Ok(());
    }

    if totals.is_empty() {
        writeln!(writer, "{NO_RECORDS}")?;
        return Ok(());
    }

    for total in &totals {
        writeln!(
            writer,
            "Tag: {}, Total Duration: {} minutes",
            total.tag, total.total_minutes
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;
    use insta::assert_snapshot;
    use tt_core::NewRecord;
    use tt_db::StorageConfig;

    fn seeded() -> Database {
        let mut db = Database::open_in_memory(StorageConfig::default()).unwrap();
        let date = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        let rows = [
            ("09:00", "10:00", "code review", ":WORK"),
            ("10:00", "10:45", "flashcards", ":STUDY"),
            ("13:00", "13:30", "emails", ":WORK"),
        ];
        for (start, end, task, tag) in rows {
            db.insert_record(&NewRecord::new(date, start, end, task, tag))
                .unwrap();
        }
        db
    }

    fn priority(db: &Database, json: bool) -> String {
        let mut output = Vec::new();
        run(&mut output, db, &PriorityArgs { json }).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn priority_lists_tags_by_total() {
        let db = seeded();
        assert_snapshot!(priority(&db, false), @r"
        Tag: :WORK, Total Duration: 90 minutes
        Tag: :STUDY, Total Duration: 45 minutes
        ");
    }

    #[test]
    fn priority_json() {
        let db = seeded();
        assert_snapshot!(priority(&db, true), @r#"
        [
          {
            "tag": ":WORK",
            "total_minutes": 90
          },
          {
            "tag": ":STUDY",
            "total_minutes": 45
          }
        ]
        "#);
    }

    #[test]
    fn priority_on_empty_database() {
        let db = Database::open_in_memory(StorageConfig::default()).unwrap();
        assert_eq!(priority(&db, false), "No records found.\n");
        assert_eq!(priority(&db, true), "[]\n");
    }
}
