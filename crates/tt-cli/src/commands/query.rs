//! Query command for finding records by date, tag, or task.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

use tt_core::{classify, date};
use tt_db::Database;

use super::util::write_records;

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// A date (YYYY/MM/DD or "today"), a tag (":TAG"), or task text.
    pub query: String,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run<W: Write>(writer: &mut W, db: &Database, args: &QueryArgs) -> Result<()> {
    run_at(writer, db, args, date::today())
}

/// Runs the query command with an explicit value for "today".
pub fn run_at<W: Write>(
    writer: &mut W,
    db: &Database,
    args: &QueryArgs,
    today: NaiveDate,
) -> Result<()> {
    let query = classify(&args.query, &db.config().date_format);
    tracing::debug!(?query, "classified query");

    let records = db.query_at(&query, today)?;
    write_records(writer, &records, args.json)
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;
    use tt_core::NewRecord;
    use tt_db::StorageConfig;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded() -> Database {
        let mut db = Database::open_in_memory(StorageConfig::default()).unwrap();
        let rows = [
            (day(2023, 12, 1), "10:00", "12:00", "Sample Task", ":SAMPLE"),
            (day(2023, 12, 2), "09:30AM", "10:15AM", "standup", ":WORK"),
            (day(2024, 3, 9), "13:00", "14:30", "read 2023/12/01 notes", ":STUDY"),
        ];
        for (date, start, end, task, tag) in rows {
            db.insert_record(&NewRecord::new(date, start, end, task, tag))
                .unwrap();
        }
        db
    }

    fn query(db: &Database, token: &str, json: bool) -> String {
        let args = QueryArgs {
            query: token.to_string(),
            json,
        };
        let mut output = Vec::new();
        run_at(&mut output, db, &args, day(2024, 3, 9)).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn query_by_tag() {
        let db = seeded();
        assert_snapshot!(query(&db, ":WORK", false), @"#2 2023/12/02 09:30AM-10:15AM (45 min) :WORK standup");
    }

    #[test]
    fn query_by_date_does_not_match_task_text() {
        let db = seeded();
        assert_snapshot!(query(&db, "2023/12/01", false), @"#1 2023/12/01 10:00-12:00 (120 min) :SAMPLE Sample Task");
    }

    #[test]
    fn query_today() {
        let db = seeded();
        assert_snapshot!(query(&db, "TODAY", false), @"#3 2024/03/09 13:00-14:30 (90 min) :STUDY read 2023/12/01 notes");
    }

    #[test]
    fn query_by_quoted_task() {
        let db = seeded();
        assert_snapshot!(query(&db, "'Sample'", false), @"#1 2023/12/01 10:00-12:00 (120 min) :SAMPLE Sample Task");
    }

    #[test]
    fn quoted_today_searches_task_text() {
        let mut db = seeded();
        db.insert_record(&NewRecord::new(
            day(2023, 12, 4),
            "08:00",
            "08:15",
            "plan today",
            ":ADMIN",
        ))
        .unwrap();

        assert_snapshot!(query(&db, "'today'", false), @"#4 2023/12/04 08:00-08:15 (15 min) :ADMIN plan today");
    }

    #[test]
    fn quoted_date_searches_task_text() {
        let db = seeded();
        assert_snapshot!(query(&db, "'2023/12/01'", false), @"#3 2024/03/09 13:00-14:30 (90 min) :STUDY read 2023/12/01 notes");
    }

    #[test]
    fn query_without_matches() {
        let db = seeded();
        assert_eq!(query(&db, "nothing like this", false), "No records found.\n");
        assert_eq!(query(&db, ":NONE", true), "[]\n");
    }

    #[test]
    fn query_json() {
        let db = seeded();
        assert_snapshot!(query(&db, "standup", true), @r#"
        [
          {
            "id": 2,
            "date": "2023/12/02",
            "start_time": "09:30AM",
            "end_time": "10:15AM",
            "task": "standup",
            "tag": ":WORK",
            "duration": 45
          }
        ]
        "#);
    }
}
