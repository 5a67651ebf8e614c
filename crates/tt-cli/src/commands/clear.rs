//! Clear command for deleting every record.

use std::io::Write;

use anyhow::Result;

use tt_db::Database;

pub fn run<W: Write>(writer: &mut W, db: &mut Database) -> Result<()> {
    db.clear_all()?;
    writeln!(writer, "Database cleared.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;
    use tt_core::NewRecord;
    use tt_db::StorageConfig;

    #[test]
    fn clear_removes_all_records() {
        let mut db = Database::open_in_memory(StorageConfig::default()).unwrap();
        let date = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        db.insert_record(&NewRecord::new(date, "10:00", "12:00", "Task", ":SAMPLE"))
            .unwrap();

        let mut output = Vec::new();
        run(&mut output, &mut db).unwrap();
        run(&mut output, &mut db).unwrap();

        assert!(db.all_records().unwrap().is_empty());
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Database cleared.\nDatabase cleared.\n"
        );
    }
}
