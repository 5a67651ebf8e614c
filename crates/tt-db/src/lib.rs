//! Storage layer for the time tracker.
//!
//! Provides persistence for time records using `rusqlite`.
//!
//! # Thread Safety
//!
//! The [`Database`] type wraps a `rusqlite::Connection`, which is `Send` but not `Sync`.
//! The tracker runs one command at a time against one connection, so no further
//! synchronization is needed. Concurrent access from several processes is not supported.
//!
//! # Schema
//!
//! A single table (named by [`StorageConfig::table_name`]) holds every record:
//!
//! | column       | type    | notes                                   |
//! |--------------|---------|-----------------------------------------|
//! | `id`         | INTEGER | `AUTOINCREMENT`, never reused           |
//! | `date`       | TEXT    | canonical `YYYY/MM/DD`                  |
//! | `start_time` | TEXT    | as entered                              |
//! | `end_time`   | TEXT    | as entered                              |
//! | `task`       | TEXT    |                                         |
//! | `tag`        | TEXT    |                                         |
//! | `duration`   | INTEGER | minutes, computed once at insert        |
//!
//! ## Date Format
//!
//! Dates are zero-padded, so lexicographic ordering matches chronological ordering
//! and the range query can use a plain `BETWEEN`.

use std::path::Path;

use chrono::NaiveDate;
use rusqlite::{Connection, Row, params};
use thiserror::Error;
use tt_core::date::{self, CANONICAL_DATE_FORMAT};
use tt_core::{InputError, NewRecord, Query, TimeRecord};

/// Table used when no other name is configured.
pub const DEFAULT_TABLE_NAME: &str = "time_records";

/// Database errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// An error from the underlying database.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// A record could not be built from the supplied values.
    #[error(transparent)]
    Input(#[from] InputError),
    /// The configured table name is not a plain SQL identifier.
    #[error("invalid table name: {0:?}")]
    InvalidTableName(String),
}

/// Fixed settings for a [`Database`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Name of the records table.
    pub table_name: String,
    /// `strftime` format of stored dates.
    pub date_format: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            date_format: CANONICAL_DATE_FORMAT.to_string(),
        }
    }
}

impl StorageConfig {
    /// Builds a config for the given table with the canonical date format.
    pub fn with_table(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Self::default()
        }
    }

    /// The table name is spliced into SQL text, so it must be a bare identifier.
    fn validate(&self) -> Result<(), DbError> {
        let mut chars = self.table_name.chars();
        let valid = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        if valid {
            Ok(())
        } else {
            Err(DbError::InvalidTableName(self.table_name.clone()))
        }
    }
}

/// Database connection wrapper.
///
/// See the [module documentation](self) for thread safety considerations.
pub struct Database {
    conn: Connection,
    config: StorageConfig,
}

impl Database {
    /// Opens a database at the given path, creating it if necessary.
    ///
    /// The database schema is automatically initialized on first open.
    pub fn open(path: &Path, config: StorageConfig) -> Result<Self, DbError> {
        config.validate()?;
        let conn = Connection::open(path)?;
        let db = Self { conn, config };
        db.init()?;
        tracing::debug!(path = %path.display(), table = %db.config.table_name, "opened database");
        Ok(db)
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing. The database is destroyed when the connection closes.
    pub fn open_in_memory(config: StorageConfig) -> Result<Self, DbError> {
        config.validate()?;
        let conn = Connection::open_in_memory()?;
        let db = Self { conn, config };
        db.init()?;
        Ok(db)
    }

    /// Returns the settings this database was opened with.
    pub const fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Initializes the database schema.
    ///
    /// This is idempotent - safe to call on an already-initialized database.
    pub fn init(&self) -> Result<(), DbError> {
        create_schema(&self.conn, &self.config.table_name)
    }

    /// Inserts a record and returns it as stored.
    ///
    /// The duration is computed here from the start and end times. If either
    /// time is malformed nothing is written.
    pub fn insert_record(&mut self, record: &NewRecord) -> Result<TimeRecord, DbError> {
        let duration = tt_core::duration_minutes(&record.start_time, &record.end_time)?;
        if duration < 0 {
            tracing::warn!(
                start = %record.start_time,
                end = %record.end_time,
                duration,
                "end time is earlier than start time; storing negative duration"
            );
        }

        let date = date::format_date(record.date, &self.config.date_format);
        let table = &self.config.table_name;
        self.conn.execute(
            &format!(
                "
                INSERT INTO {table} (date, start_time, end_time, task, tag, duration)
                VALUES (?, ?, ?, ?, ?, ?)
                "
            ),
            params![
                date,
                record.start_time,
                record.end_time,
                record.task,
                record.tag,
                duration,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, %date, duration, "inserted record");

        Ok(TimeRecord {
            id,
            date,
            start_time: record.start_time.clone(),
            end_time: record.end_time.clone(),
            task: record.task.clone(),
            tag: record.tag.clone(),
            duration,
        })
    }

    /// Runs a query using the current local date for "today".
    pub fn query(&self, query: &Query) -> Result<Vec<TimeRecord>, DbError> {
        self.query_at(query, date::today())
    }

    /// Runs a query, resolving "today" to `today`.
    ///
    /// Single-value queries are normalized first: a value in the date format is
    /// re-formatted, the "today" token becomes `today`, and anything else is
    /// used as is. Range bounds are used as given. Rows come back in insertion
    /// order.
    pub fn query_at(&self, query: &Query, today: NaiveDate) -> Result<Vec<TimeRecord>, DbError> {
        let format = &self.config.date_format;
        let (clause, values) = match query {
            Query::Date(value) => (
                "date = ?",
                vec![date::normalize_query_value(value, format, today)],
            ),
            Query::Tag(value) => (
                "instr(tag, ?) > 0",
                vec![date::normalize_query_value(value, format, today)],
            ),
            Query::Task(value) => {
                let normalized = date::normalize_query_value(value, format, today);
                (
                    "instr(task, ?) > 0",
                    vec![Query::task_pattern(&normalized).to_string()],
                )
            }
            Query::DateRange { start, end } => {
                ("date BETWEEN ? AND ?", vec![start.clone(), end.clone()])
            }
        };
        tracing::debug!(strategy = query.strategy_name(), ?values, "querying records");

        let table = &self.config.table_name;
        self.select(
            &format!("SELECT {COLUMNS} FROM {table} WHERE {clause} ORDER BY id ASC"),
            rusqlite::params_from_iter(values),
        )
    }

    /// Lists every record in insertion order.
    pub fn all_records(&self) -> Result<Vec<TimeRecord>, DbError> {
        let table = &self.config.table_name;
        self.select(&format!("SELECT {COLUMNS} FROM {table} ORDER BY id ASC"), [])
    }

    /// Removes every record by dropping and recreating the table.
    ///
    /// Both steps run in one transaction, so a failed recreate leaves the old
    /// table in place. The id sequence restarts afterwards.
    pub fn clear_all(&mut self) -> Result<(), DbError> {
        let table = &self.config.table_name;
        let tx = self.conn.transaction()?;
        tx.execute_batch(&format!("DROP TABLE IF EXISTS {table};"))?;
        create_schema(&tx, table)?;
        tx.commit()?;
        tracing::info!(%table, "cleared all records");
        Ok(())
    }

    fn select<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<TimeRecord>, DbError> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, map_record)?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}

/// Creates the records table and its indexes if they are missing.
fn create_schema(conn: &Connection, table: &str) -> Result<(), DbError> {
    conn.execute_batch(&format!(
        "
        CREATE TABLE IF NOT EXISTS {table} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            start_time TEXT NOT NULL,
            end_time TEXT NOT NULL,
            task TEXT NOT NULL,
            tag TEXT NOT NULL,
            duration INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_{table}_date ON {table}(date);
        CREATE INDEX IF NOT EXISTS idx_{table}_tag ON {table}(tag);
        "
    ))?;
    Ok(())
}

const COLUMNS: &str = "id, date, start_time, end_time, task, tag, duration";

fn map_record(row: &Row<'_>) -> rusqlite::Result<TimeRecord> {
    Ok(TimeRecord {
        id: row.get(0)?,
        date: row.get(1)?,
        start_time: row.get(2)?,
        end_time: row.get(3)?,
        task: row.get(4)?,
        tag: row.get(5)?,
        duration: row.get(6)?,
    })
}
