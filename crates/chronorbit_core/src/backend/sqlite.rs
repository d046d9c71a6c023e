//! SQLite reference backend.
//!
//! Opens the database per call, mirroring the short-lived connection usage
//! of the FFI layer.

use crate::backend::schedule_backend::{BackendResult, ScheduleBackend, ScheduleInsert};
use crate::db::open_db;
use rusqlite::params;
use std::path::{Path, PathBuf};

/// File-backed `schedules` table writer.
pub struct SqliteScheduleBackend {
    db_path: PathBuf,
}

impl SqliteScheduleBackend {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Reads stored records back in insertion order.
    pub fn list_records(&self) -> BackendResult<Vec<ScheduleInsert>> {
        let conn = open_db(&self.db_path)?;
        let mut stmt =
            conn.prepare("SELECT title, start_time, end_time FROM schedules ORDER BY id ASC;")?;
        let rows = stmt.query_map([], |row| {
            Ok(ScheduleInsert {
                title: row.get(0)?,
                start_time: row.get(1)?,
                end_time: row.get(2)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}

impl ScheduleBackend for SqliteScheduleBackend {
    fn insert(&self, record: &ScheduleInsert) -> BackendResult<()> {
        let conn = open_db(&self.db_path)?;
        conn.execute(
            "INSERT INTO schedules (title, start_time, end_time) VALUES (?1, ?2, ?3);",
            params![
                record.title.as_str(),
                record.start_time.as_str(),
                record.end_time.as_str()
            ],
        )?;
        Ok(())
    }
}
