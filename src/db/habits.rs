//! SQLite store for the habit log.

use crate::db::date_from_column;
use crate::errors::AppResult;
use crate::models::habit::HabitEntry;
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};
use std::path::Path;

/// Handle to the habit database. Owns the connection for the duration of
/// one command invocation.
pub struct HabitStore {
    pub conn: Connection,
}

pub fn map_row(row: &Row) -> Result<HabitEntry> {
    let date = date_from_column(row.get("date")?)?;

    Ok(HabitEntry {
        id: row.get("id")?,
        habit: row.get("habit")?,
        value: row.get("value")?,
        date,
    })
}

impl HabitStore {
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Create the habits table if absent. Idempotent, called on every
    /// command before any read or write.
    pub fn ensure_schema(&self) -> AppResult<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS habits (
                id    INTEGER PRIMARY KEY AUTOINCREMENT,
                habit TEXT NOT NULL,
                value INTEGER NOT NULL DEFAULT 0,
                date  TEXT NOT NULL           -- YYYY-MM-DD
            );
            ",
        )?;
        Ok(())
    }

    /// Append one observation. The id is assigned by SQLite.
    pub fn append(&self, habit: &str, value: i64, date: NaiveDate) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO habits (habit, value, date) VALUES (?1, ?2, ?3)",
            params![habit, value, date.format("%Y-%m-%d").to_string()],
        )?;
        Ok(())
    }

    /// Return the full log in insertion order.
    pub fn load_all(&self) -> AppResult<Vec<HabitEntry>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT id, habit, value, date FROM habits ORDER BY id ASC")?;
        let rows = stmt.query_map([], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}
