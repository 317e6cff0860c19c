//! SQLite store for the workout set log.

use crate::db::date_from_column;
use crate::errors::AppResult;
use crate::models::workout::{SetEntry, WorkoutSet};
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};
use std::path::Path;

/// Handle to the workout database. Owns the connection for the duration
/// of one command invocation.
pub struct WorkoutStore {
    pub conn: Connection,
}

pub fn map_row(row: &Row) -> Result<WorkoutSet> {
    let date = date_from_column(row.get("date")?)?;

    Ok(WorkoutSet {
        id: row.get("id")?,
        date,
        exercise: row.get("exercise")?,
        set_num: row.get("set_num")?,
        reps: row.get("reps")?,
        weight: row.get("weight")?,
        note: row.get("note")?,
    })
}

impl WorkoutStore {
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Create the workout_sets table if absent. Idempotent.
    pub fn ensure_schema(&self) -> AppResult<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS workout_sets (
                id       INTEGER PRIMARY KEY AUTOINCREMENT,
                date     TEXT NOT NULL,               -- YYYY-MM-DD
                exercise TEXT NOT NULL,
                set_num  INTEGER NOT NULL,            -- 1-based within the batch
                reps     INTEGER NOT NULL DEFAULT 0,
                weight   REAL NOT NULL DEFAULT 0,     -- kg
                note     TEXT NOT NULL DEFAULT ''
            );
            ",
        )?;
        Ok(())
    }

    /// Append one submission batch: one row per set, `set_num` = 1..n in
    /// submitted order, all sharing the same date and exercise.
    ///
    /// The batch runs inside a single transaction; a failure on any set
    /// commits nothing. Returns the number of rows written.
    pub fn append_batch(
        &mut self,
        date: NaiveDate,
        exercise: &str,
        sets: &[SetEntry],
    ) -> AppResult<usize> {
        let tx = self.conn.transaction()?;
        let date_str = date.format("%Y-%m-%d").to_string();

        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO workout_sets (date, exercise, set_num, reps, weight, note)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for (i, set) in sets.iter().enumerate() {
                stmt.execute(params![
                    date_str,
                    exercise,
                    (i + 1) as i64,
                    set.reps,
                    set.weight,
                    set.note,
                ])?;
            }
        }

        tx.commit()?;
        Ok(sets.len())
    }

    /// Return the full log in insertion order.
    pub fn load_all(&self) -> AppResult<Vec<WorkoutSet>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, date, exercise, set_num, reps, weight, note \
             FROM workout_sets \
             ORDER BY id ASC",
        )?;
        let rows = stmt.query_map([], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}
