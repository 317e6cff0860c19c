use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::Serialize;

/// One logged workout set.
///
/// A single `workout add` produces one row per set, all sharing the same
/// date and exercise, with `set_num` numbered 1..n in submission order.
/// Rows are append-only and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutSet {
    pub id: i64,
    pub date: NaiveDate,  // ⇔ workout_sets.date (TEXT "YYYY-MM-DD")
    pub exercise: String, // ⇔ workout_sets.exercise (TEXT, catalog or free text)
    pub set_num: i64,     // ⇔ workout_sets.set_num (1-based within the batch)
    pub reps: i64,        // ⇔ workout_sets.reps (INTEGER >= 0)
    pub weight: f64,      // ⇔ workout_sets.weight (REAL, kg)
    pub note: String,     // ⇔ workout_sets.note (TEXT, may be empty)
}

impl WorkoutSet {
    /// Training volume of this set: reps × weight.
    /// Derived on load, never persisted.
    pub fn volume(&self) -> f64 {
        self.reps as f64 * self.weight
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// One set of a submission batch, before it is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SetEntry {
    pub reps: i64,
    pub weight: f64,
    pub note: String,
}

impl SetEntry {
    /// Parse a `REPSxWEIGHT` or `REPSxWEIGHT@NOTE` spec, e.g. `5x100`,
    /// `8x72.5@felt easy`. Weight accepts decimals; the note is free text
    /// and may contain further `@` characters.
    pub fn parse(spec: &str) -> AppResult<Self> {
        let bad = || AppError::InvalidSetSpec(spec.to_string());

        let (counts, note) = match spec.split_once('@') {
            Some((c, n)) => (c, n.trim().to_string()),
            None => (spec, String::new()),
        };

        let (reps_raw, weight_raw) = counts.split_once(['x', 'X']).ok_or_else(bad)?;

        let reps: i64 = reps_raw.trim().parse().map_err(|_| bad())?;
        let weight: f64 = weight_raw.trim().parse().map_err(|_| bad())?;

        if reps < 0 || weight < 0.0 || !weight.is_finite() {
            return Err(bad());
        }

        Ok(SetEntry { reps, weight, note })
    }
}
