pub mod habits;
pub mod workouts;

pub use habits::HabitStore;
pub use workouts::WorkoutStore;

use crate::errors::AppError;
use chrono::NaiveDate;

/// Parse a TEXT date column ("YYYY-MM-DD") into a NaiveDate, mapping the
/// failure into a rusqlite conversion error so `query_map` surfaces it.
pub(crate) fn date_from_column(date_str: String) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str)),
        )
    })
}
