use chrono::NaiveDate;
use serde::Serialize;

/// One logged habit observation.
///
/// Rows are append-only: once inserted they are never updated or deleted,
/// and `id` grows monotonically with insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct HabitEntry {
    pub id: i64,
    pub habit: String,      // ⇔ habits.habit (TEXT, free text)
    pub value: i64,         // ⇔ habits.value (INTEGER >= 0)
    pub date: NaiveDate,    // ⇔ habits.date (TEXT "YYYY-MM-DD")
}

impl HabitEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
