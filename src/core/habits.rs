//! Derived views over a habit-log snapshot.
//!
//! Pure functions: they take the snapshot returned by
//! `HabitStore::load_all` and compute summaries without touching the
//! store. Group keys are the distinct values found in the snapshot; an
//! empty snapshot yields empty views, never an error.

use crate::models::habit::HabitEntry;
use chrono::{Days, NaiveDate};
use std::collections::BTreeMap;

/// Window of the trailing rolling mean used for smoothing.
const ROLLING_WINDOW: usize = 3;

/// Number of future days the forecast projects.
const FORECAST_DAYS: u64 = 7;

/// Summed value for one (date, habit) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub habit: String,
    pub total: i64,
}

/// Group by (date, habit) and sum values. Ordered by date, then habit.
/// One point per pair; feeds the multi-series trend table.
pub fn daily_trend(entries: &[HabitEntry]) -> Vec<TrendPoint> {
    let mut totals: BTreeMap<(NaiveDate, String), i64> = BTreeMap::new();

    for e in entries {
        *totals.entry((e.date, e.habit.clone())).or_insert(0) += e.value;
    }

    totals
        .into_iter()
        .map(|((date, habit), total)| TrendPoint { date, habit, total })
        .collect()
}

/// Distinct habit names in first-seen order, for the forecast picker.
pub fn habit_names(entries: &[HabitEntry]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for e in entries {
        if !names.iter().any(|n| n == &e.habit) {
            names.push(e.habit.clone());
        }
    }
    names
}

/// Trailing rolling mean with a minimum of one sample: element i is the
/// mean of the last up-to-`window` values ending at i.
pub fn rolling_mean(values: &[i64], window: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());

    for i in 0..values.len() {
        let lo = (i + 1).saturating_sub(window);
        let slice = &values[lo..=i];
        let sum: i64 = slice.iter().sum();
        out.push(sum as f64 / slice.len() as f64);
    }

    out
}

/// One observed sample with its smoothed value.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservedPoint {
    pub date: NaiveDate,
    pub value: i64,
    pub smoothed: f64,
}

/// One projected future sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Forecast for a single habit: its observed history (date-sorted, with
/// the rolling mean alongside) and seven projected days.
#[derive(Debug, Clone)]
pub struct HabitForecast {
    pub habit: String,
    pub observed: Vec<ObservedPoint>,
    pub forecast: Vec<ForecastPoint>,
}

/// Build the flat forecast for one habit, or None when the habit has no
/// rows. The last smoothed value is projected unchanged over the next
/// seven calendar days after the latest observed date. Deliberately not
/// a model: a flat extrapolation of the latest rolling mean.
///
/// Rows of other habits never influence the result: the snapshot is
/// filtered by name before sorting, so their presence or order is
/// irrelevant.
pub fn forecast(entries: &[HabitEntry], habit: &str) -> Option<HabitForecast> {
    let mut subset: Vec<&HabitEntry> = entries.iter().filter(|e| e.habit == habit).collect();
    if subset.is_empty() {
        return None;
    }

    // Stable sort: same-date rows keep insertion order.
    subset.sort_by_key(|e| e.date);

    let values: Vec<i64> = subset.iter().map(|e| e.value).collect();
    let smoothed = rolling_mean(&values, ROLLING_WINDOW);

    let observed: Vec<ObservedPoint> = subset
        .iter()
        .zip(smoothed.iter())
        .map(|(e, ma)| ObservedPoint {
            date: e.date,
            value: e.value,
            smoothed: *ma,
        })
        .collect();

    let last_date = subset.iter().map(|e| e.date).max()?;
    let last_ma = *smoothed.last()?;

    let forecast = (1..=FORECAST_DAYS)
        .filter_map(|i| last_date.checked_add_days(Days::new(i)))
        .map(|date| ForecastPoint {
            date,
            value: last_ma,
        })
        .collect();

    Some(HabitForecast {
        habit: habit.to_string(),
        observed,
        forecast,
    })
}
