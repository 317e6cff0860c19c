//! Derived views over a workout-log snapshot.
//!
//! Pure functions over the snapshot returned by
//! `WorkoutStore::load_all`. Volume is reps × weight, computed per row;
//! group keys are the distinct values found in the data.

use crate::models::exercise::{Category, category_for};
use crate::models::workout::WorkoutSet;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Weekly and monthly load relative to `today`, plus goal progress.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeSummary {
    pub weekly_volume: f64,
    pub monthly_volume: f64,
    pub goal_progress_pct: f64,
}

/// Total volume for the current ISO week and calendar month.
///
/// The monthly figure filters on the month number only: rows from the
/// same month of a different year are counted. Kept to match the source
/// behavior (see DESIGN.md). The weekly figure compares the full
/// (ISO year, week) pair.
pub fn volume_summary(sets: &[WorkoutSet], today: NaiveDate, weekly_goal: f64) -> VolumeSummary {
    let week = today.iso_week();
    let month = today.month();

    let weekly_volume: f64 = sets
        .iter()
        .filter(|s| s.date.iso_week() == week)
        .map(|s| s.volume())
        .sum();

    let monthly_volume: f64 = sets
        .iter()
        .filter(|s| s.date.month() == month)
        .map(|s| s.volume())
        .sum();

    let goal_progress_pct = (weekly_volume / weekly_goal).min(1.0) * 100.0;

    VolumeSummary {
        weekly_volume,
        monthly_volume,
        goal_progress_pct,
    }
}

/// Heaviest weight lifted per exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalRecord {
    pub exercise: String,
    pub max_weight: f64,
}

/// Max weight per exercise, ordered by exercise name.
pub fn personal_records(sets: &[WorkoutSet]) -> Vec<PersonalRecord> {
    let mut best: BTreeMap<String, f64> = BTreeMap::new();

    for s in sets {
        let entry = best.entry(s.exercise.clone()).or_insert(s.weight);
        if s.weight > *entry {
            *entry = s.weight;
        }
    }

    best.into_iter()
        .map(|(exercise, max_weight)| PersonalRecord {
            exercise,
            max_weight,
        })
        .collect()
}

/// Summed volume for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryVolume {
    pub category: Category,
    pub volume: f64,
}

/// Volume per category via the fixed catalog; unmapped exercises land in
/// `Other`. Categories absent from the data produce no row.
pub fn category_breakdown(sets: &[WorkoutSet]) -> Vec<CategoryVolume> {
    let mut totals: BTreeMap<Category, f64> = BTreeMap::new();

    for s in sets {
        *totals.entry(category_for(&s.exercise)).or_insert(0.0) += s.volume();
    }

    totals
        .into_iter()
        .map(|(category, volume)| CategoryVolume { category, volume })
        .collect()
}

/// Per-exercise totals across the whole log.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseSummary {
    pub exercise: String,
    pub total_sets: i64,
    pub total_reps: i64,
    pub total_volume: f64,
}

/// Set count, rep total and volume total per exercise, ordered by name.
pub fn exercise_summaries(sets: &[WorkoutSet]) -> Vec<ExerciseSummary> {
    let mut totals: BTreeMap<String, (i64, i64, f64)> = BTreeMap::new();

    for s in sets {
        let entry = totals.entry(s.exercise.clone()).or_insert((0, 0, 0.0));
        entry.0 += 1;
        entry.1 += s.reps;
        entry.2 += s.volume();
    }

    totals
        .into_iter()
        .map(|(exercise, (total_sets, total_reps, total_volume))| ExerciseSummary {
            exercise,
            total_sets,
            total_reps,
            total_volume,
        })
        .collect()
}

/// Summed volume for one date.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyVolume {
    pub date: NaiveDate,
    pub volume: f64,
}

/// Volume per date, ascending. Feeds the volume-over-time table.
pub fn daily_volume(sets: &[WorkoutSet]) -> Vec<DailyVolume> {
    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for s in sets {
        *totals.entry(s.date).or_insert(0.0) += s.volume();
    }

    totals
        .into_iter()
        .map(|(date, volume)| DailyVolume { date, volume })
        .collect()
}
