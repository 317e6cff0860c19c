//! Library-level tests for the store contracts and the aggregation views.

use chrono::NaiveDate;
use tracklog::core::habits::{daily_trend, forecast, rolling_mean};
use tracklog::core::workouts::{
    category_breakdown, daily_volume, exercise_summaries, personal_records, volume_summary,
};
use tracklog::db::{HabitStore, WorkoutStore};
use tracklog::models::exercise::{Category, category_for};
use tracklog::models::habit::HabitEntry;
use tracklog::models::workout::{SetEntry, WorkoutSet};

mod common;
use common::setup_test_db;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

fn habit_entry(id: i64, habit: &str, value: i64, date: &str) -> HabitEntry {
    HabitEntry {
        id,
        habit: habit.to_string(),
        value,
        date: d(date),
    }
}

fn workout_set(id: i64, date: &str, exercise: &str, set_num: i64, reps: i64, weight: f64) -> WorkoutSet {
    WorkoutSet {
        id,
        date: d(date),
        exercise: exercise.to_string(),
        set_num,
        reps,
        weight,
        note: String::new(),
    }
}

// ---------------------------------------------------------------
// Store contracts
// ---------------------------------------------------------------

#[test]
fn test_load_all_empty_after_ensure_schema() {
    let db_path = setup_test_db("agg_empty_store");
    let store = HabitStore::open(&db_path).expect("open");
    store.ensure_schema().expect("schema");

    let rows = store.load_all().expect("load");
    assert!(rows.is_empty());
}

#[test]
fn test_append_grows_log_and_ids_increase() {
    let db_path = setup_test_db("agg_append_grows");
    let store = HabitStore::open(&db_path).expect("open");
    store.ensure_schema().expect("schema");
    // schema creation is idempotent
    store.ensure_schema().expect("schema twice");

    store.append("water", 8, d("2024-01-01")).expect("append");
    let before = store.load_all().expect("load");

    store.append("water", 6, d("2024-01-02")).expect("append");
    let after = store.load_all().expect("load");

    assert_eq!(after.len(), before.len() + 1);
    let max_before = before.iter().map(|e| e.id).max().unwrap();
    let new_row = after.last().unwrap();
    assert!(new_row.id > max_before);
    assert_eq!(new_row.habit, "water");
    assert_eq!(new_row.value, 6);
    assert_eq!(new_row.date, d("2024-01-02"));
}

#[test]
fn test_batch_shares_date_and_exercise_with_ordered_set_nums() {
    let db_path = setup_test_db("agg_batch_numbering");
    let mut store = WorkoutStore::open(&db_path).expect("open");
    store.ensure_schema().expect("schema");

    let sets = vec![
        SetEntry { reps: 5, weight: 100.0, note: String::new() },
        SetEntry { reps: 5, weight: 100.0, note: String::new() },
        SetEntry { reps: 5, weight: 105.0, note: "heavy".to_string() },
    ];
    let written = store
        .append_batch(d("2024-01-05"), "Squat", &sets)
        .expect("batch");
    assert_eq!(written, 3);

    let rows = store.load_all().expect("load");
    assert_eq!(rows.len(), 3);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.set_num, (i + 1) as i64);
        assert_eq!(row.date, d("2024-01-05"));
        assert_eq!(row.exercise, "Squat");
    }
    assert_eq!(rows[2].note, "heavy");
}

// ---------------------------------------------------------------
// Habit views
// ---------------------------------------------------------------

#[test]
fn test_daily_trend_groups_by_date_and_habit() {
    let entries = vec![
        habit_entry(1, "water", 3, "2024-01-01"),
        habit_entry(2, "water", 5, "2024-01-01"),
        habit_entry(3, "reading", 20, "2024-01-01"),
        habit_entry(4, "water", 6, "2024-01-02"),
    ];

    let points = daily_trend(&entries);
    assert_eq!(points.len(), 3);
    assert_eq!(points[0].habit, "reading");
    assert_eq!(points[0].total, 20);
    assert_eq!(points[1].habit, "water");
    assert_eq!(points[1].total, 8);
    assert_eq!(points[2].date, d("2024-01-02"));
    assert_eq!(points[2].total, 6);
}

#[test]
fn test_daily_trend_empty_snapshot() {
    assert!(daily_trend(&[]).is_empty());
}

#[test]
fn test_rolling_mean_trailing_window() {
    assert_eq!(rolling_mean(&[8, 6, 10], 3), vec![8.0, 7.0, 8.0]);
    assert_eq!(rolling_mean(&[5], 3), vec![5.0]);
    assert_eq!(rolling_mean(&[], 3), Vec::<f64>::new());
    // window saturates: fourth value averages the last three only
    assert_eq!(rolling_mean(&[0, 0, 0, 9], 3), vec![0.0, 0.0, 0.0, 3.0]);
}

#[test]
fn test_forecast_projects_last_smoothed_value() {
    let entries = vec![
        habit_entry(1, "water", 8, "2024-01-01"),
        habit_entry(2, "water", 6, "2024-01-02"),
        habit_entry(3, "water", 10, "2024-01-03"),
    ];

    let fc = forecast(&entries, "water").expect("forecast");
    assert_eq!(fc.observed.len(), 3);
    assert_eq!(fc.observed[1].smoothed, 7.0);
    assert_eq!(fc.forecast.len(), 7);
    assert_eq!(fc.forecast[0].date, d("2024-01-04"));
    assert_eq!(fc.forecast[6].date, d("2024-01-10"));
    assert!(fc.forecast.iter().all(|p| p.value == 8.0));
}

#[test]
fn test_forecast_unaffected_by_other_habits() {
    let water = vec![
        habit_entry(1, "water", 8, "2024-01-01"),
        habit_entry(2, "water", 6, "2024-01-02"),
        habit_entry(3, "water", 10, "2024-01-03"),
    ];
    let mut mixed = vec![
        habit_entry(10, "reading", 100, "2024-01-01"),
        water[0].clone(),
        habit_entry(11, "reading", 50, "2024-01-02"),
        water[1].clone(),
        water[2].clone(),
        habit_entry(12, "reading", 75, "2024-01-04"),
    ];

    let plain = forecast(&water, "water").expect("forecast");
    let with_noise = forecast(&mixed, "water").expect("forecast");
    assert_eq!(plain.observed, with_noise.observed);
    assert_eq!(plain.forecast, with_noise.forecast);

    // order of unrelated rows is irrelevant too
    mixed.reverse();
    let reversed = forecast(&mixed, "water").expect("forecast");
    assert_eq!(plain.forecast, reversed.forecast);
}

#[test]
fn test_forecast_missing_habit_is_none() {
    let entries = vec![habit_entry(1, "water", 8, "2024-01-01")];
    assert!(forecast(&entries, "tea").is_none());
    assert!(forecast(&[], "water").is_none());
}

// ---------------------------------------------------------------
// Workout views
// ---------------------------------------------------------------

#[test]
fn test_category_sums_partition_total_volume() {
    let sets = vec![
        workout_set(1, "2024-01-05", "Squat", 1, 5, 100.0),
        workout_set(2, "2024-01-05", "Bench Press", 1, 8, 60.0),
        workout_set(3, "2024-01-05", "Deadlift", 1, 5, 140.0),
        workout_set(4, "2024-01-06", "Juggling", 1, 10, 2.0),
    ];

    let breakdown = category_breakdown(&sets);
    let total_by_category: f64 = breakdown.iter().map(|c| c.volume).sum();
    let total: f64 = sets.iter().map(|s| s.volume()).sum();
    assert_eq!(total_by_category, total);

    let other = breakdown
        .iter()
        .find(|c| c.category == Category::Other)
        .expect("unmapped exercise lands in Other");
    assert_eq!(other.volume, 20.0);

    // category absent from the data produces no row
    assert!(!breakdown.iter().any(|c| c.category == Category::Core));
}

#[test]
fn test_catalog_lookup() {
    assert_eq!(category_for("Squat"), Category::Legs);
    assert_eq!(category_for("Bench Press"), Category::Push);
    assert_eq!(category_for("Deadlift"), Category::Pull);
    assert_eq!(category_for("Plank"), Category::Core);
    // exact match only
    assert_eq!(category_for("squat"), Category::Other);
    assert_eq!(category_for("Yoga"), Category::Other);
}

#[test]
fn test_personal_records_take_max_weight() {
    let sets = vec![
        workout_set(1, "2024-01-05", "Squat", 1, 5, 100.0),
        workout_set(2, "2024-01-05", "Squat", 2, 5, 105.0),
        workout_set(3, "2024-01-12", "Squat", 1, 5, 102.5),
    ];

    let records = personal_records(&sets);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].exercise, "Squat");
    assert_eq!(records[0].max_weight, 105.0);
}

#[test]
fn test_exercise_summary_scenario() {
    let sets = vec![
        workout_set(1, "2024-01-05", "Squat", 1, 5, 100.0),
        workout_set(2, "2024-01-05", "Squat", 2, 5, 100.0),
        workout_set(3, "2024-01-05", "Squat", 3, 5, 105.0),
    ];

    let summaries = exercise_summaries(&sets);
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].total_sets, 3);
    assert_eq!(summaries[0].total_reps, 15);
    assert_eq!(summaries[0].total_volume, 1525.0);
}

#[test]
fn test_daily_volume_ordered_by_date() {
    let sets = vec![
        workout_set(1, "2024-01-07", "Squat", 1, 5, 100.0),
        workout_set(2, "2024-01-05", "Bench Press", 1, 8, 60.0),
        workout_set(3, "2024-01-05", "Squat", 1, 5, 100.0),
    ];

    let volumes = daily_volume(&sets);
    assert_eq!(volumes.len(), 2);
    assert_eq!(volumes[0].date, d("2024-01-05"));
    assert_eq!(volumes[0].volume, 980.0);
    assert_eq!(volumes[1].date, d("2024-01-07"));
    assert_eq!(volumes[1].volume, 500.0);
}

#[test]
fn test_volume_summary_week_and_month_filters() {
    // "today" pinned mid-week: Wednesday 2024-03-13, ISO week 11
    let today = d("2024-03-13");
    let sets = vec![
        workout_set(1, "2024-03-11", "Squat", 1, 5, 100.0),   // same ISO week
        workout_set(2, "2024-03-01", "Squat", 1, 5, 80.0),    // same month, earlier week
        workout_set(3, "2023-03-20", "Squat", 1, 5, 60.0),    // March of another year
        workout_set(4, "2024-02-28", "Squat", 1, 5, 40.0),    // different month
    ];

    let s = volume_summary(&sets, today, 10_000.0);
    assert_eq!(s.weekly_volume, 500.0);
    // month filter is year-blind: both March rows count
    assert_eq!(s.monthly_volume, 500.0 + 400.0 + 300.0);
    assert!((s.goal_progress_pct - 5.0).abs() < 1e-9);
}

#[test]
fn test_volume_summary_goal_caps_at_hundred() {
    let today = d("2024-03-13");
    let sets = vec![workout_set(1, "2024-03-13", "Squat", 1, 100, 200.0)];

    let s = volume_summary(&sets, today, 10_000.0);
    assert_eq!(s.weekly_volume, 20_000.0);
    assert_eq!(s.goal_progress_pct, 100.0);
}

#[test]
fn test_views_over_empty_snapshot() {
    let s = volume_summary(&[], d("2024-03-13"), 10_000.0);
    assert_eq!(s.weekly_volume, 0.0);
    assert_eq!(s.monthly_volume, 0.0);
    assert_eq!(s.goal_progress_pct, 0.0);

    assert!(personal_records(&[]).is_empty());
    assert!(category_breakdown(&[]).is_empty());
    assert!(exercise_summaries(&[]).is_empty());
    assert!(daily_volume(&[]).is_empty());
}

// ---------------------------------------------------------------
// Set spec parsing
// ---------------------------------------------------------------

#[test]
fn test_set_entry_parse() {
    assert_eq!(
        SetEntry::parse("5x100").unwrap(),
        SetEntry { reps: 5, weight: 100.0, note: String::new() }
    );
    assert_eq!(
        SetEntry::parse("8x72.5@felt easy").unwrap(),
        SetEntry { reps: 8, weight: 72.5, note: "felt easy".to_string() }
    );
    // note may contain further '@' and 'x' characters
    assert_eq!(
        SetEntry::parse("3x60@tempo 3x1x1 @ RPE8").unwrap().note,
        "tempo 3x1x1 @ RPE8"
    );
    assert_eq!(SetEntry::parse("10X20").unwrap().reps, 10);

    assert!(SetEntry::parse("banana").is_err());
    assert!(SetEntry::parse("5x").is_err());
    assert!(SetEntry::parse("x100").is_err());
    assert!(SetEntry::parse("-5x100").is_err());
    assert!(SetEntry::parse("5x-100").is_err());
}
