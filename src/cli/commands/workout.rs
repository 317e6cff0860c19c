use crate::cli::parser::WorkoutAction;
use crate::config::Config;
use crate::core::workouts::{
    category_breakdown, daily_volume, exercise_summaries, personal_records, volume_summary,
};
use crate::db::WorkoutStore;
use crate::errors::{AppError, AppResult};
use crate::models::exercise::EXERCISE_CATALOG;
use crate::models::workout::SetEntry;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::date;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub fn handle(action: &WorkoutAction, cfg: &Config) -> AppResult<()> {
    match action {
        WorkoutAction::Add {
            exercise,
            sets,
            date,
        } => add(cfg, exercise, sets, date.as_deref()),
        WorkoutAction::List => list(cfg),
        WorkoutAction::Summary => summary(cfg),
        WorkoutAction::Prs => prs(cfg),
        WorkoutAction::Categories => categories(cfg),
        WorkoutAction::Exercises => exercises(cfg),
        WorkoutAction::Daily => daily(cfg),
        WorkoutAction::Catalog => catalog(),
    }
}

fn open_store(cfg: &Config) -> AppResult<WorkoutStore> {
    let store = WorkoutStore::open(&cfg.workout_database)?;
    store.ensure_schema()?;
    Ok(store)
}

fn add(cfg: &Config, exercise: &str, specs: &[String], date: Option<&str>) -> AppResult<()> {
    // An empty exercise suppresses the whole batch, nothing is written.
    if exercise.trim().is_empty() {
        warning("Exercise name is empty, no sets were saved.");
        return Ok(());
    }

    let d: NaiveDate = match date {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
        None => date::today(),
    };

    let sets = specs
        .iter()
        .map(|s| SetEntry::parse(s))
        .collect::<AppResult<Vec<_>>>()?;

    let mut store = open_store(cfg)?;
    let written = store.append_batch(d, exercise, &sets)?;

    success(format!("Saved {}: {} sets on {}", exercise, written, d));
    Ok(())
}

fn list(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let sets = store.load_all()?;

    if sets.is_empty() {
        info("No workout sets logged yet. Add one with `tracklog workout add`.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("id", 5),
        Column::new("date", 10),
        Column::new("exercise", 20),
        Column::new("set", 4),
        Column::new("reps", 5),
        Column::new("weight", 8),
        Column::new("volume", 9),
        Column::new("note", 20),
    ]);
    for s in &sets {
        table.add_row(vec![
            s.id.to_string(),
            s.date_str(),
            s.exercise.clone(),
            s.set_num.to_string(),
            s.reps.to_string(),
            format!("{:.1}", s.weight),
            format!("{:.1}", s.volume()),
            s.note.clone(),
        ]);
    }

    header("Workout Log");
    print!("{}", table.render());
    Ok(())
}

fn summary(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let sets = store.load_all()?;

    let s = volume_summary(&sets, date::today(), cfg.weekly_volume_goal);

    header("Volume Summary");
    println!("Weekly volume:  {:.1} kg", s.weekly_volume);
    println!("Monthly volume: {:.1} kg", s.monthly_volume);
    println!(
        "Weekly goal:    {:.1}% of {:.0} kg",
        s.goal_progress_pct, cfg.weekly_volume_goal
    );
    Ok(())
}

fn prs(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let sets = store.load_all()?;

    let records = personal_records(&sets);
    if records.is_empty() {
        info("No workout sets logged yet.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("exercise", 20),
        Column::new("max weight", 10),
    ]);
    for r in &records {
        table.add_row(vec![r.exercise.clone(), format!("{:.1}", r.max_weight)]);
    }

    header("Personal Records");
    print!("{}", table.render());
    Ok(())
}

fn categories(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let sets = store.load_all()?;

    let breakdown = category_breakdown(&sets);
    if breakdown.is_empty() {
        info("No workout sets logged yet.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("category", 10),
        Column::new("volume", 10),
    ]);
    for c in &breakdown {
        table.add_row(vec![
            c.category.as_str().to_string(),
            format!("{:.1}", c.volume),
        ]);
    }

    header("Category Breakdown");
    print!("{}", table.render());
    Ok(())
}

fn exercises(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let sets = store.load_all()?;

    let summaries = exercise_summaries(&sets);
    if summaries.is_empty() {
        info("No workout sets logged yet.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("exercise", 20),
        Column::new("sets", 5),
        Column::new("reps", 6),
        Column::new("volume", 10),
    ]);
    for s in &summaries {
        table.add_row(vec![
            s.exercise.clone(),
            s.total_sets.to_string(),
            s.total_reps.to_string(),
            format!("{:.1}", s.total_volume),
        ]);
    }

    header("Per-Exercise Summary");
    print!("{}", table.render());
    Ok(())
}

fn daily(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let sets = store.load_all()?;

    let volumes = daily_volume(&sets);
    if volumes.is_empty() {
        info("No workout sets logged yet.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("date", 10),
        Column::new("volume", 10),
    ]);
    for v in &volumes {
        table.add_row(vec![date::fmt_date(v.date), format!("{:.1}", v.volume)]);
    }

    header("Daily Volume Over Time");
    print!("{}", table.render());
    Ok(())
}

fn catalog() -> AppResult<()> {
    let mut table = Table::new(vec![
        Column::new("exercise", 20),
        Column::new("category", 10),
    ]);
    for (name, cat) in EXERCISE_CATALOG {
        table.add_row(vec![name.to_string(), cat.as_str().to_string()]);
    }

    header("Exercise Catalog");
    print!("{}", table.render());
    Ok(())
}
