use crate::cli::parser::HabitAction;
use crate::config::Config;
use crate::core::habits::{daily_trend, forecast, habit_names};
use crate::db::HabitStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::date;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub fn handle(action: &HabitAction, cfg: &Config) -> AppResult<()> {
    match action {
        HabitAction::Add { habit, value, date } => add(cfg, habit, *value, date.as_deref()),
        HabitAction::List => list(cfg),
        HabitAction::Trend => trend(cfg),
        HabitAction::Forecast { habit } => run_forecast(cfg, habit),
    }
}

fn open_store(cfg: &Config) -> AppResult<HabitStore> {
    let store = HabitStore::open(&cfg.habit_database)?;
    store.ensure_schema()?;
    Ok(store)
}

fn add(cfg: &Config, habit: &str, value: i64, date: Option<&str>) -> AppResult<()> {
    // Empty names never reach the store; the submission is skipped.
    if habit.trim().is_empty() {
        warning("Habit name is empty, nothing was saved.");
        return Ok(());
    }

    let d: NaiveDate = match date {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
        None => date::today(),
    };

    let store = open_store(cfg)?;
    store.append(habit, value, d)?;

    success(format!("Saved: {} - {} on {}", habit, value, d));
    Ok(())
}

fn list(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let entries = store.load_all()?;

    if entries.is_empty() {
        info("No habit records yet. Add one with `tracklog habit add`.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("id", 5),
        Column::new("habit", 20),
        Column::new("value", 7),
        Column::new("date", 10),
    ]);
    for e in &entries {
        table.add_row(vec![
            e.id.to_string(),
            e.habit.clone(),
            e.value.to_string(),
            e.date_str(),
        ]);
    }

    header("Habit Records");
    print!("{}", table.render());
    Ok(())
}

fn trend(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let entries = store.load_all()?;

    if entries.is_empty() {
        info("No data to summarize yet.");
        return Ok(());
    }

    let points = daily_trend(&entries);

    let mut table = Table::new(vec![
        Column::new("date", 10),
        Column::new("habit", 20),
        Column::new("total", 7),
    ]);
    for p in &points {
        table.add_row(vec![
            date::fmt_date(p.date),
            p.habit.clone(),
            p.total.to_string(),
        ]);
    }

    header("Habit Trends Over Time");
    print!("{}", table.render());
    Ok(())
}

fn run_forecast(cfg: &Config, habit: &str) -> AppResult<()> {
    let store = open_store(cfg)?;
    let entries = store.load_all()?;

    let Some(fc) = forecast(&entries, habit) else {
        info("No data available for forecasting.");
        let names = habit_names(&entries);
        if !names.is_empty() {
            info(format!("Logged habits: {}", names.join(", ")));
        }
        return Ok(());
    };

    header(format!("{} Forecast (Next 7 Days)", fc.habit));

    let mut observed = Table::new(vec![
        Column::new("date", 10),
        Column::new("value", 7),
        Column::new("moving avg", 10),
    ]);
    for p in &fc.observed {
        observed.add_row(vec![
            date::fmt_date(p.date),
            p.value.to_string(),
            format!("{:.2}", p.smoothed),
        ]);
    }
    print!("{}", observed.render());

    println!();
    let mut projected = Table::new(vec![
        Column::new("date", 10),
        Column::new("forecast", 10),
    ]);
    for p in &fc.forecast {
        projected.add_row(vec![date::fmt_date(p.date), format!("{:.2}", p.value)]);
    }
    print!("{}", projected.render());

    Ok(())
}
