use crate::config::Config;
use crate::db::{HabitStore, WorkoutStore};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportApp, ExportFormat, notify_export_success};
use crate::export::{write_habits_csv, write_json, write_sets_csv};
use std::path::Path;

/// Dump the selected log to a CSV or JSON file.
pub fn handle(
    app: &ExportApp,
    format: &ExportFormat,
    file: &str,
    force: bool,
    cfg: &Config,
) -> AppResult<()> {
    let path = Path::new(file);
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "output file '{}' already exists (use --force to overwrite)",
            file
        )));
    }

    match app {
        ExportApp::Habit => {
            let store = HabitStore::open(&cfg.habit_database)?;
            store.ensure_schema()?;
            let entries = store.load_all()?;

            match format {
                ExportFormat::Csv => write_habits_csv(file, &entries)?,
                ExportFormat::Json => write_json(file, &entries)?,
            }
            notify_export_success("Habit", path);
        }
        ExportApp::Workout => {
            let store = WorkoutStore::open(&cfg.workout_database)?;
            store.ensure_schema()?;
            let sets = store.load_all()?;

            match format {
                ExportFormat::Csv => write_sets_csv(file, &sets)?,
                ExportFormat::Json => write_json(file, &sets)?,
            }
            notify_export_success("Workout", path);
        }
    }

    Ok(())
}
