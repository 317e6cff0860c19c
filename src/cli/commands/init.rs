use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::{HabitStore, WorkoutStore};
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create the config dir, write the config file (skipped in test mode),
/// and create both databases with their schemas.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    Config::init_all(cli.test)?;

    let habits = HabitStore::open(&cfg.habit_database)?;
    habits.ensure_schema()?;
    success(format!("Habit database:   {}", cfg.habit_database));

    let workouts = WorkoutStore::open(&cfg.workout_database)?;
    workouts.ensure_schema()?;
    success(format!("Workout database: {}", cfg.workout_database));

    Ok(())
}
