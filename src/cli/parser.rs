use crate::export::{ExportApp, ExportFormat};
use clap::{Parser, Subcommand};

/// Command-line interface definition for tracklog
/// CLI application to log habits and workout sets with SQLite
#[derive(Parser)]
#[command(
    name = "tracklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple personal tracking CLI: log habits and workout sets, review trends using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override habit database path (useful for tests or custom DB)
    #[arg(global = true, long = "habits-db")]
    pub habits_db: Option<String>,

    /// Override workout database path (useful for tests or custom DB)
    #[arg(global = true, long = "workouts-db")]
    pub workouts_db: Option<String>,

    /// Override time capsule file path
    #[arg(global = true, long = "capsule-file")]
    pub capsule_file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the databases and configuration
    Init,

    /// Log habit observations and review trends
    Habit {
        #[command(subcommand)]
        action: HabitAction,
    },

    /// Log workout sets and review volume summaries
    Workout {
        #[command(subcommand)]
        action: WorkoutAction,
    },

    /// Save a message to the time capsule journal
    Capsule {
        /// Message to your future self
        message: String,

        /// Unlock date (YYYY-MM-DD), defaults to today
        #[arg(long = "unlock", value_name = "DATE")]
        unlock: Option<String>,
    },

    /// Export a log to CSV or JSON
    Export {
        /// Which log to export
        #[arg(long, value_enum)]
        app: ExportApp,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite the output file if it already exists
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum HabitAction {
    /// Log one habit observation
    Add {
        /// Habit name (free text)
        habit: String,

        /// Observed value
        #[arg(value_parser = clap::value_parser!(i64).range(0..))]
        value: i64,

        /// Date of the observation (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// List all logged observations
    List,

    /// Show the summed value per day and habit
    Trend,

    /// Rolling-mean forecast for one habit, seven days ahead
    Forecast {
        /// Habit to forecast
        habit: String,
    },
}

#[derive(Subcommand)]
pub enum WorkoutAction {
    /// Log one exercise with one or more sets
    Add {
        /// Exercise name (catalog entry or free text)
        exercise: String,

        /// One set as REPSxWEIGHT or REPSxWEIGHT@NOTE (repeat per set, in order)
        #[arg(long = "set", value_name = "SPEC", required = true)]
        sets: Vec<String>,

        /// Date of the workout (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// List all logged sets
    List,

    /// Weekly and monthly volume plus goal progress
    Summary,

    /// Personal records: max weight per exercise
    Prs,

    /// Volume breakdown per exercise category
    Categories,

    /// Per-exercise totals (sets, reps, volume)
    Exercises,

    /// Volume per day, over time
    Daily,

    /// Print the fixed exercise catalog
    Catalog,
}
