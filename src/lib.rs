//! tracklog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Habit { action } => cli::commands::habit::handle(action, cfg),
        Commands::Workout { action } => cli::commands::workout::handle(action, cfg),
        Commands::Capsule { message, unlock } => {
            cli::commands::capsule::handle(message, unlock.as_deref(), cfg)
        }
        Commands::Export {
            app,
            format,
            file,
            force,
        } => cli::commands::export::handle(app, format, file, *force, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the config once, then apply command-line overrides.
    let mut cfg = Config::load();

    if let Some(custom_db) = &cli.habits_db {
        cfg.habit_database = custom_db.clone();
    }
    if let Some(custom_db) = &cli.workouts_db {
        cfg.workout_database = custom_db.clone();
    }
    if let Some(custom_capsule) = &cli.capsule_file {
        cfg.capsule_file = custom_capsule.clone();
    }

    dispatch(&cli, &cfg)
}
