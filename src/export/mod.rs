mod csv;
mod json;

pub use csv::{write_habits_csv, write_sets_csv};
pub use json::write_json;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Completion message shared by all export paths.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Which of the two logs to export.
#[derive(Clone, Debug, ValueEnum)]
pub enum ExportApp {
    Habit,
    Workout,
}
