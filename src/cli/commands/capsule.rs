use crate::config::Config;
use crate::core::capsule::append_entry;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use std::path::Path;

/// Append one message to the time capsule journal.
pub fn handle(message: &str, unlock: Option<&str>, cfg: &Config) -> AppResult<()> {
    let unlock_date = match unlock {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
        None => date::today(),
    };

    append_entry(Path::new(&cfg.capsule_file), unlock_date, message)?;

    success(format!("Time capsule saved! (check {})", cfg.capsule_file));
    Ok(())
}
