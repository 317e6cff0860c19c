//! Time capsule journal: a write-only dated text log, decoupled from the
//! tabular stores.

use crate::errors::AppResult;
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Append one `"<unlock_date>: <message>"` line to the capsule file.
///
/// The file is created on first write and never truncated or rotated.
/// UTF-8, newline-terminated; the message may itself contain colons, no
/// escaping is applied. There is no structured read-back.
pub fn append_entry(path: &Path, unlock_date: NaiveDate, message: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}: {}", unlock_date.format("%Y-%m-%d"), message)?;

    Ok(())
}
