#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tl() -> Command {
    cargo_bin_cmd!("tracklog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tracklog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Seed the habit DB with the three-day water scenario used by several tests
pub fn seed_water_habit(db_path: &str) {
    for (value, date) in [("8", "2024-01-01"), ("6", "2024-01-02"), ("10", "2024-01-03")] {
        tl()
            .args([
                "--habits-db",
                db_path,
                "habit",
                "add",
                "water",
                value,
                "--date",
                date,
            ])
            .assert()
            .success();
    }
}

/// Seed the workout DB with the three-set squat scenario used by several tests
pub fn seed_squat_workout(db_path: &str, date: &str) {
    tl()
        .args([
            "--workouts-db",
            db_path,
            "workout",
            "add",
            "Squat",
            "--set",
            "5x100",
            "--set",
            "5x100",
            "--set",
            "5x105",
            "--date",
            date,
        ])
        .assert()
        .success();
}
