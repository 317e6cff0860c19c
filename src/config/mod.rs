use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub habit_database: String,
    pub workout_database: String,
    #[serde(default = "default_capsule_file")]
    pub capsule_file: String,
    #[serde(default = "default_weekly_goal")]
    pub weekly_volume_goal: f64,
}

fn default_capsule_file() -> String {
    "reports/time_capsule.txt".to_string()
}
fn default_weekly_goal() -> f64 {
    10_000.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            habit_database: Self::habit_database_file().to_string_lossy().to_string(),
            workout_database: Self::workout_database_file().to_string_lossy().to_string(),
            capsule_file: default_capsule_file(),
            weekly_volume_goal: default_weekly_goal(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("tracklog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".tracklog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tracklog.conf")
    }

    /// Return the full path of the habit SQLite database
    pub fn habit_database_file() -> PathBuf {
        Self::config_dir().join("habits.sqlite")
    }

    /// Return the full path of the workout SQLite database
    pub fn workout_database_file() -> PathBuf {
        Self::config_dir().join("workouts.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(())
    }
}
