use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_week_start;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

/// Upper bound for `bar_base_offset` and `bar_row_height`.
pub const MAX_BAR_GEOMETRY: u32 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_session_file")]
    pub session_file: String,
    #[serde(default = "default_cell_width")]
    pub cell_width: usize,
    #[serde(default = "default_week_start")]
    pub week_start: String,
    #[serde(default = "default_bar_base_offset")]
    pub bar_base_offset: u32,
    #[serde(default = "default_bar_row_height")]
    pub bar_row_height: u32,
    #[serde(default = "default_use_color")]
    pub use_color: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_session_file() -> String {
    Config::config_dir()
        .join("session.yml")
        .to_string_lossy()
        .to_string()
}
fn default_cell_width() -> usize {
    12
}
fn default_week_start() -> String {
    "monday".to_string()
}
fn default_bar_base_offset() -> u32 {
    24
}
fn default_bar_row_height() -> u32 {
    18
}
fn default_use_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            session_file: default_session_file(),
            cell_width: default_cell_width(),
            week_start: default_week_start(),
            bar_base_offset: default_bar_base_offset(),
            bar_row_height: default_bar_row_height(),
            use_color: default_use_color(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("crewcal")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".crewcal")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("crewcal.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("crewcal.sqlite")
    }

    /// Load configuration from the standard file, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        cfg.session_file = expand_tilde(&cfg.session_file)
            .to_string_lossy()
            .to_string();
        Ok(cfg)
    }

    /// Reject values that load fine but cannot be rendered.
    pub fn validate(&self) -> AppResult<()> {
        if parse_week_start(&self.week_start).is_none() {
            return Err(AppError::Config(format!(
                "invalid week_start '{}' (expected a weekday name such as monday)",
                self.week_start
            )));
        }
        if self.bar_base_offset > MAX_BAR_GEOMETRY || self.bar_row_height > MAX_BAR_GEOMETRY {
            return Err(AppError::Config(format!(
                "bar_base_offset and bar_row_height must be at most {}",
                MAX_BAR_GEOMETRY
            )));
        }
        if self.cell_width < 2 {
            return Err(AppError::Config("cell_width must be at least 2".into()));
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Initialize configuration and database files.
    ///
    /// Returns the database path that was set up.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            config.save_to(&Self::config_file())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }
}
