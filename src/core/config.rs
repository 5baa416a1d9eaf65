use crate::config::Config;
use crate::config::migrate::{migrate_config, missing_fields};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Report keys missing from the config file and values that cannot be
    /// used. Returns how many problems were found.
    pub fn check(path: &Path) -> AppResult<usize> {
        if !path.exists() {
            warning(format!(
                "No configuration file at {} (defaults in use)",
                path.display()
            ));
            return Ok(0);
        }

        let missing = missing_fields(path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!("Missing fields: {}", missing.join(", ")));
            info("Run `crewcal config --migrate` to add them with default values.");
        }

        let invalid = match Config::load_from(path).and_then(|cfg| cfg.validate()) {
            Ok(()) => 0,
            Err(e) => {
                warning(format!("Invalid value: {}", e));
                1
            }
        };

        Ok(missing.len() + invalid)
    }

    pub fn migrate(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "no configuration file at {}; run `crewcal init` first",
                path.display()
            )));
        }

        let added = migrate_config(path)?;
        if added.is_empty() {
            success("Configuration already up to date.");
        }
        Ok(added)
    }

    /// Open the config file in `editor`, `$EDITOR`, `$VISUAL`, or a platform
    /// default, in that order.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let ed = editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(|| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot start editor '{}': {}", ed, e)))?;

        if !status.success() {
            return Err(AppError::Config(format!("editor '{}' exited with {}", ed, status)));
        }

        success(format!("Configuration file edited using '{}'", ed));
        Ok(())
    }
}
