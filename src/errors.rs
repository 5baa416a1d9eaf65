//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing / validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month format: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid title: an event needs a non-empty title")]
    InvalidTitle,

    #[error("Invalid role: {0} (expected 'leader' or 'member')")]
    InvalidRole(String),

    #[error("Invalid login: --{0} must not be blank")]
    BlankField(&'static str),

    // ---------------------------
    // Session / permissions
    // ---------------------------
    #[error("No active session: run `crewcal login` first")]
    NoSession,

    #[error("Event #{0} not found")]
    EventNotFound(i64),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Event belongs to group '{event_group}', current group is '{viewer_group}'")]
    WrongGroup {
        event_group: String,
        viewer_group: String,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
