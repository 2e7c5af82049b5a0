//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: '{0}' (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid day of week: {0}")]
    InvalidDay(String),

    // ---------------------------
    // Schedule errors
    // ---------------------------
    #[error("Session {id}: end time {end} is not after start time {start}")]
    InvertedInterval { id: i64, start: String, end: String },

    #[error("Session {id}: duration of {minutes} min is below the minimum of {min} min")]
    SessionTooShort { id: i64, minutes: i64, min: i64 },

    #[error("Session {session} references unknown class {class_id}")]
    UnknownClass { session: i64, class_id: i64 },

    #[error("Class not found: {0}")]
    ClassNotFound(i64),

    #[error("Session not found: {0}")]
    SessionNotFound(i64),

    #[error("Class {0} is still used by {1} session(s)")]
    ClassInUse(i64, usize),

    #[error("Layout error: {0}")]
    Layout(String),

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
