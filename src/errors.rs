//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

/// Boundary validation failures.
///
/// The `Display` text is what the user sees, so the wording is fixed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid name length!")]
    InvalidNameLength,

    #[error("Worktype name is already taken.")]
    NameTaken,

    #[error("Only use integers for rounding and minimum, and decimal for price!")]
    InvalidNumericInput,

    #[error("Invalid duration unit code: {0} (use 0=seconds, 1=minutes, 2=hours)")]
    InvalidUnit(u8),

    #[error("Project name cannot be empty.")]
    EmptyProjectName,
}

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

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid project state code: {0}")]
    InvalidState(i64),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Worktype not found: {0}")]
    WorktypeNotFound(String),

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
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
