//! Unified application error type.
//! All modules (db, core, web, cli) return AppError to keep the error
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

    #[error("Invalid timestamp in database: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // User input (shown as flash messages)
    // ---------------------------
    #[error("Item cannot be empty.")]
    EmptyItemText,

    #[error("Item cannot be longer than {0} characters.")]
    ItemTextTooLong(usize),

    #[error("Please enter a name.")]
    EmptyName,

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Item {0} not found")]
    ItemNotFound(i64),

    #[error("Not found")]
    NotFound,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Errors caused by what the user typed. These are reported back as a
    /// flash message and never change state.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            AppError::EmptyItemText | AppError::ItemTextTooLong(_) | AppError::EmptyName
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
