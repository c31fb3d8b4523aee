//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the error
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
    // Store-related
    // ---------------------------
    #[error("Failed to read workbook: {0}")]
    WorkbookRead(#[from] calamine::XlsxError),

    #[error("Failed to write workbook: {0}")]
    WorkbookWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("Workbook layout mismatch: {0}")]
    Schema(String),

    #[error("Missing worksheet: {0}")]
    SheetMissing(String),

    #[error("Store error: {0}")]
    Store(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No candidate restaurants to recommend")]
    NoCandidates,

    #[error("No person selected")]
    MissingSelection,

    #[error("No recommendation pending")]
    NoPendingChoice,

    #[error("Review text is empty")]
    EmptyReview,

    #[error("Unknown person: {0}")]
    UnknownPerson(String),

    #[error("Unknown restaurant: {0}")]
    UnknownRestaurant(String),

    #[error("Entropy source failed: {0}")]
    Entropy(String),

    // ---------------------------
    // Prompt errors
    // ---------------------------
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

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
