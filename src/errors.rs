//! Unified application error type.
//! All modules (db, sensor, draft, analytics, cli) return AppError to keep
//! the error handling consistent and easy to manage.

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

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Shot not found: id {0}")]
    ShotNotFound(i64),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid slope category: {0}")]
    InvalidSlope(String),

    #[error("Invalid lie: {0}")]
    InvalidLie(String),

    #[error("Invalid strength: {0}")]
    InvalidStrength(String),

    #[error("Invalid wind: {0}")]
    InvalidWind(String),

    #[error("Invalid temperature band: {0}")]
    InvalidTemperature(String),

    #[error("Invalid feeling: {0}")]
    InvalidFeeling(String),

    #[error("Invalid miss type: {0}")]
    InvalidMissType(String),

    // ---------------------------
    // Capture / sensor errors
    // ---------------------------
    #[error("Landing offset ({x:.1},{y:.1}) outside the {max:.0} yd capture radius")]
    LandingOutOfRange { x: f64, y: f64, max: f64 },

    #[error("Calibration received no sensor samples before timeout")]
    NoSignal,

    #[error("Draft is not ready to save: {0}")]
    DraftIncomplete(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
