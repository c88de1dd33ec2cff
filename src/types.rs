//! Type definitions for passcheck
//!
//! Contains the shared error types and configuration models used
//! throughout the app.

use std::io;

use thiserror::Error;

use crate::history::HISTORY_CAPACITY;
use crate::password::crack_time::DEFAULT_GUESSES_PER_SECOND;
use crate::password::generator::{GeneratorError, DEFAULT_PASSWORD_LENGTH};

/// Application startup errors
#[derive(Debug, Error, PartialEq)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors surfaced by the command-line front-end
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Startup(#[from] StartupError),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Complete app configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub history_capacity: usize,
    pub generator_length: usize,
    pub guesses_per_second: f64,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_capacity: HISTORY_CAPACITY,
            generator_length: DEFAULT_PASSWORD_LENGTH,
            guesses_per_second: DEFAULT_GUESSES_PER_SECOND,
            log_level: "warn".to_string(),
        }
    }
}
