//! Configuration management for passcheck
//!
//! Handles loading and validation of app configuration from environment variables
//! with sensible defaults.

use std::env;
use std::ops::RangeInclusive;

use crate::types::{AppConfig, StartupError};

/// Accepted default lengths for generated passwords
pub const GENERATOR_LENGTH_RANGE: RangeInclusive<usize> = 4..=128;

/// Accepted history sizes
pub const HISTORY_CAPACITY_RANGE: RangeInclusive<usize> = 1..=1000;

/// Load complete app configuration
pub fn load_config() -> Result<AppConfig, StartupError> {
    let config = load_config_from(|key| env::var(key).ok());
    validate_config(&config)?;
    Ok(config)
}

/// Build a configuration from any key lookup, falling back to defaults
/// for missing or unparseable values
pub fn load_config_from<F>(lookup: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = AppConfig::default();

    AppConfig {
        history_capacity: lookup("HISTORY_CAPACITY")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.history_capacity),
        generator_length: lookup("GENERATOR_LENGTH")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.generator_length),
        guesses_per_second: lookup("GUESSES_PER_SECOND")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.guesses_per_second),
        log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
    }
}

pub fn validate_config(config: &AppConfig) -> Result<(), StartupError> {
    if !HISTORY_CAPACITY_RANGE.contains(&config.history_capacity) {
        return Err(StartupError::Config(format!(
            "HISTORY_CAPACITY must be between {} and {}, got {}",
            HISTORY_CAPACITY_RANGE.start(),
            HISTORY_CAPACITY_RANGE.end(),
            config.history_capacity
        )));
    }

    if !GENERATOR_LENGTH_RANGE.contains(&config.generator_length) {
        return Err(StartupError::Config(format!(
            "GENERATOR_LENGTH must be between {} and {}, got {}",
            GENERATOR_LENGTH_RANGE.start(),
            GENERATOR_LENGTH_RANGE.end(),
            config.generator_length
        )));
    }

    if !config.guesses_per_second.is_finite() || config.guesses_per_second <= 0.0 {
        return Err(StartupError::Config(format!(
            "GUESSES_PER_SECOND must be a positive number, got {}",
            config.guesses_per_second
        )));
    }

    Ok(())
}
