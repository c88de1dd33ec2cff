//! Passcheck
//!
//! A password strength evaluator and generator. Scores passwords against a
//! fixed rule set, estimates brute-force crack times, generates random
//! passwords from selectable character classes and keeps a short in-memory
//! history of checked passwords.

pub mod config;
pub mod history;
pub mod password;
pub mod service;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use history::{HistoryEntry, HistoryStore};
pub use password::{
    CharacterClass, CrackTime, GeneratorConfig, GeneratorError, PasswordGenerator, StrengthLevel,
    StrengthResult, StrengthScorer,
};
pub use service::PasswordService;
pub use types::{AppConfig, AppError, StartupError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SERVICE_NAME: &str = "passcheck";
