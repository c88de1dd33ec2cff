//! Password module
//!
//! This module provides the password logic of the crate:
//! - Requirement checks and character analysis
//! - Strength scoring with level tables
//! - Brute-force crack time estimation
//! - Random password generation

pub mod crack_time;
pub mod generator;
pub mod strength;
pub mod validator;

// Re-export commonly used types
pub use crack_time::{CrackTime, CrackTimeEstimator};
pub use generator::{CharacterClass, GeneratorConfig, GeneratorError, PasswordGenerator};
pub use strength::{StrengthColor, StrengthLevel, StrengthResult, StrengthScorer};
pub use validator::{check_requirements, CharacterAnalysis, Requirement, Requirements};
