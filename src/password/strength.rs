//! Password strength scoring.
//!
//! The score is the number of satisfied requirements (0-5). Labels, tips,
//! icons and colours are exhaustive functions of the resulting
//! [`StrengthLevel`].

use serde::Serialize;

use crate::password::crack_time::{CrackTime, CrackTimeEstimator};
use crate::password::validator::{check_requirements, CharacterAnalysis, Requirements};

/// Highest reachable score
pub const MAX_SCORE: u8 = 5;

/// Password strength level, one per score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLevel {
    None = 0,
    VeryWeak = 1,
    Weak = 2,
    Fair = 3,
    Good = 4,
    VeryStrong = 5,
}

/// Colour palette for a strength level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthColor {
    pub bg: &'static str,
    pub border: &'static str,
    pub text: &'static str,
}

impl From<u8> for StrengthLevel {
    fn from(score: u8) -> Self {
        match score {
            0 => StrengthLevel::None,
            1 => StrengthLevel::VeryWeak,
            2 => StrengthLevel::Weak,
            3 => StrengthLevel::Fair,
            4 => StrengthLevel::Good,
            _ => StrengthLevel::VeryStrong,
        }
    }
}

impl From<&Requirements> for StrengthLevel {
    fn from(requirements: &Requirements) -> Self {
        StrengthLevel::from(requirements.score())
    }
}

impl StrengthLevel {
    pub const ALL: [StrengthLevel; 6] = [
        StrengthLevel::None,
        StrengthLevel::VeryWeak,
        StrengthLevel::Weak,
        StrengthLevel::Fair,
        StrengthLevel::Good,
        StrengthLevel::VeryStrong,
    ];

    pub fn score(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::None => "None",
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }

    pub fn tip(self) -> &'static str {
        match self {
            StrengthLevel::None => "Start typing to create a password.",
            StrengthLevel::VeryWeak => {
                "Add more variety: mix uppercase, lowercase, numbers, and symbols."
            },
            StrengthLevel::Weak => "Make it stronger: add special characters and increase length.",
            StrengthLevel::Fair => "Getting close! Add more special characters for maximum security.",
            StrengthLevel::Good => "Almost there! Just need one more element for perfect strength.",
            StrengthLevel::VeryStrong => "Your password is very strong! You're all set.",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            StrengthLevel::None | StrengthLevel::VeryWeak => "🔓",
            StrengthLevel::Weak => "⚠️",
            StrengthLevel::Fair => "📝",
            StrengthLevel::Good => "✓",
            StrengthLevel::VeryStrong => "🔒",
        }
    }

    pub fn color(self) -> StrengthColor {
        let (bg, border, text) = match self {
            StrengthLevel::None => ("rgba(107, 114, 128, 0.2)", "#6b7280", "#d1d5db"),
            StrengthLevel::VeryWeak => ("rgba(239, 68, 68, 0.2)", "#ef4444", "#fca5a5"),
            StrengthLevel::Weak => ("rgba(249, 115, 22, 0.2)", "#f97316", "#fdba74"),
            StrengthLevel::Fair => ("rgba(234, 179, 8, 0.2)", "#eab308", "#fcd34d"),
            StrengthLevel::Good => ("rgba(132, 204, 22, 0.2)", "#84cc16", "#d4fc79"),
            StrengthLevel::VeryStrong => ("rgba(34, 197, 94, 0.2)", "#22c55e", "#86efac"),
        };
        StrengthColor {
            bg,
            border,
            text,
        }
    }
}

/// Outcome of a single strength evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthResult {
    /// Number of satisfied requirements (0-5)
    pub score: u8,
    pub requirements: Requirements,
    pub level: StrengthLevel,
    pub tip: &'static str,
    pub icon: &'static str,
    pub color: StrengthColor,
    pub crack_time: CrackTime,
    pub analysis: CharacterAnalysis,
}

impl StrengthResult {
    /// Score as a 0-100 progress value
    pub fn percentage(&self) -> f64 {
        f64::from(self.score) / f64::from(MAX_SCORE) * 100.0
    }

    pub fn is_max(&self) -> bool {
        self.score == MAX_SCORE
    }
}

/// Rule-based password strength scorer
#[derive(Debug, Clone, Default)]
pub struct StrengthScorer {
    estimator: CrackTimeEstimator,
}

impl StrengthScorer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub const fn with_estimator(estimator: CrackTimeEstimator) -> Self {
        Self {
            estimator,
        }
    }

    pub fn estimator(&self) -> &CrackTimeEstimator {
        &self.estimator
    }

    /// Score a password. Total over every input, including the empty string.
    pub fn evaluate(&self, password: &str) -> StrengthResult {
        let requirements = check_requirements(password);
        let score = requirements.score();
        let level = StrengthLevel::from(score);

        log::debug!("Scored password of {} characters: {}/{}", password.chars().count(), score, MAX_SCORE);

        StrengthResult {
            score,
            requirements,
            level,
            tip: level.tip(),
            icon: level.icon(),
            color: level.color(),
            crack_time: self.estimator.estimate(password),
            analysis: CharacterAnalysis::analyze(password),
        }
    }
}
