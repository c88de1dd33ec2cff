//! Password requirement checks.
//!
//! Every requirement is a plain character-class membership test:
//! - Minimum length
//! - Uppercase, lowercase and digit presence
//! - Presence of a symbol from a fixed punctuation set

use serde::Serialize;

/// Minimum number of characters for the length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Punctuation accepted by the special-character requirement
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// One scoring rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    Length,
    Uppercase,
    Lowercase,
    Numbers,
    Special,
}

impl Requirement {
    /// All requirements in their fixed reporting order
    pub const ALL: [Requirement; 5] = [
        Requirement::Length,
        Requirement::Uppercase,
        Requirement::Lowercase,
        Requirement::Numbers,
        Requirement::Special,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Requirement::Length => "length",
            Requirement::Uppercase => "uppercase",
            Requirement::Lowercase => "lowercase",
            Requirement::Numbers => "numbers",
            Requirement::Special => "special",
        }
    }

    /// Human description shown next to the requirement badge
    pub fn description(self) -> &'static str {
        match self {
            Requirement::Length => "At least 8 characters",
            Requirement::Uppercase => "Uppercase letter (A-Z)",
            Requirement::Lowercase => "Lowercase letter (a-z)",
            Requirement::Numbers => "Number (0-9)",
            Requirement::Special => "Special character (!@#$...)",
        }
    }
}

/// Result of checking a password against each requirement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Requirements {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub special: bool,
}

impl Requirements {
    pub fn is_met(&self, requirement: Requirement) -> bool {
        match requirement {
            Requirement::Length => self.length,
            Requirement::Uppercase => self.uppercase,
            Requirement::Lowercase => self.lowercase,
            Requirement::Numbers => self.numbers,
            Requirement::Special => self.special,
        }
    }

    /// Requirements paired with their state, in reporting order
    pub fn iter(&self) -> impl Iterator<Item = (Requirement, bool)> + '_ {
        Requirement::ALL.into_iter().map(move |r| (r, self.is_met(r)))
    }

    /// Number of satisfied requirements (0-5)
    pub fn score(&self) -> u8 {
        self.iter().filter(|(_, met)| *met).count() as u8
    }

    /// Requirements still missing, in reporting order
    pub fn missing(&self) -> Vec<Requirement> {
        self.iter().filter(|(_, met)| !met).map(|(r, _)| r).collect()
    }
}

pub fn is_symbol(c: char) -> bool {
    c.is_ascii() && SYMBOLS.contains(&(c as u8))
}

/// Check a password against every requirement
///
/// Length counts characters, not bytes.
pub fn check_requirements(password: &str) -> Requirements {
    Requirements {
        length: password.chars().count() >= MIN_PASSWORD_LENGTH,
        uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        numbers: password.chars().any(|c| c.is_ascii_digit()),
        special: password.chars().any(is_symbol),
    }
}

/// Per-class character counts of a password
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CharacterAnalysis {
    pub uppercase: usize,
    pub lowercase: usize,
    pub numbers: usize,
    pub symbols: usize,
    pub total: usize,
}

impl CharacterAnalysis {
    pub fn analyze(password: &str) -> Self {
        password.chars().fold(Self::default(), |mut acc, c| {
            acc.total += 1;
            if c.is_ascii_uppercase() {
                acc.uppercase += 1;
            } else if c.is_ascii_lowercase() {
                acc.lowercase += 1;
            } else if c.is_ascii_digit() {
                acc.numbers += 1;
            } else if is_symbol(c) {
                acc.symbols += 1;
            }
            acc
        })
    }

    /// Share of the password taken by `count`, as a 0-100 percentage
    ///
    /// An empty password is treated as length 1 so every share is 0.
    pub fn share(&self, count: usize) -> f64 {
        count as f64 / self.total.max(1) as f64 * 100.0
    }
}
