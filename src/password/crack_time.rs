//! Brute-force crack time estimation.
//!
//! The alphabet is the sum of the classes the password actually uses, the
//! attacker is assumed to find the password after trying half the space.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::password::validator::check_requirements;

/// Assumed attacker throughput (guesses per second)
pub const DEFAULT_GUESSES_PER_SECOND: f64 = 1e9;

pub const LOWERCASE_CARDINALITY: u32 = 26;
pub const UPPERCASE_CARDINALITY: u32 = 26;
pub const DIGIT_CARDINALITY: u32 = 10;
pub const SYMBOL_CARDINALITY: u32 = 32;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const MONTH: f64 = 2_592_000.0;
const YEAR: f64 = 31_536_000.0;

/// Human-scale crack time bucket
///
/// Variants are ordered from fastest to slowest, so the derived ordering
/// compares estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CrackTime {
    Instant,
    Seconds(u64),
    Minutes(u64),
    Hours(u64),
    Days(u64),
    Months(u64),
    Centuries,
}

impl CrackTime {
    /// Bucket a duration given in seconds
    pub fn from_seconds(seconds: f64) -> Self {
        if seconds.is_nan() || seconds < 1.0 {
            CrackTime::Instant
        } else if seconds < MINUTE {
            CrackTime::Seconds(seconds.round() as u64)
        } else if seconds < HOUR {
            CrackTime::Minutes((seconds / MINUTE).round() as u64)
        } else if seconds < DAY {
            CrackTime::Hours((seconds / HOUR).round() as u64)
        } else if seconds < MONTH {
            CrackTime::Days((seconds / DAY).round() as u64)
        } else if seconds < YEAR {
            CrackTime::Months((seconds / MONTH).round() as u64)
        } else {
            CrackTime::Centuries
        }
    }
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrackTime::Instant => f.write_str("Instant"),
            CrackTime::Seconds(n) => write!(f, "{n} seconds"),
            CrackTime::Minutes(n) => write!(f, "{n} minutes"),
            CrackTime::Hours(n) => write!(f, "{n} hours"),
            CrackTime::Days(n) => write!(f, "{n} days"),
            CrackTime::Months(n) => write!(f, "{n} months"),
            CrackTime::Centuries => f.write_str("Centuries"),
        }
    }
}

impl Serialize for CrackTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Estimator for brute-force crack times
#[derive(Debug, Clone, Copy)]
pub struct CrackTimeEstimator {
    guesses_per_second: f64,
}

impl CrackTimeEstimator {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an estimator for a custom attacker rate
    ///
    /// Callers are expected to pass a positive, finite rate; the
    /// configuration layer validates it.
    #[inline]
    pub const fn with_guesses_per_second(guesses_per_second: f64) -> Self {
        Self {
            guesses_per_second,
        }
    }

    pub fn guesses_per_second(&self) -> f64 {
        self.guesses_per_second
    }

    /// Size of the alphabet made of the classes present in `password`
    pub fn alphabet_size(password: &str) -> u32 {
        let requirements = check_requirements(password);
        [
            (requirements.lowercase, LOWERCASE_CARDINALITY),
            (requirements.uppercase, UPPERCASE_CARDINALITY),
            (requirements.numbers, DIGIT_CARDINALITY),
            (requirements.special, SYMBOL_CARDINALITY),
        ]
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, size)| size)
        .sum()
    }

    /// Expected seconds to find `password` by exhaustive search
    ///
    /// Zero for an empty password or one with no recognised class.
    pub fn estimate_seconds(&self, password: &str) -> f64 {
        let length = password.chars().count();
        let alphabet = Self::alphabet_size(password);
        if length == 0 || alphabet == 0 {
            return 0.0;
        }

        let combinations = f64::from(alphabet).powf(length as f64);
        combinations / 2.0 / self.guesses_per_second
    }

    pub fn estimate(&self, password: &str) -> CrackTime {
        CrackTime::from_seconds(self.estimate_seconds(password))
    }
}

impl Default for CrackTimeEstimator {
    #[inline]
    fn default() -> Self {
        Self::with_guesses_per_second(DEFAULT_GUESSES_PER_SECOND)
    }
}
