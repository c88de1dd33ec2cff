//! Password generator module
//!
//! This module provides a configurable random password generator
//! - `PasswordGenerator`: Draws characters uniformly from the enabled character classes
//! - `CharacterClass`: The four alphabets a password may be built from
//! - `GeneratorConfig`: Desired length and the enabled classes
//!
//! The randomness source is injected, so a cryptographically secure RNG can be
//! swapped in without touching the algorithm.

use rand::distributions::{Distribution, Slice};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

/// Longest password the front-ends will ask for
pub const MAX_PASSWORD_LENGTH: usize = 1024;

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
/// Printable ASCII punctuation
pub const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Select at least one character type")]
    InvalidConfiguration,
}

/// Character class available to the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// Declared order, also the order alphabets are concatenated in
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn charset(self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Numbers => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }
}

/// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl GeneratorConfig {
    /// All classes enabled
    pub fn new(length: usize) -> Self {
        Self {
            length,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }

    /// No class enabled; combine with [`GeneratorConfig::with_class`]
    pub fn empty(length: usize) -> Self {
        Self {
            length,
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
        }
    }

    pub fn with_class(mut self, class: CharacterClass) -> Self {
        self.set_class(class, true);
        self
    }

    pub fn set_class(&mut self, class: CharacterClass, enabled: bool) {
        match class {
            CharacterClass::Uppercase => self.include_uppercase = enabled,
            CharacterClass::Lowercase => self.include_lowercase = enabled,
            CharacterClass::Numbers => self.include_numbers = enabled,
            CharacterClass::Symbols => self.include_symbols = enabled,
        }
    }

    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Numbers => self.include_numbers,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    /// Enabled classes in declared order
    pub fn classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL.into_iter().filter(move |&class| self.includes(class))
    }

    /// Concatenated charsets of the enabled classes
    pub fn alphabet(&self) -> Vec<u8> {
        self.classes().flat_map(|class| class.charset().iter().copied()).collect()
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PASSWORD_LENGTH)
    }
}

/// Random password generator over a pluggable randomness source
pub struct PasswordGenerator<R = StdRng> {
    rng: R,
}

impl PasswordGenerator<StdRng> {
    /// Generator seeded from system entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for PasswordGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
        }
    }

    /// Draw `config.length` characters independently and uniformly from the
    /// combined alphabet of the enabled classes
    pub fn generate(&mut self, config: &GeneratorConfig) -> Result<String, GeneratorError> {
        let alphabet = config.alphabet();
        let distribution = Slice::new(&alphabet).map_err(|_| {
            log::warn!("Password generation requested with no character class enabled");
            GeneratorError::InvalidConfiguration
        })?;

        let password: String =
            (0..config.length).map(|_| char::from(*distribution.sample(&mut self.rng))).collect();

        log::debug!(
            "Generated password of {} characters from a {}-character alphabet",
            config.length,
            alphabet.len()
        );
        Ok(password)
    }
}
