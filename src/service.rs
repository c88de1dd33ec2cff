//! Password service
//!
//! The entry point a front-end drives: scoring feeds the session history,
//! generation runs independently and is never scored or recorded.

use rand::rngs::StdRng;
use rand::Rng;

use crate::history::{HistoryEntry, HistoryStore};
use crate::password::crack_time::CrackTimeEstimator;
use crate::password::generator::{GeneratorConfig, GeneratorError, PasswordGenerator};
use crate::password::strength::{StrengthResult, StrengthScorer};
use crate::types::AppConfig;

/// Scorer, generator and session history bundled together
pub struct PasswordService<R = StdRng> {
    scorer: StrengthScorer,
    generator: PasswordGenerator<R>,
    history: HistoryStore,
    default_length: usize,
}

impl PasswordService<StdRng> {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_generator(config, PasswordGenerator::new())
    }
}

impl<R: Rng> PasswordService<R> {
    pub fn with_generator(config: &AppConfig, generator: PasswordGenerator<R>) -> Self {
        Self {
            scorer: StrengthScorer::with_estimator(CrackTimeEstimator::with_guesses_per_second(
                config.guesses_per_second,
            )),
            generator,
            history: HistoryStore::new(config.history_capacity),
            default_length: config.generator_length,
        }
    }

    /// Score a password and record it in history
    ///
    /// Empty input means the field was cleared: nothing is scored or recorded.
    pub fn check(&mut self, password: &str) -> Option<StrengthResult> {
        if password.is_empty() {
            log::debug!("Empty password, skipping evaluation");
            return None;
        }

        let result = self.scorer.evaluate(password);
        self.history.record(password, result.level, result.score);
        Some(result)
    }

    /// Score without touching history
    pub fn evaluate(&self, password: &str) -> StrengthResult {
        self.scorer.evaluate(password)
    }

    pub fn generate(&mut self, config: &GeneratorConfig) -> Result<String, GeneratorError> {
        self.generator.generate(config)
    }

    /// Generator options with every class enabled and the configured length
    pub fn default_generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::new(self.default_length)
    }

    pub fn history(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> + '_ {
        self.history.list()
    }

    pub fn history_store(&self) -> &HistoryStore {
        &self.history
    }

    pub fn clear_history(&mut self) {
        log::info!("Clearing {} history entries", self.history.len());
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn service() -> PasswordService<StdRng> {
        PasswordService::with_generator(
            &AppConfig::default(),
            PasswordGenerator::with_rng(StdRng::seed_from_u64(7)),
        )
    }

    #[test]
    fn test_check_records_history() {
        let mut service = service();
        let result = service.check("Abc12345").expect("non-empty input is scored");
        assert_eq!(result.score, 4);

        let entries: Vec<_> = service.history().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].password, "Abc12345");
        assert_eq!(entries[0].score, 4);
        assert_eq!(entries[0].level, result.level);
    }

    #[test]
    fn test_empty_input_is_not_recorded() {
        let mut service = service();
        assert!(service.check("").is_none());
        assert_eq!(service.history().len(), 0);
    }

    #[test]
    fn test_evaluate_does_not_record() {
        let service = service();
        let _ = service.evaluate("something");
        assert_eq!(service.history().len(), 0);
    }

    #[test]
    fn test_generated_passwords_are_not_recorded() {
        let mut service = service();
        let config = service.default_generator_config();
        let password = service.generate(&config).expect("generation failed");
        assert_eq!(password.chars().count(), 16);
        assert_eq!(service.history().len(), 0);
    }

    #[test]
    fn test_clear_history() {
        let mut service = service();
        service.check("one");
        service.check("two");
        service.clear_history();
        assert_eq!(service.history().len(), 0);
    }

    #[test]
    fn test_configured_rate_is_used() {
        let config = AppConfig {
            guesses_per_second: 1.0,
            ..AppConfig::default()
        };
        let service = PasswordService::new(&config);
        assert_eq!(service.evaluate("abc").crack_time.to_string(), "2 hours");
    }
}
