use passcheck::config::{load_config_from, validate_config};
use passcheck::password::validator::Requirement;
use passcheck::utils::display::mask_password;
use passcheck::{
    AppConfig, CharacterClass, CrackTime, GeneratorConfig, GeneratorError, HistoryStore,
    PasswordGenerator, PasswordService, StrengthLevel, StrengthScorer,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_service() -> PasswordService<StdRng> {
    PasswordService::with_generator(
        &AppConfig::default(),
        PasswordGenerator::with_rng(StdRng::seed_from_u64(2024)),
    )
}

#[test]
fn test_integration_empty_password() {
    let result = StrengthScorer::new().evaluate("");
    assert_eq!(result.score, 0);
    assert!(result.requirements.iter().all(|(_, met)| !met));
    assert_eq!(result.crack_time, CrackTime::Instant);
    assert_eq!(result.crack_time.to_string(), "Instant");
}

#[test]
fn test_integration_examples() {
    let scorer = StrengthScorer::new();

    let result = scorer.evaluate("Abc12345");
    assert_eq!(result.score, 4);
    assert!(!result.requirements.is_met(Requirement::Special));

    let result = scorer.evaluate("Ab1!");
    assert_eq!(result.score, 4);
    assert!(!result.requirements.is_met(Requirement::Length));
}

#[test]
fn test_integration_json_shape() {
    let result = StrengthScorer::new().evaluate("Abc12345");
    let json = serde_json::to_value(&result).expect("serialize");

    assert_eq!(json["score"], 4);
    assert_eq!(json["level"], "good");
    assert_eq!(json["crack_time"], "1 days");
    assert_eq!(json["requirements"]["special"], false);
    assert_eq!(json["color"]["border"], "#84cc16");
    assert_eq!(json["analysis"]["numbers"], 5);
}

#[test]
fn test_integration_generate_full_alphabet() {
    let mut generator = PasswordGenerator::with_rng(StdRng::seed_from_u64(1));
    let config = GeneratorConfig::new(12);
    let alphabet = config.alphabet();
    assert_eq!(alphabet.len(), 94);

    let password = generator.generate(&config).expect("generation failed");
    assert_eq!(password.chars().count(), 12);
    assert!(password.bytes().all(|b| alphabet.contains(&b)));
}

#[test]
fn test_integration_generate_without_classes() {
    let mut generator = PasswordGenerator::new();
    let err = generator.generate(&GeneratorConfig::empty(12)).unwrap_err();
    assert_eq!(err, GeneratorError::InvalidConfiguration);
    assert_eq!(err.to_string(), "Select at least one character type");
}

#[test]
fn test_integration_generate_letters_only() {
    let mut service = seeded_service();
    let config = GeneratorConfig::empty(40)
        .with_class(CharacterClass::Uppercase)
        .with_class(CharacterClass::Lowercase);
    let password = service.generate(&config).expect("generation failed");
    assert!(password.chars().all(|c| c.is_ascii_alphabetic()), "unexpected character in {password}");
}

#[test]
fn test_integration_history_flow() {
    let mut service = seeded_service();
    for i in 0..11 {
        service.check(&format!("Password{i}!"));
    }
    assert_eq!(service.history().len(), 10);
    assert!(service.history().all(|e| e.password != "Password0!"), "oldest entry should be evicted");

    service.check("Password5!");
    let first = service.history().next().expect("entry");
    assert_eq!(first.password, "Password5!");
    assert_eq!(first.level, StrengthLevel::VeryStrong);
    assert_eq!(service.history().filter(|e| e.password == "Password5!").count(), 1);

    service.clear_history();
    assert_eq!(service.history().len(), 0);
}

#[test]
fn test_integration_history_store_standalone() {
    let mut store = HistoryStore::new(3);
    store.record("abcdef", StrengthLevel::Weak, 2);
    store.record("ab", StrengthLevel::VeryWeak, 1);

    let masked: Vec<_> = store.masked().into_iter().map(|e| e.password).collect();
    assert_eq!(masked, ["**", "ab**ef"]);
    assert_eq!(store.list().next().map(|e| e.password.as_str()), Some("ab"));
}

#[test]
fn test_integration_masking() {
    assert_eq!(mask_password("ab"), "**");
    assert_eq!(mask_password("abcdef"), "ab**ef");
}

#[test]
fn test_integration_crack_time_monotonic() {
    let scorer = StrengthScorer::new();
    let mut previous = CrackTime::Instant;
    for length in 1..=20 {
        let password = "aA1!".repeat(5)[..length].to_string();
        let estimate = scorer.evaluate(&password).crack_time;
        assert!(estimate >= previous, "length {length} got faster: {estimate} < {previous}");
        previous = estimate;
    }
}

#[test]
fn test_integration_config_drives_service() {
    let config = load_config_from(|key| match key {
        "HISTORY_CAPACITY" => Some("2".to_string()),
        "GENERATOR_LENGTH" => Some("20".to_string()),
        _ => None,
    });
    assert!(validate_config(&config).is_ok());

    let mut service = PasswordService::new(&config);
    service.check("one");
    service.check("two");
    service.check("three");
    assert_eq!(service.history().len(), 2);

    let options = service.default_generator_config();
    assert_eq!(service.generate(&options).expect("generation failed").chars().count(), 20);
}
