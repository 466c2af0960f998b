use std::io::Write;

use greetbot::config::{BotConfig, ConfigError};
use greetbot::intent::IntentCategory;

#[test]
fn test_defaults_validate() {
    let config = BotConfig::default();
    assert!(config.validate().is_ok());
    assert!(config.vocabulary.is_greeting("wazzzaa"));
    assert!(config.vocabulary.is_question_word("want"));
}

#[test]
fn test_partial_json_keeps_default_sections() {
    let raw = r#"{ "vocabulary": { "object_words": ["Tea", " COFFEE ", ""] } }"#;
    let config = BotConfig::from_json(raw).unwrap();

    assert!(config.vocabulary.is_object("tea"), "Words are lowercased on load");
    assert!(config.vocabulary.is_object("coffee"), "Words are trimmed on load");
    assert_eq!(config.vocabulary.object_words.len(), 2, "Blank words are dropped");
    assert!(config.vocabulary.is_greeting("hi"), "Unspecified tables keep their defaults");
    assert!(config.responses.get(IntentCategory::Greeting).is_some());
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_table_fails_validation() {
    let raw = r#"{ "vocabulary": { "greetings": [] } }"#;
    let config = BotConfig::from_json(raw).unwrap();
    match config.validate() {
        Err(ConfigError::EmptyVocabulary(name)) => assert_eq!(name, "greetings"),
        other => panic!("Expected EmptyVocabulary, got {:?}", other),
    }
}

#[test]
fn test_response_pools_replace_defaults_and_are_validated() {
    let raw = r#"{ "responses": { "Greeting": ["Hi!"] } }"#;
    let config = BotConfig::from_json(raw).unwrap();
    assert!(matches!(config.validate(), Err(ConfigError::Responses(_))));
}

#[test]
fn test_round_trips_through_file() {
    let path = std::env::temp_dir().join(format!("greetbot-config-{}.json", uuid::Uuid::new_v4()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(serde_json::to_string(&BotConfig::default()).unwrap().as_bytes()).unwrap();
    drop(file);

    let loaded = BotConfig::from_path(&path).unwrap();
    assert_eq!(loaded, BotConfig::default());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_file_reports_path() {
    let err = BotConfig::from_path("/nonexistent/greetbot.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/greetbot.json"));
}

#[test]
fn test_uppercase_word_fails_validation() {
    let mut config = BotConfig::default();
    config.vocabulary.greetings.insert("Howdy".to_string());

    match config.validate() {
        Err(ConfigError::NonNormalizedWord { table, word }) => {
            assert_eq!(table, "greetings");
            assert_eq!(word, "Howdy");
        }
        other => panic!("Expected NonNormalizedWord, got {:?}", other),
    }
}

#[test]
fn test_blank_word_fails_validation() {
    let mut config = BotConfig::default();
    config.vocabulary.object_words.insert(String::new());

    assert!(
        matches!(config.validate(), Err(ConfigError::NonNormalizedWord { table: "object_words", .. })),
        "A blank word can never match a token"
    );
}

#[test]
fn test_padded_word_fails_validation_until_normalized() {
    let mut config = BotConfig::default();
    config.vocabulary.question_words.insert(" why ".to_string());
    assert!(matches!(config.validate(), Err(ConfigError::NonNormalizedWord { .. })));

    config.vocabulary = config.vocabulary.normalized();
    assert!(config.validate().is_ok());
    assert!(config.vocabulary.is_question_word("why"));
}
