use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::intent::Vocabulary;
use crate::responses::{ResponseError, ResponsePool};

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "GREETBOT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("failed to parse config {}: {source}", .path.display())]
    Json { path: PathBuf, source: serde_json::Error },
    #[error("invalid response pools: {0}")]
    Responses(#[from] ResponseError),
    #[error("vocabulary table '{0}' is empty")]
    EmptyVocabulary(&'static str),
    #[error("vocabulary table '{table}' has word '{word}' that is blank or not lowercase")]
    NonNormalizedWord { table: &'static str, word: String },
}

/// Word tables and reply pools. Loaded once at start-up, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub vocabulary: Vocabulary,
    pub responses: ResponsePool,
}

impl BotConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_json(&raw).map_err(|source| ConfigError::Json { path: path.to_path_buf(), source })
    }

    /// Missing sections fall back to the built-in tables.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut config: BotConfig = serde_json::from_str(raw)?;
        config.vocabulary = config.vocabulary.normalized();
        Ok(config)
    }

    /// Reads the file named by `GREETBOT_CONFIG`, or the defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                info!(path = ?path, "loading config");
                Self::from_path(PathBuf::from(path))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let tables = [
            ("greetings", &self.vocabulary.greetings),
            ("question_words", &self.vocabulary.question_words),
            ("self_reference_words", &self.vocabulary.self_reference_words),
            ("activity_words", &self.vocabulary.activity_words),
            ("object_words", &self.vocabulary.object_words),
        ];
        for (name, words) in tables {
            if words.is_empty() {
                return Err(ConfigError::EmptyVocabulary(name));
            }
            // Lookups case-fold token text, so anything else can never match.
            if let Some(word) = words.iter().find(|w| w.is_empty() || **w != w.trim().to_lowercase()) {
                return Err(ConfigError::NonNormalizedWord { table: name, word: word.clone() });
            }
        }
        self.responses.validate()?;
        Ok(())
    }
}
