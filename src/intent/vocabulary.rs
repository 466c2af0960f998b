use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const GREETINGS: &[&str] = &["hi", "hello", "hey", "morning", "afternoon", "yo", "hellow", "wazzzaa", "wadup"];
pub const QUESTION_WORDS: &[&str] = &["how", "what", "want"];
pub const SELF_REFERENCE_WORDS: &[&str] = &["bot", "you", "chatbot"];
pub const ACTIVITY_WORDS: &[&str] = &["doing", "going"];
pub const OBJECT_WORDS: &[&str] = &["coffee"];

/// Closed word sets the classifier matches role tokens against.
///
/// All entries are lowercase. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub greetings: HashSet<String>,
    pub question_words: HashSet<String>,
    pub self_reference_words: HashSet<String>,
    pub activity_words: HashSet<String>,
    pub object_words: HashSet<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            greetings: to_set(GREETINGS),
            question_words: to_set(QUESTION_WORDS),
            self_reference_words: to_set(SELF_REFERENCE_WORDS),
            activity_words: to_set(ACTIVITY_WORDS),
            object_words: to_set(OBJECT_WORDS),
        }
    }
}

impl Vocabulary {
    /// Lowercases and trims every entry, dropping blanks.
    /// Config files are hand-edited; this keeps lookups case-folded on both sides.
    pub fn normalized(self) -> Self {
        Self {
            greetings: normalize(self.greetings),
            question_words: normalize(self.question_words),
            self_reference_words: normalize(self.self_reference_words),
            activity_words: normalize(self.activity_words),
            object_words: normalize(self.object_words),
        }
    }

    pub fn is_greeting(&self, word: &str) -> bool {
        self.greetings.contains(word)
    }

    pub fn is_question_word(&self, word: &str) -> bool {
        self.question_words.contains(word)
    }

    pub fn is_self_reference(&self, word: &str) -> bool {
        self.self_reference_words.contains(word)
    }

    pub fn is_activity(&self, word: &str) -> bool {
        self.activity_words.contains(word)
    }

    pub fn is_object(&self, word: &str) -> bool {
        self.object_words.contains(word)
    }
}

fn to_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn normalize(words: HashSet<String>) -> HashSet<String> {
    words
        .into_iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
