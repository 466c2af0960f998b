use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::intent::IntentCategory;

/// Reply used for a recognized question nobody wrote an answer for.
pub const UNKNOWN_QUESTION_REPLY: &str = "I'm sorry, I'm not sure how to answer that.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResponseError {
    #[error("no response pool configured for {category}")]
    UnknownCategory { category: IntentCategory },
    #[error("response pool for {category} is empty")]
    EmptyPool { category: IntentCategory },
}

/// Canned replies per intent category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponsePool {
    pools: HashMap<IntentCategory, Vec<String>>,
}

impl ResponsePool {
    pub fn new(pools: HashMap<IntentCategory, Vec<String>>) -> Self {
        Self { pools }
    }

    pub fn get(&self, category: IntentCategory) -> Option<&[String]> {
        self.pools.get(&category).map(Vec::as_slice)
    }

    /// Start-up check: every category resolves to at least one reply.
    /// `UnknownQuestion` may be left out and falls back to the fixed reply.
    pub fn validate(&self) -> Result<(), ResponseError> {
        for category in IntentCategory::ALL {
            match self.pools.get(&category) {
                Some(pool) if pool.is_empty() => return Err(ResponseError::EmptyPool { category }),
                Some(_) => {}
                None if category == IntentCategory::UnknownQuestion => {}
                None => return Err(ResponseError::UnknownCategory { category }),
            }
        }
        Ok(())
    }
}

impl Default for ResponsePool {
    fn default() -> Self {
        let mut pools = HashMap::new();
        pools.insert(IntentCategory::Greeting, to_vec(&[
            "Hi!",
            "Hello, how can I help you?",
            "Hi there!",
            "Hey!",
            "WAAAAAAAAAAADUUUUUUUUP",
        ]));
        pools.insert(IntentCategory::Welcome, to_vec(&[
            "Hi there! I'm a bot and you can say hi to me.",
            "Hello! I'm a greeting bot.",
            "Welcome, feel free to say hi to me anytime.",
            "Hey human! I'm a bot, but you can say hi to me and I'll do my best to try and answer.",
        ]));
        pools.insert(IntentCategory::SelfState, to_vec(&[
            "I'm doing fine thank you.",
            "Thanks for asking, I'm doing alright.",
            "Right now I'm feeling great! Just a little sleepy.",
        ]));
        pools.insert(IntentCategory::Activity, to_vec(&[
            "Not much really, just hanging",
            "Actually, I have been reading a good book lately, it talks about robots taking over the worl..... not much",
            "BEEP BOOP BAP BEEP BOOOP BOOP BEEP BAP",
        ]));
        pools.insert(IntentCategory::ObjectRequest, to_vec(&[
            "Yes please, that would be great. Please pour it in your ethernet port",
            "No thank you, I'm alergic to caffeine",
        ]));
        pools.insert(IntentCategory::UnknownQuestion, to_vec(&[UNKNOWN_QUESTION_REPLY]));
        Self { pools }
    }
}

fn to_vec(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}
