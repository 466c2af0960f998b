use serde::{Deserialize, Serialize};
use std::fmt;

/// Classifier output. Drives which response pool is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentCategory {
    Greeting,
    /// "how are you"
    SelfState,
    /// "what are you doing"
    Activity,
    /// "do you want a coffee"
    ObjectRequest,
    /// A question shape we recognize without knowing the answer.
    UnknownQuestion,
    /// Neither a greeting nor a question.
    Welcome,
}

impl IntentCategory {
    pub const ALL: [IntentCategory; 6] = [
        IntentCategory::Greeting,
        IntentCategory::SelfState,
        IntentCategory::Activity,
        IntentCategory::ObjectRequest,
        IntentCategory::UnknownQuestion,
        IntentCategory::Welcome,
    ];
}

impl fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
