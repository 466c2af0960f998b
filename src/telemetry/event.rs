use serde::{Deserialize, Serialize};

use crate::error::FailureKind;
use crate::intent::IntentCategory;

// Allowed: IDs, categories, failure kinds, counts
// Forbidden: utterance text, token text, selected reply

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TelemetryEvent {
    Classified {
        category: IntentCategory,
    },

    Failed {
        kind: FailureKind,
    },

    SessionSummary {
        turns: u64,
        failures: u64,
    },
}
