use std::collections::{HashMap, VecDeque};

use super::event::TelemetryEvent;
use crate::error::FailureKind;
use crate::intent::IntentCategory;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TelemetrySnapshot {
    /// Classified plus failed turns.
    pub turns: u64,
    pub categories: HashMap<IntentCategory, u64>,
    pub failures: FailureStats,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureStats {
    pub parse: u64,
    pub missing_root: u64,
    pub missing_expected_role: u64,
    pub unknown_category: u64,
    pub empty_pool: u64,
}

impl FailureStats {
    pub fn total(&self) -> u64 {
        self.parse + self.missing_root + self.missing_expected_role + self.unknown_category + self.empty_pool
    }
}

impl TelemetrySnapshot {
    pub fn count(&self, category: IntentCategory) -> u64 {
        self.categories.get(&category).copied().unwrap_or(0)
    }

    /// Share of turns that fell through to the welcome reply.
    pub fn welcome_ratio(&self) -> f64 {
        if self.turns == 0 {
            return 0.0;
        }
        self.count(IntentCategory::Welcome) as f64 / self.turns as f64
    }
}

pub fn compute_snapshot(events: &VecDeque<TelemetryEvent>) -> TelemetrySnapshot {
    let mut snap = TelemetrySnapshot::default();

    for event in events {
        match event {
            TelemetryEvent::Classified { category } => {
                snap.turns += 1;
                *snap.categories.entry(*category).or_insert(0) += 1;
            }
            TelemetryEvent::Failed { kind } => {
                snap.turns += 1;
                match kind {
                    FailureKind::Parse => snap.failures.parse += 1,
                    FailureKind::MissingRoot => snap.failures.missing_root += 1,
                    FailureKind::MissingExpectedRole => snap.failures.missing_expected_role += 1,
                    FailureKind::UnknownCategory => snap.failures.unknown_category += 1,
                    FailureKind::EmptyPool => snap.failures.empty_pool += 1,
                }
            }
            // Summaries are derived, not counted
            TelemetryEvent::SessionSummary { .. } => {}
        }
    }

    snap
}
