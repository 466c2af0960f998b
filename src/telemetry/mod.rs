//! Conversation telemetry.
//!
//! # SAFETY INVARIANT
//! Telemetry is a READ-ONLY side-effect layer.
//! It must **NEVER** be read inside decision logic (parser, classifier or selector).
//!
//! # PRIVACY INVARIANT
//! Events must **NEVER** contain user content (utterances, token text).
//! Only session IDs, categories and failure kinds are allowed.

pub mod event;
pub mod metrics;
pub mod recorder;

pub use event::TelemetryEvent;
pub use metrics::{compute_snapshot, TelemetrySnapshot};
pub use recorder::TelemetryRecorder;
