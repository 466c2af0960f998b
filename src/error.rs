use thiserror::Error;

use crate::grammar::ParseError;
use crate::intent::ClassifyError;
use crate::responses::ResponseError;

/// Everything `respond` can fail with. Nothing here is transient; callers
/// should not retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BotError {
    #[error("could not parse utterance: {0}")]
    Parse(#[from] ParseError),
    #[error("could not classify utterance: {0}")]
    Classify(#[from] ClassifyError),
    #[error("could not select a response: {0}")]
    Response(#[from] ResponseError),
}

impl BotError {
    /// Content-free name of the failure, safe for telemetry.
    pub fn kind(&self) -> FailureKind {
        match self {
            BotError::Parse(_) => FailureKind::Parse,
            BotError::Classify(ClassifyError::MissingRoot) => FailureKind::MissingRoot,
            BotError::Classify(ClassifyError::MissingExpectedRole { .. }) => FailureKind::MissingExpectedRole,
            BotError::Response(ResponseError::UnknownCategory { .. }) => FailureKind::UnknownCategory,
            BotError::Response(ResponseError::EmptyPool { .. }) => FailureKind::EmptyPool,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FailureKind {
    Parse,
    MissingRoot,
    MissingExpectedRole,
    UnknownCategory,
    EmptyPool,
}
