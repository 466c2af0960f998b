use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::grammar::{Label, LabelIndex};
use super::types::IntentCategory;
use super::vocabulary::Vocabulary;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// The parse has no ROOT token. Either a parser training gap or malformed input.
    #[error("dependency graph has no ROOT token")]
    MissingRoot,
    /// A branch needed a role the parse did not produce.
    #[error("expected a {role} token alongside {alongside}, found none")]
    MissingExpectedRole { role: Label, alongside: Label },
}

/// Pure decision procedure from a label index to an intent.
///
/// Priority is total: greeting, then question sub-types from most to least
/// specific (self-state, activity, object), then welcome.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    vocabulary: Arc<Vocabulary>,
}

impl IntentClassifier {
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self { vocabulary }
    }

    pub fn classify(&self, index: &LabelIndex) -> Result<IntentCategory, ClassifyError> {
        let root = index.folded_text(Label::Root).ok_or(ClassifyError::MissingRoot)?;

        let category = if self.vocabulary.is_greeting(&root) {
            IntentCategory::Greeting
        } else if self.vocabulary.is_question_word(&root) {
            self.classify_question(index)?
        } else {
            IntentCategory::Welcome
        };

        debug!(root = %root, %category, "classified");
        Ok(category)
    }

    fn classify_question(&self, index: &LabelIndex) -> Result<IntentCategory, ClassifyError> {
        let vocab = &self.vocabulary;

        if index.contains(Label::State) {
            // STATE without TARGET is a broken parse, not a fallthrough.
            let target = index.folded_text(Label::Target).ok_or(ClassifyError::MissingExpectedRole {
                role: Label::Target,
                alongside: Label::State,
            })?;
            if vocab.is_self_reference(&target) {
                return Ok(IntentCategory::SelfState);
            }
        }

        if let Some(target) = index.folded_text(Label::Target) {
            if vocab.is_activity(&target) {
                return Ok(IntentCategory::Activity);
            }
        }

        if let Some(object) = index.folded_text(Label::Object) {
            if vocab.is_object(&object) {
                return Ok(IntentCategory::ObjectRequest);
            }
        }

        Ok(IntentCategory::UnknownQuestion)
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new(Arc::new(Vocabulary::default()))
    }
}
