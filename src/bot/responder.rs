use std::sync::Arc;
use tracing::debug;

use crate::config::BotConfig;
use crate::error::BotError;
use crate::grammar::{LabelIndex, TRAINING_CORPUS};
use crate::intent::{IntentCategory, IntentClassifier};
use crate::parser::{DependencyParser, LexiconParser};
use crate::responses::{self, RandomSource, ResponsePool};

/// Outcome of one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub category: IntentCategory,
    pub text: String,
}

/// utterance -> parse -> label index -> intent -> canned reply.
///
/// Holds only read-only state, so one instance can serve many sessions.
pub struct Responder {
    parser: Box<dyn DependencyParser>,
    classifier: IntentClassifier,
    responses: Arc<ResponsePool>,
}

impl Responder {
    pub fn new(parser: Box<dyn DependencyParser>, config: BotConfig) -> Self {
        Self {
            parser,
            classifier: IntentClassifier::new(Arc::new(config.vocabulary)),
            responses: Arc::new(config.responses),
        }
    }

    /// Lexicon parser trained on the built-in corpus.
    pub fn with_lexicon(config: BotConfig) -> Result<Self, BotError> {
        let parser = LexiconParser::train(TRAINING_CORPUS)?;
        Ok(Self::new(Box::new(parser), config))
    }

    pub fn parser(&self) -> &dyn DependencyParser {
        self.parser.as_ref()
    }

    pub fn respond(&self, utterance: &str) -> Result<String, BotError> {
        self.respond_with(utterance, &mut rand::thread_rng())
    }

    pub fn respond_with<R>(&self, utterance: &str, rng: &mut R) -> Result<String, BotError>
    where
        R: RandomSource + ?Sized,
    {
        self.reply(utterance, rng).map(|reply| reply.text)
    }

    pub fn reply<R>(&self, utterance: &str, rng: &mut R) -> Result<Reply, BotError>
    where
        R: RandomSource + ?Sized,
    {
        let graph = self.parser.parse(utterance)?;
        let index = LabelIndex::build(&graph);
        debug!(labels = %index.summary(), "label index");

        let category = self.classifier.classify(&index)?;

        let fragments = vec![responses::select(category, &self.responses, rng)?];
        Ok(Reply { category, text: fragments.join(" ") })
    }
}
