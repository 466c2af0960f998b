//! Annotated utterances that teach a parser the custom label schema.
//!
//! Versioned together with the vocabulary tables: both encode the same intent
//! taxonomy, so a new question shape needs an example here and a word there.

use super::graph::{DependencyGraph, ParseError};
use super::label::Label;
use super::label::Label::{None as NO, Object as OB, Root as RT, State as ST, Target as TG};

/// One training utterance: whitespace-separated text plus per-token annotation.
#[derive(Debug, Clone, Copy)]
pub struct TrainingExample {
    pub text: &'static str,
    /// Position of each token's head.
    pub heads: &'static [usize],
    pub labels: &'static [Label],
}

impl TrainingExample {
    pub fn words(&self) -> Vec<&'static str> {
        self.text.split_whitespace().collect()
    }

    /// Builds the annotated graph, rejecting malformed annotations.
    pub fn graph(&self) -> Result<DependencyGraph, ParseError> {
        DependencyGraph::from_parts(&self.words(), self.heads, self.labels)
    }
}

pub const TRAINING_CORPUS: &[TrainingExample] = &[
    TrainingExample { text: "hi there", heads: &[0, 0], labels: &[RT, NO] },
    TrainingExample { text: "hey you", heads: &[0, 0], labels: &[RT, TG] },
    TrainingExample { text: "hello bot", heads: &[0, 0], labels: &[RT, TG] },
    // "good" carries no role the classifier reads.
    TrainingExample { text: "good morning", heads: &[1, 1], labels: &[NO, RT] },
    TrainingExample { text: "hi", heads: &[0], labels: &[RT] },
    TrainingExample { text: "how are you", heads: &[0, 2, 0], labels: &[RT, ST, TG] },
    TrainingExample { text: "how are you feeling", heads: &[0, 2, 0, 2], labels: &[RT, ST, TG, ST] },
    TrainingExample { text: "how are you doing", heads: &[0, 2, 0, 2], labels: &[RT, ST, TG, ST] },
    TrainingExample { text: "how you doing", heads: &[0, 2, 0], labels: &[RT, ST, TG] },
    TrainingExample { text: "What are you doing", heads: &[0, 2, 0, 2], labels: &[RT, ST, TG, ST] },
    TrainingExample { text: "anything new going on", heads: &[0, 0, 0, 2], labels: &[RT, ST, ST, NO] },
    TrainingExample { text: "do you want a coffee", heads: &[1, 2, 2, 4, 2], labels: &[NO, TG, RT, NO, OB] },
];

/// Utterances used to eyeball a parser after training.
pub const SMOKE_TEST_UTTERANCES: &[&str] = &[
    "hello bot",
    "hello there",
    "hi good morning",
    "hey bot",
    "Hello",
    "HI THERE",
    "how are you doing bot",
    "how do you do",
    "how do you feel",
    "hi my name is BOTBOTBOT",
    "want a cup of coffee",
    "what is new",
    "how is it going",
    "how is it doing",
    "what is hanging",
];

/// Checks every example: parallel lists line up, heads are in range and a ROOT exists.
pub fn validate(corpus: &[TrainingExample]) -> Result<(), CorpusError> {
    for (index, example) in corpus.iter().enumerate() {
        let graph = example
            .graph()
            .map_err(|source| CorpusError::Malformed { index, text: example.text, source })?;
        if graph.root().is_none() {
            return Err(CorpusError::MissingRoot { index, text: example.text });
        }
    }
    Ok(())
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CorpusError {
    #[error("training example {index} ('{text}') is malformed: {source}")]
    Malformed { index: usize, text: &'static str, source: ParseError },
    #[error("training example {index} ('{text}') has no ROOT")]
    MissingRoot { index: usize, text: &'static str },
}
