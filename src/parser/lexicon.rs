use std::collections::HashMap;

use tracing::debug;

use crate::grammar::{DependencyGraph, Label, ParseError, Token, TrainingExample};
use super::DependencyParser;

/// Deterministic parser derived from the training corpus.
///
/// Utterances seen in training get their annotated graph back. Anything else is
/// labeled word by word with the label each word carried most often, then
/// flattened under a single root.
#[derive(Debug, Clone, Default)]
pub struct LexiconParser {
    lexicon: HashMap<String, Label>,
    memorized: HashMap<String, &'static TrainingExample>,
}

impl LexiconParser {
    pub fn train(corpus: &'static [TrainingExample]) -> Result<Self, ParseError> {
        // (label, count) in first-seen order so ties go to the earliest label
        let mut counts: HashMap<String, Vec<(Label, usize)>> = HashMap::new();
        let mut memorized = HashMap::new();

        for example in corpus {
            // Reject broken annotations before learning from them.
            example.graph()?;

            let words = example.words();
            for (word, label) in words.iter().zip(example.labels) {
                let seen = counts.entry(word.to_lowercase()).or_default();
                match seen.iter_mut().find(|(l, _)| l == label) {
                    Some((_, n)) => *n += 1,
                    None => seen.push((*label, 1)),
                }
            }
            memorized.insert(normalize(example.text), example);
        }

        let lexicon = counts
            .into_iter()
            .map(|(word, seen)| {
                let mut best = seen[0];
                for candidate in &seen[1..] {
                    if candidate.1 > best.1 {
                        best = *candidate;
                    }
                }
                (word, best.0)
            })
            .collect::<HashMap<_, _>>();

        debug!(words = lexicon.len(), utterances = memorized.len(), "lexicon parser trained");
        Ok(Self { lexicon, memorized })
    }

    /// Label learned for `word`, NONE for unknown words.
    pub fn label_of(&self, word: &str) -> Label {
        self.lexicon.get(&word.to_lowercase()).copied().unwrap_or(Label::None)
    }
}

impl DependencyParser for LexiconParser {
    fn parse(&self, utterance: &str) -> Result<DependencyGraph, ParseError> {
        let words: Vec<&str> = utterance.split_whitespace().collect();
        if words.is_empty() {
            return Err(ParseError::EmptyUtterance);
        }

        if let Some(example) = self.memorized.get(&normalize(utterance)) {
            return DependencyGraph::from_parts(&words, example.heads, example.labels);
        }

        let mut labels: Vec<Label> = words.iter().map(|w| self.label_of(w)).collect();

        // A dependency parse always has a root. Keep the first candidate.
        let root = labels.iter().position(|l| *l == Label::Root).unwrap_or(0);
        for (position, label) in labels.iter_mut().enumerate() {
            if position == root {
                *label = Label::Root;
            } else if *label == Label::Root {
                *label = Label::None;
            }
        }

        let tokens = words
            .into_iter()
            .zip(labels)
            .map(|(word, label)| Token { text: word.to_string(), label, head: root })
            .collect();

        DependencyGraph::new(tokens)
    }
}

fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
