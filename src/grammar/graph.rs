use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::label::Label;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("utterance is empty")]
    EmptyUtterance,
    #[error("expected {tokens} heads and labels, got {heads} heads and {labels} labels")]
    LengthMismatch { tokens: usize, heads: usize, labels: usize },
    #[error("token {position} points at head {head}, outside a graph of {len} tokens")]
    DanglingHead { position: usize, head: usize, len: usize },
    #[error("unknown dependency label '{0}'")]
    UnknownLabel(String),
}

/// One token of a parsed utterance.
///
/// `head` is the position of the governing token in the same graph.
/// A root token points at itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub label: Label,
    pub head: usize,
}

/// Labeled dependency graph for a single utterance, as produced by a parser.
///
/// Construction guarantees every head is a position inside the graph.
/// Nothing guarantees exactly one ROOT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyGraph {
    tokens: Vec<Token>,
}

impl DependencyGraph {
    pub fn new(tokens: Vec<Token>) -> Result<Self, ParseError> {
        let len = tokens.len();
        for (position, token) in tokens.iter().enumerate() {
            if token.head >= len {
                return Err(ParseError::DanglingHead { position, head: token.head, len });
            }
        }
        Ok(Self { tokens })
    }

    /// Zips parallel word/head/label lists, the shape of a training annotation.
    pub fn from_parts(words: &[&str], heads: &[usize], labels: &[Label]) -> Result<Self, ParseError> {
        if words.len() != heads.len() || words.len() != labels.len() {
            return Err(ParseError::LengthMismatch {
                tokens: words.len(),
                heads: heads.len(),
                labels: labels.len(),
            });
        }

        let tokens = words
            .iter()
            .zip(heads)
            .zip(labels)
            .map(|((word, head), label)| Token {
                text: word.to_string(),
                label: *label,
                head: *head,
            })
            .collect();

        Self::new(tokens)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Governing token of `token`. Always in range by construction.
    pub fn head_of(&self, token: &Token) -> &Token {
        &self.tokens[token.head]
    }

    /// First token labeled ROOT, if the parse produced one.
    pub fn root(&self) -> Option<&Token> {
        self.tokens.iter().find(|t| t.label == Label::Root)
    }

    /// `(text, label, head text)` triples, skipping NONE tokens.
    pub fn relations(&self) -> Vec<(&str, Label, &str)> {
        self.tokens
            .iter()
            .filter(|t| t.label != Label::None)
            .map(|t| (t.text.as_str(), t.label, self.head_of(t).text.as_str()))
            .collect()
    }
}
