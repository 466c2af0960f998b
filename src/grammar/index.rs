use std::collections::HashMap;

use tracing::trace;

use super::graph::{DependencyGraph, Token};
use super::label::Label;

/// Label -> representative token for one utterance.
///
/// When several tokens share a label the last one in graph order wins.
/// Earlier role tokens are dropped; callers rely on that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelIndex {
    entries: HashMap<Label, Token>,
}

impl LabelIndex {
    /// Never fails, whatever the shape of the graph.
    pub fn build(graph: &DependencyGraph) -> Self {
        let mut entries = HashMap::new();
        for token in graph.tokens() {
            if let Some(previous) = entries.insert(token.label, token.clone()) {
                trace!(label = %token.label, dropped = %previous.text, kept = %token.text, "label overwritten");
            }
        }
        Self { entries }
    }

    pub fn get(&self, label: Label) -> Option<&Token> {
        self.entries.get(&label)
    }

    pub fn contains(&self, label: Label) -> bool {
        self.entries.contains_key(&label)
    }

    /// Case-folded text of the token bearing `label`.
    pub fn folded_text(&self, label: Label) -> Option<String> {
        self.get(label).map(|t| t.text.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compact `LABEL=text` rendering for debug logs, in label order.
    pub fn summary(&self) -> String {
        Label::ALL
            .iter()
            .filter_map(|label| self.get(*label).map(|t| format!("{}={}", label, t.text)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<&DependencyGraph> for LabelIndex {
    fn from(graph: &DependencyGraph) -> Self {
        Self::build(graph)
    }
}
