pub mod lexicon;

pub use lexicon::LexiconParser;

use crate::grammar::{DependencyGraph, ParseError};

/// Capability: plain text in, one label and one head per token out.
///
/// Implementations must emit the custom label schema and, for well-formed
/// input, a rooted tree. How they were trained is none of the caller's business.
pub trait DependencyParser: Send + Sync {
    fn parse(&self, utterance: &str) -> Result<DependencyGraph, ParseError>;
}

impl<P: DependencyParser + ?Sized> DependencyParser for Box<P> {
    fn parse(&self, utterance: &str) -> Result<DependencyGraph, ParseError> {
        (**self).parse(utterance)
    }
}
