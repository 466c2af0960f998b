pub mod label;
pub mod graph;
pub mod index;
pub mod corpus;

pub use label::Label;
pub use graph::{DependencyGraph, ParseError, Token};
pub use index::LabelIndex;
pub use corpus::{TrainingExample, TRAINING_CORPUS};
