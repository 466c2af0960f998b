pub mod types;
pub mod vocabulary;
pub mod classifier;

pub use types::*;
pub use vocabulary::Vocabulary;
pub use classifier::{ClassifyError, IntentClassifier};
