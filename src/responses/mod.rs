pub mod pool;
pub mod selector;

pub use pool::{ResponseError, ResponsePool, UNKNOWN_QUESTION_REPLY};
pub use selector::{select, FixedIndex, RandomSource};
