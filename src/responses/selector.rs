use rand::Rng;
use tracing::debug;

use crate::intent::IntentCategory;
use super::pool::{ResponseError, ResponsePool, UNKNOWN_QUESTION_REPLY};

/// Source of uniform choices. Injected so callers can pin the outcome.
pub trait RandomSource {
    /// Index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Always picks the same index (wrapped into range).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedIndex(pub usize);

impl RandomSource for FixedIndex {
    fn pick(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

/// Picks one reply for `category` uniformly at random.
pub fn select<R>(category: IntentCategory, pools: &ResponsePool, rng: &mut R) -> Result<String, ResponseError>
where
    R: RandomSource + ?Sized,
{
    let pool = match pools.get(category) {
        Some(pool) => pool,
        None if category == IntentCategory::UnknownQuestion => {
            return Ok(UNKNOWN_QUESTION_REPLY.to_string());
        }
        None => return Err(ResponseError::UnknownCategory { category }),
    };

    if pool.is_empty() {
        return Err(ResponseError::EmptyPool { category });
    }

    let choice = rng.pick(pool.len()).min(pool.len() - 1);
    debug!(%category, choice, of = pool.len(), "response selected");
    Ok(pool[choice].clone())
}
