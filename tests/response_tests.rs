use std::collections::HashMap;

use greetbot::intent::IntentCategory;
use greetbot::responses::{select, FixedIndex, ResponseError, ResponsePool, UNKNOWN_QUESTION_REPLY};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_fixed_zero_always_returns_first_element() {
    let pools = ResponsePool::default();
    for category in IntentCategory::ALL {
        let first = pools.get(category).unwrap()[0].clone();
        for _ in 0..5 {
            assert_eq!(select(category, &pools, &mut FixedIndex(0)), Ok(first.clone()));
        }
    }
}

#[test]
fn test_selection_stays_within_pool() {
    let pools = ResponsePool::default();
    let mut rng = StdRng::seed_from_u64(7);
    for category in IntentCategory::ALL {
        let pool = pools.get(category).unwrap();
        for _ in 0..50 {
            let reply = select(category, &pools, &mut rng).unwrap();
            assert!(pool.contains(&reply), "{:?} reply '{}' not in its pool", category, reply);
        }
    }
}

#[test]
fn test_random_selection_covers_alternatives() {
    let pools = ResponsePool::default();
    let mut rng = StdRng::seed_from_u64(42);
    let pool = pools.get(IntentCategory::Greeting).unwrap();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        seen.insert(select(IntentCategory::Greeting, &pools, &mut rng).unwrap());
    }
    assert_eq!(seen.len(), pool.len(), "Uniform choice should hit every greeting eventually");
}

#[test]
fn test_default_pool_shapes() {
    let pools = ResponsePool::default();
    assert_eq!(pools.get(IntentCategory::UnknownQuestion).unwrap(), &[UNKNOWN_QUESTION_REPLY.to_string()]);
    for category in IntentCategory::ALL {
        if category != IntentCategory::UnknownQuestion {
            assert!(pools.get(category).unwrap().len() >= 2, "{:?} should offer alternatives", category);
        }
    }
    assert_eq!(pools.validate(), Ok(()));
}

#[test]
fn test_unknown_question_falls_back_to_fixed_reply() {
    let mut map = HashMap::new();
    map.insert(IntentCategory::Greeting, vec!["Hi!".to_string()]);
    let pools = ResponsePool::new(map);

    assert_eq!(
        select(IntentCategory::UnknownQuestion, &pools, &mut FixedIndex(3)),
        Ok(UNKNOWN_QUESTION_REPLY.to_string())
    );
}

#[test]
fn test_missing_pool_is_an_error() {
    let pools = ResponsePool::new(HashMap::new());
    assert_eq!(
        select(IntentCategory::Welcome, &pools, &mut FixedIndex(0)),
        Err(ResponseError::UnknownCategory { category: IntentCategory::Welcome })
    );
    assert!(pools.validate().is_err(), "Startup validation must catch missing pools");
}

#[test]
fn test_empty_pool_is_an_error() {
    let mut map: HashMap<IntentCategory, Vec<String>> = IntentCategory::ALL
        .iter()
        .map(|c| (*c, vec!["ok".to_string()]))
        .collect();
    map.insert(IntentCategory::Activity, vec![]);
    let pools = ResponsePool::new(map);

    assert_eq!(pools.validate(), Err(ResponseError::EmptyPool { category: IntentCategory::Activity }));
    assert_eq!(
        select(IntentCategory::Activity, &pools, &mut FixedIndex(0)),
        Err(ResponseError::EmptyPool { category: IntentCategory::Activity })
    );
}

#[test]
fn test_fixed_index_wraps_into_range() {
    let pools = ResponsePool::default();
    let pool = pools.get(IntentCategory::ObjectRequest).unwrap();
    assert_eq!(select(IntentCategory::ObjectRequest, &pools, &mut FixedIndex(3)), Ok(pool[1].clone()));
}
