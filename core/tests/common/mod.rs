//! Common test utilities and helpers for integration tests

/// Sequences of assorted lengths, including the empty one
#[allow(dead_code)] // Not every test binary uses every helper
pub fn sample_sequences() -> Vec<Vec<i32>> {
    vec![
        vec![],
        vec![1],
        vec![1, 2],
        (1..=9).collect(),
        (1..=10).collect(),
        (0..37).map(|x| (x * 7) % 11).collect(),
    ]
}

/// Create test data for string operations
pub fn create_test_string_data() -> Vec<String> {
    vec![
        "apple".to_string(),
        "banana".to_string(),
        "cherry".to_string(),
        "apricot".to_string(),
        "blueberry".to_string(),
        "avocado".to_string(),
    ]
}

/// Concatenate nested vectors back into one.
#[allow(dead_code)]
pub fn flatten<T: Clone>(nested: &[Vec<T>]) -> Vec<T> {
    nested.iter().flatten().cloned().collect()
}
