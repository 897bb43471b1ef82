//! Property checks over the sequence algorithms
//!
//! These tests walk a fixed set of inputs and argument combinations and
//! check the structural guarantees of chunking, windowing, deduplication
//! and zipping.

mod common;

use common::*;
use sift_core::{SiftError, chunked, distinct, unzip, windowed, zip};
use std::collections::HashSet;

#[test]
fn test_chunked_flattens_back_to_input() {
    for seq in sample_sequences() {
        for size in 1..=12 {
            let chunks = chunked(&seq, size).unwrap();
            assert_eq!(flatten(&chunks), seq, "size {}", size);

            if let Some((last, full)) = chunks.split_last() {
                assert!(full.iter().all(|c| c.len() == size));
                assert!(!last.is_empty() && last.len() <= size);
            }
            assert_eq!(chunks.len(), seq.len().div_ceil(size));
        }
    }
}

#[test]
fn test_window_lengths_and_count() {
    for seq in sample_sequences() {
        for size in 1..=6 {
            for step in 1..=6 {
                let windows = windowed(&seq, size, step).unwrap();

                let expected_count = if seq.is_empty() {
                    0
                } else {
                    seq.len().div_ceil(step)
                };
                assert_eq!(windows.len(), expected_count);

                for (i, window) in windows.iter().enumerate() {
                    let start = i * step;
                    let remaining = seq.len() - start;
                    assert_eq!(window.len(), size.min(remaining));
                    assert_eq!(window[..], seq[start..start + window.len()]);
                }
            }
        }
    }
}

#[test]
fn test_segmentation_rejects_zero_arguments() {
    for seq in sample_sequences() {
        assert!(matches!(
            chunked(&seq, 0),
            Err(SiftError::InvalidArgument { .. })
        ));
        assert!(matches!(
            windowed(&seq, 0, 1),
            Err(SiftError::InvalidArgument { .. })
        ));
        assert!(matches!(
            windowed(&seq, 1, 0),
            Err(SiftError::InvalidArgument { .. })
        ));
    }
}

#[test]
fn test_distinct_has_no_duplicates_and_keeps_first_order() {
    for seq in sample_sequences() {
        let unique = distinct(&seq);
        assert!(unique.len() <= seq.len());

        let set: HashSet<_> = unique.iter().collect();
        assert_eq!(set.len(), unique.len());

        let mut expected = Vec::new();
        for item in &seq {
            if !expected.contains(item) {
                expected.push(*item);
            }
        }
        assert_eq!(unique, expected);
    }
}

#[test]
fn test_unzip_of_zip_takes_common_prefix() {
    let sequences = sample_sequences();
    let words = create_test_string_data();

    for seq in &sequences {
        let n = seq.len().min(words.len());
        let (left, right) = unzip(zip(seq, &words));
        assert_eq!(left, seq[..n].to_vec());
        assert_eq!(right, words[..n].to_vec());
    }
}
