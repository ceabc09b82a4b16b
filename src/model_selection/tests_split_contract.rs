// =========================================================================
// FALSIFY-SPLIT: train/test split contract
//
// References:
//   - Hastie, Tibshirani & Friedman (2009) "The Elements of Statistical
//     Learning", section 7.2 (hold-out estimation)
// =========================================================================

use super::*;

/// FALSIFY-SPLIT-001: Cardinalities sum to n
#[test]
fn falsify_split_001_cardinalities_sum() {
    for n in [1_usize, 2, 3, 10, 149, 150] {
        for fraction in [0.01, 0.25, 0.5, 0.75, 0.99] {
            let split = split_indices(n, fraction, Some(3)).expect("valid");
            assert_eq!(
                split.train.len() + split.test.len(),
                n,
                "FALSIFIED SPLIT-001: n={n}, fraction={fraction}"
            );
        }
    }
}

/// FALSIFY-SPLIT-002: No index appears twice
#[test]
fn falsify_split_002_disjoint() {
    let split = split_indices(150, 0.75, Some(11)).expect("valid");
    let mut seen = vec![false; 150];
    for &i in split.train.iter().chain(&split.test) {
        assert!(!seen[i], "FALSIFIED SPLIT-002: index {i} appears twice");
        seen[i] = true;
    }
    assert!(seen.iter().all(|&s| s), "FALSIFIED SPLIT-002: an index is missing");
}

/// FALSIFY-SPLIT-003: Training size is floor(n * fraction)
#[test]
fn falsify_split_003_floor_training_size() {
    let split = split_indices(150, 0.75, Some(5)).expect("valid");
    assert_eq!(
        split.train.len(),
        112,
        "FALSIFIED SPLIT-003: floor(150 * 0.75) = 112, got {}",
        split.train.len()
    );
}
