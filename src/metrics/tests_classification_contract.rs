// =========================================================================
// FALSIFY-MC: classification accuracy contract
//
// References:
//   - Sokolova & Lapalme (2009) "A systematic analysis of performance measures"
// =========================================================================

use super::*;

/// FALSIFY-MC-001: Accuracy ∈ [0, 100]
#[test]
fn falsify_mc_001_accuracy_bounded() {
    let y_true = vec![0, 1, 2, 0, 1, 2];
    let y_pred = vec![0, 2, 1, 0, 0, 1];

    let acc = accuracy(&y_pred, &y_true).expect("same length").expect("non-empty");
    assert!(
        (0.0..=100.0).contains(&acc),
        "FALSIFIED MC-001: accuracy={acc} not in [0, 100]"
    );
}

/// FALSIFY-MC-002: Perfect predictions → accuracy = 100
#[test]
fn falsify_mc_002_perfect_accuracy() {
    let y = vec!["setosa", "versicolor", "virginica"];
    let acc = accuracy(&y, &y).expect("same length").expect("non-empty");
    assert!(
        (acc - 100.0).abs() < 1e-9,
        "FALSIFIED MC-002: accuracy={acc} for perfect predictions, expected 100"
    );
}

/// FALSIFY-MC-003: Empty input is undefined, never NaN
#[test]
fn falsify_mc_003_empty_undefined() {
    let empty: Vec<u32> = Vec::new();
    let acc = accuracy(&empty, &empty).expect("same length");
    assert!(
        acc.is_none(),
        "FALSIFIED MC-003: accuracy={acc:?} for empty input, expected None"
    );
}
