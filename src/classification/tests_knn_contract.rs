// =========================================================================
// FALSIFY-KNN: k-nearest-neighbors classification contract
//
// References:
//   - Cover & Hart (1967) "Nearest Neighbor Pattern Classification"
// =========================================================================

use super::*;
use crate::primitives::Matrix;

fn clusters() -> (Matrix<f64>, Vec<usize>) {
    let x = Matrix::from_vec(6, 2, vec![
        0.0, 0.0, 0.5, 0.5, 1.0, 0.0,
        5.0, 5.0, 5.5, 5.5, 6.0, 5.0,
    ]).expect("valid");
    (x, vec![0, 0, 0, 1, 1, 1])
}

/// FALSIFY-KNN-001: Predictions in training label set
#[test]
fn falsify_knn_001_predictions_in_label_range() {
    let (x, y) = clusters();
    let mut knn = KNearestNeighbors::new(3);
    knn.fit(&x, &y).expect("fit");

    let preds = knn.predict(&x).expect("predict");
    for (i, &p) in preds.iter().enumerate() {
        assert!(
            p <= 1,
            "FALSIFIED KNN-001: prediction[{i}] = {p}, not in {{0, 1}}"
        );
    }
}

/// FALSIFY-KNN-002: Prediction count matches input count
#[test]
fn falsify_knn_002_prediction_count() {
    let (x, y) = clusters();
    let mut knn = KNearestNeighbors::new(3);
    knn.fit(&x, &y).expect("fit");

    let x_test = Matrix::from_vec(3, 2, vec![0.2, 0.2, 3.0, 3.0, 5.8, 5.8]).expect("valid");
    let preds = knn.predict(&x_test).expect("predict");
    assert_eq!(preds.len(), 3, "FALSIFIED KNN-002: {} predictions for 3 inputs", preds.len());
}

/// FALSIFY-KNN-003: Well-separated clusters classified correctly
#[test]
fn falsify_knn_003_separable_data() {
    let x = Matrix::from_vec(6, 2, vec![
        0.0, 0.0, 0.1, 0.1, 0.2, 0.2,
        100.0, 100.0, 100.1, 100.1, 100.2, 100.2,
    ]).expect("valid");
    let y = vec![0_usize, 0, 0, 1, 1, 1];

    let mut knn = KNearestNeighbors::new(3);
    knn.fit(&x, &y).expect("fit");

    let preds = knn.predict(&x).expect("predict");
    assert_eq!(
        preds, y,
        "FALSIFIED KNN-003: KNN cannot classify well-separated clusters"
    );
}

/// FALSIFY-KNN-004: Deterministic predictions
#[test]
fn falsify_knn_004_deterministic() {
    let x = Matrix::from_vec(4, 2, vec![
        0.0, 0.0, 1.0, 1.0, 5.0, 5.0, 6.0, 6.0,
    ]).expect("valid");
    let y = vec![0_usize, 0, 1, 1];

    let mut knn = KNearestNeighbors::new(2);
    knn.fit(&x, &y).expect("fit");

    let probe = Matrix::from_vec(1, 2, vec![3.0, 3.0]).expect("valid");
    let p1 = knn.predict(&probe).expect("predict 1");
    let p2 = knn.predict(&probe).expect("predict 2");
    assert_eq!(p1, p2, "FALSIFIED KNN-004: predictions differ on same input");
}

/// FALSIFY-KNN-005: Exactly k neighbors, none farther than an unselected one
#[test]
fn falsify_knn_005_selection_is_k_smallest() {
    let (x, y) = clusters();
    let probe = Matrix::from_vec(1, 2, vec![2.0, 1.0]).expect("valid");

    for k in 1..=6 {
        let mut knn = KNearestNeighbors::new(k);
        knn.fit(&x, &y).expect("fit");
        let selected = &knn.kneighbors(&probe).expect("kneighbors")[0];
        assert_eq!(selected.len(), k, "FALSIFIED KNN-005: {} neighbors for k={k}", selected.len());

        let worst = selected.iter().map(|n| n.distance).fold(f64::MIN, f64::max);
        for (j, row) in x.rows().enumerate() {
            if selected.iter().all(|n| n.index != j) {
                let d = squared_euclidean(probe.row(0), row);
                assert!(
                    d >= worst,
                    "FALSIFIED KNN-005: unselected row {j} at {d} is nearer than selected {worst}"
                );
            }
        }
    }
}

/// FALSIFY-KNN-006: Vote ties go to the label with the nearest voter
#[test]
fn falsify_knn_006_vote_tie_break() {
    // Query at the origin. Label A: voters at 1.0 and 9.0. Label B: voters
    // at 4.0 and 6.25. Two votes each; A's closest voter is strictly nearer.
    let x = Matrix::from_vec(4, 1, vec![1.0, 3.0, -2.0, 2.5]).expect("valid");
    let y = vec!["A", "A", "B", "B"];

    let mut knn = KNearestNeighbors::new(4);
    knn.fit(&x, &y).expect("fit");
    let probe = Matrix::from_vec(1, 1, vec![0.0]).expect("valid");
    assert_eq!(
        knn.predict(&probe).expect("predict"),
        vec!["A"],
        "FALSIFIED KNN-006: tie not resolved toward nearest voter"
    );
}

/// FALSIFY-KNN-007: k above training size is rejected, never clamped
#[test]
fn falsify_knn_007_k_not_clamped() {
    let (x, y) = clusters();
    let mut knn = KNearestNeighbors::new(7);
    assert!(
        knn.fit(&x, &y).is_err(),
        "FALSIFIED KNN-007: k=7 accepted for 6 training samples"
    );
}
