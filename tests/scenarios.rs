//! Worked scenarios on the four-point reference training set.
//!
//! Training set: ([0,0], A), ([0,1], A), ([5,5], B), ([5,6], B).

use plurality::prelude::*;

fn training_set() -> Dataset<&'static str> {
    Dataset::from_rows(
        &[vec![0.0, 0.0], vec![0.0, 1.0], vec![5.0, 5.0], vec![5.0, 6.0]],
        vec!["A", "A", "B", "B"],
    )
    .expect("reference training set is well formed")
}

#[test]
fn nearest_point_with_distance_tie() {
    // [0, 0.5] is 0.25 from both [0,0] (index 0) and [0,1] (index 1).
    // The lower index is kept; both are "A" anyway.
    let train = training_set();
    let test = Matrix::from_rows(&[vec![0.0, 0.5]]).expect("1x2");

    let mut knn = KNearestNeighbors::new(1);
    knn.fit(train.features(), train.labels()).expect("valid");
    assert_eq!(knn.predict(&test).expect("fitted"), vec!["A"]);

    let neighbors = knn.kneighbors(&test).expect("fitted");
    assert_eq!(neighbors[0].len(), 1);
    assert_eq!(neighbors[0][0].index, 0);
    assert!((neighbors[0][0].distance - 0.25).abs() < 1e-12);
}

#[test]
fn all_points_vote_tie_broken_by_nearest_voter() {
    // [2.5, 2.5] with k = 4:
    //   [0,0] -> 6.25 + 6.25  = 12.5  (A)
    //   [0,1] -> 6.25 + 2.25  =  8.5  (A)
    //   [5,5] -> 6.25 + 6.25  = 12.5  (B)
    //   [5,6] -> 6.25 + 12.25 = 18.5  (B)
    // Two votes each; A's closest voter (8.5) beats B's (12.5).
    let train = training_set();
    let test = Matrix::from_rows(&[vec![2.5, 2.5]]).expect("1x2");

    let mut knn = KNearestNeighbors::new(4);
    knn.fit(train.features(), train.labels()).expect("valid");

    let distances: Vec<f64> = knn.kneighbors(&test).expect("fitted")[0]
        .iter()
        .map(|n| n.distance)
        .collect();
    assert_eq!(distances, vec![8.5, 12.5, 12.5, 18.5]);
    assert_eq!(knn.predict(&test).expect("fitted"), vec!["A"]);
}

#[test]
fn k_larger_than_training_set_is_rejected() {
    let train = training_set();
    let test = Matrix::from_rows(&[vec![1.0, 1.0]]).expect("1x2");
    let err = classify(&train, &test, 5).expect_err("k = 5 > 4");
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn zero_k_is_rejected() {
    let train = training_set();
    let test = Matrix::from_rows(&[vec![1.0, 1.0]]).expect("1x2");
    let err = classify(&train, &test, 0).expect_err("k = 0");
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn dimension_mismatch_is_rejected() {
    let train = training_set();
    let test = Matrix::from_rows(&[vec![1.0, 1.0, 1.0]]).expect("1x3");
    let err = classify(&train, &test, 1).expect_err("3 features vs 2");
    assert_eq!(err.kind(), ErrorKind::Precondition);
}

#[test]
fn empty_test_set_has_undefined_accuracy() {
    let train = training_set();
    let test = train.select(&[]);
    let result = evaluate(&train, &test, 2).expect("empty test set is valid");
    assert!(result.predictions.is_empty());
    assert!(result.accuracy.is_none());
}

#[test]
fn pre_split_run_scores_predictions() {
    let train = training_set();
    let test = Dataset::from_rows(
        &[vec![0.1, 0.1], vec![4.9, 5.5], vec![2.5, 2.5], vec![2.5, 4.5]],
        vec!["A", "B", "B", "B"],
    )
    .expect("valid");
    let result = evaluate(&train, &test, 4).expect("valid");
    assert_eq!(result.predictions, vec!["A", "B", "A", "B"]);
    assert_eq!(result.accuracy, Some(75.0));
}

#[test]
fn vote_tie_goes_to_label_with_strictly_nearer_voter() {
    // Query at the origin, one feature. Squared distances:
    //   A voters: 1.0, 4.0    B voters: 2.0, 4.84
    let rows = [vec![1.0], vec![2.0_f64.sqrt()], vec![2.0], vec![2.2]];
    let query = Matrix::from_rows(&[vec![0.0]]).expect("1x1");

    let train = Dataset::from_rows(&rows, vec!["A", "B", "A", "B"]).expect("valid");
    assert_eq!(classify(&train, &query, 4).expect("valid"), vec!["A"]);

    // Swapping the labels swaps the winner
    let swapped = Dataset::from_rows(&rows, vec!["B", "A", "B", "A"]).expect("valid");
    assert_eq!(classify(&swapped, &query, 4).expect("valid"), vec!["B"]);
}
