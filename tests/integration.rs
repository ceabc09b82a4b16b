//! Integration tests for the plurality library.
//!
//! These tests verify end-to-end workflows: load from CSV, split, classify
//! and score.

use plurality::data::{read_dataset, read_features, CsvOptions, LabelColumn};
use plurality::evaluation::{evaluate_unlabelled, sweep_k, sweep_training_fraction};
use plurality::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const IRIS_SAMPLE: &str = "\
5.1,3.5,1.4,0.2,Iris-setosa
4.9,3.0,1.4,0.2,Iris-setosa
4.7,3.2,1.3,0.2,Iris-setosa
4.6,3.1,1.5,0.2,Iris-setosa
5.0,3.6,1.4,0.2,Iris-setosa
5.4,3.9,1.7,0.4,Iris-setosa
7.0,3.2,4.7,1.4,Iris-versicolor
6.4,3.2,4.5,1.5,Iris-versicolor
6.9,3.1,4.9,1.5,Iris-versicolor
5.5,2.3,4.0,1.3,Iris-versicolor
6.5,2.8,4.6,1.5,Iris-versicolor
5.7,2.8,4.5,1.3,Iris-versicolor
6.3,3.3,6.0,2.5,Iris-virginica
5.8,2.7,5.1,1.9,Iris-virginica
7.1,3.0,5.9,2.1,Iris-virginica
6.3,2.9,5.6,1.8,Iris-virginica
6.5,3.0,5.8,2.2,Iris-virginica
7.6,3.0,6.6,2.1,Iris-virginica

";

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_csv_split_classify_score_workflow() {
    let file = write_temp(IRIS_SAMPLE);
    let dataset = read_dataset(file.path(), &CsvOptions::default()).expect("valid CSV");
    assert_eq!(dataset.len(), 18);
    assert_eq!(dataset.n_features(), 4);

    let (train, test) = train_test_split(&dataset, 0.75, Some(42)).expect("valid split");
    assert_eq!(train.len(), 13);
    assert_eq!(test.len(), 5);

    let predictions = classify(&train, test.features(), 1).expect("valid run");
    assert_eq!(predictions.len(), test.len());

    let acc = accuracy(&predictions, test.labels())
        .expect("same length")
        .expect("non-empty test set");
    assert!((0.0..=100.0).contains(&acc));
}

#[test]
fn test_pre_split_files_with_headers_and_leading_labels() {
    let train_file = write_temp("species,x,y\nA,0,0\nA,0,1\nB,5,5\nB,5,6\n");
    let test_file = write_temp("species,x,y\nA,0,0.5\nB,2.5,4.5\n");
    let options = CsvOptions::default()
        .with_headers(true)
        .with_label_column(LabelColumn::First);

    let train = read_dataset(train_file.path(), &options).expect("valid training file");
    let test = read_dataset(test_file.path(), &options).expect("valid test file");

    let result = evaluate(&train, &test, 4).expect("valid run");
    assert_eq!(result.predictions, vec!["A".to_string(), "B".to_string()]);
    assert_eq!(result.accuracy, Some(100.0));
}

#[test]
fn test_unlabelled_test_file() {
    let train_file = write_temp("0,0,A\n0,1,A\n5,5,B\n5,6,B\n");
    let test_file = write_temp("0,0.5\n2.5,2.5\n5,5.5\n");

    let train = read_dataset(train_file.path(), &CsvOptions::default()).expect("valid");
    let test = read_features(test_file.path(), &CsvOptions::default()).expect("valid");
    assert_eq!(test.shape(), (3, 2));

    let result = evaluate_unlabelled(&train, &test, 4).expect("valid run");
    assert_eq!(result.predictions, vec!["A", "A", "B"]);
    assert!(result.accuracy.is_none());
}

#[test]
fn test_malformed_csv_is_a_data_error() {
    let file = write_temp("1.0,2.0,A\n1.0,oops,B\n");
    let err = read_dataset(file.path(), &CsvOptions::default()).expect_err("non-numeric cell");
    assert_eq!(err.kind(), ErrorKind::Data);
    assert!(err.to_string().contains("oops"));

    let file = write_temp("1.0,2.0,A\n1.0,B\n");
    let err = read_dataset(file.path(), &CsvOptions::default()).expect_err("ragged rows");
    assert_eq!(err.kind(), ErrorKind::Data);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let err = read_dataset(dir.path().join("absent.csv"), &CsvOptions::default())
        .expect_err("missing file");
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_sweeps_over_csv_dataset() {
    let file = write_temp(IRIS_SAMPLE);
    let dataset = read_dataset(file.path(), &CsvOptions::default()).expect("valid CSV");

    let by_k = sweep_k(&dataset, &[1, 3, 5], 0.75, 5, Some(3)).expect("valid sweep");
    assert_eq!(by_k.len(), 3);
    assert!(by_k.iter().all(|p| p.trials == 5 && p.mean_accuracy.is_some()));

    let by_fraction =
        sweep_training_fraction(&dataset, &[0.5, 0.75], 1, 5, Some(3)).expect("valid sweep");
    assert_eq!(by_fraction.len(), 2);

    // Same seeds, same sweep
    let again = sweep_k(&dataset, &[1, 3, 5], 0.75, 5, Some(3)).expect("valid sweep");
    assert_eq!(by_k, again);
}

#[test]
fn test_classifier_trait_object_style_usage() {
    fn run<C: Classifier<u8>>(model: &mut C, x: &Matrix<f64>, y: &[u8]) -> Option<f64> {
        model.fit(x, y).expect("valid");
        model.score(x, y).expect("same length")
    }

    let x = Matrix::from_rows(&[vec![0.0], vec![0.2], vec![10.0], vec![10.2]]).expect("4x1");
    let y = [0u8, 0, 1, 1];

    assert_eq!(run(&mut KNearestNeighbors::new(1), &x, &y), Some(100.0));
    assert_eq!(run(&mut ExhaustiveKnn::new(1), &x, &y), Some(100.0));
}
