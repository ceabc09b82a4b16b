//! Classification runs and accuracy experiments.
//!
//! A run goes Splitter → classifier → scorer and yields a
//! [`PredictionResult`]. Sweeps repeat seeded runs while varying `k` or the
//! training fraction and average the accuracies, the way hold-out
//! experiments on small datasets such as iris are usually reported.
//!
//! # Example
//!
//! ```
//! use plurality::data::Dataset;
//! use plurality::evaluation::evaluate_random_split;
//!
//! let rows: Vec<Vec<f64>> = (0..20).map(|i| vec![f64::from(i % 2) * 10.0, f64::from(i)]).collect();
//! let labels: Vec<u8> = (0..20).map(|i| (i % 2) as u8).collect();
//! let ds = Dataset::from_rows(&rows, labels).expect("valid");
//!
//! let result = evaluate_random_split(&ds, 1, 0.75, Some(7)).expect("valid run");
//! assert_eq!(result.predictions.len(), 5);
//! assert!(result.accuracy.is_some());
//! ```

use crate::classification::classify;
use crate::data::Dataset;
use crate::error::{PluralityError, Result};
use crate::metrics::accuracy;
use crate::model_selection::{train_test_split, validate_training_fraction};
use crate::primitives::Matrix;
use crate::traits::Label;
use serde::{Deserialize, Serialize};

/// Predicted labels for a test set plus the resulting accuracy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult<L> {
    /// One predicted label per test sample, in test order
    pub predictions: Vec<L>,
    /// Percentage correct; `None` for an empty or unlabelled test set
    pub accuracy: Option<f64>,
}

/// Mean accuracy for one parameter value of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// The `k` or training fraction that was used
    pub value: f64,
    /// Mean accuracy over trials with a defined accuracy
    pub mean_accuracy: Option<f64>,
    /// Number of runs performed
    pub trials: usize,
}

/// Classifies a labelled test set against a training set (pre-split mode).
///
/// # Errors
///
/// Returns any classifier error; see [`classify`].
pub fn evaluate<L: Label>(
    train: &Dataset<L>,
    test: &Dataset<L>,
    k: usize,
) -> Result<PredictionResult<L>> {
    let predictions = classify(train, test.features(), k)?;
    let accuracy = accuracy(&predictions, test.labels())?;
    tracing::debug!(
        train = train.len(),
        test = test.len(),
        k,
        accuracy,
        "evaluated test set"
    );
    Ok(PredictionResult {
        predictions,
        accuracy,
    })
}

/// Classifies unlabelled samples; the result carries no accuracy.
///
/// # Errors
///
/// Returns any classifier error; see [`classify`].
pub fn evaluate_unlabelled<L: Label>(
    train: &Dataset<L>,
    test: &Matrix<f64>,
    k: usize,
) -> Result<PredictionResult<L>> {
    Ok(PredictionResult {
        predictions: classify(train, test, k)?,
        accuracy: None,
    })
}

/// Splits `dataset` at random, then classifies and scores the test part.
///
/// # Errors
///
/// Returns splitter errors (empty dataset, bad fraction) and classifier
/// errors (for instance `k` larger than the training part).
pub fn evaluate_random_split<L: Label>(
    dataset: &Dataset<L>,
    k: usize,
    training_fraction: f64,
    random_state: Option<u64>,
) -> Result<PredictionResult<L>> {
    let (train, test) = train_test_split(dataset, training_fraction, random_state)?;
    evaluate(&train, &test, k)
}

/// Mean accuracy for each `k` in `ks`.
///
/// Trial `t` of every `k` uses seed `random_state + t`, so all values of `k`
/// see the same sequence of splits.
///
/// # Errors
///
/// Returns an error if `trials` is zero, the fraction is invalid, or any
/// run fails.
pub fn sweep_k<L: Label>(
    dataset: &Dataset<L>,
    ks: &[usize],
    training_fraction: f64,
    trials: usize,
    random_state: Option<u64>,
) -> Result<Vec<SweepPoint>> {
    validate_trials(trials)?;
    validate_training_fraction(training_fraction)?;

    ks.iter()
        .map(|&k| {
            let point = sweep_point(k as f64, trials, |t| {
                evaluate_random_split(dataset, k, training_fraction, trial_seed(random_state, t))
                    .map(|r| r.accuracy)
            })?;
            tracing::info!(k, mean_accuracy = point.mean_accuracy, "k sweep point");
            Ok(point)
        })
        .collect()
}

/// Mean accuracy for each training fraction in `fractions`.
///
/// # Errors
///
/// Returns an error if `trials` is zero, any fraction is invalid, or any
/// run fails.
pub fn sweep_training_fraction<L: Label>(
    dataset: &Dataset<L>,
    fractions: &[f64],
    k: usize,
    trials: usize,
    random_state: Option<u64>,
) -> Result<Vec<SweepPoint>> {
    validate_trials(trials)?;
    for &fraction in fractions {
        validate_training_fraction(fraction)?;
    }

    fractions
        .iter()
        .map(|&fraction| {
            let point = sweep_point(fraction, trials, |t| {
                evaluate_random_split(dataset, k, fraction, trial_seed(random_state, t))
                    .map(|r| r.accuracy)
            })?;
            tracing::info!(
                training_fraction = fraction,
                mean_accuracy = point.mean_accuracy,
                "training fraction sweep point"
            );
            Ok(point)
        })
        .collect()
}

fn validate_trials(trials: usize) -> Result<()> {
    if trials == 0 {
        return Err(PluralityError::invalid_hyperparameter("trials", trials, ">= 1"));
    }
    Ok(())
}

fn trial_seed(random_state: Option<u64>, trial: usize) -> Option<u64> {
    random_state.map(|seed| seed.wrapping_add(trial as u64))
}

fn sweep_point<F>(value: f64, trials: usize, mut run: F) -> Result<SweepPoint>
where
    F: FnMut(usize) -> Result<Option<f64>>,
{
    let mut sum = 0.0;
    let mut defined = 0_usize;
    for t in 0..trials {
        if let Some(acc) = run(t)? {
            sum += acc;
            defined += 1;
        }
    }
    Ok(SweepPoint {
        value,
        mean_accuracy: (defined > 0).then(|| sum / defined as f64),
        trials,
    })
}
