//! Train/test splitting.
//!
//! A split partitions the indices `0..n` of a dataset into a training part
//! and a test part using a uniformly random permutation. Passing a seed makes
//! the permutation, and everything downstream of it, reproducible.

use crate::data::Dataset;
use crate::error::{PluralityError, Result};

/// Fraction of samples assigned to training when none is given.
pub const DEFAULT_TRAINING_FRACTION: f64 = 0.75;

/// Disjoint training and test indices covering `0..n` exactly once.
///
/// Both sides keep the order of the permutation that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    /// Indices of training samples
    pub train: Vec<usize>,
    /// Indices of test samples
    pub test: Vec<usize>,
}

impl Split {
    /// Total number of indices covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.train.len() + self.test.len()
    }

    /// Returns true if the split covers no indices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.train.is_empty() && self.test.is_empty()
    }
}

/// Checks that `training_fraction` lies in the open interval (0, 1).
pub(crate) fn validate_training_fraction(training_fraction: f64) -> Result<()> {
    if training_fraction.is_finite() && training_fraction > 0.0 && training_fraction < 1.0 {
        Ok(())
    } else {
        Err(PluralityError::invalid_hyperparameter(
            "training_fraction",
            training_fraction,
            "a value in the open interval (0, 1)",
        ))
    }
}

/// Shuffles indices with optional random seed.
fn shuffle_indices(n_samples: usize, random_state: Option<u64>) -> Vec<usize> {
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    let mut indices: Vec<usize> = (0..n_samples).collect();

    if let Some(seed) = random_state {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);
    } else {
        let mut rng = rand::thread_rng();
        indices.shuffle(&mut rng);
    }

    indices
}

/// Randomly partitions `0..n_samples` into training and test indices.
///
/// The first `floor(n_samples * training_fraction)` indices of the
/// permutation form the training side; the rest form the test side. Either
/// side may come out empty for tiny inputs; the classifier reports that
/// case when it runs.
///
/// # Errors
///
/// Returns an error if `n_samples` is zero or `training_fraction` is not in
/// (0, 1).
///
/// # Example
///
/// ```
/// use plurality::model_selection::split_indices;
///
/// let split = split_indices(8, 0.75, Some(42)).expect("valid split");
/// assert_eq!(split.train.len(), 6);
/// assert_eq!(split.test.len(), 2);
/// ```
pub fn split_indices(
    n_samples: usize,
    training_fraction: f64,
    random_state: Option<u64>,
) -> Result<Split> {
    if n_samples == 0 {
        return Err(PluralityError::empty_input("dataset to split"));
    }
    validate_training_fraction(training_fraction)?;

    let n_train = (n_samples as f64 * training_fraction).floor() as usize;
    if n_train == 0 || n_train == n_samples {
        tracing::warn!(
            n_samples,
            training_fraction,
            n_train,
            "split leaves one side empty"
        );
    }

    let mut train = shuffle_indices(n_samples, random_state);
    let test = train.split_off(n_train);
    Ok(Split { train, test })
}

/// Split a dataset into random train and test subsets.
///
/// # Arguments
///
/// * `dataset` - Labelled samples to partition
/// * `training_fraction` - Proportion of samples for training, in (0, 1)
/// * `random_state` - Optional random seed for reproducibility
///
/// # Returns
///
/// Tuple of (train, test)
///
/// # Errors
///
/// Same conditions as [`split_indices`].
///
/// # Example
///
/// ```rust
/// use plurality::data::Dataset;
/// use plurality::model_selection::train_test_split;
///
/// let rows: Vec<Vec<f64>> = (0..10).map(|i| vec![f64::from(i)]).collect();
/// let labels: Vec<u8> = (0..10).map(|i| i % 2).collect();
/// let ds = Dataset::from_rows(&rows, labels).expect("valid dataset");
///
/// let (train, test) = train_test_split(&ds, 0.8, Some(42)).expect("valid split");
/// assert_eq!(train.len(), 8);
/// assert_eq!(test.len(), 2);
/// ```
pub fn train_test_split<L: Clone>(
    dataset: &Dataset<L>,
    training_fraction: f64,
    random_state: Option<u64>,
) -> Result<(Dataset<L>, Dataset<L>)> {
    let split = split_indices(dataset.len(), training_fraction, random_state)?;
    Ok((dataset.select(&split.train), dataset.select(&split.test)))
}


#[cfg(test)]
#[path = "tests_split_contract.rs"]
mod tests_split_contract;
