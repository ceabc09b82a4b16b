//! Labelled datasets and loaders.
//!
//! A [`Dataset`] pairs a feature [`Matrix`] with one label per row. Labels are
//! opaque: anything comparable and hashable works as a class identifier.

mod csv;

pub use self::csv::{
    read_dataset, read_dataset_from_reader, read_features, read_features_from_reader, CsvOptions,
    LabelColumn,
};

use crate::error::{PluralityError, Result};
use crate::primitives::Matrix;
use serde::{Deserialize, Serialize};

/// An ordered sequence of (sample, label) pairs.
///
/// All samples share one feature dimensionality, enforced by the backing
/// [`Matrix`].
///
/// # Examples
///
/// ```
/// use plurality::data::Dataset;
///
/// let ds = Dataset::from_rows(
///     &[vec![0.0, 0.0], vec![5.0, 5.0]],
///     vec!["A", "B"],
/// ).expect("two rows, two labels");
/// assert_eq!(ds.len(), 2);
/// assert_eq!(ds.n_features(), 2);
/// assert_eq!(ds.sample(1), (&[5.0, 5.0][..], &"B"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataset<L>")]
pub struct Dataset<L> {
    features: Matrix<f64>,
    labels: Vec<L>,
}

#[derive(Deserialize)]
struct RawDataset<L> {
    features: Matrix<f64>,
    labels: Vec<L>,
}

impl<L> TryFrom<RawDataset<L>> for Dataset<L> {
    type Error = PluralityError;

    fn try_from(raw: RawDataset<L>) -> Result<Self> {
        Self::new(raw.features, raw.labels)
    }
}

impl<L> Dataset<L> {
    /// Pairs a feature matrix with its labels.
    ///
    /// # Errors
    ///
    /// Returns an error if the label count differs from the row count.
    pub fn new(features: Matrix<f64>, labels: Vec<L>) -> Result<Self> {
        if features.n_rows() != labels.len() {
            return Err(PluralityError::dimension_mismatch(
                "labels",
                features.n_rows(),
                labels.len(),
            ));
        }
        Ok(Self { features, labels })
    }

    /// Builds a dataset from one feature vector per sample.
    ///
    /// # Errors
    ///
    /// Returns an error on ragged rows or a label count mismatch.
    pub fn from_rows(rows: &[Vec<f64>], labels: Vec<L>) -> Result<Self> {
        Self::new(Matrix::from_rows(rows)?, labels)
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if the dataset holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Feature dimensionality.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.features.n_cols()
    }

    /// Feature matrix, one row per sample.
    #[must_use]
    pub fn features(&self) -> &Matrix<f64> {
        &self.features
    }

    /// Labels aligned with the feature rows.
    #[must_use]
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Returns sample `i` and its label.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn sample(&self, i: usize) -> (&[f64], &L) {
        (self.features.row(i), &self.labels[i])
    }

    /// Splits the dataset back into features and labels.
    #[must_use]
    pub fn into_parts(self) -> (Matrix<f64>, Vec<L>) {
        (self.features, self.labels)
    }
}

impl<L: Clone> Dataset<L> {
    /// Gathers the given samples, in the given order, into a new dataset.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    #[must_use]
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            features: self.features.select_rows(indices),
            labels: indices.iter().map(|&i| self.labels[i].clone()).collect(),
        }
    }
}
