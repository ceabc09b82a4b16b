//! K-nearest-neighbors classification.
//!
//! For each test sample every training sample is scanned, the k smallest
//! squared Euclidean distances are kept in a bounded max-heap
//! ([`NeighborSet`]), and the selected neighbors vote for their labels
//! ([`Ballot`]). Vote ties go to the label with the nearest single voter.
//!
//! # Example
//!
//! ```
//! use plurality::classification::KNearestNeighbors;
//! use plurality::primitives::Matrix;
//!
//! let x = Matrix::from_rows(&[
//!     vec![0.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![5.0, 5.0],
//!     vec![5.0, 6.0],
//! ]).expect("rows share one length");
//! let y = vec!["A", "A", "B", "B"];
//!
//! let mut knn = KNearestNeighbors::new(3);
//! knn.fit(&x, &y).expect("valid training data");
//!
//! let test = Matrix::from_rows(&[vec![0.2, 0.4], vec![4.8, 5.9]]).expect("2x2");
//! assert_eq!(knn.predict(&test).expect("fitted"), vec!["A", "B"]);
//! ```

mod ballot;
mod cancel;
mod neighbors;
mod reference;

pub use ballot::{Ballot, Tally};
pub use cancel::CancellationToken;
pub use neighbors::{squared_euclidean, Neighbor, NeighborSet};
pub use reference::ExhaustiveKnn;

use crate::data::Dataset;
use crate::error::{PluralityError, Result};
use crate::primitives::Matrix;
use crate::traits::{Classifier, Label};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// K-Nearest Neighbors classifier with plurality voting.
///
/// kNN is a lazy learner: [`fit`](Self::fit) validates and stores the
/// training data, [`predict`](Self::predict) does the work.
#[derive(Debug, Clone)]
pub struct KNearestNeighbors<L> {
    /// Number of neighbors to use
    k: usize,
    /// Checked before each test sample
    cancellation: Option<CancellationToken>,
    /// Training feature matrix (stored during fit)
    x_train: Option<Matrix<f64>>,
    /// Training labels (stored during fit)
    y_train: Option<Vec<L>>,
}

impl<L: Label> KNearestNeighbors<L> {
    /// Creates a new K-Nearest Neighbors classifier.
    ///
    /// `k` is validated by [`fit`](Self::fit), once the training set size is
    /// known.
    ///
    /// # Example
    ///
    /// ```
    /// use plurality::classification::KNearestNeighbors;
    ///
    /// let knn = KNearestNeighbors::<u8>::new(5);
    /// assert_eq!(knn.k(), 5);
    /// ```
    #[must_use]
    pub fn new(k: usize) -> Self {
        Self {
            k,
            cancellation: None,
            x_train: None,
            y_train: None,
        }
    }

    /// Attaches a cancellation token.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Number of neighbors consulted per prediction.
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns true once [`fit`](Self::fit) has succeeded.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.x_train.is_some()
    }

    /// Fits the model by storing the training data.
    ///
    /// # Errors
    ///
    /// Returns an error if `k` is zero or exceeds the number of training
    /// samples, if the training set is empty, if the label count differs
    /// from the sample count, or if any feature is not finite.
    pub fn fit(&mut self, x: &Matrix<f64>, y: &[L]) -> Result<()> {
        validate_training(x, y, self.k)?;

        self.x_train = Some(x.clone());
        self.y_train = Some(y.to_vec());

        Ok(())
    }

    /// Predicts a label for every row of `x`.
    ///
    /// An empty `x` yields no predictions.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted, the feature count
    /// differs from training, a feature is not finite, or the run is
    /// cancelled. No partial predictions are returned.
    pub fn predict(&self, x: &Matrix<f64>) -> Result<Vec<L>> {
        let (x_train, y_train) = self.fitted()?;
        self.map_queries(x, |query| {
            let neighbors = nearest(x_train, query, self.k);
            vote(&neighbors, y_train)
        })
    }

    /// Returns the k nearest training samples for every row of `x`,
    /// nearest first.
    ///
    /// # Errors
    ///
    /// Same conditions as [`predict`](Self::predict).
    pub fn kneighbors(&self, x: &Matrix<f64>) -> Result<Vec<Vec<Neighbor>>> {
        let (x_train, _) = self.fitted()?;
        self.map_queries(x, |query| Ok(nearest(x_train, query, self.k)))
    }

    fn fitted(&self) -> Result<(&Matrix<f64>, &[L])> {
        match (&self.x_train, &self.y_train) {
            (Some(x), Some(y)) => Ok((x, y)),
            _ => Err(PluralityError::NotFitted),
        }
    }

    /// Validates `x`, then evaluates `f` on each row in order.
    fn map_queries<T, F>(&self, x: &Matrix<f64>, f: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&[f64]) -> Result<T> + Sync,
    {
        let (x_train, _) = self.fitted()?;
        validate_queries(x_train, x)?;
        tracing::debug!(
            queries = x.n_rows(),
            training = x_train.n_rows(),
            k = self.k,
            "evaluating nearest neighbors"
        );

        let run_one = |i: usize| -> Result<T> {
            if self
                .cancellation
                .as_ref()
                .is_some_and(CancellationToken::is_cancelled)
            {
                return Err(PluralityError::Cancelled);
            }
            f(x.row(i))
        };

        #[cfg(feature = "parallel")]
        let results = (0..x.n_rows()).into_par_iter().map(run_one).collect();

        #[cfg(not(feature = "parallel"))]
        let results = (0..x.n_rows()).map(run_one).collect();

        results
    }
}

impl<L: Label> Classifier<L> for KNearestNeighbors<L> {
    fn fit(&mut self, x: &Matrix<f64>, y: &[L]) -> Result<()> {
        KNearestNeighbors::fit(self, x, y)
    }

    fn predict(&self, x: &Matrix<f64>) -> Result<Vec<L>> {
        KNearestNeighbors::predict(self, x)
    }
}

/// Classifies every row of `test` against `train` with `k` neighbors.
///
/// # Errors
///
/// Same conditions as [`KNearestNeighbors::fit`] and
/// [`KNearestNeighbors::predict`]; all are checked before any distance is
/// computed.
///
/// # Example
///
/// ```
/// use plurality::classification::classify;
/// use plurality::data::Dataset;
/// use plurality::primitives::Matrix;
///
/// let train = Dataset::from_rows(
///     &[vec![0.0, 0.0], vec![0.0, 1.0], vec![5.0, 5.0], vec![5.0, 6.0]],
///     vec!["A", "A", "B", "B"],
/// ).expect("valid");
/// let test = Matrix::from_rows(&[vec![2.5, 2.5]]).expect("1x2");
/// assert_eq!(classify(&train, &test, 4).expect("valid"), vec!["A"]);
/// ```
pub fn classify<L: Label>(train: &Dataset<L>, test: &Matrix<f64>, k: usize) -> Result<Vec<L>> {
    let mut knn = KNearestNeighbors::new(k);
    knn.fit(train.features(), train.labels())?;
    knn.predict(test)
}

/// Selects the k nearest training rows to `query`, nearest first.
fn nearest(x_train: &Matrix<f64>, query: &[f64], k: usize) -> Vec<Neighbor> {
    let mut set = NeighborSet::new(k);
    for (index, row) in x_train.rows().enumerate() {
        set.offer(Neighbor::new(squared_euclidean(query, row), index));
    }
    set.into_sorted_vec()
}

/// Runs the election among `neighbors`.
pub(crate) fn vote<L: Label>(neighbors: &[Neighbor], y_train: &[L]) -> Result<L> {
    let mut ballot = Ballot::new();
    for &neighbor in neighbors {
        ballot.cast(&y_train[neighbor.index], neighbor);
    }
    tracing::trace!(
        neighbors = neighbors.len(),
        candidates = ballot.len(),
        nearest = neighbors.first().map(|n| n.distance),
        "ballot resolved"
    );
    ballot
        .winner()
        .cloned()
        .ok_or_else(|| PluralityError::empty_input("neighbor set"))
}

/// Checks a training set against `k` before it is stored.
pub(crate) fn validate_training<L>(x: &Matrix<f64>, y: &[L], k: usize) -> Result<()> {
    if k == 0 {
        return Err(PluralityError::invalid_hyperparameter("k", k, ">= 1"));
    }

    let n_samples = x.n_rows();
    if n_samples == 0 {
        return Err(PluralityError::empty_input("training set"));
    }

    if y.len() != n_samples {
        return Err(PluralityError::dimension_mismatch("labels", n_samples, y.len()));
    }

    if k > n_samples {
        return Err(PluralityError::invalid_hyperparameter(
            "k",
            k,
            format!("<= {n_samples} (training set size)"),
        ));
    }

    x.validate_finite("training features")
}

/// Checks query rows against the stored training matrix.
pub(crate) fn validate_queries(x_train: &Matrix<f64>, x: &Matrix<f64>) -> Result<()> {
    if x.n_rows() == 0 {
        return Ok(());
    }

    if x.n_cols() != x_train.n_cols() {
        return Err(PluralityError::dimension_mismatch(
            "n_features",
            x_train.n_cols(),
            x.n_cols(),
        ));
    }

    x.validate_finite("test features")
}


#[cfg(test)]
#[path = "tests_knn_contract.rs"]
mod tests_knn_contract;
