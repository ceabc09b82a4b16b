//! Core traits for classifiers.
//!
//! These traits define the API contract shared by every classifier in the
//! crate, so a reference implementation can be swapped in for comparison.

use crate::error::Result;
use crate::primitives::Matrix;
use std::hash::Hash;

/// Requirements on class labels.
///
/// Labels are opaque tokens: equality and hashing are all the classifier
/// relies on. `Send + Sync` lets test samples be evaluated in parallel.
pub trait Label: Eq + Hash + Clone + Send + Sync {}

impl<T: Eq + Hash + Clone + Send + Sync> Label for T {}

/// Supervised classifier with a fit/predict/score contract.
///
/// # Examples
///
/// ```
/// use plurality::prelude::*;
///
/// let x_train = Matrix::from_rows(&[vec![0.0], vec![1.0], vec![10.0], vec![11.0]]).unwrap();
/// let y_train = ["low", "low", "high", "high"];
///
/// let x_test = Matrix::from_rows(&[vec![0.5], vec![10.5]]).unwrap();
/// let y_test = ["low", "high"];
///
/// let mut model = KNearestNeighbors::new(1);
/// Classifier::fit(&mut model, &x_train, &y_train).unwrap();
/// assert_eq!(model.score(&x_test, &y_test).unwrap(), Some(100.0));
/// ```
pub trait Classifier<L: Label> {
    /// Fits the model to training data.
    ///
    /// # Errors
    ///
    /// Returns an error if the training data or hyperparameters are invalid.
    fn fit(&mut self, x: &Matrix<f64>, y: &[L]) -> Result<()>;

    /// Predicts one label per row of `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or `x` is malformed.
    fn predict(&self, x: &Matrix<f64>) -> Result<Vec<L>>;

    /// Percentage of rows of `x` whose predicted label equals `y`.
    ///
    /// `None` when `x` has no rows.
    ///
    /// # Errors
    ///
    /// Returns an error if prediction fails or `y` has the wrong length.
    fn score(&self, x: &Matrix<f64>, y: &[L]) -> Result<Option<f64>> {
        let predictions = self.predict(x)?;
        crate::metrics::accuracy(&predictions, y)
    }
}
