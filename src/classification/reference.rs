//! Exhaustive reference classifier.
//!
//! Computes every distance, sorts, and takes the first k. Slower than the
//! bounded heap but trivially correct, which makes it the oracle for the
//! heap-based classifier and the baseline in benchmarks.

use super::{validate_queries, validate_training, vote, Neighbor};
use crate::error::{PluralityError, Result};
use crate::primitives::Matrix;
use crate::traits::{Classifier, Label};

/// Brute-force kNN classifier sharing [`super::KNearestNeighbors`]'s
/// input/output contract and tie-breaking.
///
/// # Example
///
/// ```
/// use plurality::classification::ExhaustiveKnn;
/// use plurality::primitives::Matrix;
/// use plurality::traits::Classifier;
///
/// let x = Matrix::from_rows(&[vec![0.0], vec![1.0], vec![10.0]]).expect("3x1");
/// let mut model = ExhaustiveKnn::<u8>::new(1);
/// model.fit(&x, &[0_u8, 0, 1]).expect("valid");
/// let test = Matrix::from_rows(&[vec![9.0]]).expect("1x1");
/// assert_eq!(model.predict(&test).expect("fitted"), vec![1]);
/// ```
#[derive(Debug, Clone)]
pub struct ExhaustiveKnn<L> {
    k: usize,
    x_train: Option<Matrix<f64>>,
    y_train: Option<Vec<L>>,
}

impl<L: Label> ExhaustiveKnn<L> {
    /// Creates a new reference classifier.
    #[must_use]
    pub fn new(k: usize) -> Self {
        Self {
            k,
            x_train: None,
            y_train: None,
        }
    }

    fn nearest(&self, x_train: &Matrix<f64>, query: &[f64]) -> Vec<Neighbor> {
        let mut distances: Vec<Neighbor> = x_train
            .rows()
            .enumerate()
            .map(|(j, row)| Neighbor::new(super::squared_euclidean(query, row), j))
            .collect();

        distances.sort_unstable();
        distances.truncate(self.k);
        distances
    }
}

impl<L: Label> Classifier<L> for ExhaustiveKnn<L> {
    fn fit(&mut self, x: &Matrix<f64>, y: &[L]) -> Result<()> {
        validate_training(x, y, self.k)?;
        self.x_train = Some(x.clone());
        self.y_train = Some(y.to_vec());
        Ok(())
    }

    fn predict(&self, x: &Matrix<f64>) -> Result<Vec<L>> {
        let x_train = self.x_train.as_ref().ok_or(PluralityError::NotFitted)?;
        let y_train = self.y_train.as_ref().ok_or(PluralityError::NotFitted)?;
        validate_queries(x_train, x)?;

        x.rows()
            .map(|query| vote(&self.nearest(x_train, query), y_train))
            .collect()
    }
}
