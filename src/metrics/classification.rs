//! Classification metrics for evaluating classifier performance.

use crate::error::{PluralityError, Result};

/// Compute classification accuracy as a percentage.
///
/// accuracy = `correct_predictions` / `total_predictions` * 100
///
/// Labels must match exactly; there is no partial credit.
///
/// # Arguments
///
/// * `y_pred` - Predicted class labels
/// * `y_true` - True class labels
///
/// # Returns
///
/// `Some(percentage)` in [0, 100], or `None` when both sequences are empty
/// and accuracy is undefined.
///
/// # Errors
///
/// Returns an error if the sequences have different lengths.
///
/// # Examples
///
/// ```
/// use plurality::metrics::accuracy;
///
/// let y_true = vec!["a", "b", "c", "a"];
/// let y_pred = vec!["a", "c", "c", "b"];
/// assert_eq!(accuracy(&y_pred, &y_true).unwrap(), Some(50.0));
///
/// let empty: Vec<&str> = Vec::new();
/// assert_eq!(accuracy(&empty, &empty).unwrap(), None);
/// ```
pub fn accuracy<L: PartialEq>(y_pred: &[L], y_true: &[L]) -> Result<Option<f64>> {
    if y_pred.len() != y_true.len() {
        return Err(PluralityError::dimension_mismatch(
            "predictions",
            y_true.len(),
            y_pred.len(),
        ));
    }

    if y_true.is_empty() {
        return Ok(None);
    }

    let correct = y_pred
        .iter()
        .zip(y_true.iter())
        .filter(|(p, t)| p == t)
        .count();

    Ok(Some(correct as f64 / y_true.len() as f64 * 100.0))
}


#[cfg(test)]
#[path = "tests_classification_contract.rs"]
mod tests_classification_contract;
