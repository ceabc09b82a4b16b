//! Matrix type for 2D numeric data.

use crate::error::{PluralityError, Result};
use serde::{Deserialize, Serialize};

/// A 2D matrix of values in row-major storage.
///
/// Each row is one sample; each column one feature.
///
/// # Examples
///
/// ```
/// use plurality::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix<T>")]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Serialized form, checked by `TryFrom` before it becomes a [`Matrix`].
#[derive(Deserialize)]
struct RawMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> TryFrom<RawMatrix<T>> for Matrix<T> {
    type Error = PluralityError;

    fn try_from(raw: RawMatrix<T>) -> Result<Self> {
        check_shape(raw.rows, raw.cols, raw.data.len())?;
        Ok(Self {
            data: raw.data,
            rows: raw.rows,
            cols: raw.cols,
        })
    }
}

fn check_shape(rows: usize, cols: usize, len: usize) -> Result<()> {
    match rows.checked_mul(cols) {
        Some(expected) if expected == len => Ok(()),
        Some(_) => Err(PluralityError::invalid_data(format!(
            "data length {len} does not equal rows * cols = {rows} * {cols}"
        ))),
        None => Err(PluralityError::invalid_data(format!(
            "shape {rows} x {cols} overflows usize"
        ))),
    }
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        check_shape(rows, cols, data.len())?;
        Ok(Self { data, rows, cols })
    }

    /// Builds a matrix from one vector per row.
    ///
    /// An empty slice yields a 0x0 matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows are ragged.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(PluralityError::invalid_data(format!(
                    "ragged feature vectors: row {i} has {} features, row 0 has {cols}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Returns a row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row_idx` is out of bounds.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> &[T] {
        let start = row_idx * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterates over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Gathers the given rows, in the given order, into a new matrix.
    ///
    /// The column count is kept even when `indices` is empty.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    #[must_use]
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        let mut data = Vec::with_capacity(indices.len() * self.cols);
        for &i in indices {
            data.extend_from_slice(self.row(i));
        }
        Self {
            data,
            rows: indices.len(),
            cols: self.cols,
        }
    }
}

impl Matrix<f64> {
    /// Checks that every element is finite.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first NaN or infinite cell.
    pub fn validate_finite(&self, context: &str) -> Result<()> {
        match self.data.iter().position(|v| !v.is_finite()) {
            None => Ok(()),
            Some(pos) => Err(PluralityError::invalid_data(format!(
                "{context}: non-finite feature {} at row {}, column {}",
                self.data[pos],
                pos / self.cols,
                pos % self.cols
            ))),
        }
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
