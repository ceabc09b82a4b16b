//! CSV loading for labelled and unlabelled feature tables.
//!
//! The expected layout is one sample per line, numeric feature columns and,
//! for labelled data, one label column (last by default), e.g. the classic
//! `iris.data` file:
//!
//! ```text
//! 5.1,3.5,1.4,0.2,Iris-setosa
//! 7.0,3.2,4.7,1.4,Iris-versicolor
//! ```

use super::Dataset;
use crate::error::{PluralityError, Result};
use crate::primitives::Matrix;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Position of the label column in a labelled file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelColumn {
    /// First field of each record.
    First,
    /// Last field of each record.
    #[default]
    Last,
}

/// CSV parsing options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Whether the first line is a header row
    pub has_headers: bool,
    /// Field delimiter
    pub delimiter: u8,
    /// Where the label sits in labelled files
    pub label_column: LabelColumn,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            has_headers: false,
            delimiter: b',',
            label_column: LabelColumn::Last,
        }
    }
}

impl CsvOptions {
    /// Sets whether the first line is a header row.
    #[must_use]
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Sets the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the label column position.
    #[must_use]
    pub fn with_label_column(mut self, label_column: LabelColumn) -> Self {
        self.label_column = label_column;
        self
    }

    fn reader<R: Read>(&self, rdr: R) -> csv::Reader<R> {
        csv::ReaderBuilder::new()
            .has_headers(self.has_headers)
            .delimiter(self.delimiter)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(rdr)
    }
}

/// Loads a labelled dataset from a CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a record is malformed.
pub fn read_dataset<P: AsRef<Path>>(path: P, options: &CsvOptions) -> Result<Dataset<String>> {
    let path = path.as_ref();
    let dataset = read_dataset_from_reader(File::open(path)?, options)?;
    tracing::debug!(
        path = %path.display(),
        samples = dataset.len(),
        features = dataset.n_features(),
        "loaded labelled dataset"
    );
    Ok(dataset)
}

/// Loads a labelled dataset from any reader.
///
/// # Errors
///
/// Returns an error on I/O failure, non-numeric features, records without a
/// feature column, or records whose width differs from the first one.
pub fn read_dataset_from_reader<R: Read>(rdr: R, options: &CsvOptions) -> Result<Dataset<String>> {
    let mut reader = options.reader(rdr);
    let mut data = Vec::new();
    let mut labels = Vec::new();
    let mut width = None;

    for record in reader.records() {
        let record = record.map_err(from_csv)?;
        if is_blank(&record) {
            continue;
        }
        let line = line_of(&record);
        if record.len() < 2 {
            return Err(PluralityError::invalid_data(format!(
                "line {line}: expected at least one feature and a label, found {} field(s)",
                record.len()
            )));
        }
        let n_features = record.len() - 1;
        check_width(&mut width, n_features, line)?;

        let (label_idx, feature_range) = match options.label_column {
            LabelColumn::First => (0, 1..record.len()),
            LabelColumn::Last => (n_features, 0..n_features),
        };
        for col in feature_range {
            data.push(parse_cell(&record[col], line, col)?);
        }
        labels.push(record[label_idx].to_string());
    }

    let features = Matrix::from_vec(labels.len(), width.unwrap_or(0), data)?;
    Dataset::new(features, labels)
}

/// Loads an unlabelled feature table from a CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a record is malformed.
pub fn read_features<P: AsRef<Path>>(path: P, options: &CsvOptions) -> Result<Matrix<f64>> {
    let path = path.as_ref();
    let features = read_features_from_reader(File::open(path)?, options)?;
    tracing::debug!(
        path = %path.display(),
        samples = features.n_rows(),
        features = features.n_cols(),
        "loaded feature table"
    );
    Ok(features)
}

/// Loads an unlabelled feature table from any reader.
///
/// Every field is a feature; `label_column` is ignored.
///
/// # Errors
///
/// Returns an error on I/O failure, non-numeric cells or ragged records.
pub fn read_features_from_reader<R: Read>(rdr: R, options: &CsvOptions) -> Result<Matrix<f64>> {
    let mut reader = options.reader(rdr);
    let mut data = Vec::new();
    let mut rows = 0;
    let mut width = None;

    for record in reader.records() {
        let record = record.map_err(from_csv)?;
        if is_blank(&record) {
            continue;
        }
        let line = line_of(&record);
        check_width(&mut width, record.len(), line)?;
        for (col, cell) in record.iter().enumerate() {
            data.push(parse_cell(cell, line, col)?);
        }
        rows += 1;
    }

    Matrix::from_vec(rows, width.unwrap_or(0), data)
}

fn is_blank(record: &csv::StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

fn line_of(record: &csv::StringRecord) -> u64 {
    record.position().map_or(0, csv::Position::line)
}

fn check_width(width: &mut Option<usize>, n_features: usize, line: u64) -> Result<()> {
    match *width {
        None => {
            *width = Some(n_features);
            Ok(())
        }
        Some(w) if w == n_features => Ok(()),
        Some(w) => Err(PluralityError::invalid_data(format!(
            "ragged feature vectors: line {line} has {n_features} features, expected {w}"
        ))),
    }
}

fn parse_cell(cell: &str, line: u64, col: usize) -> Result<f64> {
    cell.parse::<f64>().map_err(|_| {
        PluralityError::invalid_data(format!(
            "line {line}, column {col}: '{cell}' is not a number"
        ))
    })
}

fn from_csv(err: csv::Error) -> PluralityError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(e) => PluralityError::Io(e),
        _ => PluralityError::invalid_data(message),
    }
}
