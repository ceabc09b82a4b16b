//! Subcommand implementations

pub(crate) mod classify;
pub(crate) mod predict;
pub(crate) mod sweep;

use crate::error::{CliError, Result};
use plurality::data::{read_dataset, read_features, CsvOptions};
use plurality::data::Dataset;
use plurality::primitives::Matrix;
use std::path::Path;

fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(CliError::NotAFile(path.to_path_buf()));
    }
    Ok(())
}

fn csv_options(has_headers: bool) -> CsvOptions {
    CsvOptions::default().with_headers(has_headers)
}

/// Loads a labelled CSV file (label in the last column).
pub(crate) fn load_dataset(path: &Path, has_headers: bool) -> Result<Dataset<String>> {
    validate_path(path)?;
    Ok(read_dataset(path, &csv_options(has_headers))?)
}

/// Loads an unlabelled CSV file (every column is a feature).
pub(crate) fn load_features(path: &Path, has_headers: bool) -> Result<Matrix<f64>> {
    validate_path(path)?;
    Ok(read_features(path, &csv_options(has_headers))?)
}
