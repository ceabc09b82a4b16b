//! Evaluation metrics for classifiers.

pub mod classification;

pub use classification::accuracy;
