//! Plurality: k-nearest-neighbors classification in pure Rust.
//!
//! Every test sample is compared against every training sample by squared
//! Euclidean distance. The k nearest training samples vote for their labels;
//! the label with the most votes wins, and a tie goes to the label whose
//! single closest voter is nearest to the test sample.
//!
//! # Quick Start
//!
//! ```
//! use plurality::prelude::*;
//!
//! let dataset = Dataset::from_rows(
//!     &[
//!         vec![0.0, 0.0],
//!         vec![0.0, 1.0],
//!         vec![5.0, 5.0],
//!         vec![5.0, 6.0],
//!     ],
//!     vec!["A", "A", "B", "B"],
//! ).unwrap();
//!
//! let test = Matrix::from_rows(&[vec![0.0, 0.5], vec![2.5, 2.5]]).unwrap();
//! let predictions = classify(&dataset, &test, 1).unwrap();
//! assert_eq!(predictions, vec!["A", "A"]);
//!
//! let accuracy = accuracy(&predictions, &["A", "B"]).unwrap();
//! assert_eq!(accuracy, Some(50.0));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Row-major feature [`Matrix`]
//! - [`data`]: Labelled [`Dataset`](data::Dataset) and CSV loading
//! - [`model_selection`]: Seeded train/test splitting
//! - [`classification`]: kNN classifier, neighbor selection and voting
//! - [`metrics`]: Accuracy scoring
//! - [`evaluation`]: End-to-end runs and parameter sweeps
//!
//! # Features
//!
//! - `parallel`: evaluate test samples on the rayon thread pool

pub mod classification;
pub mod data;
pub mod error;
pub mod evaluation;
pub mod metrics;
pub mod model_selection;
pub mod prelude;
pub mod primitives;
pub mod traits;

pub use error::{ErrorKind, PluralityError, Result};
pub use primitives::Matrix;
pub use traits::{Classifier, Label};
