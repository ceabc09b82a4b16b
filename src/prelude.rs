//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use plurality::prelude::*;
//! ```

pub use crate::classification::{classify, CancellationToken, ExhaustiveKnn, KNearestNeighbors};
pub use crate::data::Dataset;
pub use crate::error::{ErrorKind, PluralityError};
pub use crate::evaluation::{evaluate, evaluate_random_split, PredictionResult};
pub use crate::metrics::accuracy;
pub use crate::model_selection::{train_test_split, DEFAULT_TRAINING_FRACTION};
pub use crate::primitives::Matrix;
pub use crate::traits::{Classifier, Label};
