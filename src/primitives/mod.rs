//! Core storage primitives.
//!
//! Feature vectors live as rows of a row-major [`Matrix`].

mod matrix;

pub use matrix::Matrix;
