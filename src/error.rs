//! Error types for the iris predictor crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IrisError {
    #[error("Model has not been fitted yet")]
    ModelNotFitted,

    #[error("Feature column not found: {0}")]
    FeatureNotFound(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeError { expected: String, actual: String },

    #[error("Computation error: {0}")]
    ComputationError(String),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}

pub type Result<T> = std::result::Result<T, IrisError>;
