//! Iris Predictor - HTTP species prediction service
//!
//! This crate fits a multinomial logistic-regression classifier on the
//! embedded Iris dataset at startup and serves predictions over a JSON
//! API.
//!
//! # Modules
//!
//! - [`dataset`] - The embedded Iris dataset and species table
//! - [`preprocessing`] - Feature standardization
//! - [`training`] - Softmax classifier, training engine, metrics
//! - [`server`] - HTTP server with REST API

// Core error handling
pub mod error;

// Data and model
pub mod dataset;
pub mod preprocessing;
pub mod training;

// Services
pub mod server;

pub use error::{IrisError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::dataset::{load_iris, FEATURE_COLUMNS, TARGET_COLUMN, TARGET_NAMES};
    pub use crate::error::{IrisError, Result};
    pub use crate::preprocessing::StandardScaler;
    pub use crate::server::{create_router, AppState, ServerConfig};
    pub use crate::training::{SoftmaxRegression, TrainEngine, TrainingConfig};
}
