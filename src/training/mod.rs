//! Model training module
//!
//! Provides the startup fit for the prediction service: a multinomial
//! (softmax) logistic regression trained by batch gradient descent, plus
//! the engine that turns the tabular dataset into a fitted model with
//! classification metrics.

mod config;
mod engine;
mod models;
pub mod linear_models;

pub use config::TrainingConfig;
pub use engine::TrainEngine;
pub use linear_models::SoftmaxRegression;
pub use models::ModelMetrics;
