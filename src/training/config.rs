//! Training configuration

use serde::{Deserialize, Serialize};

/// Configuration for the startup model fit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Target column name
    pub target_column: String,

    /// Feature column names (None = all except target)
    pub feature_columns: Option<Vec<String>>,

    /// Gradient descent learning rate
    pub learning_rate: f64,

    /// Maximum gradient descent iterations
    pub max_iter: usize,

    /// Convergence tolerance on the gradient norm
    pub tol: f64,

    /// L2 regularization strength
    pub alpha: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            target_column: "species".to_string(),
            feature_columns: None,
            learning_rate: 0.1,
            max_iter: 500,
            tol: 1e-6,
            alpha: 1e-4,
        }
    }
}

impl TrainingConfig {
    /// Create a configuration for the given target column
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target_column: target.into(),
            ..Default::default()
        }
    }

    /// Builder method to set feature columns explicitly
    pub fn with_features(mut self, columns: Vec<String>) -> Self {
        self.feature_columns = Some(columns);
        self
    }

    /// Builder method to set the learning rate
    pub fn with_learning_rate(mut self, lr: f64) -> Self {
        self.learning_rate = lr;
        self
    }

    /// Builder method to set maximum iterations
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Builder method to set L2 strength
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrainingConfig::default();
        assert_eq!(config.target_column, "species");
        assert_eq!(config.max_iter, 500);
    }

    #[test]
    fn test_builder_pattern() {
        let config = TrainingConfig::new("label")
            .with_learning_rate(0.05)
            .with_max_iter(200);

        assert_eq!(config.target_column, "label");
        assert_eq!(config.learning_rate, 0.05);
        assert_eq!(config.max_iter, 200);
    }
}
