//! Training engine implementation

use ndarray::{Array1, Array2};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::{ModelMetrics, SoftmaxRegression, TrainingConfig};
use crate::error::{IrisError, Result};
use crate::preprocessing::StandardScaler;

/// Trains a softmax classifier from a tabular dataset and serves
/// predictions through the fitted scaler + model pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainEngine {
    config: TrainingConfig,
    feature_names: Vec<String>,
    scaler: StandardScaler,
    model: SoftmaxRegression,
    metrics: Option<ModelMetrics>,
    is_fitted: bool,
}

impl TrainEngine {
    /// Create a new training engine
    pub fn new(config: TrainingConfig) -> Self {
        let model = SoftmaxRegression::new()
            .with_learning_rate(config.learning_rate)
            .with_max_iter(config.max_iter)
            .with_tol(config.tol)
            .with_alpha(config.alpha);

        Self {
            config,
            feature_names: Vec::new(),
            scaler: StandardScaler::new(),
            model,
            metrics: None,
            is_fitted: false,
        }
    }

    /// Fit the scaler and model to the data and compute training metrics
    pub fn fit(&mut self, df: &DataFrame) -> Result<&mut Self> {
        let start = Instant::now();

        let (x, y) = self.prepare_data(df)?;

        let x_scaled = self.scaler.fit_transform(&x)?;
        self.model.fit(&x_scaled, &y)?;

        let y_pred = self.model.predict(&x_scaled)?;
        let mut metrics = ModelMetrics::compute_classification(&y, &y_pred);
        metrics.training_time_secs = start.elapsed().as_secs_f64();
        metrics.n_features = x.ncols();
        self.metrics = Some(metrics);

        self.is_fitted = true;
        Ok(self)
    }

    /// Predict class ids for raw (unscaled) feature rows
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        if !self.is_fitted {
            return Err(IrisError::ModelNotFitted);
        }

        let x_scaled = self.scaler.transform(x)?;
        self.model.predict(&x_scaled)
    }

    /// Predict class probabilities for raw (unscaled) feature rows
    pub fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        if !self.is_fitted {
            return Err(IrisError::ModelNotFitted);
        }

        let x_scaled = self.scaler.transform(x)?;
        self.model.predict_proba(&x_scaled)
    }

    /// Get training metrics
    pub fn metrics(&self) -> Option<&ModelMetrics> {
        self.metrics.as_ref()
    }

    /// Get feature names in training order
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Class labels the model was fitted on, in sorted order
    pub fn classes(&self) -> &[i64] {
        &self.model.classes
    }

    fn prepare_data(&mut self, df: &DataFrame) -> Result<(Array2<f64>, Array1<f64>)> {
        // Get feature columns
        let feature_cols: Vec<String> = match &self.config.feature_columns {
            Some(cols) => cols.clone(),
            None => df
                .get_column_names()
                .into_iter()
                .filter(|name| name.as_str() != self.config.target_column)
                .map(|s| s.to_string())
                .collect(),
        };

        self.feature_names = feature_cols.clone();

        // Extract target
        let target_series = df
            .column(&self.config.target_column)
            .map_err(|_| IrisError::FeatureNotFound(self.config.target_column.clone()))?;

        let y: Array1<f64> = Self::column_to_f64(target_series)?.into_iter().collect();

        // Extract features, column-major then transpose
        let n_rows = df.height();
        let n_cols = feature_cols.len();
        let mut x_data = Vec::with_capacity(n_rows * n_cols);

        for col_name in &feature_cols {
            let series = df
                .column(col_name)
                .map_err(|_| IrisError::FeatureNotFound(col_name.clone()))?;
            x_data.extend(Self::column_to_f64(series)?);
        }

        let x = Array2::from_shape_vec((n_cols, n_rows), x_data)
            .map_err(|e| IrisError::ShapeError {
                expected: format!("({}, {})", n_cols, n_rows),
                actual: e.to_string(),
            })?
            .t()
            .to_owned();

        Ok((x, y))
    }

    fn column_to_f64(column: &Column) -> Result<Vec<f64>> {
        let series = column
            .as_materialized_series()
            .cast(&DataType::Float64)
            .map_err(|e| IrisError::DataError(e.to_string()))?;

        Ok(series
            .f64()
            .map_err(|e| IrisError::DataError(e.to_string()))?
            .into_iter()
            .map(|v| v.unwrap_or(0.0))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;
    use ndarray::array;

    #[test]
    fn test_engine_creation() {
        let engine = TrainEngine::new(TrainingConfig::default());
        assert!(!engine.is_fitted);
    }

    #[test]
    fn test_predict_before_fit_fails() {
        let engine = TrainEngine::new(TrainingConfig::default());
        let x = array![[5.1, 3.5, 1.4, 0.2]];
        assert!(engine.predict(&x).is_err());
    }

    #[test]
    fn test_fit_on_iris() {
        let df = dataset::load_iris().unwrap();
        let mut engine = TrainEngine::new(TrainingConfig::default());
        engine.fit(&df).unwrap();

        assert!(engine.is_fitted);
        assert_eq!(engine.feature_names().len(), 4);
        assert_eq!(engine.classes(), &[0, 1, 2]);

        let metrics = engine.metrics().unwrap();
        assert_eq!(metrics.n_samples, 150);
        assert!(
            metrics.accuracy.unwrap() >= 0.9,
            "training accuracy = {:?}",
            metrics.accuracy
        );
    }

    #[test]
    fn test_known_setosa_prediction() {
        let df = dataset::load_iris().unwrap();
        let mut engine = TrainEngine::new(TrainingConfig::default());
        engine.fit(&df).unwrap();

        let x = array![[5.1, 3.5, 1.4, 0.2]];
        let pred = engine.predict(&x).unwrap();
        assert_eq!(pred[0] as i64, 0);
    }

    #[test]
    fn test_missing_target_column() {
        let df = DataFrame::new(vec![
            Series::new("a".into(), &[1.0, 2.0]).into(),
            Series::new("b".into(), &[0.0, 1.0]).into(),
        ])
        .unwrap();

        let mut engine = TrainEngine::new(TrainingConfig::new("missing"));
        assert!(engine.fit(&df).is_err());
    }
}
