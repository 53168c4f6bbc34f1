//! Standard (z-score) feature scaling

use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{IrisError, Result};

/// Parameters for one fitted column
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ColumnParams {
    center: f64, // mean
    scale: f64,  // std
}

/// Standard scaler: centers each column to zero mean and unit variance.
///
/// Fitted statistics are retained so the identical transform applies to
/// single observations at inference time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    params: Vec<ColumnParams>,
    is_fitted: bool,
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardScaler {
    pub fn new() -> Self {
        Self {
            params: Vec::new(),
            is_fitted: false,
        }
    }

    /// Fit per-column mean and standard deviation.
    pub fn fit(&mut self, x: &Array2<f64>) -> Result<&mut Self> {
        if x.nrows() == 0 {
            return Err(IrisError::DataError(
                "Cannot fit scaler on empty data".to_string(),
            ));
        }

        let means = x.mean_axis(Axis(0)).ok_or_else(|| {
            IrisError::ComputationError("Failed to compute column means".to_string())
        })?;

        let n = x.nrows() as f64;
        self.params = (0..x.ncols())
            .map(|j| {
                let mean = means[j];
                let var = x.column(j).iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
                let std = var.sqrt();
                ColumnParams {
                    center: mean,
                    // Constant columns transform to zero rather than dividing by zero
                    scale: if std > 1e-12 { std } else { 1.0 },
                }
            })
            .collect();

        self.is_fitted = true;
        Ok(self)
    }

    /// Apply the fitted transform: `(x - center) / scale` per column.
    pub fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        if !self.is_fitted {
            return Err(IrisError::ModelNotFitted);
        }

        if x.ncols() != self.params.len() {
            return Err(IrisError::ShapeError {
                expected: format!("{} columns", self.params.len()),
                actual: format!("{} columns", x.ncols()),
            });
        }

        let mut result = x.clone();
        for (j, mut col) in result.columns_mut().into_iter().enumerate() {
            let p = &self.params[j];
            col.mapv_inplace(|v| (v - p.center) / p.scale);
        }
        Ok(result)
    }

    /// Fit and transform in one step.
    pub fn fit_transform(&mut self, x: &Array2<f64>) -> Result<Array2<f64>> {
        self.fit(x)?;
        self.transform(x)
    }

    /// Fitted column means.
    pub fn means(&self) -> Array1<f64> {
        self.params.iter().map(|p| p.center).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_scaler_creation() {
        let scaler = StandardScaler::new();
        assert!(!scaler.is_fitted);
    }

    #[test]
    fn test_transform_before_fit_fails() {
        let scaler = StandardScaler::new();
        let x = array![[1.0, 2.0]];
        assert!(scaler.transform(&x).is_err());
    }

    #[test]
    fn test_fit_transform_standardizes() {
        let x = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0], [4.0, 40.0]];
        let mut scaler = StandardScaler::new();
        let z = scaler.fit_transform(&x).unwrap();

        for j in 0..2 {
            let col = z.column(j);
            let mean = col.mean().unwrap();
            let var = col.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / col.len() as f64;
            assert!(mean.abs() < 1e-9, "column {} mean = {}", j, mean);
            assert!((var - 1.0).abs() < 1e-9, "column {} var = {}", j, var);
        }
    }

    #[test]
    fn test_constant_column_maps_to_zero() {
        let x = array![[5.0, 1.0], [5.0, 2.0], [5.0, 3.0]];
        let mut scaler = StandardScaler::new();
        let z = scaler.fit_transform(&x).unwrap();
        assert!(z.column(0).iter().all(|v| v.abs() < 1e-12));
    }

    #[test]
    fn test_width_mismatch() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let mut scaler = StandardScaler::new();
        scaler.fit(&x).unwrap();

        let bad = array![[1.0, 2.0, 3.0]];
        assert!(scaler.transform(&bad).is_err());
    }
}
