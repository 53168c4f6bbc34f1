//! Linear classification models

use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{IrisError, Result};

/// Multinomial logistic regression (softmax classifier)
///
/// Fitted by batch gradient descent on the cross-entropy loss with an L2
/// penalty. Weights are zero-initialized, so a fit on fixed data is fully
/// deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftmaxRegression {
    /// Fitted coefficients, one column per class
    pub coefficients: Option<Array2<f64>>,
    /// Fitted intercepts, one per class
    pub intercept: Option<Array1<f64>>,
    /// Class labels in sorted order; column j of the coefficients
    /// corresponds to `classes[j]`
    pub classes: Vec<i64>,
    /// L2 regularization strength
    pub alpha: f64,
    /// Maximum iterations
    pub max_iter: usize,
    /// Convergence tolerance on the gradient norm
    pub tol: f64,
    /// Learning rate
    pub learning_rate: f64,
    /// Whether model is fitted
    pub is_fitted: bool,
}

impl Default for SoftmaxRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl SoftmaxRegression {
    /// Create a new softmax regression model
    pub fn new() -> Self {
        Self {
            coefficients: None,
            intercept: None,
            classes: Vec::new(),
            alpha: 1e-4,
            max_iter: 500,
            tol: 1e-6,
            learning_rate: 0.1,
            is_fitted: false,
        }
    }

    /// Set regularization strength
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set maximum iterations
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set learning rate
    pub fn with_learning_rate(mut self, lr: f64) -> Self {
        self.learning_rate = lr;
        self
    }

    /// Set convergence tolerance
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Row-wise softmax with max subtraction for numerical stability
    fn softmax(logits: &Array2<f64>) -> Array2<f64> {
        let mut probs = logits.clone();
        for mut row in probs.rows_mut() {
            let max_val = row.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            row.mapv_inplace(|v| (v - max_val).exp());
            let sum: f64 = row.iter().sum();
            row.mapv_inplace(|v| v / sum);
        }
        probs
    }

    /// Fit the model using batch gradient descent
    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<&mut Self> {
        let n_samples = x.nrows();
        let n_features = x.ncols();

        if n_samples != y.len() {
            return Err(IrisError::ShapeError {
                expected: format!("y length = {}", n_samples),
                actual: format!("y length = {}", y.len()),
            });
        }

        // Collect sorted unique class labels
        let mut classes: Vec<i64> = y.iter().map(|&v| v as i64).collect();
        classes.sort_unstable();
        classes.dedup();
        if classes.len() < 2 {
            return Err(IrisError::DataError(
                "Need at least two classes to fit a classifier".to_string(),
            ));
        }
        let n_classes = classes.len();

        // One-hot encode the targets
        let mut onehot = Array2::zeros((n_samples, n_classes));
        for (i, &label) in y.iter().enumerate() {
            let j = classes
                .binary_search(&(label as i64))
                .map_err(|_| IrisError::DataError(format!("Unknown class label {}", label)))?;
            onehot[[i, j]] = 1.0;
        }

        let mut weights: Array2<f64> = Array2::zeros((n_features, n_classes));
        let mut bias: Array1<f64> = Array1::zeros(n_classes);

        let lr = self.learning_rate;
        let alpha = self.alpha;
        let n = n_samples as f64;

        for _iter in 0..self.max_iter {
            // Forward pass
            let logits = x.dot(&weights) + &bias;
            let probs = Self::softmax(&logits);

            // Cross-entropy gradients
            let diff = &probs - &onehot;
            let dw = x.t().dot(&diff) / n + alpha * &weights;
            let db = diff.mean_axis(Axis(0)).ok_or_else(|| {
                IrisError::ComputationError("Failed to compute bias gradient".to_string())
            })?;

            // Check convergence
            let grad_norm =
                (dw.iter().map(|v| v * v).sum::<f64>() + db.iter().map(|v| v * v).sum::<f64>())
                    .sqrt();
            if grad_norm < self.tol {
                break;
            }

            // Update parameters
            weights = weights - lr * &dw;
            bias = bias - lr * &db;
        }

        self.coefficients = Some(weights);
        self.intercept = Some(bias);
        self.classes = classes;
        self.is_fitted = true;

        Ok(self)
    }

    /// Predict class probabilities, one row per sample in class order
    pub fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        if !self.is_fitted {
            return Err(IrisError::ModelNotFitted);
        }

        let coefficients = self.coefficients.as_ref().ok_or(IrisError::ModelNotFitted)?;
        let intercept = self.intercept.as_ref().ok_or(IrisError::ModelNotFitted)?;

        if x.ncols() != coefficients.nrows() {
            return Err(IrisError::ShapeError {
                expected: format!("{} features", coefficients.nrows()),
                actual: format!("{} features", x.ncols()),
            });
        }

        let logits = x.dot(coefficients) + intercept;
        Ok(Self::softmax(&logits))
    }

    /// Predict class labels (argmax over class probabilities)
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        let probs = self.predict_proba(x)?;

        Ok(probs
            .rows()
            .into_iter()
            .map(|row| {
                let max_idx = row
                    .iter()
                    .enumerate()
                    .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                self.classes[max_idx] as f64
            })
            .collect())
    }

    /// Get accuracy score
    pub fn score(&self, x: &Array2<f64>, y: &Array1<f64>) -> Result<f64> {
        let y_pred = self.predict(x)?;

        let correct = y_pred
            .iter()
            .zip(y.iter())
            .filter(|(pred, actual)| (*pred - *actual).abs() < 0.5)
            .count();

        Ok(correct as f64 / y.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn three_blob_data() -> (Array2<f64>, Array1<f64>) {
        let x = array![
            [0.0, 0.0],
            [0.2, 0.1],
            [-0.1, 0.2],
            [5.0, 5.0],
            [5.2, 4.9],
            [4.8, 5.1],
            [-5.0, 5.0],
            [-5.1, 4.8],
            [-4.9, 5.2],
        ];
        let y = array![0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0];
        (x, y)
    }

    #[test]
    fn test_fit_three_classes() {
        let (x, y) = three_blob_data();
        let mut model = SoftmaxRegression::new().with_max_iter(2000);
        model.fit(&x, &y).unwrap();

        assert!(model.is_fitted);
        assert_eq!(model.classes, vec![0, 1, 2]);

        let accuracy = model.score(&x, &y).unwrap();
        assert!(accuracy > 0.99, "accuracy = {}", accuracy);
    }

    #[test]
    fn test_predict_before_fit_fails() {
        let model = SoftmaxRegression::new();
        let x = array![[1.0, 2.0]];
        assert!(matches!(model.predict(&x), Err(IrisError::ModelNotFitted)));
    }

    #[test]
    fn test_proba_rows_sum_to_one() {
        let (x, y) = three_blob_data();
        let mut model = SoftmaxRegression::new().with_max_iter(500);
        model.fit(&x, &y).unwrap();

        let probs = model.predict_proba(&x).unwrap();
        assert_eq!(probs.ncols(), 3);
        for row in probs.rows() {
            let sum: f64 = row.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "row sum = {}", sum);
        }
    }

    #[test]
    fn test_deterministic_fit() {
        let (x, y) = three_blob_data();

        let mut a = SoftmaxRegression::new().with_max_iter(300);
        a.fit(&x, &y).unwrap();
        let mut b = SoftmaxRegression::new().with_max_iter(300);
        b.fit(&x, &y).unwrap();

        assert_eq!(
            a.coefficients.as_ref().unwrap(),
            b.coefficients.as_ref().unwrap()
        );
    }

    #[test]
    fn test_single_class_rejected() {
        let x = array![[1.0], [2.0]];
        let y = array![0.0, 0.0];
        let mut model = SoftmaxRegression::new();
        assert!(model.fit(&x, &y).is_err());
    }

    #[test]
    fn test_feature_width_mismatch() {
        let (x, y) = three_blob_data();
        let mut model = SoftmaxRegression::new().with_max_iter(100);
        model.fit(&x, &y).unwrap();

        let bad = array![[1.0, 2.0, 3.0]];
        assert!(model.predict(&bad).is_err());
    }
}
