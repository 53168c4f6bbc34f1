//! Model evaluation metrics

use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Metrics for classifier evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetrics {
    /// Accuracy
    pub accuracy: Option<f64>,
    /// Macro-averaged precision
    pub precision: Option<f64>,
    /// Macro-averaged recall
    pub recall: Option<f64>,
    /// Macro-averaged F1 score
    pub f1_score: Option<f64>,
    /// Training time in seconds
    pub training_time_secs: f64,
    /// Number of features
    pub n_features: usize,
    /// Number of training samples
    pub n_samples: usize,
}

impl ModelMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self {
            accuracy: None,
            precision: None,
            recall: None,
            f1_score: None,
            training_time_secs: 0.0,
            n_features: 0,
            n_samples: 0,
        }
    }

    /// Compute multiclass classification metrics.
    ///
    /// Precision, recall, and F1 are macro-averaged over the classes
    /// present in `y_true`.
    pub fn compute_classification(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> Self {
        let mut metrics = Self::new();
        metrics.n_samples = y_true.len();

        if y_true.is_empty() {
            return metrics;
        }

        // Accuracy
        let correct: usize = y_true
            .iter()
            .zip(y_pred.iter())
            .filter(|(t, p)| (*t - *p).abs() < 0.5)
            .count();
        metrics.accuracy = Some(correct as f64 / y_true.len() as f64);

        // Per-class counts for macro averaging
        let mut classes: Vec<i64> = y_true.iter().map(|&v| v as i64).collect();
        classes.sort_unstable();
        classes.dedup();

        let mut precision_sum = 0.0;
        let mut recall_sum = 0.0;
        let mut f1_sum = 0.0;

        for &class in &classes {
            let (mut tp, mut fp, mut fn_) = (0usize, 0usize, 0usize);
            for (t, p) in y_true.iter().zip(y_pred.iter()) {
                let t_is = *t as i64 == class;
                let p_is = *p as i64 == class;
                match (t_is, p_is) {
                    (true, true) => tp += 1,
                    (false, true) => fp += 1,
                    (true, false) => fn_ += 1,
                    (false, false) => {}
                }
            }

            let precision = if tp + fp > 0 {
                tp as f64 / (tp + fp) as f64
            } else {
                0.0
            };
            let recall = if tp + fn_ > 0 {
                tp as f64 / (tp + fn_) as f64
            } else {
                0.0
            };
            let f1 = if precision + recall > 0.0 {
                2.0 * precision * recall / (precision + recall)
            } else {
                0.0
            };

            precision_sum += precision;
            recall_sum += recall;
            f1_sum += f1;
        }

        let k = classes.len() as f64;
        metrics.precision = Some(precision_sum / k);
        metrics.recall = Some(recall_sum / k);
        metrics.f1_score = Some(f1_sum / k);

        metrics
    }
}

impl Default for ModelMetrics {
    fn default() -> Self {
        Self::new()
    }
}
