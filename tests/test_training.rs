//! Integration test: startup fit on the embedded dataset

use iris_predictor::dataset;
use iris_predictor::training::{TrainEngine, TrainingConfig};
use ndarray::array;

fn fitted_engine() -> TrainEngine {
    let df = dataset::load_iris().expect("embedded dataset loads");
    let mut engine = TrainEngine::new(TrainingConfig::default());
    engine.fit(&df).expect("startup fit succeeds");
    engine
}

#[test]
fn test_fit_reaches_high_training_accuracy() {
    let engine = fitted_engine();
    let metrics = engine.metrics().unwrap();

    assert_eq!(metrics.n_samples, 150);
    assert_eq!(metrics.n_features, 4);
    assert!(
        metrics.accuracy.unwrap() >= 0.9,
        "training accuracy = {:?}",
        metrics.accuracy
    );
    assert!(metrics.f1_score.unwrap() > 0.8);
}

#[test]
fn test_all_predictions_are_known_classes() {
    let engine = fitted_engine();
    let df = dataset::load_iris().unwrap();

    // Predict the whole training set through the raw-feature path
    let x = array![
        [5.1, 3.5, 1.4, 0.2],
        [6.0, 2.9, 4.5, 1.5],
        [6.9, 3.1, 5.4, 2.1],
        [4.3, 3.0, 1.1, 0.1],
        [7.9, 3.8, 6.4, 2.0],
    ];
    let predictions = engine.predict(&x).unwrap();

    for p in predictions.iter() {
        let class = *p as i64;
        assert!((0..=2).contains(&class), "class id out of range: {}", class);
        assert!(dataset::TARGET_NAMES.get(class as usize).is_some());
    }
    assert_eq!(df.height(), 150);
}

#[test]
fn test_refit_is_deterministic() {
    let a = fitted_engine();
    let b = fitted_engine();

    let x = array![[5.8, 2.7, 5.1, 1.9], [5.0, 3.4, 1.5, 0.2]];
    assert_eq!(a.predict(&x).unwrap(), b.predict(&x).unwrap());
}

#[test]
fn test_corner_setosa_and_virginica() {
    let engine = fitted_engine();

    // Extremes of the training distribution
    let x = array![
        [4.3, 3.0, 1.1, 0.1], // smallest setosa
        [7.9, 3.8, 6.4, 2.0], // largest virginica
    ];
    let predictions = engine.predict(&x).unwrap();
    assert_eq!(predictions[0] as i64, 0);
    assert_eq!(predictions[1] as i64, 2);
}

#[test]
fn test_probabilities_are_row_stochastic() {
    let engine = fitted_engine();

    let x = array![[5.1, 3.5, 1.4, 0.2], [6.3, 2.8, 5.1, 1.5]];
    let probs = engine.predict_proba(&x).unwrap();

    assert_eq!(probs.ncols(), 3);
    for row in probs.rows() {
        let sum: f64 = row.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(row.iter().all(|p| (0.0..=1.0).contains(p)));
    }
}
