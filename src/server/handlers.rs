//! HTTP request handlers

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, Json};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::error::{Result, ServerError};
use super::state::AppState;

/// Flower measurements, centimeters.
///
/// All four fields are required; axum's `Json` extractor rejects missing
/// or non-numeric fields with a 422 before the handler runs.
#[derive(Debug, Deserialize)]
pub struct IrisFeatures {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
}

impl IrisFeatures {
    /// Assemble the measurements into a single-row feature matrix in
    /// training column order.
    fn to_array(&self) -> Result<Array2<f64>> {
        Array2::from_shape_vec(
            (1, 4),
            vec![
                self.sepal_length,
                self.sepal_width,
                self.petal_length,
                self.petal_width,
            ],
        )
        .map_err(|e| ServerError::Internal(format!("Invalid feature dimensions: {}", e)))
    }
}

#[derive(Debug, Serialize)]
pub struct Prediction {
    pub predicted_species: String,
    pub predicted_class_id: i64,
}

/// Welcome message for the API root
pub async fn read_root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to the Iris Prediction API. POST flower measurements to /predict.",
    }))
}

fn predict_class(state: &AppState, features: &IrisFeatures) -> Result<(String, i64)> {
    let x = features.to_array()?;
    let predictions = state.engine.predict(&x)?;
    let class_id = predictions[0] as i64;

    let species = state
        .species_name(class_id)
        .ok_or_else(|| ServerError::Internal(format!("No species name for class {}", class_id)))?
        .to_string();

    Ok((species, class_id))
}

/// Predict the iris species from flower measurements
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(features): Json<IrisFeatures>,
) -> Result<Json<Prediction>> {
    let (predicted_species, predicted_class_id) = predict_class(&state, &features)?;

    Ok(Json(Prediction {
        predicted_species,
        predicted_class_id,
    }))
}

/// Predict the species along with per-class probabilities
pub async fn predict_proba(
    State(state): State<Arc<AppState>>,
    Json(features): Json<IrisFeatures>,
) -> Result<Json<serde_json::Value>> {
    let (predicted_species, predicted_class_id) = predict_class(&state, &features)?;

    let probs = state.engine.predict_proba(&features.to_array()?)?;
    let probabilities: BTreeMap<&str, f64> = state
        .target_names
        .iter()
        .zip(probs.row(0).iter())
        .map(|(name, p)| (name.as_str(), *p))
        .collect();

    Ok(Json(serde_json::json!({
        "predicted_species": predicted_species,
        "predicted_class_id": predicted_class_id,
        "probabilities": probabilities,
    })))
}

/// Metadata and training metrics for the startup-fitted model
pub async fn get_model(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let metrics = state.engine.metrics();

    Json(serde_json::json!({
        "model": &state.model_info,
        "classes": &state.target_names,
        "feature_names": state.engine.feature_names(),
        "metrics": metrics,
    }))
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Process and host statistics
pub async fn get_system_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let system_info = state.get_system_info();
    let uptime = chrono::Utc::now().signed_duration_since(state.started_at);

    Json(serde_json::json!({
        "system": system_info,
        "model_id": &state.model_info.id,
        "uptime_secs": uptime.num_seconds(),
        "status": "healthy",
    }))
}
