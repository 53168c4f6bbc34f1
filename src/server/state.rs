//! Application state management

use uuid::Uuid;

use super::ServerConfig;
use crate::dataset;
use crate::error::Result;
use crate::training::{TrainEngine, TrainingConfig};

/// Metadata about the startup-fitted model
#[derive(Debug, Clone, serde::Serialize)]
pub struct ModelInfo {
    pub id: String,
    pub model_type: String,
    pub task: String,
    pub trained_at: String,
}

/// Application state shared across handlers.
///
/// Built once at startup and never mutated afterwards, so handlers read
/// it concurrently without synchronization.
pub struct AppState {
    pub config: ServerConfig,
    pub engine: TrainEngine,
    pub target_names: Vec<String>,
    pub model_info: ModelInfo,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Load the dataset, fit the classifier, and assemble the shared state.
    ///
    /// Called once during startup; an error here is fatal.
    pub fn initialize(config: ServerConfig) -> Result<Self> {
        let df = dataset::load_iris()?;

        let train_config = TrainingConfig::new(dataset::TARGET_COLUMN).with_features(
            dataset::FEATURE_COLUMNS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );

        let mut engine = TrainEngine::new(train_config);
        engine.fit(&df)?;

        let model_info = ModelInfo {
            id: Self::generate_id(),
            model_type: "softmax_regression".to_string(),
            task: "multiclass_classification".to_string(),
            trained_at: chrono::Utc::now().to_rfc3339(),
        };

        Ok(Self {
            config,
            engine,
            target_names: dataset::TARGET_NAMES.iter().map(|s| s.to_string()).collect(),
            model_info,
            started_at: chrono::Utc::now(),
        })
    }

    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()[..8].to_string()
    }

    /// Map a class id to its species name
    pub fn species_name(&self, class_id: i64) -> Option<&str> {
        usize::try_from(class_id)
            .ok()
            .and_then(|i| self.target_names.get(i))
            .map(|s| s.as_str())
    }

    /// Get system information
    pub fn get_system_info(&self) -> serde_json::Value {
        use sysinfo::System;

        let mut sys = System::new_all();
        sys.refresh_all();

        let cpu_usage: f32 =
            sys.cpus().iter().map(|c| c.cpu_usage()).sum::<f32>() / sys.cpus().len().max(1) as f32;

        serde_json::json!({
            "cpu_count": sys.cpus().len(),
            "cpu_usage": cpu_usage,
            "total_memory_gb": sys.total_memory() as f64 / 1024.0 / 1024.0 / 1024.0,
            "used_memory_gb": sys.used_memory() as f64 / 1024.0 / 1024.0 / 1024.0,
            "memory_usage_percent": (sys.used_memory() as f64 / sys.total_memory().max(1) as f64) * 100.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_fits_model() {
        let state = AppState::initialize(ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        })
        .unwrap();

        assert!(state.engine.metrics().is_some());
        assert_eq!(state.target_names.len(), 3);
    }

    #[test]
    fn test_species_name_lookup() {
        let state = AppState::initialize(ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        })
        .unwrap();

        assert_eq!(state.species_name(0), Some("setosa"));
        assert_eq!(state.species_name(2), Some("virginica"));
        assert_eq!(state.species_name(3), None);
        assert_eq!(state.species_name(-1), None);
    }

    #[test]
    fn test_generate_id_length() {
        let id = AppState::generate_id();
        assert_eq!(id.len(), 8);
    }
}
