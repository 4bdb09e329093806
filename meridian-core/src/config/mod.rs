pub mod defaults;
pub mod ensemble_config;
pub mod eval_config;
pub mod language_model_config;
pub mod signal_confidences;
pub mod training_config;

pub use ensemble_config::EnsembleConfig;
pub use eval_config::EvalConfig;
pub use language_model_config::{LanguageModelConfig, LanguageWeighting};
pub use signal_confidences::SignalConfidences;
pub use training_config::TrainingConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::DataError;
use crate::models::EnsembleModel;

/// Top-level configuration for the whole engine. Every section is
/// optional in the TOML source; missing sections take their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MeridianConfig {
    /// Fusion parameters. Overriding this section replaces the shipped
    /// model wholesale; partial overrides are rejected.
    pub model: EnsembleModel,
    pub ensemble: EnsembleConfig,
    pub confidences: SignalConfidences,
    pub language_model: LanguageModelConfig,
    pub training: TrainingConfig,
    pub evaluation: EvalConfig,
}

impl MeridianConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, DataError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }
}
