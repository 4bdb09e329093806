use serde::{Deserialize, Serialize};

use super::defaults;

/// Gradient-descent hyperparameters for refitting fusion weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    pub learning_rate: f64,
    pub epochs: usize,
    /// L2 penalty on coefficients. The intercept is never penalized.
    pub l2_penalty: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: defaults::DEFAULT_LEARNING_RATE,
            epochs: defaults::DEFAULT_EPOCHS,
            l2_penalty: defaults::DEFAULT_L2_PENALTY,
        }
    }
}
