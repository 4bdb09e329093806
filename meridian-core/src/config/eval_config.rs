use serde::{Deserialize, Serialize};

use super::defaults;

/// Cross-validation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Number of round-robin folds. Must be at least 2.
    pub folds: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            folds: defaults::DEFAULT_FOLDS,
        }
    }
}
