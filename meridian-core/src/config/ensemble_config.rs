use serde::{Deserialize, Serialize};

use super::defaults;

/// Fusion behavior knobs. The fitted parameters themselves live in
/// [`EnsembleModel`](crate::models::EnsembleModel).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnsembleConfig {
    /// Exponent applied to logistic outputs before renormalization.
    /// Monotonic, so the top country never changes; 1.2 was measured to
    /// bring argmax probabilities close to observed accuracy.
    pub calibration_exponent: f64,
    /// When true, a signal with no information contributes a uniform
    /// 1/N to every country instead of being skipped.
    pub uniform_fallback: bool,
}

impl Default for EnsembleConfig {
    fn default() -> Self {
        Self {
            calibration_exponent: defaults::DEFAULT_CALIBRATION_EXPONENT,
            uniform_fallback: defaults::DEFAULT_UNIFORM_FALLBACK,
        }
    }
}
