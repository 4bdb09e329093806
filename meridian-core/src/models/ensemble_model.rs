use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::constants::STANDARD_SIGNAL_ORDER;
use crate::errors::InferenceError;

/// Weighted-logistic fusion parameters.
///
/// Coefficients are positional: `coefficients[i]` scales the evidence of
/// the signal named by `signal_names[i]`, so the two vectors must stay the
/// same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsembleModel {
    /// Additive bias applied to every country score.
    pub intercept: f64,
    /// One weight per signal, in signal order.
    pub coefficients: Vec<f64>,
    /// Names of the signals the coefficients belong to.
    pub signal_names: Vec<String>,
}

impl Default for EnsembleModel {
    fn default() -> Self {
        Self::standard()
    }
}

impl EnsembleModel {
    pub fn new(
        intercept: f64,
        coefficients: Vec<f64>,
        signal_names: Vec<String>,
    ) -> Result<Self, InferenceError> {
        if coefficients.len() != signal_names.len() {
            return Err(InferenceError::ModelShapeMismatch {
                signals: signal_names.len(),
                coefficients: coefficients.len(),
            });
        }
        Ok(Self {
            intercept,
            coefficients,
            signal_names,
        })
    }

    /// The shipped model: hand-tuned weights for the standard signal stack.
    pub fn standard() -> Self {
        Self {
            intercept: defaults::DEFAULT_INTERCEPT,
            coefficients: defaults::DEFAULT_COEFFICIENTS.to_vec(),
            signal_names: STANDARD_SIGNAL_ORDER
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Human-readable linear form, e.g. `-6.88 + 5.05 * prior + ...`.
    pub fn equation(&self) -> String {
        let mut eq = format!("{:.2}", self.intercept);
        for (coefficient, name) in self.coefficients.iter().zip(&self.signal_names) {
            eq.push_str(&format!(" + {coefficient:.2} * {name}"));
        }
        eq
    }
}
