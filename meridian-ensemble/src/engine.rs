//! Weighted-logistic fusion of signal outputs into a country posterior.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use meridian_core::config::EnsembleConfig;
use meridian_core::constants::RENORMALIZATION_EPSILON;
use meridian_core::errors::InferenceError;
use meridian_core::{CountryRegistry, EnsembleModel, ISignal, LookupKey, Posterior, SignalOutput};

use crate::calibration::{calibrate, logistic};

/// Fuses a signal stack into a posterior over every known country.
///
/// Coefficients are positional, so the model must carry exactly one
/// coefficient per signal; swapping signals in or out invalidates a
/// fitted model and is rejected at construction.
pub struct EnsembleInferrer {
    signals: Vec<Box<dyn ISignal>>,
    model: EnsembleModel,
    registry: Arc<CountryRegistry>,
    config: EnsembleConfig,
}

impl EnsembleInferrer {
    pub fn new(
        signals: Vec<Box<dyn ISignal>>,
        model: EnsembleModel,
        registry: Arc<CountryRegistry>,
        config: EnsembleConfig,
    ) -> Result<Self, InferenceError> {
        if model.coefficients.len() != signals.len() {
            return Err(InferenceError::ModelShapeMismatch {
                signals: signals.len(),
                coefficients: model.coefficients.len(),
            });
        }
        Ok(Self {
            signals,
            model,
            registry,
            config,
        })
    }

    /// Runs every signal on the key and fuses the outputs.
    pub fn infer(&self, key: &LookupKey) -> Result<Posterior, InferenceError> {
        fuse(&self.signals, &self.model, &self.registry, &self.config, key)
    }

    pub fn model(&self) -> &EnsembleModel {
        &self.model
    }

    /// Human-readable linear form of the fitted model.
    pub fn equation(&self) -> String {
        self.model.equation()
    }
}

/// A whole inferrer can stand in for a single signal, emitting its
/// posterior at full confidence. Degenerate fusions become silence.
impl ISignal for EnsembleInferrer {
    fn name(&self) -> &str {
        "ensemble"
    }

    fn infer(&self, key: &LookupKey) -> SignalOutput {
        match EnsembleInferrer::infer(self, key) {
            Ok(posterior) => SignalOutput::new(1.0, posterior.probabilities),
            Err(error) => {
                warn!(key = key.as_str(), %error, "fusion produced no posterior");
                SignalOutput::none()
            }
        }
    }
}

/// Core fusion arithmetic, shared with the evaluator so per-fold models
/// run through exactly the same path as the shipped one.
pub(crate) fn fuse(
    signals: &[Box<dyn ISignal>],
    model: &EnsembleModel,
    registry: &CountryRegistry,
    config: &EnsembleConfig,
    key: &LookupKey,
) -> Result<Posterior, InferenceError> {
    if model.coefficients.len() != signals.len() {
        return Err(InferenceError::ModelShapeMismatch {
            signals: signals.len(),
            coefficients: model.coefficients.len(),
        });
    }

    let country_count = registry.len() as f64;
    let mut scores: BTreeMap<String, f64> = registry
        .codes()
        .map(|iso| (iso.to_string(), model.intercept))
        .collect();

    for (signal, coefficient) in signals.iter().zip(&model.coefficients) {
        let output = signal.infer(key);
        if output.is_informative() {
            for (code, weight) in &output.distribution {
                let Some(canonical) = registry.canonicalize(code) else {
                    debug!(
                        signal = signal.name(),
                        code = code.as_str(),
                        "dropping weight for unknown country"
                    );
                    continue;
                };
                if let Some(score) = scores.get_mut(canonical) {
                    *score += coefficient * weight;
                }
            }
        } else if config.uniform_fallback {
            // A silent signal still says something: no country stood out.
            for score in scores.values_mut() {
                *score += coefficient / country_count;
            }
        }
    }

    let mut probabilities: BTreeMap<String, f64> = scores
        .into_iter()
        .map(|(iso, score)| {
            let p = calibrate(logistic(score), config.calibration_exponent);
            (iso, p)
        })
        .collect();

    let total: f64 = probabilities.values().sum();
    if total <= RENORMALIZATION_EPSILON || !total.is_finite() {
        return Err(InferenceError::DegenerateModel);
    }
    for p in probabilities.values_mut() {
        *p /= total;
    }

    Ok(Posterior::new(probabilities))
}
