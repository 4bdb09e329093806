//! Feature-row construction and coefficient refitting.

use std::collections::BTreeMap;

use tracing::debug;

use meridian_core::config::TrainingConfig;
use meridian_core::errors::InferenceError;
use meridian_core::{CountryRegistry, EnsembleModel, ISignal, LookupKey};

use crate::calibration::logistic;

/// One feature row per known country for a single key.
///
/// Each signal contributes one column: its raw weight for that country,
/// or a uniform `1/N` across all countries when it has nothing to say.
/// Weights are read as emitted; training rows never canonicalize codes.
pub fn make_rows(
    signals: &[Box<dyn ISignal>],
    registry: &CountryRegistry,
    key: &LookupKey,
) -> BTreeMap<String, Vec<f64>> {
    let country_count = registry.len() as f64;
    let mut rows: BTreeMap<String, Vec<f64>> = registry
        .codes()
        .map(|iso| (iso.to_string(), Vec::with_capacity(signals.len())))
        .collect();

    for signal in signals {
        let output = signal.infer(key);
        if output.is_informative() {
            for (iso, row) in rows.iter_mut() {
                row.push(output.distribution.get(iso).copied().unwrap_or(0.0));
            }
        } else {
            for row in rows.values_mut() {
                row.push(1.0 / country_count);
            }
        }
    }

    rows
}

/// Fits fusion weights to labelled `(key, iso)` examples.
///
/// Every example expands into one binary row per country, labelled 1
/// only for the true country, and the intercept plus per-signal
/// coefficients are fitted by batch gradient descent on the logistic
/// loss. The L2 penalty applies to coefficients only, never the
/// intercept.
pub fn train(
    signals: &[Box<dyn ISignal>],
    registry: &CountryRegistry,
    examples: &[(LookupKey, String)],
    config: &TrainingConfig,
) -> Result<EnsembleModel, InferenceError> {
    if examples.is_empty() {
        return Err(InferenceError::EmptyTrainingSet);
    }

    let mut xs: Vec<Vec<f64>> = Vec::new();
    let mut ys: Vec<f64> = Vec::new();
    for (key, actual) in examples {
        for (iso, row) in make_rows(signals, registry, key) {
            ys.push(if iso == *actual { 1.0 } else { 0.0 });
            xs.push(row);
        }
    }

    let (intercept, coefficients) = fit_logistic(&xs, &ys, signals.len(), config);
    debug!(
        rows = xs.len(),
        epochs = config.epochs,
        "fitted fusion weights"
    );

    let names = signals.iter().map(|s| s.name().to_string()).collect();
    EnsembleModel::new(intercept, coefficients, names)
}

fn fit_logistic(
    xs: &[Vec<f64>],
    ys: &[f64],
    dims: usize,
    config: &TrainingConfig,
) -> (f64, Vec<f64>) {
    let count = xs.len() as f64;
    let mut intercept = 0.0;
    let mut weights = vec![0.0; dims];

    for _ in 0..config.epochs {
        let mut grad_intercept = 0.0;
        let mut grad = vec![0.0; dims];

        for (x, y) in xs.iter().zip(ys) {
            let mut z = intercept;
            for (w, feature) in weights.iter().zip(x) {
                z += w * feature;
            }
            let residual = logistic(z) - y;
            grad_intercept += residual;
            for (g, feature) in grad.iter_mut().zip(x) {
                *g += residual * feature;
            }
        }

        intercept -= config.learning_rate * grad_intercept / count;
        for (w, g) in weights.iter_mut().zip(&grad) {
            *w -= config.learning_rate * (g / count + config.l2_penalty * *w);
        }
    }

    (intercept, weights)
}
