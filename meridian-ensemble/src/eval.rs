//! Cross-validated evaluation of the full inference pipeline.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use meridian_core::config::MeridianConfig;
use meridian_core::errors::{DataError, InferenceError};
use meridian_core::{CountryRegistry, EnsembleModel, ISignal, LookupKey, MeridianResult};
use meridian_signals::{standard_signals, SignalProviders};

use crate::engine::fuse;
use crate::training::train;

/// Outcome of a k-fold evaluation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalReport {
    pub correct: usize,
    pub total: usize,
    /// Micro accuracy: correct over total across all folds combined.
    pub accuracy: f64,
    /// Mean argmax probability over correct predictions, if any.
    pub mean_correct_probability: Option<f64>,
    /// Mean argmax probability over misses, if any.
    pub mean_missed_probability: Option<f64>,
    /// Linear form of the final model.
    pub equation: String,
    /// Model refitted on the full example set.
    pub model: EnsembleModel,
}

/// Round-robin k-fold evaluation of the standard stack.
///
/// Examples land in folds by `index % folds`, never stratified, so runs
/// are reproducible for a fixed input order. Each fold trains fresh
/// coefficients on the remaining examples and scores the held-out ones
/// by argmax.
pub struct Evaluator {
    registry: Arc<CountryRegistry>,
    signals: Vec<Box<dyn ISignal>>,
    config: MeridianConfig,
}

impl Evaluator {
    pub fn new(
        registry: Arc<CountryRegistry>,
        providers: SignalProviders,
        config: MeridianConfig,
    ) -> MeridianResult<Self> {
        let signals = standard_signals(Arc::clone(&registry), providers, &config)?;
        Ok(Self {
            registry,
            signals,
            config,
        })
    }

    pub fn evaluate(&self, gold: &[(LookupKey, String)]) -> MeridianResult<EvalReport> {
        let folds = self.config.evaluation.folds;
        if folds < 2 {
            return Err(InferenceError::InvalidFoldCount { folds }.into());
        }

        let subsets = partition(gold, folds);

        let mut correct = 0usize;
        let mut total = 0usize;
        let mut correct_ps: Vec<f64> = Vec::new();
        let mut missed_ps: Vec<f64> = Vec::new();

        for held_out in 0..folds {
            let train_set: Vec<(LookupKey, String)> = subsets
                .iter()
                .enumerate()
                .filter(|(index, _)| *index != held_out)
                .flat_map(|(_, subset)| subset.iter().cloned())
                .collect();
            let model = train(
                &self.signals,
                &self.registry,
                &train_set,
                &self.config.training,
            )?;

            for (key, actual) in &subsets[held_out] {
                total += 1;
                let posterior = match fuse(
                    &self.signals,
                    &model,
                    &self.registry,
                    &self.config.ensemble,
                    key,
                ) {
                    Ok(posterior) => posterior,
                    Err(error) => {
                        warn!(key = key.as_str(), %error, "no prediction");
                        continue;
                    }
                };
                let Some((guess, probability)) = posterior.top() else {
                    continue;
                };
                if guess == actual.as_str() {
                    correct += 1;
                    correct_ps.push(probability);
                } else {
                    debug!(
                        key = key.as_str(),
                        guess,
                        actual = actual.as_str(),
                        probability,
                        "missed"
                    );
                    missed_ps.push(probability);
                }
            }
        }

        let model = train(&self.signals, &self.registry, gold, &self.config.training)?;
        let accuracy = correct as f64 / total as f64;
        info!(correct, total, accuracy, "evaluation finished");

        Ok(EvalReport {
            correct,
            total,
            accuracy,
            mean_correct_probability: mean(&correct_ps),
            mean_missed_probability: mean(&missed_ps),
            equation: model.equation(),
            model,
        })
    }
}

/// Round-robin split: example `i` lands in fold `i % folds`.
fn partition<T: Clone>(items: &[T], folds: usize) -> Vec<Vec<T>> {
    let mut subsets: Vec<Vec<T>> = vec![Vec::new(); folds];
    for (index, item) in items.iter().enumerate() {
        subsets[index % folds].push(item.clone());
    }
    subsets
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

// ── gold data ───────────────────────────────────────────────────────

/// Parses labelled examples, one `url TAB iso` per line. Blank lines
/// and `#` comments are skipped; anything else without a tab is an
/// error.
pub fn parse_gold_tsv(raw: &str) -> Result<Vec<(LookupKey, String)>, DataError> {
    let mut rows = Vec::new();
    for (index, line) in raw.lines().enumerate() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split('\t');
        let url = fields.next().unwrap_or_default().trim();
        let Some(iso) = fields.next() else {
            return Err(DataError::MalformedGoldRow { line: index + 1 });
        };
        rows.push((LookupKey::new(url), iso.trim().to_lowercase()));
    }
    Ok(rows)
}

/// Loads gold data from a file.
pub fn load_gold_file(path: impl AsRef<Path>) -> Result<Vec<(LookupKey, String)>, DataError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_gold_tsv(&raw)
}
