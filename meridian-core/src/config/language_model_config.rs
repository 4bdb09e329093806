use serde::{Deserialize, Serialize};

use super::defaults;

/// How a country's base weight enters the language→country model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageWeighting {
    /// Use the smoothed country prior.
    Prior,
    /// Use the country's share of the total population across countries.
    PopulationShare,
}

/// Language→country model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageModelConfig {
    pub weighting: LanguageWeighting,
    /// Exponent penalizing a language's rank within a country's list.
    pub rank_decay: f64,
}

impl Default for LanguageModelConfig {
    fn default() -> Self {
        Self {
            weighting: LanguageWeighting::Prior,
            rank_decay: defaults::DEFAULT_RANK_DECAY,
        }
    }
}
