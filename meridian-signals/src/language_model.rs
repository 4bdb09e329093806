use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use meridian_core::config::{LanguageModelConfig, LanguageWeighting};
use meridian_core::constants::SCORE_SUM_EPSILON;
use meridian_core::CountryRegistry;

/// Ranked country candidates per language.
///
/// A country's score for a language decays with the language's rank in
/// that country's list: speakers of a country's third language are far
/// less likely to produce content than speakers of its first. Scores in
/// each list are normalized against the list's own total plus a small
/// slack, so they sum to just under one.
#[derive(Debug, Clone)]
pub struct LanguageCountryModel {
    lists: BTreeMap<String, Vec<(String, f64)>>,
}

impl LanguageCountryModel {
    pub fn from_registry(registry: &CountryRegistry, config: &LanguageModelConfig) -> Self {
        let total_population: f64 = registry.iter().map(|c| c.population as f64).sum();

        let mut accumulated: BTreeMap<String, Vec<(f64, String)>> = BTreeMap::new();
        for country in registry.iter() {
            let base = match config.weighting {
                LanguageWeighting::Prior => country.prior,
                LanguageWeighting::PopulationShare if total_population > 0.0 => {
                    country.population as f64 / total_population
                }
                LanguageWeighting::PopulationShare => 0.0,
            };
            for (rank, lang) in country.langs.iter().enumerate() {
                let score = base / ((rank + 1) as f64).powf(config.rank_decay);
                accumulated
                    .entry(lang.clone())
                    .or_default()
                    .push((score, country.iso.clone()));
            }
        }

        let mut lists = BTreeMap::new();
        for (lang, mut scored) in accumulated {
            scored.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
            scored.reverse();

            // A country reappears when it lists the same primary subtag
            // twice (en-GB,en-US); only its best rank counts.
            let mut seen = BTreeSet::new();
            let deduped: Vec<(String, f64)> = scored
                .into_iter()
                .filter(|(_, iso)| seen.insert(iso.clone()))
                .map(|(score, iso)| (iso, score))
                .collect();

            let total: f64 =
                deduped.iter().map(|(_, s)| s).sum::<f64>() + SCORE_SUM_EPSILON;
            lists.insert(
                lang,
                deduped
                    .into_iter()
                    .map(|(iso, score)| (iso, score / total))
                    .collect(),
            );
        }

        debug!(languages = lists.len(), "built language-country model");
        Self { lists }
    }

    /// Ranked `(country, share)` list for a language, best first.
    /// `None` means the language is not spoken in any known country.
    pub fn get(&self, lang: &str) -> Option<&[(String, f64)]> {
        self.lists.get(lang).map(Vec::as_slice)
    }

    /// Languages the model knows, in sorted order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
