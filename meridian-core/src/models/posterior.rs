use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fused probability distribution over every known country.
///
/// Probabilities sum to one. Iteration order is the sorted country code
/// order, which makes argmax ties resolve to the lowest code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posterior {
    pub probabilities: BTreeMap<String, f64>,
}

impl Posterior {
    pub fn new(probabilities: BTreeMap<String, f64>) -> Self {
        Self { probabilities }
    }

    /// Most probable country and its probability.
    ///
    /// Ties go to the lexicographically smallest code. Returns `None` only
    /// for an empty distribution, which a fused model never produces.
    pub fn top(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (code, &p) in &self.probabilities {
            match best {
                Some((_, bp)) if p <= bp => {}
                _ => best = Some((code, p)),
            }
        }
        best
    }

    /// Probability assigned to one country, zero if unknown.
    pub fn probability(&self, code: &str) -> f64 {
        self.probabilities.get(code).copied().unwrap_or(0.0)
    }

    /// Countries ordered by descending probability, ties by ascending code.
    pub fn ranked(&self) -> Vec<(String, f64)> {
        let mut entries: Vec<(String, f64)> = self
            .probabilities
            .iter()
            .map(|(code, &p)| (code.clone(), p))
            .collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }
}
