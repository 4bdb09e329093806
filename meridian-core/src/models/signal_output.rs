use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// What a single signal knows about one lookup key.
///
/// The distribution is sparse: only countries the signal has evidence for
/// appear, and the weights need not sum to one. An empty distribution with
/// zero confidence means "no information", which is not the same thing as
/// a uniform distribution over every country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalOutput {
    /// How much the fused model should trust this signal, in `[0, 1]`.
    pub confidence: f64,
    /// Country code to evidence weight, sparse.
    pub distribution: BTreeMap<String, f64>,
}

impl SignalOutput {
    pub fn new(confidence: f64, distribution: BTreeMap<String, f64>) -> Self {
        Self {
            confidence,
            distribution,
        }
    }

    /// The "signal has nothing to say" output.
    pub fn none() -> Self {
        Self {
            confidence: 0.0,
            distribution: BTreeMap::new(),
        }
    }

    /// All evidence on a single country.
    pub fn single(code: &str, confidence: f64) -> Self {
        let mut distribution = BTreeMap::new();
        distribution.insert(code.to_string(), 1.0);
        Self {
            confidence,
            distribution,
        }
    }

    /// True when the output should contribute evidence to fusion.
    /// Uninformative outputs fall back to a uniform contribution instead.
    pub fn is_informative(&self) -> bool {
        self.confidence > 0.0 && !self.distribution.is_empty()
    }
}
