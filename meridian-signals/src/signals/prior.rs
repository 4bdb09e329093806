use std::collections::BTreeMap;

use meridian_core::errors::DataError;
use meridian_core::{CountryRegistry, ISignal, LookupKey, SignalOutput};

/// Baseline signal: every country's smoothed prior, regardless of key.
///
/// Alone it always guesses the most prolific country; its value is in
/// anchoring the ensemble when nothing else fires.
pub struct PriorSignal {
    priors: BTreeMap<String, f64>,
    confidence: f64,
}

impl PriorSignal {
    pub fn new(registry: &CountryRegistry, confidence: f64) -> Result<Self, DataError> {
        let priors = registry.priors();
        if priors.is_empty() {
            return Err(DataError::EmptyPriors);
        }
        Ok(Self { priors, confidence })
    }
}

impl ISignal for PriorSignal {
    fn name(&self) -> &str {
        "prior"
    }

    fn infer(&self, _key: &LookupKey) -> SignalOutput {
        SignalOutput::new(self.confidence, self.priors.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> CountryRegistry {
        let reference = [
            "us\tusa\t000\tFI\tUnited States\tCap\t1\t310000000\tNA\t.us\tUSD\tD\t1\t#\t^$\ten\t0\t\t",
            "gb\tgbr\t000\tFI\tUnited Kingdom\tCap\t1\t62000000\tNA\t.uk\tGBP\tP\t1\t#\t^$\ten\t0\t\t",
        ]
        .join("\n");
        CountryRegistry::from_tsv(&reference, "us\t3.0\ngb\t1.0\n").unwrap()
    }

    #[test]
    fn emits_the_full_prior_distribution_for_any_key() {
        let signal = PriorSignal::new(&registry(), 0.2).unwrap();
        let a = signal.infer(&LookupKey::new("http://anything.example/"));
        let b = signal.infer(&LookupKey::new("not even a url"));
        assert_eq!(a, b);
        assert_eq!(a.confidence, 0.2);
        assert_eq!(a.distribution.len(), 2);
        assert!(a.distribution["us"] > a.distribution["gb"]);
        assert!(a.is_informative());
    }
}
