use std::sync::Arc;

use meridian_core::constants::GENERIC_TLDS;
use meridian_core::{CountryRegistry, ISignal, LookupKey, SignalOutput};

/// Maps a key's country-code TLD straight to its country.
///
/// Globally marketed TLDs (`.io`, `.tv`, ...) are excluded: being
/// country-code TLDs on paper, they say nothing about where the site
/// actually lives.
pub struct TldSignal {
    registry: Arc<CountryRegistry>,
    confidence: f64,
}

impl TldSignal {
    pub fn new(registry: Arc<CountryRegistry>, confidence: f64) -> Self {
        Self {
            registry,
            confidence,
        }
    }
}

impl ISignal for TldSignal {
    fn name(&self) -> &str {
        "tld"
    }

    fn infer(&self, key: &LookupKey) -> SignalOutput {
        let Some(tld) = key.tld() else {
            return SignalOutput::none();
        };
        if GENERIC_TLDS.contains(&tld) {
            return SignalOutput::none();
        }
        match self.registry.by_tld(tld) {
            Some(country) => SignalOutput::single(&country.iso, self.confidence),
            None => SignalOutput::none(),
        }
    }
}
