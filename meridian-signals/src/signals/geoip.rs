use std::sync::Arc;

use meridian_core::{ISignal, LookupKey, SignalOutput};

use crate::providers::ICountryLookup;

/// Server geolocation by registered domain. Hosting rarely follows the
/// audience, so this signal is not part of the standard stack; it can
/// be added for experiments via its own coefficient.
pub struct GeoIpSignal {
    lookup: Arc<dyn ICountryLookup>,
    confidence: f64,
}

impl GeoIpSignal {
    pub fn new(lookup: Arc<dyn ICountryLookup>, confidence: f64) -> Self {
        Self { lookup, confidence }
    }
}

impl ISignal for GeoIpSignal {
    fn name(&self) -> &str {
        "geoip"
    }

    fn infer(&self, key: &LookupKey) -> SignalOutput {
        let Some(domain) = key.registered_domain() else {
            return SignalOutput::none();
        };
        match self.lookup.lookup(&domain) {
            Some(iso) => SignalOutput::single(iso, self.confidence),
            None => SignalOutput::none(),
        }
    }
}
