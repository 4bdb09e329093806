use std::collections::BTreeMap;
use std::sync::Arc;

use meridian_core::{ISignal, LookupKey, SignalOutput};

use crate::providers::{IWhoisLookup, WhoisResolution};

/// Administrative country parsed out of a structured WHOIS record.
pub struct ParsedWhoisSignal {
    lookup: Arc<dyn IWhoisLookup>,
    confidence: f64,
}

impl ParsedWhoisSignal {
    pub fn new(lookup: Arc<dyn IWhoisLookup>, confidence: f64) -> Self {
        Self { lookup, confidence }
    }
}

impl ISignal for ParsedWhoisSignal {
    fn name(&self) -> &str {
        "whois_parsed"
    }

    fn infer(&self, key: &LookupKey) -> SignalOutput {
        let Some(domain) = key.registered_domain() else {
            return SignalOutput::none();
        };
        match self.lookup.lookup(&domain) {
            WhoisResolution::Parsed(iso) => SignalOutput::single(&iso, self.confidence),
            _ => SignalOutput::none(),
        }
    }
}

/// Country mentions counted in raw WHOIS text, as proportions.
///
/// Fires only when structured parsing failed for the domain, so it can
/// never overlap with [`ParsedWhoisSignal`].
pub struct FreetextWhoisSignal {
    lookup: Arc<dyn IWhoisLookup>,
    confidence: f64,
}

impl FreetextWhoisSignal {
    pub fn new(lookup: Arc<dyn IWhoisLookup>, confidence: f64) -> Self {
        Self { lookup, confidence }
    }
}

impl ISignal for FreetextWhoisSignal {
    fn name(&self) -> &str {
        "whois_freetext"
    }

    fn infer(&self, key: &LookupKey) -> SignalOutput {
        let Some(domain) = key.registered_domain() else {
            return SignalOutput::none();
        };
        let WhoisResolution::Freetext(counts) = self.lookup.lookup(&domain) else {
            return SignalOutput::none();
        };

        let mut merged: BTreeMap<String, u32> = BTreeMap::new();
        for (iso, n) in counts {
            *merged.entry(iso).or_insert(0) += n;
        }
        let total: u32 = merged.values().sum();
        if total == 0 {
            return SignalOutput::none();
        }
        let distribution = merged
            .into_iter()
            .map(|(iso, n)| (iso, f64::from(n) / f64::from(total)))
            .collect();
        SignalOutput::new(self.confidence, distribution)
    }
}
