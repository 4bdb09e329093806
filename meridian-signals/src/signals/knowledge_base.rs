use std::sync::Arc;

use meridian_core::{ISignal, LookupKey, SignalOutput};

use crate::providers::ICountryLookup;

/// Knowledge-base locations for organizations, keyed by registered
/// domain. The most precise signal in the stack when it fires.
pub struct KnowledgeBaseSignal {
    lookup: Arc<dyn ICountryLookup>,
    confidence: f64,
}

impl KnowledgeBaseSignal {
    pub fn new(lookup: Arc<dyn ICountryLookup>, confidence: f64) -> Self {
        Self { lookup, confidence }
    }
}

impl ISignal for KnowledgeBaseSignal {
    fn name(&self) -> &str {
        "knowledge_base"
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
