use std::sync::Arc;

use meridian_core::{ISignal, LookupKey, SignalOutput};

use crate::language_model::LanguageCountryModel;
use crate::providers::ILanguageLookup;

/// Turns a detected page language into the countries that write in it.
pub struct LanguageSignal {
    lookup: Arc<dyn ILanguageLookup>,
    model: Arc<LanguageCountryModel>,
    confidence: f64,
}

impl LanguageSignal {
    pub fn new(
        lookup: Arc<dyn ILanguageLookup>,
        model: Arc<LanguageCountryModel>,
        confidence: f64,
    ) -> Self {
        Self {
            lookup,
            model,
            confidence,
        }
    }
}

impl ISignal for LanguageSignal {
    fn name(&self) -> &str {
        "language"
    }

    fn infer(&self, key: &LookupKey) -> SignalOutput {
        // unresolved keys and unusable detections both end here
        let Some(Some(lang)) = self.lookup.lookup(key) else {
            return SignalOutput::none();
        };
        match self.model.get(lang) {
            Some(list) if !list.is_empty() => {
                SignalOutput::new(self.confidence, list.iter().cloned().collect())
            }
            _ => SignalOutput::none(),
        }
    }
}
