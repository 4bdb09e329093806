use serde::{Deserialize, Serialize};

use super::defaults;

/// Per-signal confidence values surfaced alongside each signal's
/// distribution. Confidence expresses how much a signal should be
/// trusted when it does fire; it does not scale the evidence weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfidences {
    pub prior: f64,
    pub tld: f64,
    pub milgov: f64,
    pub language: f64,
    pub geoip: f64,
    pub knowledge_base: f64,
    pub whois_parsed: f64,
    pub whois_freetext: f64,
}

impl Default for SignalConfidences {
    fn default() -> Self {
        Self {
            prior: defaults::DEFAULT_PRIOR_CONFIDENCE,
            tld: defaults::DEFAULT_TLD_CONFIDENCE,
            milgov: defaults::DEFAULT_MILGOV_CONFIDENCE,
            language: defaults::DEFAULT_LANGUAGE_CONFIDENCE,
            geoip: defaults::DEFAULT_GEOIP_CONFIDENCE,
            knowledge_base: defaults::DEFAULT_KNOWLEDGE_BASE_CONFIDENCE,
            whois_parsed: defaults::DEFAULT_WHOIS_PARSED_CONFIDENCE,
            whois_freetext: defaults::DEFAULT_WHOIS_FREETEXT_CONFIDENCE,
        }
    }
}
